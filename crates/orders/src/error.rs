use thiserror::Error;

use mediashop_core::DomainError;
use mediashop_store::RepositoryError;

use crate::shipping::GenerationError;
use crate::translator::TranslationError;

/// Failure of [`PurchaseOrder::process`](crate::PurchaseOrder::process).
///
/// Collaborator errors are carried as-is (display and source are forwarded),
/// so callers can match on the collaborator's own error value. Nothing is
/// retried or rolled back: memberships activated before a failure stay active.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FulfillmentError {
    /// The order was rejected before any side effect (empty line items).
    #[error(transparent)]
    InvalidArgument(DomainError),

    #[error(transparent)]
    Activation(#[from] RepositoryError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl FulfillmentError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FulfillmentError::InvalidArgument(_))
    }
}
