use thiserror::Error;

use mediashop_core::CustomerId;

use crate::records::MembershipRecord;

/// Customer repository failure.
///
/// Surfaced unchanged through the fulfillment workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("repository lock poisoned")]
    LockPoisoned,
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Activates memberships on customer accounts.
///
/// Implementations own write serialization: several orders for the same
/// customer may be processed concurrently. Activation is not deduplicated;
/// activating the same membership twice records it twice.
pub trait MembershipActivator: Send + Sync {
    fn activate_membership(
        &self,
        customer_id: CustomerId,
        membership: MembershipRecord,
    ) -> Result<(), RepositoryError>;
}

impl<T> MembershipActivator for &T
where
    T: MembershipActivator + ?Sized,
{
    fn activate_membership(
        &self,
        customer_id: CustomerId,
        membership: MembershipRecord,
    ) -> Result<(), RepositoryError> {
        (**self).activate_membership(customer_id, membership)
    }
}
