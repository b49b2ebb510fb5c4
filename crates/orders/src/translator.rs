//! Domain membership → storage record mapping.

use thiserror::Error;

use mediashop_products::Membership;
use mediashop_store::MembershipRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The translator has no record shape for this membership kind.
    #[error("no storage record for membership: {0}")]
    UnsupportedMembership(String),
}

/// Converts a membership line item into the record the activator expects.
///
/// Translation is variant-preserving: a book membership becomes a book
/// membership record. An implementation that cannot map a variant must fail
/// with [`TranslationError`] rather than invent a default record.
pub trait MembershipTranslator: Send + Sync {
    fn translate(&self, membership: &Membership) -> Result<MembershipRecord, TranslationError>;
}

impl<T> MembershipTranslator for &T
where
    T: MembershipTranslator + ?Sized,
{
    fn translate(&self, membership: &Membership) -> Result<MembershipRecord, TranslationError> {
        (**self).translate(membership)
    }
}

/// Default one-to-one mapping onto [`MembershipRecord`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordTranslator;

impl MembershipTranslator for RecordTranslator {
    fn translate(&self, membership: &Membership) -> Result<MembershipRecord, TranslationError> {
        Ok(match membership {
            Membership::Book => MembershipRecord::BookMembership,
            Membership::Video => MembershipRecord::VideoMembership,
            Membership::Premium => MembershipRecord::PremiumMembership,
        })
    }
}
