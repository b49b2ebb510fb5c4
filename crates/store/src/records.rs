//! Storage-shaped records.
//!
//! These mirror the domain types but are owned by the data access layer; the
//! order workflow translates domain memberships into them before activation.

use serde::{Deserialize, Serialize};

use mediashop_core::CustomerId;

/// Membership as persisted on a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MembershipRecord {
    BookMembership,
    VideoMembership,
    PremiumMembership,
}

impl MembershipRecord {
    pub fn kind_name(&self) -> &'static str {
        match self {
            MembershipRecord::BookMembership => "book_membership",
            MembershipRecord::VideoMembership => "video_membership",
            MembershipRecord::PremiumMembership => "premium_membership",
        }
    }
}

/// Persisted customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub memberships: Vec<MembershipRecord>,
}

impl CustomerRecord {
    pub fn new(id: CustomerId) -> Self {
        Self {
            id,
            memberships: Vec::new(),
        }
    }
}
