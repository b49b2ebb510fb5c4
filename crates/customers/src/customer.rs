use mediashop_core::{CustomerId, Entity};
use mediashop_products::Membership;

/// Entity: Customer.
///
/// Membership catalog management lives elsewhere; fulfillment only reads the
/// identifier and never mutates the membership list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    memberships: Vec<Membership>,
}

impl Customer {
    /// Customer with no active memberships.
    pub fn new(id: CustomerId) -> Self {
        Self {
            id,
            memberships: Vec::new(),
        }
    }

    pub fn with_memberships(id: CustomerId, memberships: Vec<Membership>) -> Self {
        Self { id, memberships }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    pub fn has_membership(&self, membership: Membership) -> bool {
        self.memberships.contains(&membership)
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
