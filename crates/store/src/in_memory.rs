use std::collections::HashMap;
use std::sync::RwLock;

use mediashop_core::CustomerId;

use crate::records::{CustomerRecord, MembershipRecord};
use crate::repository::{MembershipActivator, RepositoryError};

/// In-memory customer repository.
///
/// Intended for tests/dev and the checkout binary. Activating a membership for
/// an unknown customer creates the account.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, CustomerRecord>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a customer account.
    pub fn register(&self, record: CustomerRecord) -> Result<(), RepositoryError> {
        let mut customers = self
            .customers
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        customers.insert(record.id, record);
        Ok(())
    }

    pub fn find(&self, customer_id: CustomerId) -> Result<Option<CustomerRecord>, RepositoryError> {
        let customers = self
            .customers
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(customers.get(&customer_id).cloned())
    }

    /// Memberships on the account in activation order (empty for unknown customers).
    pub fn active_memberships(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<MembershipRecord>, RepositoryError> {
        Ok(self
            .find(customer_id)?
            .map(|record| record.memberships)
            .unwrap_or_default())
    }
}

impl MembershipActivator for InMemoryCustomerRepository {
    fn activate_membership(
        &self,
        customer_id: CustomerId,
        membership: MembershipRecord,
    ) -> Result<(), RepositoryError> {
        let mut customers = self
            .customers
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let record = customers
            .entry(customer_id)
            .or_insert_with(|| CustomerRecord::new(customer_id));
        record.memberships.push(membership);

        tracing::debug!(
            customer_id = %customer_id,
            membership = membership.kind_name(),
            total = record.memberships.len(),
            "membership activated"
        );
        Ok(())
    }
}
