//! Data access layer: storage records and the customer repository port.

pub mod in_memory;
pub mod records;
pub mod repository;

pub use in_memory::InMemoryCustomerRepository;
pub use records::{CustomerRecord, MembershipRecord};
pub use repository::{MembershipActivator, RepositoryError};
