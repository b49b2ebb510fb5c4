//! Customers domain module.
//!
//! Read-only view of a customer from the fulfillment workflow's point of view:
//! an identifier plus the memberships currently active on the account.

pub mod customer;

pub use customer::Customer;
