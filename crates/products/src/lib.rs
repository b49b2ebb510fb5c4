//! Products domain module.
//!
//! Line items a customer can buy: memberships (entitlements activated on the
//! customer's account) and physical products (goods that need shipping).

pub mod product;

pub use product::{Membership, PhysicalProduct, Product};
