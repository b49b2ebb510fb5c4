//! Value object trait: equality by value, not identity.
//!
//! Line items are value objects. Two `Book` line items with the same title are
//! interchangeable, and ordering two of them means shipping two copies.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: values are copied into storage records and shipping slips
/// - **PartialEq**: tests and collaborators compare them by their attributes
/// - **Debug**: they show up in logs and assertion failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// enum Membership { Book, Video, Premium }
///
/// impl ValueObject for Membership {}
///
/// assert_eq!(Membership::Book, Membership::Book);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
