//! Purchase order fulfillment.
//!
//! Turns an order's line items into side effects: memberships are activated on
//! the customer's account, then physical goods get a single shipping slip.
//! Collaborators are injected; this crate performs no IO of its own.

pub mod error;
pub mod order;
pub mod shipping;
pub mod translator;

pub use error::FulfillmentError;
pub use order::{FulfillableOrder, PurchaseOrder};
pub use shipping::{GenerationError, SequentialSlipGenerator, ShippingSlipGenerator};
pub use translator::{MembershipTranslator, RecordTranslator, TranslationError};
