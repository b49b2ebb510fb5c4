//! Checkout caller: builds a purchase order from an order document, fulfills
//! it against the in-memory adapters and reports what happened.

pub mod config;
pub mod document;

use anyhow::Context;
use serde::Serialize;

use mediashop_core::{CustomerId, PurchaseOrderId, ShippingSlipId};
use mediashop_orders::{MembershipTranslator, PurchaseOrder, RecordTranslator, SequentialSlipGenerator};
use mediashop_products::PhysicalProduct;
use mediashop_store::{CustomerRecord, InMemoryCustomerRepository, MembershipRecord};

pub use config::{CheckoutConfig, ConfigError};
pub use document::OrderDocument;

/// Result of one checkout run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOutcome {
    pub order_id: PurchaseOrderId,
    pub customer_id: CustomerId,
    pub shipping_slip: Option<ShippingSlipId>,
    /// Memberships on the account after processing (pre-existing ones first).
    pub memberships: Vec<MembershipRecord>,
    /// Products on the generated slip; empty when no slip was generated.
    pub shipped: Vec<PhysicalProduct>,
}

pub fn run(config: &CheckoutConfig) -> anyhow::Result<CheckoutOutcome> {
    let document = OrderDocument::load(&config.order_file)?;
    process_document(document, config.slip_start)
}

pub fn process_document(
    document: OrderDocument,
    slip_start: u64,
) -> anyhow::Result<CheckoutOutcome> {
    let customer = document.customer();
    let customer_id = customer.id_typed();

    let repository = InMemoryCustomerRepository::new();
    let translator = RecordTranslator;
    let existing = customer
        .memberships()
        .iter()
        .map(|m| translator.translate(m))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to translate existing memberships")?;
    repository
        .register(CustomerRecord {
            id: customer_id,
            memberships: existing,
        })
        .context("failed to register customer")?;

    let generator = SequentialSlipGenerator::starting_at(slip_start);
    let order = PurchaseOrder::new(
        customer,
        document.line_items,
        &repository,
        &generator,
        translator,
    );
    let order_id = order.id_typed();

    tracing::info!(order_id = %order_id, customer_id = %customer_id, "processing order");
    let shipping_slip = order
        .process()
        .with_context(|| format!("failed to process order {order_id}"))?;

    let shipped = match shipping_slip {
        Some(id) => generator
            .slip(id)
            .context("failed to read shipping slip")?
            .unwrap_or_default(),
        None => Vec::new(),
    };
    let memberships = repository
        .active_memberships(customer_id)
        .context("failed to read memberships")?;

    Ok(CheckoutOutcome {
        order_id,
        customer_id,
        shipping_slip,
        memberships,
        shipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediashop_orders::FulfillmentError;
    use mediashop_products::{Membership, Product};

    #[test]
    fn existing_memberships_are_kept_ahead_of_new_ones() {
        let customer_id = CustomerId::new();
        let document = OrderDocument {
            customer_id,
            memberships: vec![Membership::Video],
            line_items: vec![Product::book_membership()],
        };

        let outcome = process_document(document, 1).unwrap();

        assert_eq!(outcome.customer_id, customer_id);
        assert_eq!(outcome.shipping_slip, None);
        assert!(outcome.shipped.is_empty());
        assert_eq!(
            outcome.memberships,
            vec![
                MembershipRecord::VideoMembership,
                MembershipRecord::BookMembership
            ]
        );
    }

    #[test]
    fn slip_numbering_starts_at_configured_value() {
        let document = OrderDocument {
            customer_id: CustomerId::new(),
            memberships: vec![],
            line_items: vec![Product::book("Dune"), Product::video("Alien")],
        };

        let outcome = process_document(document, 1000).unwrap();

        assert_eq!(outcome.shipping_slip, Some(ShippingSlipId::new(1000)));
        assert_eq!(
            outcome.shipped,
            vec![PhysicalProduct::book("Dune"), PhysicalProduct::video("Alien")]
        );
    }

    #[test]
    fn empty_order_surfaces_fulfillment_error() {
        let document = OrderDocument {
            customer_id: CustomerId::new(),
            memberships: vec![],
            line_items: vec![],
        };

        let err = process_document(document, 1).unwrap_err();

        let cause = err.downcast_ref::<FulfillmentError>().unwrap();
        assert!(cause.is_invalid_argument());
    }
}
