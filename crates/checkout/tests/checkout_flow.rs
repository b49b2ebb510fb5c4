use std::io::Write;

use mediashop_checkout::{CheckoutConfig, run};
use mediashop_core::ShippingSlipId;
use mediashop_orders::FulfillmentError;
use mediashop_products::PhysicalProduct;
use mediashop_store::MembershipRecord;
use serde_json::json;

struct OrderFile {
    file: tempfile::NamedTempFile,
}

impl OrderFile {
    fn write(body: serde_json::Value) -> Self {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        file.write_all(body.to_string().as_bytes())
            .expect("failed to write order file");
        Self { file }
    }

    fn config(&self, slip_start: u64) -> CheckoutConfig {
        CheckoutConfig {
            order_file: self.file.path().to_path_buf(),
            slip_start,
        }
    }
}

#[test]
fn mixed_order_activates_membership_and_ships_goods() {
    let order = OrderFile::write(json!({
        "customer_id": "0190c1b2-7d2e-7c4a-9f00-000000000001",
        "line_items": [
            { "physical": { "kind": "book", "title": "A Brief History of Time" } },
            { "physical": { "kind": "video", "title": "Gone with the Wind" } },
            { "membership": "premium" }
        ]
    }));

    let outcome = run(&order.config(42)).unwrap();

    assert_eq!(outcome.shipping_slip, Some(ShippingSlipId::new(42)));
    assert_eq!(
        outcome.shipped,
        vec![
            PhysicalProduct::book("A Brief History of Time"),
            PhysicalProduct::video("Gone with the Wind"),
        ]
    );
    assert_eq!(outcome.memberships, vec![MembershipRecord::PremiumMembership]);
    assert_eq!(
        outcome.customer_id.to_string(),
        "0190c1b2-7d2e-7c4a-9f00-000000000001"
    );
}

#[test]
fn membership_only_order_has_no_shipping_slip() {
    let order = OrderFile::write(json!({
        "line_items": [
            { "membership": "book" },
            { "membership": "video" },
            { "membership": "premium" }
        ]
    }));

    let outcome = run(&order.config(1)).unwrap();

    assert_eq!(outcome.shipping_slip, None);
    assert!(outcome.shipped.is_empty());
    assert_eq!(
        outcome.memberships,
        vec![
            MembershipRecord::BookMembership,
            MembershipRecord::VideoMembership,
            MembershipRecord::PremiumMembership,
        ]
    );

    let rendered = serde_json::to_value(&outcome).unwrap();
    assert!(rendered["shipping_slip"].is_null());
}

#[test]
fn empty_order_is_rejected() {
    let order = OrderFile::write(json!({ "line_items": [] }));

    let err = run(&order.config(1)).unwrap_err();

    assert!(
        err.downcast_ref::<FulfillmentError>()
            .is_some_and(FulfillmentError::is_invalid_argument)
    );
}

#[test]
fn malformed_order_file_is_reported() {
    let order = OrderFile::write(json!({ "line_items": [{ "membership": "gold" }] }));

    let err = run(&order.config(1)).unwrap_err();

    assert!(format!("{err:#}").contains("invalid order file"));
}

#[test]
fn missing_order_file_is_reported() {
    let config = CheckoutConfig {
        order_file: "/nonexistent/mediashop/order.json".into(),
        slip_start: 1,
    };

    let err = run(&config).unwrap_err();

    assert!(err.to_string().contains("failed to read order file"));
}
