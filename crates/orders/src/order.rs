use tracing::instrument;

use mediashop_core::{DomainError, Entity, PurchaseOrderId, ShippingSlipId};
use mediashop_customers::Customer;
use mediashop_products::{Membership, PhysicalProduct, Product};
use mediashop_store::MembershipActivator;

use crate::error::FulfillmentError;
use crate::shipping::ShippingSlipGenerator;
use crate::translator::MembershipTranslator;

/// Purchase order surface used by checkout callers.
pub trait FulfillableOrder {
    fn customer(&self) -> &Customer;

    fn order_id(&self) -> PurchaseOrderId;

    fn line_items(&self) -> &[Product];

    /// Total price in smallest currency unit. Not computed by fulfillment.
    fn total_price(&self) -> u64;

    fn process(&self) -> Result<Option<ShippingSlipId>, FulfillmentError>;
}

/// Purchase order with its fulfillment collaborators.
///
/// Line items are fixed at construction. The order keeps no "processed" flag:
/// calling [`process`](Self::process) twice activates the memberships twice and
/// generates a second shipping slip.
#[derive(Debug)]
pub struct PurchaseOrder<A, G, T> {
    id: PurchaseOrderId,
    customer: Customer,
    line_items: Vec<Product>,
    total_price: u64,
    activator: A,
    generator: G,
    translator: T,
}

impl<A, G, T> PurchaseOrder<A, G, T> {
    pub fn new(
        customer: Customer,
        line_items: Vec<Product>,
        activator: A,
        generator: G,
        translator: T,
    ) -> Self {
        Self::with_id(
            PurchaseOrderId::new(),
            customer,
            line_items,
            activator,
            generator,
            translator,
        )
    }

    pub fn with_id(
        id: PurchaseOrderId,
        customer: Customer,
        line_items: Vec<Product>,
        activator: A,
        generator: G,
        translator: T,
    ) -> Self {
        Self {
            id,
            customer,
            line_items,
            total_price: 0,
            activator,
            generator,
            translator,
        }
    }

    pub fn id_typed(&self) -> PurchaseOrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn line_items(&self) -> &[Product] {
        &self.line_items
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Membership line items in input order.
    pub fn memberships(&self) -> impl Iterator<Item = &Membership> {
        self.line_items.iter().filter_map(Product::as_membership)
    }

    /// Physical line items in input order.
    pub fn physical_products(&self) -> impl Iterator<Item = &PhysicalProduct> {
        self.line_items.iter().filter_map(Product::as_physical)
    }
}

impl<A, G, T> PurchaseOrder<A, G, T>
where
    A: MembershipActivator,
    G: ShippingSlipGenerator,
    T: MembershipTranslator,
{
    /// Fulfill the order.
    ///
    /// 1. Reject empty line items (no side effects).
    /// 2. Translate and activate each membership, in input order.
    /// 3. If any physical products exist, generate one shipping slip for all
    ///    of them and return its id; otherwise return `None`.
    ///
    /// Every activation completes before the slip is generated. The first
    /// collaborator failure aborts the remaining steps.
    #[instrument(
        skip(self),
        fields(
            order_id = %self.id,
            customer_id = %self.customer.id_typed(),
            line_items = self.line_items.len()
        ),
        err
    )]
    pub fn process(&self) -> Result<Option<ShippingSlipId>, FulfillmentError> {
        if self.line_items.is_empty() {
            return Err(FulfillmentError::InvalidArgument(
                DomainError::invalid_argument("line_items"),
            ));
        }

        let customer_id = self.customer.id_typed();
        for membership in self.memberships() {
            let record = self.translator.translate(membership)?;
            tracing::debug!(membership = membership.kind_name(), "activating membership");
            self.activator.activate_membership(customer_id, record)?;
        }

        // Materialized: the generator sees the whole shipment in one call.
        let physical_products: Vec<PhysicalProduct> = self.physical_products().cloned().collect();
        if physical_products.is_empty() {
            tracing::debug!("no physical products, skipping shipping slip");
            return Ok(None);
        }

        let slip = self.generator.generate(&physical_products)?;
        tracing::info!(
            shipping_slip = %slip,
            products = physical_products.len(),
            "shipping slip generated"
        );
        Ok(Some(slip))
    }
}

impl<A, G, T> Entity for PurchaseOrder<A, G, T> {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl<A, G, T> FulfillableOrder for PurchaseOrder<A, G, T>
where
    A: MembershipActivator,
    G: ShippingSlipGenerator,
    T: MembershipTranslator,
{
    fn customer(&self) -> &Customer {
        &self.customer
    }

    fn order_id(&self) -> PurchaseOrderId {
        self.id
    }

    fn line_items(&self) -> &[Product] {
        &self.line_items
    }

    fn total_price(&self) -> u64 {
        self.total_price
    }

    fn process(&self) -> Result<Option<ShippingSlipId>, FulfillmentError> {
        PurchaseOrder::process(self)
    }
}
