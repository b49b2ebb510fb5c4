//! Shipping slip generation port and an in-process generator.

use std::collections::BTreeMap;
use std::sync::Mutex;

use thiserror::Error;

use mediashop_core::ShippingSlipId;
use mediashop_products::PhysicalProduct;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("cannot generate a shipping slip without physical products")]
    EmptyShipment,

    #[error("shipping slip generator unavailable: {0}")]
    Unavailable(String),
}

/// Produces one shipping slip for a set of physical products.
///
/// Callers never pass an empty slice; implementations may reject one.
pub trait ShippingSlipGenerator: Send + Sync {
    fn generate(&self, products: &[PhysicalProduct]) -> Result<ShippingSlipId, GenerationError>;
}

impl<T> ShippingSlipGenerator for &T
where
    T: ShippingSlipGenerator + ?Sized,
{
    fn generate(&self, products: &[PhysicalProduct]) -> Result<ShippingSlipId, GenerationError> {
        (**self).generate(products)
    }
}

#[derive(Debug)]
struct SlipBook {
    /// `None` once the id space is used up.
    next: Option<u64>,
    slips: BTreeMap<ShippingSlipId, Vec<PhysicalProduct>>,
}

/// In-process generator handing out consecutive slip ids.
///
/// Remembers the products of every slip it generated.
#[derive(Debug)]
pub struct SequentialSlipGenerator {
    book: Mutex<SlipBook>,
}

impl SequentialSlipGenerator {
    /// Generator whose first slip id is `first_id`.
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            book: Mutex::new(SlipBook {
                next: Some(first_id),
                slips: BTreeMap::new(),
            }),
        }
    }

    pub fn slip(&self, id: ShippingSlipId) -> Result<Option<Vec<PhysicalProduct>>, GenerationError> {
        let book = self.lock()?;
        Ok(book.slips.get(&id).cloned())
    }

    pub fn slip_count(&self) -> Result<usize, GenerationError> {
        Ok(self.lock()?.slips.len())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SlipBook>, GenerationError> {
        self.book
            .lock()
            .map_err(|_| GenerationError::Unavailable("lock poisoned".to_string()))
    }
}

impl Default for SequentialSlipGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl ShippingSlipGenerator for SequentialSlipGenerator {
    fn generate(&self, products: &[PhysicalProduct]) -> Result<ShippingSlipId, GenerationError> {
        if products.is_empty() {
            return Err(GenerationError::EmptyShipment);
        }

        let mut book = self.lock()?;
        let value = book
            .next
            .ok_or_else(|| GenerationError::Unavailable("slip ids exhausted".to_string()))?;
        let id = ShippingSlipId::new(value);
        book.next = value.checked_add(1);
        book.slips.insert(id, products.to_vec());

        tracing::debug!(shipping_slip = %id, products = products.len(), "shipping slip allocated");
        Ok(id)
    }
}
