use serde::{Deserialize, Serialize};
use thiserror::Error;

use storeops_core::{AggregateRoot, DomainError, DomainResult, Entity, ProductId};

/// Raised when a reservation asks for more stock than is available.
///
/// Carries the exact numbers so callers can report or log the shortfall.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("insufficient stock: requested {requested}, available {available}")]
pub struct InsufficientStock {
    pub requested: u32,
    pub available: u32,
}

/// Aggregate root: Product.
///
/// # Invariants
/// - `name` is non-empty.
/// - `stock` never goes negative (unrepresentable: it is a `u32`, and every
///   mutation checks availability before subtracting).
///
/// Products are created and restocked externally; the order-placement flow
/// only decrements stock through [`Product::reserve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    stock: u32,
    version: u64,
}

impl Product {
    /// Create a product with an initial stock level.
    pub fn new(id: ProductId, name: impl Into<String>, stock: u32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            stock,
            version: 0,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Reserve `quantity` units for an in-progress order.
    ///
    /// Decrements stock in place on success. On failure the product is left
    /// unmodified. Persisting the new stock level is the caller's
    /// responsibility.
    ///
    /// Positivity of `quantity` is not checked here; callers validate it
    /// before reserving.
    pub fn reserve(&mut self, quantity: u32) -> Result<(), InsufficientStock> {
        if self.stock < quantity {
            return Err(InsufficientStock {
                requested: quantity,
                available: self.stock,
            });
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Apply an externally-driven stock correction (restock, shrinkage).
    ///
    /// Rejects a zero delta and any delta that would take stock negative.
    pub fn adjust_stock(&mut self, delta: i64) -> DomainResult<()> {
        if delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }

        let new_stock = i64::from(self.stock) + delta;
        if new_stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        if new_stock > i64::from(u32::MAX) {
            return Err(DomainError::validation("stock exceeds representable range"));
        }

        self.stock = new_stock as u32;
        Ok(())
    }

    /// Advance the optimistic-concurrency version.
    ///
    /// Called by the persistence layer after a successful stock write; domain
    /// code never bumps versions itself.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {
    fn version(&self) -> u64 {
        self.version
    }
}
