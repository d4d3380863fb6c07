//! Repository capability traits consumed by the orchestration layer.
//!
//! These are the persistence seams of the system. The orchestrator receives
//! them by constructor injection; there is no ambient/global storage handle.
//! Implementations decide their own timeout and cancellation semantics.

use thiserror::Error;

use storeops_core::{OrderId, ProductId, UserId};
use storeops_orders::Order;
use storeops_products::Product;
use storeops_users::User;

/// Repository operation error.
///
/// These are **infrastructure errors** (storage, concurrency) as opposed to
/// domain errors (validation, invariants).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// Optimistic concurrency check failed (stale version).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The storage backend failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// User lookup capability.
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError>;
    fn save(&self, user: &User) -> Result<(), RepositoryError>;
}

/// Product lookup and stock-update capability.
pub trait ProductRepository: Send + Sync {
    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    fn save(&self, product: &Product) -> Result<(), RepositoryError>;

    /// Persist the product's current in-memory stock value.
    ///
    /// Implementations check the product's version against the stored one
    /// (optimistic concurrency) and fail with [`RepositoryError::Conflict`]
    /// when a concurrent write got there first.
    fn update_stock(&self, product: &Product) -> Result<(), RepositoryError>;
}

/// Order persistence capability.
pub trait OrderRepository: Send + Sync {
    /// Persist a new order, assigning its storage identity.
    fn save(&self, order: &mut Order) -> Result<(), RepositoryError>;
    fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError>;
}

impl<S> UserRepository for std::sync::Arc<S>
where
    S: UserRepository + ?Sized,
{
    fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError> {
        (**self).get_by_id(id)
    }

    fn save(&self, user: &User) -> Result<(), RepositoryError> {
        (**self).save(user)
    }
}

impl<S> ProductRepository for std::sync::Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        (**self).get_by_id(id)
    }

    fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        (**self).save(product)
    }

    fn update_stock(&self, product: &Product) -> Result<(), RepositoryError> {
        (**self).update_stock(product)
    }
}

impl<S> OrderRepository for std::sync::Arc<S>
where
    S: OrderRepository + ?Sized,
{
    fn save(&self, order: &mut Order) -> Result<(), RepositoryError> {
        (**self).save(order)
    }

    fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError> {
        (**self).get_by_id(id)
    }
}
