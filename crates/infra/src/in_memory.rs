//! In-memory repository implementations.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use storeops_core::{AggregateRoot, ExpectedVersion, OrderId, ProductId, UserId};
use storeops_orders::Order;
use storeops_products::Product;
use storeops_users::User;

use crate::repository::{
    OrderRepository, ProductRepository, RepositoryError, UserRepository,
};

fn poisoned() -> RepositoryError {
    RepositoryError::Storage("lock poisoned".to_string())
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        users.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        // Email uniqueness is this layer's responsibility.
        let duplicate = users
            .values()
            .any(|u| u.email() == user.email() && u.id_typed() != user.id_typed());
        if duplicate {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' already registered",
                user.email()
            )));
        }

        users.insert(user.id_typed(), user.clone());
        Ok(())
    }
}

/// In-memory product store with optimistic versioning on stock writes.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        products.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.id_typed(), product.clone());
        Ok(())
    }

    fn update_stock(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().map_err(|_| poisoned())?;

        let stored = products
            .get_mut(&product.id_typed())
            .ok_or(RepositoryError::NotFound)?;

        // The caller's version is the one it read at fetch time; a mismatch
        // means another write landed in between.
        let expected = ExpectedVersion::Exact(product.version());
        if !expected.matches(stored.version()) {
            return Err(RepositoryError::Conflict(format!(
                "expected {expected:?}, found {}",
                stored.version()
            )));
        }

        let mut updated = product.clone();
        updated.bump_version();
        *stored = updated;
        Ok(())
    }
}

/// In-memory order store. Assigns identities on save.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted orders.
    pub fn len(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: &mut Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;

        // Auto-incrementing identity assignment.
        let id = OrderId::new(orders.len() as i64 + 1);
        order
            .assign_id(id)
            .map_err(|e| RepositoryError::Conflict(e.to_string()))?;

        orders.insert(id, order.clone());
        Ok(())
    }

    fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        orders.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }
}
