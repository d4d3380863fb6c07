//! Place-order use case (application-level orchestration).
//!
//! The handler executes the full "place an order" business transaction as one
//! logical unit of work using only injected collaborators:
//!
//! ```text
//! PlaceOrderCommand
//!   ↓
//! 1. Resolve user (user repository)
//!   ↓
//! 2. Resolve product (product repository)
//!   ↓
//! 3. Reserve stock (in-memory domain mutation)
//!   ↓
//! 4. Create + confirm order (in-memory)
//!   ↓
//! 5. Persist stock (product repository, optimistic version check)
//!   ↓
//! 6. Persist order (order repository, assigns identity)
//! ```
//!
//! Steps run strictly sequentially; there is no internal parallelism and no
//! retry. The two writes (5 and 6) are **not atomic**: if the order save
//! fails after the stock update succeeded, the persisted stock is ahead of
//! the order book. That gap is surfaced to the caller and logged, never
//! rolled back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storeops_core::{ProductId, UserId};
use storeops_orders::Order;
use storeops_products::InsufficientStock;

use crate::repository::{OrderRepository, ProductRepository, RepositoryError, UserRepository};

/// Command: place an order for `quantity` units of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderCommand {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub placed_at: DateTime<Utc>,
}

/// Place-order failure taxonomy.
///
/// All variants are terminal: nothing is retried or suppressed, and any
/// partially-persisted state is left as-is for the caller to act on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceOrderError {
    /// The requested quantity was zero.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// User resolution failed (not found, or any collaborator error).
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// Product resolution failed (not found, or any collaborator error).
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The stock-availability invariant was violated; no writes occurred.
    #[error(transparent)]
    InsufficientStock(#[from] InsufficientStock),

    /// A persistence write failed, surfaced verbatim. When the order save is
    /// the failing write, stock has already been persisted.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Stateless coordinator for the place-order use case.
///
/// Generic over its three repository capabilities so tests can wire in-memory
/// implementations and production can wire real backends, without changing
/// the pipeline.
#[derive(Debug)]
pub struct PlaceOrderHandler<U, P, O> {
    users: U,
    products: P,
    orders: O,
}

impl<U, P, O> PlaceOrderHandler<U, P, O> {
    pub fn new(users: U, products: P, orders: O) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }
}

impl<U, P, O> PlaceOrderHandler<U, P, O>
where
    U: UserRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    /// Execute the place-order transaction.
    ///
    /// On success the returned order carries its storage-assigned identity
    /// and `CONFIRMED` status, and the persisted product stock equals the
    /// pre-call stock minus `quantity`.
    pub fn handle(&self, cmd: PlaceOrderCommand) -> Result<Order, PlaceOrderError> {
        if cmd.quantity == 0 {
            return Err(PlaceOrderError::InvalidQuantity);
        }

        let user = self.users.get_by_id(cmd.user_id).map_err(|err| {
            tracing::debug!(user_id = %cmd.user_id, "user lookup failed: {err}");
            PlaceOrderError::UserNotFound(cmd.user_id)
        })?;

        let mut product = self.products.get_by_id(cmd.product_id).map_err(|err| {
            tracing::debug!(product_id = %cmd.product_id, "product lookup failed: {err}");
            PlaceOrderError::ProductNotFound(cmd.product_id)
        })?;

        // Domain invariant check + in-memory mutation. On failure the fetched
        // product is simply discarded; nothing has been written.
        product.reserve(cmd.quantity)?;

        let mut order = Order::new(
            user.id_typed(),
            product.id_typed(),
            cmd.quantity,
            cmd.placed_at,
        );
        order.confirm();

        self.products.update_stock(&product)?;

        if let Err(err) = self.orders.save(&mut order) {
            // Stock is already persisted at this point. Known two-write
            // consistency gap: surface it, do not compensate.
            tracing::warn!(
                user_id = %cmd.user_id,
                product_id = %cmd.product_id,
                "order save failed after stock update; persisted stock is ahead of orders: {err}"
            );
            return Err(err.into());
        }

        tracing::info!(
            order_id = %order.id_typed(),
            user_id = %cmd.user_id,
            product_id = %cmd.product_id,
            quantity = cmd.quantity,
            "order placed"
        );

        Ok(order)
    }
}
