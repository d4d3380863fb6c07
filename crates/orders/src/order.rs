use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storeops_core::{DomainError, DomainResult, Entity, OrderId, ProductId, UserId};

/// Order status lifecycle.
///
/// The only transition is `Pending → Confirmed`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Confirmed => write!(f, "CONFIRMED"),
        }
    }
}

/// Entity: Order.
///
/// # Invariants
/// - Status only ever moves `Pending → Confirmed`, never backward.
/// - Identity is assigned by storage exactly once
///   ([`Order::assign_id`] rejects a second assignment).
///
/// Constructed in memory as `Pending`, confirmed by the placement flow, then
/// persisted exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    product_id: ProductId,
    quantity: u32,
    status: OrderStatus,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Construct a pending, not-yet-persisted order.
    ///
    /// No validation happens here; quantity and reference validity are the
    /// caller's responsibility.
    pub fn new(
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: OrderId::UNASSIGNED,
            user_id,
            product_id,
            quantity,
            status: OrderStatus::Pending,
            placed_at,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == OrderStatus::Confirmed
    }

    /// Transition the order to `Confirmed`.
    ///
    /// A pure field assignment: calling it on an already-confirmed order is a
    /// no-op, so repeated calls are idempotent by construction.
    pub fn confirm(&mut self) {
        self.status = OrderStatus::Confirmed;
    }

    /// Attach the storage-assigned identity.
    ///
    /// Called by the persistence layer on save. One-shot: re-assigning an
    /// identity (or assigning the unassigned sentinel) is rejected.
    pub fn assign_id(&mut self, id: OrderId) -> DomainResult<()> {
        if !id.is_assigned() {
            return Err(DomainError::validation(
                "cannot assign the unassigned sentinel id",
            ));
        }
        if self.id.is_assigned() {
            return Err(DomainError::conflict(format!(
                "order already has identity {}",
                self.id
            )));
        }
        self.id = id;
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
