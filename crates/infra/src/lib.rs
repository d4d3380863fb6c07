//! Infrastructure layer: repository seams, in-memory stores, orchestration.

pub mod in_memory;
pub mod place_order;
pub mod repository;


pub use in_memory::{InMemoryOrderRepository, InMemoryProductRepository, InMemoryUserRepository};
pub use place_order::{PlaceOrderCommand, PlaceOrderError, PlaceOrderHandler};
pub use repository::{OrderRepository, ProductRepository, RepositoryError, UserRepository};
