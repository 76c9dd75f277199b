pub mod models;
pub mod repository;
pub mod service;

pub use models::{Delivery, DeliveryStatus, Order, OrderError, OrderItem, OrderItemStatus, OrderStatus};
pub use repository::{OrderRepository, OrderSearch};
pub use service::{OrderService, OrderServiceError};
