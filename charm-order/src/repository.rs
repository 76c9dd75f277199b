use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::{Order, OrderStatus};

/// Filters for order lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSearch {
    pub member_name: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(
        &self,
        order: &Order,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_one(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_member(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_all(
        &self,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;
}
