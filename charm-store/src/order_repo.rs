use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use charm_order::models::Order;
use charm_order::repository::OrderRepository;

/// In-memory order store behind the repository trait
pub struct MemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn save(
        &self,
        order: &Order,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        Ok(order.id)
    }

    async fn find_one(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn find_by_member(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        let mut found: Vec<Order> = orders
            .values()
            .filter(|order| order.member_id == member_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.ordered_at.cmp(&a.ordered_at));
        Ok(found)
    }

    async fn find_all(
        &self,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        let mut found: Vec<Order> = orders.values().cloned().collect();
        found.sort_by(|a, b| b.ordered_at.cmp(&a.ordered_at));
        Ok(found)
    }
}
