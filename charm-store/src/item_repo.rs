use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use charm_catalog::{Item, ItemRepository};

/// In-memory catalog store behind the repository trait
pub struct MemoryItemRepository {
    items: RwLock<HashMap<Uuid, Item>>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn save(
        &self,
        item: &Item,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item.id)
    }

    async fn find_one(
        &self,
        id: Uuid,
    ) -> Result<Option<Item>, Box<dyn std::error::Error + Send + Sync>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn find_all(
        &self,
    ) -> Result<Vec<Item>, Box<dyn std::error::Error + Send + Sync>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}
