use async_trait::async_trait;
use uuid::Uuid;
use crate::item::Item;

/// Repository trait for catalog data access
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn save(
        &self,
        item: &Item,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_one(
        &self,
        id: Uuid,
    ) -> Result<Option<Item>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_all(
        &self,
    ) -> Result<Vec<Item>, Box<dyn std::error::Error + Send + Sync>>;
}
