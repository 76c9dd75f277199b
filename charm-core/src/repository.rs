use async_trait::async_trait;
use uuid::Uuid;
use crate::member::Member;

/// Repository trait for member data access
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn save(
        &self,
        member: &Member,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_one(
        &self,
        id: Uuid,
    ) -> Result<Option<Member>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_all(
        &self,
    ) -> Result<Vec<Member>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<Member>, Box<dyn std::error::Error + Send + Sync>>;
}
