use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use charm_core::member::Member;
use charm_core::repository::MemberRepository;

/// In-memory member store behind the repository trait
pub struct MemoryMemberRepository {
    members: RwLock<HashMap<Uuid, Member>>,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self {
            members: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn save(
        &self,
        member: &Member,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let mut members = self.members.write().await;
        members.insert(member.id, member.clone());
        Ok(member.id)
    }

    async fn find_one(
        &self,
        id: Uuid,
    ) -> Result<Option<Member>, Box<dyn std::error::Error + Send + Sync>> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn find_all(
        &self,
    ) -> Result<Vec<Member>, Box<dyn std::error::Error + Send + Sync>> {
        let members = self.members.read().await;
        Ok(members.values().cloned().collect())
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<Member>, Box<dyn std::error::Error + Send + Sync>> {
        let members = self.members.read().await;
        Ok(members
            .values()
            .filter(|member| member.name == name)
            .cloned()
            .collect())
    }
}
