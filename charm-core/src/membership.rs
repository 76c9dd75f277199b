use std::sync::Arc;
use uuid::Uuid;
use crate::member::Member;
use crate::repository::MemberRepository;

/// Registers and looks up members. Member names are unique across the shop.
pub struct MembershipService {
    members: Arc<dyn MemberRepository>,
}

impl MembershipService {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    /// Register a new member, rejecting a name that is already taken.
    pub async fn join(&self, member: Member) -> Result<Uuid, MembershipError> {
        self.validate_unique_name(&member.name).await?;

        let id = self.members.save(&member).await?;
        tracing::info!(member_id = %id, name = %member.name, "member joined");
        Ok(id)
    }

    pub async fn find_member(&self, id: Uuid) -> Result<Member, MembershipError> {
        self.members
            .find_one(id)
            .await?
            .ok_or(MembershipError::NotFound(id))
    }

    pub async fn find_members(&self) -> Result<Vec<Member>, MembershipError> {
        Ok(self.members.find_all().await?)
    }

    /// Rename an existing member, keeping the unique-name rule.
    pub async fn update_name(&self, id: Uuid, name: String) -> Result<(), MembershipError> {
        let mut member = self.find_member(id).await?;
        if member.name != name {
            self.validate_unique_name(&name).await?;
        }

        member.name = name;
        self.members.save(&member).await?;
        Ok(())
    }

    async fn validate_unique_name(&self, name: &str) -> Result<(), MembershipError> {
        let existing = self.members.find_by_name(name).await?;
        if !existing.is_empty() {
            tracing::warn!(name = %name, "join rejected, name already taken");
            return Err(MembershipError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    #[error("a member named {0} already exists")]
    DuplicateName(String),

    #[error("member not found: {0}")]
    NotFound(Uuid),

    #[error("member storage failed: {0}")]
    Storage(#[from] Box<dyn std::error::Error + Send + Sync>),
}
