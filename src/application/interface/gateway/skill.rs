use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewSkill, Profile, Skill};

/// Skills carry no client-visible identity, so the writer only supports the
/// replace flow: purge the profile's rows, then insert the submitted set.
/// Reads go through the aggregate loader.
#[async_trait]
pub trait SkillWriter: Send + Sync {
    async fn insert(&self, skill: NewSkill) -> AppResult<Id<Skill>>;
    async fn delete_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<()>;
}
