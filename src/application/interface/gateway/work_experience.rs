use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewWorkExperience, Profile, WorkExperience};

#[async_trait]
pub trait WorkExperienceReader: Send + Sync {
    async fn list_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<Vec<WorkExperience>>;
    async fn find_by_id(&self, work_experience_id: &Id<WorkExperience>) -> AppResult<Option<WorkExperience>>;
}

#[async_trait]
pub trait WorkExperienceWriter: Send + Sync {
    async fn insert(&self, work_experience: NewWorkExperience) -> AppResult<Id<WorkExperience>>;
    async fn update(&self, work_experience: WorkExperience) -> AppResult<()>;
    async fn delete(&self, work_experience_id: &Id<WorkExperience>) -> AppResult<()>;
}
