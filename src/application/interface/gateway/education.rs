use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, NewEducation, Profile};

#[async_trait]
pub trait EducationReader: Send + Sync {
    async fn list_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<Vec<Education>>;
    async fn find_by_id(&self, education_id: &Id<Education>) -> AppResult<Option<Education>>;
}

#[async_trait]
pub trait EducationWriter: Send + Sync {
    async fn insert(&self, education: NewEducation) -> AppResult<Id<Education>>;
    async fn update(&self, education: Education) -> AppResult<()>;
    async fn delete(&self, education_id: &Id<Education>) -> AppResult<()>;
}
