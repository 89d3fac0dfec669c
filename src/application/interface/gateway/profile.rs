use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewProfile, Profile, ProfileChildren};
use crate::domain::entities::user::User;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
    /// Loads all four owned collections, each ordered by id.
    async fn load_children(&self, profile_id: &Id<Profile>) -> AppResult<ProfileChildren>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: NewProfile) -> AppResult<Id<Profile>>;
    async fn update(&self, profile: Profile) -> AppResult<()>;
    /// Deletes the profile together with every child row.
    async fn delete(&self, profile_id: &Id<Profile>) -> AppResult<()>;
}
