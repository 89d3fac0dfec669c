use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewValue, Value};

/// Values are only ever read as part of the aggregate, so there is no
/// standalone reader.
#[async_trait]
pub trait ValueWriter: Send + Sync {
    async fn insert(&self, value: NewValue) -> AppResult<Id<Value>>;
    async fn update(&self, value: Value) -> AppResult<()>;
    async fn delete(&self, value_id: &Id<Value>) -> AppResult<()>;
}
