use async_trait::async_trait;
use chrono::Utc;
use futures::FutureExt;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::value::ValueWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewValue, Value};

#[derive(Clone)]
pub struct ValueGateway {
    session: SqlxSession,
}

impl ValueGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ValueWriter for ValueGateway {
    async fn insert(&self, value: NewValue) -> AppResult<Id<Value>> {
        self.session
            .with_tx(|tx| {
                let value = value.clone();
                async move {
                    let now = Utc::now();
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profile_values
                                (profile_id, title, description, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(value.profile_id.value)
                    .bind(&value.title)
                    .bind(&value.description)
                    .bind(now)
                    .bind(now)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: i64 = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, value: Value) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let value = value.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                profile_values
                            SET
                                title = $2, description = $3, updated_at = $4
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(value.id.value)
                    .bind(&value.title)
                    .bind(&value.description)
                    .bind(value.updated_at)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, value_id: &Id<Value>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let value_id = value_id.value;
                async move {
                    sqlx::query("DELETE FROM profile_values WHERE id = $1")
                        .bind(value_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
