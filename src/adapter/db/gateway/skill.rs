use async_trait::async_trait;
use chrono::Utc;
use futures::FutureExt;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::skill::SkillWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewSkill, Profile, Skill};

#[derive(Clone)]
pub struct SkillGateway {
    session: SqlxSession,
}

impl SkillGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SkillWriter for SkillGateway {
    async fn insert(&self, skill: NewSkill) -> AppResult<Id<Skill>> {
        self.session
            .with_tx(|tx| {
                let skill = skill.clone();
                async move {
                    let now = Utc::now();
                    let result = sqlx::query(
                        r#"
                            INSERT INTO skills
                                (profile_id, category, category_title, name, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(skill.profile_id.value)
                    .bind(&skill.category)
                    .bind(&skill.category_title)
                    .bind(&skill.name)
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

    async fn delete_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let profile_id = profile_id.value;
                async move {
                    sqlx::query("DELETE FROM skills WHERE profile_id = $1")
                        .bind(profile_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
