use async_trait::async_trait;
use chrono::Utc;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::work_experience::{WorkExperienceReader, WorkExperienceWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewWorkExperience, Profile, WorkExperience};

#[derive(Clone)]
pub struct WorkExperienceGateway {
    session: SqlxSession,
}

impl WorkExperienceGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_row(row: &PgRow) -> AppResult<WorkExperience> {
        Ok(WorkExperience {
            id: Id::new(row.try_get("id")?),
            profile_id: Id::new(row.try_get("profile_id")?),
            title: row.try_get("title")?,
            company: row.try_get("company")?,
            period: row.try_get("period")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl WorkExperienceReader for WorkExperienceGateway {
    async fn list_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<Vec<WorkExperience>> {
        self.session
            .with_tx(|tx| {
                let profile_id = profile_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, profile_id, title, company, period, description, created_at, updated_at
                            FROM
                                work_experiences
                            WHERE profile_id = $1
                            ORDER BY id
                        "#,
                    )
                    .bind(profile_id)
                    .fetch_all(tx.as_mut())
                    .await?;
                    rows.iter().map(Self::map_row).collect()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_id(&self, work_experience_id: &Id<WorkExperience>) -> AppResult<Option<WorkExperience>> {
        self.session
            .with_tx(|tx| {
                let work_experience_id = work_experience_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, profile_id, title, company, period, description, created_at, updated_at
                            FROM
                                work_experiences
                            WHERE id = $1
                        "#,
                    )
                    .bind(work_experience_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    match result {
                        Some(row) => Ok(Some(Self::map_row(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl WorkExperienceWriter for WorkExperienceGateway {
    async fn insert(&self, work_experience: NewWorkExperience) -> AppResult<Id<WorkExperience>> {
        self.session
            .with_tx(|tx| {
                let work_experience = work_experience.clone();
                async move {
                    let now = Utc::now();
                    let result = sqlx::query(
                        r#"
                            INSERT INTO work_experiences
                                (profile_id, title, company, period, description, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(work_experience.profile_id.value)
                    .bind(&work_experience.title)
                    .bind(&work_experience.company)
                    .bind(&work_experience.period)
                    .bind(&work_experience.description)
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

    async fn update(&self, work_experience: WorkExperience) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let work_experience = work_experience.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                work_experiences
                            SET
                                title = $2, company = $3, period = $4, description = $5, updated_at = $6
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(work_experience.id.value)
                    .bind(&work_experience.title)
                    .bind(&work_experience.company)
                    .bind(&work_experience.period)
                    .bind(&work_experience.description)
                    .bind(work_experience.updated_at)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, work_experience_id: &Id<WorkExperience>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let work_experience_id = work_experience_id.value;
                async move {
                    sqlx::query("DELETE FROM work_experiences WHERE id = $1")
                        .bind(work_experience_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
