use async_trait::async_trait;
use chrono::Utc;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::education::{EducationReader, EducationWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, NewEducation, Profile};

#[derive(Clone)]
pub struct EducationGateway {
    session: SqlxSession,
}

impl EducationGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_row(row: &PgRow) -> AppResult<Education> {
        Ok(Education {
            id: Id::new(row.try_get("id")?),
            profile_id: Id::new(row.try_get("profile_id")?),
            degree: row.try_get("degree")?,
            institution: row.try_get("institution")?,
            period: row.try_get("period")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl EducationReader for EducationGateway {
    async fn list_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<Vec<Education>> {
        self.session
            .with_tx(|tx| {
                let profile_id = profile_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, profile_id, degree, institution, period, description, created_at, updated_at
                            FROM
                                educations
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

    async fn find_by_id(&self, education_id: &Id<Education>) -> AppResult<Option<Education>> {
        self.session
            .with_tx(|tx| {
                let education_id = education_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, profile_id, degree, institution, period, description, created_at, updated_at
                            FROM
                                educations
                            WHERE id = $1
                        "#,
                    )
                    .bind(education_id)
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
impl EducationWriter for EducationGateway {
    async fn insert(&self, education: NewEducation) -> AppResult<Id<Education>> {
        self.session
            .with_tx(|tx| {
                let education = education.clone();
                async move {
                    let now = Utc::now();
                    let result = sqlx::query(
                        r#"
                            INSERT INTO educations
                                (profile_id, degree, institution, period, description, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(education.profile_id.value)
                    .bind(&education.degree)
                    .bind(&education.institution)
                    .bind(&education.period)
                    .bind(&education.description)
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

    async fn update(&self, education: Education) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let education = education.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                educations
                            SET
                                degree = $2, institution = $3, period = $4, description = $5, updated_at = $6
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(education.id.value)
                    .bind(&education.degree)
                    .bind(&education.institution)
                    .bind(&education.period)
                    .bind(&education.description)
                    .bind(education.updated_at)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, education_id: &Id<Education>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let education_id = education_id.value;
                async move {
                    sqlx::query("DELETE FROM educations WHERE id = $1")
                        .bind(education_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
