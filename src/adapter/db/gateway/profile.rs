use async_trait::async_trait;
use chrono::Utc;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{
    Education, NewProfile, Profile, ProfileChildren, Skill, Value, WorkExperience,
};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_profile(row: &PgRow) -> AppResult<Profile> {
        Ok(Profile {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            headline: row.try_get("headline")?,
            subheadline: row.try_get("subheadline")?,
            story: row.try_get("story")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn map_work_experience(row: &PgRow) -> AppResult<WorkExperience> {
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

    fn map_education(row: &PgRow) -> AppResult<Education> {
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

    fn map_skill(row: &PgRow) -> AppResult<Skill> {
        Ok(Skill {
            id: Id::new(row.try_get("id")?),
            profile_id: Id::new(row.try_get("profile_id")?),
            category: row.try_get("category")?,
            category_title: row.try_get("category_title")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn map_value(row: &PgRow) -> AppResult<Value> {
        Ok(Value {
            id: Id::new(row.try_get("id")?),
            profile_id: Id::new(row.try_get("profile_id")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, headline, subheadline, story, created_at, updated_at
                            FROM
                                profiles
                            WHERE user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    match result {
                        Some(row) => Ok(Some(Self::map_profile(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn load_children(&self, profile_id: &Id<Profile>) -> AppResult<ProfileChildren> {
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
                    let work_experiences = rows
                        .iter()
                        .map(Self::map_work_experience)
                        .collect::<AppResult<Vec<_>>>()?;

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
                    let educations = rows.iter().map(Self::map_education).collect::<AppResult<Vec<_>>>()?;

                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, profile_id, category, category_title, name, created_at, updated_at
                            FROM
                                skills
                            WHERE profile_id = $1
                            ORDER BY id
                        "#,
                    )
                    .bind(profile_id)
                    .fetch_all(tx.as_mut())
                    .await?;
                    let skills = rows.iter().map(Self::map_skill).collect::<AppResult<Vec<_>>>()?;

                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, profile_id, title, description, created_at, updated_at
                            FROM
                                profile_values
                            WHERE profile_id = $1
                            ORDER BY id
                        "#,
                    )
                    .bind(profile_id)
                    .fetch_all(tx.as_mut())
                    .await?;
                    let values = rows.iter().map(Self::map_value).collect::<AppResult<Vec<_>>>()?;

                    Ok(ProfileChildren {
                        work_experiences,
                        educations,
                        skills,
                        values,
                    })
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: NewProfile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    let now = Utc::now();
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (user_id, headline, subheadline, story, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(profile.user_id.value)
                    .bind(&profile.headline)
                    .bind(&profile.subheadline)
                    .bind(&profile.story)
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

    async fn update(&self, profile: Profile) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                headline = $2, subheadline = $3, story = $4, updated_at = $5
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(&profile.headline)
                    .bind(&profile.subheadline)
                    .bind(&profile.story)
                    .bind(profile.updated_at)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, profile_id: &Id<Profile>) -> AppResult<()> {
        // Child rows go first; the schema is not trusted to cascade.
        self.session
            .with_tx(|tx| {
                let profile_id = profile_id.value;
                async move {
                    sqlx::query("DELETE FROM work_experiences WHERE profile_id = $1")
                        .bind(profile_id)
                        .execute(tx.as_mut())
                        .await?;
                    sqlx::query("DELETE FROM educations WHERE profile_id = $1")
                        .bind(profile_id)
                        .execute(tx.as_mut())
                        .await?;
                    sqlx::query("DELETE FROM skills WHERE profile_id = $1")
                        .bind(profile_id)
                        .execute(tx.as_mut())
                        .await?;
                    sqlx::query("DELETE FROM profile_values WHERE profile_id = $1")
                        .bind(profile_id)
                        .execute(tx.as_mut())
                        .await?;
                    sqlx::query("DELETE FROM profiles WHERE id = $1")
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
