use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::education::{CreateEducationDTO, DeleteEducationDTO, UpdateEducationDTO};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::EducationDTO;
use crate::application::interactors::profile::PROFILE_NOT_FOUND;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::education::{EducationReader, EducationWriter};
use crate::application::interface::gateway::profile::ProfileReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, NewEducation, Profile};
use crate::domain::entities::user::User;

const EDUCATION_NOT_FOUND: &str = "Education not found";

fn education_dto(row: &Education) -> EducationDTO {
    EducationDTO {
        id: row.id.value.to_string(),
        degree: row.degree.clone(),
        institution: row.institution.clone(),
        period: row.period.clone(),
        description: row.description.clone(),
    }
}

async fn require_profile(profile_reader: &Arc<dyn ProfileReader>, user_id: &Id<User>) -> AppResult<Profile> {
    profile_reader
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(PROFILE_NOT_FOUND.to_owned()))
}

#[derive(Clone)]
pub struct ListEducationsInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    education_reader: Arc<dyn EducationReader>,
}

impl ListEducationsInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>, education_reader: Arc<dyn EducationReader>) -> Self {
        Self {
            profile_reader,
            education_reader,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Vec<EducationDTO>> {
        let user_id: Id<User> = dto.id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let rows = self.education_reader.list_by_profile(&profile.id).await?;
        Ok(rows.iter().map(education_dto).collect())
    }
}

#[derive(Clone)]
pub struct CreateEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    education_reader: Arc<dyn EducationReader>,
    education_writer: Arc<dyn EducationWriter>,
}

impl CreateEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        education_reader: Arc<dyn EducationReader>,
        education_writer: Arc<dyn EducationWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            education_reader,
            education_writer,
        }
    }

    pub async fn execute(&self, dto: CreateEducationDTO) -> AppResult<EducationDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let id = self
            .education_writer
            .insert(NewEducation {
                profile_id: profile.id.clone(),
                degree: dto.degree,
                institution: dto.institution,
                period: dto.period,
                description: dto.description,
            })
            .await?;
        let row = self
            .education_reader
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(EDUCATION_NOT_FOUND.to_owned()))?;
        let response = education_dto(&row);
        self.db_session.commit().await?;
        info!("Education {} created for user {}", row.id.value, user_id.value);
        Ok(response)
    }
}

#[derive(Clone)]
pub struct UpdateEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    education_reader: Arc<dyn EducationReader>,
    education_writer: Arc<dyn EducationWriter>,
}

impl UpdateEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        education_reader: Arc<dyn EducationReader>,
        education_writer: Arc<dyn EducationWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            education_reader,
            education_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateEducationDTO) -> AppResult<EducationDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let education_id: Id<Education> = dto.education_id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let mut row = self
            .education_reader
            .find_by_id(&education_id)
            .await?
            .ok_or_else(|| AppError::NotFound(EDUCATION_NOT_FOUND.to_owned()))?;
        if row.profile_id.value != profile.id.value {
            warn!(
                "User {} tried to update education {} of another profile",
                user_id.value, row.id.value
            );
            return Err(AppError::PermissionDenied(
                "You do not have permission to update this education".to_owned(),
            ));
        }

        if let Some(degree) = dto.degree {
            row.degree = degree;
        }
        if let Some(institution) = dto.institution {
            row.institution = institution;
        }
        if let Some(period) = dto.period {
            row.period = period;
        }
        if let Some(description) = dto.description {
            row.description = description;
        }
        row.updated_at = Utc::now();
        self.education_writer.update(row.clone()).await?;
        self.db_session.commit().await?;
        Ok(education_dto(&row))
    }
}

#[derive(Clone)]
pub struct DeleteEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    education_reader: Arc<dyn EducationReader>,
    education_writer: Arc<dyn EducationWriter>,
}

impl DeleteEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        education_reader: Arc<dyn EducationReader>,
        education_writer: Arc<dyn EducationWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            education_reader,
            education_writer,
        }
    }

    pub async fn execute(&self, dto: DeleteEducationDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let education_id: Id<Education> = dto.education_id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let row = self
            .education_reader
            .find_by_id(&education_id)
            .await?
            .ok_or_else(|| AppError::NotFound(EDUCATION_NOT_FOUND.to_owned()))?;
        if row.profile_id.value != profile.id.value {
            warn!(
                "User {} tried to delete education {} of another profile",
                user_id.value, row.id.value
            );
            return Err(AppError::PermissionDenied(
                "You do not have permission to delete this education".to_owned(),
            ));
        }
        self.education_writer.delete(&row.id).await?;
        self.db_session.commit().await?;
        info!("Education {} deleted for user {}", row.id.value, user_id.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::education::UpdateEducationDTO;
    use crate::application::interactors::education::UpdateEducationInteractor;
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::education::{EducationReader, EducationWriter};
    use crate::application::interface::gateway::profile::ProfileReader;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{Education, NewEducation, Profile, ProfileChildren};
    use crate::domain::entities::user::User;

    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub ProfileReaderMock {}

        #[async_trait]
        impl ProfileReader for ProfileReaderMock {
            async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
            async fn load_children(&self, profile_id: &Id<Profile>) -> AppResult<ProfileChildren>;
        }
    }

    mock! {
        pub EducationReaderMock {}

        #[async_trait]
        impl EducationReader for EducationReaderMock {
            async fn list_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<Vec<Education>>;
            async fn find_by_id(&self, education_id: &Id<Education>) -> AppResult<Option<Education>>;
        }
    }

    mock! {
        pub EducationWriterMock {}

        #[async_trait]
        impl EducationWriter for EducationWriterMock {
            async fn insert(&self, education: NewEducation) -> AppResult<Id<Education>>;
            async fn update(&self, education: Education) -> AppResult<()>;
            async fn delete(&self, education_id: &Id<Education>) -> AppResult<()>;
        }
    }

    const PROFILE_ID: i64 = 10;

    fn profile() -> Profile {
        let now = Utc::now();
        Profile {
            id: Id::new(PROFILE_ID),
            user_id: Id::new(1),
            headline: "H".to_owned(),
            subheadline: "S".to_owned(),
            story: "Story.".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    fn row(id: i64, profile_id: i64) -> Education {
        let now = Utc::now();
        Education {
            id: Id::new(id),
            profile_id: Id::new(profile_id),
            degree: "BSc".to_owned(),
            institution: "University".to_owned(),
            period: "2014 - 2018".to_owned(),
            description: "Studied.".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    fn update_dto() -> UpdateEducationDTO {
        UpdateEducationDTO {
            user_id: "1".to_owned(),
            education_id: "1".to_owned(),
            degree: Some("MSc".to_owned()),
            institution: None,
            period: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_update_applies_only_submitted_fields() {
        let mut db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockEducationReaderMock::new();
        let mut writer = MockEducationWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        reader.expect_find_by_id().returning(|_| Ok(Some(row(1, PROFILE_ID))));
        writer
            .expect_update()
            .withf(|e| e.degree == "MSc" && e.institution == "University")
            .times(1)
            .returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let response = UpdateEducationInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(update_dto())
        .await
        .unwrap();

        assert_eq!(response.degree, "MSc");
    }

    #[tokio::test]
    async fn test_update_foreign_row_is_forbidden() {
        let db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockEducationReaderMock::new();
        let writer = MockEducationWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        reader.expect_find_by_id().returning(|_| Ok(Some(row(1, PROFILE_ID + 1))));

        let result = UpdateEducationInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(update_dto())
        .await;

        assert!(matches!(result.unwrap_err(), AppError::PermissionDenied(_)));
    }
}
