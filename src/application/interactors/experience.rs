use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::experience::{CreateWorkExperienceDTO, DeleteWorkExperienceDTO, UpdateWorkExperienceDTO};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::WorkExperienceDTO;
use crate::application::interactors::profile::PROFILE_NOT_FOUND;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::ProfileReader;
use crate::application::interface::gateway::work_experience::{WorkExperienceReader, WorkExperienceWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewWorkExperience, Profile, WorkExperience};
use crate::domain::entities::user::User;

const WORK_EXPERIENCE_NOT_FOUND: &str = "Work experience not found";

fn work_experience_dto(row: &WorkExperience) -> WorkExperienceDTO {
    WorkExperienceDTO {
        id: row.id.value.to_string(),
        title: row.title.clone(),
        company: row.company.clone(),
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
pub struct ListWorkExperiencesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    work_experience_reader: Arc<dyn WorkExperienceReader>,
}

impl ListWorkExperiencesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>, work_experience_reader: Arc<dyn WorkExperienceReader>) -> Self {
        Self {
            profile_reader,
            work_experience_reader,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Vec<WorkExperienceDTO>> {
        let user_id: Id<User> = dto.id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let rows = self.work_experience_reader.list_by_profile(&profile.id).await?;
        Ok(rows.iter().map(work_experience_dto).collect())
    }
}

#[derive(Clone)]
pub struct CreateWorkExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    work_experience_reader: Arc<dyn WorkExperienceReader>,
    work_experience_writer: Arc<dyn WorkExperienceWriter>,
}

impl CreateWorkExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        work_experience_reader: Arc<dyn WorkExperienceReader>,
        work_experience_writer: Arc<dyn WorkExperienceWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            work_experience_reader,
            work_experience_writer,
        }
    }

    pub async fn execute(&self, dto: CreateWorkExperienceDTO) -> AppResult<WorkExperienceDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let id = self
            .work_experience_writer
            .insert(NewWorkExperience {
                profile_id: profile.id.clone(),
                title: dto.title,
                company: dto.company,
                period: dto.period,
                description: dto.description,
            })
            .await?;
        let row = self
            .work_experience_reader
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(WORK_EXPERIENCE_NOT_FOUND.to_owned()))?;
        let response = work_experience_dto(&row);
        self.db_session.commit().await?;
        info!("Work experience {} created for user {}", row.id.value, user_id.value);
        Ok(response)
    }
}

#[derive(Clone)]
pub struct UpdateWorkExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    work_experience_reader: Arc<dyn WorkExperienceReader>,
    work_experience_writer: Arc<dyn WorkExperienceWriter>,
}

impl UpdateWorkExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        work_experience_reader: Arc<dyn WorkExperienceReader>,
        work_experience_writer: Arc<dyn WorkExperienceWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            work_experience_reader,
            work_experience_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateWorkExperienceDTO) -> AppResult<WorkExperienceDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let work_experience_id: Id<WorkExperience> = dto.work_experience_id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let mut row = self
            .work_experience_reader
            .find_by_id(&work_experience_id)
            .await?
            .ok_or_else(|| AppError::NotFound(WORK_EXPERIENCE_NOT_FOUND.to_owned()))?;
        if row.profile_id.value != profile.id.value {
            warn!(
                "User {} tried to update work experience {} of another profile",
                user_id.value, row.id.value
            );
            return Err(AppError::PermissionDenied(
                "You do not have permission to update this work experience".to_owned(),
            ));
        }

        if let Some(title) = dto.title {
            row.title = title;
        }
        if let Some(company) = dto.company {
            row.company = company;
        }
        if let Some(period) = dto.period {
            row.period = period;
        }
        if let Some(description) = dto.description {
            row.description = description;
        }
        row.updated_at = Utc::now();
        self.work_experience_writer.update(row.clone()).await?;
        self.db_session.commit().await?;
        Ok(work_experience_dto(&row))
    }
}

#[derive(Clone)]
pub struct DeleteWorkExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    work_experience_reader: Arc<dyn WorkExperienceReader>,
    work_experience_writer: Arc<dyn WorkExperienceWriter>,
}

impl DeleteWorkExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        work_experience_reader: Arc<dyn WorkExperienceReader>,
        work_experience_writer: Arc<dyn WorkExperienceWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            work_experience_reader,
            work_experience_writer,
        }
    }

    pub async fn execute(&self, dto: DeleteWorkExperienceDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let work_experience_id: Id<WorkExperience> = dto.work_experience_id.try_into()?;
        let profile = require_profile(&self.profile_reader, &user_id).await?;
        let row = self
            .work_experience_reader
            .find_by_id(&work_experience_id)
            .await?
            .ok_or_else(|| AppError::NotFound(WORK_EXPERIENCE_NOT_FOUND.to_owned()))?;
        if row.profile_id.value != profile.id.value {
            warn!(
                "User {} tried to delete work experience {} of another profile",
                user_id.value, row.id.value
            );
            return Err(AppError::PermissionDenied(
                "You do not have permission to delete this work experience".to_owned(),
            ));
        }
        self.work_experience_writer.delete(&row.id).await?;
        self.db_session.commit().await?;
        info!("Work experience {} deleted for user {}", row.id.value, user_id.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::experience::{CreateWorkExperienceDTO, DeleteWorkExperienceDTO, UpdateWorkExperienceDTO};
    use crate::application::interactors::experience::{
        CreateWorkExperienceInteractor, DeleteWorkExperienceInteractor, UpdateWorkExperienceInteractor,
    };
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::profile::ProfileReader;
    use crate::application::interface::gateway::work_experience::{WorkExperienceReader, WorkExperienceWriter};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{NewWorkExperience, Profile, ProfileChildren, WorkExperience};
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
        pub WorkExperienceReaderMock {}

        #[async_trait]
        impl WorkExperienceReader for WorkExperienceReaderMock {
            async fn list_by_profile(&self, profile_id: &Id<Profile>) -> AppResult<Vec<WorkExperience>>;
            async fn find_by_id(&self, work_experience_id: &Id<WorkExperience>) -> AppResult<Option<WorkExperience>>;
        }
    }

    mock! {
        pub WorkExperienceWriterMock {}

        #[async_trait]
        impl WorkExperienceWriter for WorkExperienceWriterMock {
            async fn insert(&self, work_experience: NewWorkExperience) -> AppResult<Id<WorkExperience>>;
            async fn update(&self, work_experience: WorkExperience) -> AppResult<()>;
            async fn delete(&self, work_experience_id: &Id<WorkExperience>) -> AppResult<()>;
        }
    }

    const USER_ID: &str = "1";
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

    fn row(id: i64, profile_id: i64) -> WorkExperience {
        let now = Utc::now();
        WorkExperience {
            id: Id::new(id),
            profile_id: Id::new(profile_id),
            title: "Engineer".to_owned(),
            company: "Acme".to_owned(),
            period: "2020 - 2022".to_owned(),
            description: "Built systems.".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[fixture]
    fn update_dto() -> UpdateWorkExperienceDTO {
        UpdateWorkExperienceDTO {
            user_id: USER_ID.to_owned(),
            work_experience_id: "1".to_owned(),
            title: Some("Senior Engineer".to_owned()),
            company: None,
            period: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_without_profile_is_not_found() {
        let db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let reader = MockWorkExperienceReaderMock::new();
        let writer = MockWorkExperienceWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(None));

        let result = CreateWorkExperienceInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(CreateWorkExperienceDTO {
            user_id: USER_ID.to_owned(),
            title: "Engineer".to_owned(),
            company: "Acme".to_owned(),
            period: "2020 - 2022".to_owned(),
            description: "Built systems.".to_owned(),
        })
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_inserts_into_own_profile() {
        let mut db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockWorkExperienceReaderMock::new();
        let mut writer = MockWorkExperienceWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        writer
            .expect_insert()
            .withf(|w| w.profile_id.value == PROFILE_ID && w.title == "Engineer")
            .times(1)
            .returning(|_| Ok(Id::new(1)));
        reader.expect_find_by_id().returning(|_| Ok(Some(row(1, PROFILE_ID))));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let response = CreateWorkExperienceInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(CreateWorkExperienceDTO {
            user_id: USER_ID.to_owned(),
            title: "Engineer".to_owned(),
            company: "Acme".to_owned(),
            period: "2020 - 2022".to_owned(),
            description: "Built systems.".to_owned(),
        })
        .await
        .unwrap();

        assert_eq!(response.id, "1");
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_applies_only_submitted_fields(update_dto: UpdateWorkExperienceDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockWorkExperienceReaderMock::new();
        let mut writer = MockWorkExperienceWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        reader.expect_find_by_id().returning(|_| Ok(Some(row(1, PROFILE_ID))));
        writer
            .expect_update()
            .withf(|w| w.title == "Senior Engineer" && w.company == "Acme")
            .times(1)
            .returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let response = UpdateWorkExperienceInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(update_dto)
        .await
        .unwrap();

        assert_eq!(response.title, "Senior Engineer");
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_foreign_row_is_forbidden(update_dto: UpdateWorkExperienceDTO) {
        let db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockWorkExperienceReaderMock::new();
        let writer = MockWorkExperienceWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        reader.expect_find_by_id().returning(|_| Ok(Some(row(1, PROFILE_ID + 1))));

        let result = UpdateWorkExperienceInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(update_dto)
        .await;

        assert!(matches!(result.unwrap_err(), AppError::PermissionDenied(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_missing_row_is_not_found(update_dto: UpdateWorkExperienceDTO) {
        let db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockWorkExperienceReaderMock::new();
        let writer = MockWorkExperienceWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        reader.expect_find_by_id().returning(|_| Ok(None));

        let result = UpdateWorkExperienceInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(update_dto)
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_foreign_row_is_forbidden() {
        let db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockWorkExperienceReaderMock::new();
        let writer = MockWorkExperienceWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        reader.expect_find_by_id().returning(|_| Ok(Some(row(1, PROFILE_ID + 1))));

        let result = DeleteWorkExperienceInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(DeleteWorkExperienceDTO {
            user_id: USER_ID.to_owned(),
            work_experience_id: "1".to_owned(),
        })
        .await;

        assert!(matches!(result.unwrap_err(), AppError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_delete_own_row_commits() {
        let mut db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut reader = MockWorkExperienceReaderMock::new();
        let mut writer = MockWorkExperienceWriterMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(Some(profile())));
        reader.expect_find_by_id().returning(|_| Ok(Some(row(1, PROFILE_ID))));
        writer
            .expect_delete()
            .withf(|id| id.value == 1)
            .times(1)
            .returning(|_| Ok(()));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        DeleteWorkExperienceInteractor::new(
            Arc::new(db_session),
            Arc::new(profile_reader),
            Arc::new(reader),
            Arc::new(writer),
        )
        .execute(DeleteWorkExperienceDTO {
            user_id: USER_ID.to_owned(),
            work_experience_id: "1".to_owned(),
        })
        .await
        .unwrap();
    }
}
