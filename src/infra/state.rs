use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::education::EducationGateway;
use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::skill::SkillGateway;
use crate::adapter::db::gateway::value::ValueGateway;
use crate::adapter::db::gateway::work_experience::WorkExperienceGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::education::{
    CreateEducationInteractor, DeleteEducationInteractor, ListEducationsInteractor, UpdateEducationInteractor,
};
use crate::application::interactors::experience::{
    CreateWorkExperienceInteractor, DeleteWorkExperienceInteractor, ListWorkExperiencesInteractor,
    UpdateWorkExperienceInteractor,
};
use crate::application::interactors::profile::{
    CreateProfileInteractor, DeleteProfileInteractor, GetProfileInteractor, UpdateProfileInteractor,
};
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetProfileInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        GetProfileInteractor::from_app_state(&app_state).await
    }
}

// CreateProfileInteractor
#[async_trait]
impl FromAppState for CreateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(CreateProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for CreateProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        CreateProfileInteractor::from_app_state(&app_state).await
    }
}

// UpdateProfileInteractor
#[async_trait]
impl FromAppState for UpdateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let work_experience_gateway = WorkExperienceGateway::new(session.clone());
        let education_gateway = EducationGateway::new(session.clone());
        let skill_gateway = SkillGateway::new(session.clone());
        let value_gateway = ValueGateway::new(session.clone());

        Ok(UpdateProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
            Arc::new(work_experience_gateway),
            Arc::new(education_gateway),
            Arc::new(skill_gateway),
            Arc::new(value_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UpdateProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        UpdateProfileInteractor::from_app_state(&app_state).await
    }
}

// DeleteProfileInteractor
#[async_trait]
impl FromAppState for DeleteProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(DeleteProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeleteProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        DeleteProfileInteractor::from_app_state(&app_state).await
    }
}

// ListWorkExperiencesInteractor
#[async_trait]
impl FromAppState for ListWorkExperiencesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let work_experience_gateway = WorkExperienceGateway::new(session);

        Ok(ListWorkExperiencesInteractor::new(
            Arc::new(profile_gateway),
            Arc::new(work_experience_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for ListWorkExperiencesInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        ListWorkExperiencesInteractor::from_app_state(&app_state).await
    }
}

// CreateWorkExperienceInteractor
#[async_trait]
impl FromAppState for CreateWorkExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let work_experience_gateway = WorkExperienceGateway::new(session.clone());

        Ok(CreateWorkExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(work_experience_gateway.clone()),
            Arc::new(work_experience_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for CreateWorkExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        CreateWorkExperienceInteractor::from_app_state(&app_state).await
    }
}

// UpdateWorkExperienceInteractor
#[async_trait]
impl FromAppState for UpdateWorkExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let work_experience_gateway = WorkExperienceGateway::new(session.clone());

        Ok(UpdateWorkExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(work_experience_gateway.clone()),
            Arc::new(work_experience_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UpdateWorkExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        UpdateWorkExperienceInteractor::from_app_state(&app_state).await
    }
}

// DeleteWorkExperienceInteractor
#[async_trait]
impl FromAppState for DeleteWorkExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let work_experience_gateway = WorkExperienceGateway::new(session.clone());

        Ok(DeleteWorkExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(work_experience_gateway.clone()),
            Arc::new(work_experience_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeleteWorkExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        DeleteWorkExperienceInteractor::from_app_state(&app_state).await
    }
}

// ListEducationsInteractor
#[async_trait]
impl FromAppState for ListEducationsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let education_gateway = EducationGateway::new(session);

        Ok(ListEducationsInteractor::new(
            Arc::new(profile_gateway),
            Arc::new(education_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for ListEducationsInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        ListEducationsInteractor::from_app_state(&app_state).await
    }
}

// CreateEducationInteractor
#[async_trait]
impl FromAppState for CreateEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let education_gateway = EducationGateway::new(session.clone());

        Ok(CreateEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(education_gateway.clone()),
            Arc::new(education_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for CreateEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        CreateEducationInteractor::from_app_state(&app_state).await
    }
}

// UpdateEducationInteractor
#[async_trait]
impl FromAppState for UpdateEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let education_gateway = EducationGateway::new(session.clone());

        Ok(UpdateEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(education_gateway.clone()),
            Arc::new(education_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UpdateEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        UpdateEducationInteractor::from_app_state(&app_state).await
    }
}

// DeleteEducationInteractor
#[async_trait]
impl FromAppState for DeleteEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let education_gateway = EducationGateway::new(session.clone());

        Ok(DeleteEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(education_gateway.clone()),
            Arc::new(education_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeleteEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        DeleteEducationInteractor::from_app_state(&app_state).await
    }
}
