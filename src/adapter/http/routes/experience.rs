use axum::extract::Path;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::experience::{
    CreateWorkExperienceRequest, GetWorkExperienceResponse, UpdateWorkExperienceRequest,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::experience::{CreateWorkExperienceDTO, DeleteWorkExperienceDTO, UpdateWorkExperienceDTO};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::WorkExperienceDTO;
use crate::application::interactors::experience::{
    CreateWorkExperienceInteractor, DeleteWorkExperienceInteractor, ListWorkExperiencesInteractor,
    UpdateWorkExperienceInteractor,
};

fn response(dto: WorkExperienceDTO) -> GetWorkExperienceResponse {
    GetWorkExperienceResponse {
        id: dto.id,
        title: dto.title,
        company: dto.company,
        period: dto.period,
        description: dto.description,
    }
}

pub async fn list_work_experiences(
    auth_user: AuthUser,
    interactor: ListWorkExperiencesInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    let rows = interactor.execute(dto).await?;
    let items: Vec<GetWorkExperienceResponse> = rows.into_iter().map(response).collect();
    Ok((StatusCode::OK, Json(items)))
}

pub async fn create_work_experience(
    auth_user: AuthUser,
    interactor: CreateWorkExperienceInteractor,
    ValidJson(payload): ValidJson<CreateWorkExperienceRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateWorkExperienceDTO {
        user_id: auth_user.user_id,
        title: payload.title,
        company: payload.company,
        period: payload.period,
        description: payload.description,
    };
    let row = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(response(row))))
}

pub async fn update_work_experience(
    auth_user: AuthUser,
    interactor: UpdateWorkExperienceInteractor,
    Path(work_experience_id): Path<String>,
    ValidJson(payload): ValidJson<UpdateWorkExperienceRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateWorkExperienceDTO {
        user_id: auth_user.user_id,
        work_experience_id,
        title: payload.title,
        company: payload.company,
        period: payload.period,
        description: payload.description,
    };
    let row = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(response(row))))
}

pub async fn delete_work_experience(
    auth_user: AuthUser,
    interactor: DeleteWorkExperienceInteractor,
    Path(work_experience_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = DeleteWorkExperienceDTO {
        user_id: auth_user.user_id,
        work_experience_id,
    };
    interactor.execute(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
