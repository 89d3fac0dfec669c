use axum::extract::Path;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::education::{CreateEducationRequest, GetEducationResponse, UpdateEducationRequest};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::education::{CreateEducationDTO, DeleteEducationDTO, UpdateEducationDTO};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::EducationDTO;
use crate::application::interactors::education::{
    CreateEducationInteractor, DeleteEducationInteractor, ListEducationsInteractor, UpdateEducationInteractor,
};

fn response(dto: EducationDTO) -> GetEducationResponse {
    GetEducationResponse {
        id: dto.id,
        degree: dto.degree,
        institution: dto.institution,
        period: dto.period,
        description: dto.description,
    }
}

pub async fn list_educations(auth_user: AuthUser, interactor: ListEducationsInteractor) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    let rows = interactor.execute(dto).await?;
    let items: Vec<GetEducationResponse> = rows.into_iter().map(response).collect();
    Ok((StatusCode::OK, Json(items)))
}

pub async fn create_education(
    auth_user: AuthUser,
    interactor: CreateEducationInteractor,
    ValidJson(payload): ValidJson<CreateEducationRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateEducationDTO {
        user_id: auth_user.user_id,
        degree: payload.degree,
        institution: payload.institution,
        period: payload.period,
        description: payload.description,
    };
    let row = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(response(row))))
}

pub async fn update_education(
    auth_user: AuthUser,
    interactor: UpdateEducationInteractor,
    Path(education_id): Path<String>,
    ValidJson(payload): ValidJson<UpdateEducationRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateEducationDTO {
        user_id: auth_user.user_id,
        education_id,
        degree: payload.degree,
        institution: payload.institution,
        period: payload.period,
        description: payload.description,
    };
    let row = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(response(row))))
}

pub async fn delete_education(
    auth_user: AuthUser,
    interactor: DeleteEducationInteractor,
    Path(education_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = DeleteEducationDTO {
        user_id: auth_user.user_id,
        education_id,
    };
    interactor.execute(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
