use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::profile::{
    CreateProfileRequest, EducationResponse, IntroResponse, ProfileResponse, SkillCategoryResponse,
    UpdateProfileRequest, ValueResponse, WorkExperienceResponse,
};
use crate::adapter::http::schema::{EntryId, StoryField};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    CreateProfileDTO, EducationEntryDTO, IntroDTO, ProfileDTO, SkillCategoryEntryDTO, UpdateProfileDTO, ValueEntryDTO,
    WorkExperienceEntryDTO,
};
use crate::application::interactors::profile::{
    CreateProfileInteractor, DeleteProfileInteractor, GetProfileInteractor, UpdateProfileInteractor,
};

fn profile_response(dto: ProfileDTO) -> ProfileResponse {
    ProfileResponse {
        intro: IntroResponse {
            headline: dto.intro.headline,
            subheadline: dto.intro.subheadline,
        },
        story: dto.story,
        work_experience: dto
            .work_experience
            .into_iter()
            .map(|w| WorkExperienceResponse {
                id: w.id,
                title: w.title,
                company: w.company,
                period: w.period,
                description: w.description,
            })
            .collect(),
        education: dto
            .education
            .into_iter()
            .map(|e| EducationResponse {
                id: e.id,
                degree: e.degree,
                institution: e.institution,
                period: e.period,
                description: e.description,
            })
            .collect(),
        skill_categories: dto
            .skill_categories
            .into_iter()
            .map(|c| SkillCategoryResponse {
                id: c.id,
                title: c.title,
                skills: c.skills,
            })
            .collect(),
        values: dto
            .values
            .into_iter()
            .map(|v| ValueResponse {
                id: v.id,
                title: v.title,
                description: v.description,
            })
            .collect(),
    }
}

fn update_profile_dto(user_id: String, payload: UpdateProfileRequest) -> UpdateProfileDTO {
    UpdateProfileDTO {
        user_id,
        intro: payload.intro.map(|intro| IntroDTO {
            headline: intro.headline,
            subheadline: intro.subheadline,
        }),
        story: payload.story.map(StoryField::into_paragraphs),
        work_experience: payload.work_experience.map(|entries| {
            entries
                .into_iter()
                .map(|e| WorkExperienceEntryDTO {
                    id: e.id.as_ref().and_then(EntryId::as_i64),
                    title: e.title,
                    company: e.company,
                    period: e.period,
                    description: e.description,
                })
                .collect()
        }),
        education: payload.education.map(|entries| {
            entries
                .into_iter()
                .map(|e| EducationEntryDTO {
                    id: e.id.as_ref().and_then(EntryId::as_i64),
                    degree: e.degree,
                    institution: e.institution,
                    period: e.period,
                    description: e.description,
                })
                .collect()
        }),
        skill_categories: payload.skill_categories.map(|categories| {
            categories
                .into_iter()
                .map(|c| SkillCategoryEntryDTO {
                    id: c.id,
                    title: c.title,
                    skills: c.skills,
                })
                .collect()
        }),
        values: payload.values.map(|entries| {
            entries
                .into_iter()
                .map(|v| ValueEntryDTO {
                    id: v.id.as_ref().and_then(EntryId::as_i64),
                    title: v.title,
                    description: v.description,
                })
                .collect()
        }),
    }
}

#[utoipa::path(
    get,
    path = "/about",
    tag = "About",
    responses(
        (status = 200, description = "The About aggregate", body = ProfileResponse),
        (
            status = 404,
            description = "No profile for this user",
            body = ErrorResponse,
            example = json!({ "error": "About profile not found for this user" })
        ),
        (
            status = 401,
            description = "Not authenticated",
            body = ErrorResponse,
            example = json!({ "error": "Invalid Credentials" })
        )
    )
)]
pub async fn get_about(auth_user: AuthUser, interactor: GetProfileInteractor) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(profile_response(profile))))
}

pub async fn create_about(
    auth_user: AuthUser,
    interactor: CreateProfileInteractor,
    ValidJson(payload): ValidJson<CreateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateProfileDTO {
        user_id: auth_user.user_id,
        headline: payload.headline,
        subheadline: payload.subheadline,
        story: payload.story.map(StoryField::into_paragraphs),
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(profile_response(profile))))
}

#[utoipa::path(
    put,
    path = "/about",
    tag = "About",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "The reconciled About aggregate", body = ProfileResponse),
        (
            status = 404,
            description = "No profile for this user",
            body = ErrorResponse,
            example = json!({ "error": "About profile not found for this user" })
        ),
        (
            status = 401,
            description = "Not authenticated",
            body = ErrorResponse,
            example = json!({ "error": "Invalid Credentials" })
        ),
        (
            status = 500,
            description = "Update failed and was rolled back",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn update_about(
    auth_user: AuthUser,
    interactor: UpdateProfileInteractor,
    ValidJson(payload): ValidJson<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = update_profile_dto(auth_user.user_id, payload);
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(profile_response(profile))))
}

pub async fn delete_about(auth_user: AuthUser, interactor: DeleteProfileInteractor) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    interactor.execute(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
