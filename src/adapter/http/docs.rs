use axum::{response::Html, Json};
use utoipa::{
    openapi::{
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        OpenApi as OpenApiDoc,
    },
    Modify, OpenApi,
};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::profile,
    schema::profile::{
        CreateProfileRequest, EducationEntryRequest, EducationResponse, IntroRequest, IntroResponse, ProfileResponse,
        SkillCategoryRequest, SkillCategoryResponse, UpdateProfileRequest, ValueEntryRequest, ValueResponse,
        WorkExperienceEntryRequest, WorkExperienceResponse,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "identityHeader",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-user-id"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(profile::get_about, profile::update_about),
    components(
        schemas(
            ErrorResponse,
            CreateProfileRequest,
            UpdateProfileRequest,
            IntroRequest,
            WorkExperienceEntryRequest,
            EducationEntryRequest,
            SkillCategoryRequest,
            ValueEntryRequest,
            ProfileResponse,
            IntroResponse,
            WorkExperienceResponse,
            EducationResponse,
            SkillCategoryResponse,
            ValueResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
