use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEducationRequest {
    #[validate(length(min = 1, message = "Degree must not be empty"))]
    pub degree: String,
    #[validate(length(min = 1, message = "Institution must not be empty"))]
    pub institution: String,
    #[validate(length(min = 1, message = "Period must not be empty"))]
    pub period: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEducationRequest {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetEducationResponse {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}
