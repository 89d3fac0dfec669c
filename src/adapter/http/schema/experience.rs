use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkExperienceRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company must not be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "Period must not be empty"))]
    pub period: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWorkExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetWorkExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}
