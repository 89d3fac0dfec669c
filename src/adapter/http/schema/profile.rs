use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::adapter::http::schema::{EntryId, StoryField};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "headline": "Software Developer",
    "subheadline": "Building digital experiences",
    "story": ["First paragraph.", "Second paragraph."]
}))]
pub struct CreateProfileRequest {
    #[schema(example = "Software Developer")]
    pub headline: Option<String>,
    #[schema(example = "Building digital experiences")]
    pub subheadline: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub story: Option<StoryField>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "intro": { "headline": "Software Developer", "subheadline": "Building digital experiences" },
    "story": ["First paragraph.", "Second paragraph."],
    "workExperience": [
        { "id": "1", "title": "Engineer", "company": "Acme", "period": "2020 - 2022", "description": "Built systems." },
        { "title": "Senior Engineer", "company": "Acme", "period": "2022 - now", "description": "Leads systems." }
    ],
    "education": [],
    "skillCategories": [{ "id": "languages", "title": "Languages", "skills": ["Go", "Rust"] }],
    "values": [{ "title": "Curiosity", "description": "Keep learning." }]
}))]
pub struct UpdateProfileRequest {
    pub intro: Option<IntroRequest>,
    #[schema(value_type = Option<Vec<String>>)]
    pub story: Option<StoryField>,
    #[validate(nested)]
    pub work_experience: Option<Vec<WorkExperienceEntryRequest>>,
    #[validate(nested)]
    pub education: Option<Vec<EducationEntryRequest>>,
    #[validate(nested)]
    pub skill_categories: Option<Vec<SkillCategoryRequest>>,
    #[validate(nested)]
    pub values: Option<Vec<ValueEntryRequest>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct IntroRequest {
    #[schema(example = "Software Developer")]
    pub headline: Option<String>,
    #[schema(example = "Building digital experiences")]
    pub subheadline: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkExperienceEntryRequest {
    #[schema(value_type = Option<String>)]
    pub id: Option<EntryId>,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EducationEntryRequest {
    #[schema(value_type = Option<String>)]
    pub id: Option<EntryId>,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SkillCategoryRequest {
    #[validate(length(min = 1, message = "Category id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Category title must not be empty"))]
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ValueEntryRequest {
    #[schema(value_type = Option<String>)]
    pub id: Option<EntryId>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "intro": { "headline": "Software Developer", "subheadline": "Building digital experiences" },
    "story": ["First paragraph.", "Second paragraph."],
    "workExperience": [
        { "id": "1", "title": "Engineer", "company": "Acme", "period": "2020 - 2022", "description": "Built systems." }
    ],
    "education": [],
    "skillCategories": [{ "id": "languages", "title": "Languages", "skills": ["Go", "Rust"] }],
    "values": []
}))]
pub struct ProfileResponse {
    pub intro: IntroResponse,
    pub story: Vec<String>,
    pub work_experience: Vec<WorkExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub skill_categories: Vec<SkillCategoryResponse>,
    pub values: Vec<ValueResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IntroResponse {
    pub headline: String,
    pub subheadline: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkExperienceResponse {
    #[schema(example = "1")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    #[schema(example = "1")]
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillCategoryResponse {
    #[schema(example = "languages")]
    pub id: String,
    #[schema(example = "Languages")]
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValueResponse {
    #[schema(example = "1")]
    pub id: String,
    pub title: String,
    pub description: String,
}
