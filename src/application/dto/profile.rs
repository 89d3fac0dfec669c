#[derive(Debug, Clone)]
pub struct CreateProfileDTO {
    pub user_id: String,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub story: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileDTO {
    pub user_id: String,
    pub intro: Option<IntroDTO>,
    pub story: Option<Vec<String>>,
    pub work_experience: Option<Vec<WorkExperienceEntryDTO>>,
    pub education: Option<Vec<EducationEntryDTO>>,
    pub skill_categories: Option<Vec<SkillCategoryEntryDTO>>,
    pub values: Option<Vec<ValueEntryDTO>>,
}

#[derive(Debug, Clone)]
pub struct IntroDTO {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
}

/// An entry whose id matched no existing row (or was absent) is created;
/// matched entries are updated in place.
#[derive(Debug, Clone)]
pub struct WorkExperienceEntryDTO {
    pub id: Option<i64>,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct EducationEntryDTO {
    pub id: Option<i64>,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct SkillCategoryEntryDTO {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ValueEntryDTO {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
}

/// Response-shaped aggregate: intro header, story split into paragraphs,
/// skills grouped by category, stringified ids everywhere.
#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub intro: IntroViewDTO,
    pub story: Vec<String>,
    pub work_experience: Vec<WorkExperienceDTO>,
    pub education: Vec<EducationDTO>,
    pub skill_categories: Vec<SkillCategoryDTO>,
    pub values: Vec<ValueDTO>,
}

#[derive(Debug, Clone)]
pub struct IntroViewDTO {
    pub headline: String,
    pub subheadline: String,
}

#[derive(Debug, Clone)]
pub struct WorkExperienceDTO {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct EducationDTO {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategoryDTO {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ValueDTO {
    pub id: String,
    pub title: String,
    pub description: String,
}
