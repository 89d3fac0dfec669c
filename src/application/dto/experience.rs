#[derive(Debug, Clone)]
pub struct CreateWorkExperienceDTO {
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct UpdateWorkExperienceDTO {
    pub user_id: String,
    pub work_experience_id: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteWorkExperienceDTO {
    pub user_id: String,
    pub work_experience_id: String,
}
