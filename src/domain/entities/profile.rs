use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// Separator between stored story paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// The About page root aggregate. One per user.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub headline: String,
    pub subheadline: String,
    pub story: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: Id<User>,
    pub headline: String,
    pub subheadline: String,
    pub story: String,
}

#[derive(Debug, Clone)]
pub struct WorkExperience {
    pub id: Id<WorkExperience>,
    pub profile_id: Id<Profile>,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWorkExperience {
    pub profile_id: Id<Profile>,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Education {
    pub id: Id<Education>,
    pub profile_id: Id<Profile>,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEducation {
    pub profile_id: Id<Profile>,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

/// Flattened skill row. Category key and display title are denormalized onto
/// every row; rows are grouped by category when the aggregate is read.
#[derive(Debug, Clone)]
pub struct Skill {
    pub id: Id<Skill>,
    pub profile_id: Id<Profile>,
    pub category: String,
    pub category_title: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub profile_id: Id<Profile>,
    pub category: String,
    pub category_title: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Value {
    pub id: Id<Value>,
    pub profile_id: Id<Profile>,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewValue {
    pub profile_id: Id<Profile>,
    pub title: String,
    pub description: String,
}

/// The four owned collections of a profile, loaded in one transaction.
#[derive(Debug, Clone, Default)]
pub struct ProfileChildren {
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub skills: Vec<Skill>,
    pub values: Vec<Value>,
}

pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join(PARAGRAPH_SEPARATOR)
}

pub fn split_paragraphs(story: &str) -> Vec<String> {
    story.split(PARAGRAPH_SEPARATOR).map(str::to_owned).collect()
}
