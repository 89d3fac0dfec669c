use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    CreateProfileDTO, EducationDTO, IntroViewDTO, ProfileDTO, SkillCategoryDTO, UpdateProfileDTO, ValueDTO,
    WorkExperienceDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::education::EducationWriter;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::gateway::skill::SkillWriter;
use crate::application::interface::gateway::value::ValueWriter;
use crate::application::interface::gateway::work_experience::WorkExperienceWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{
    join_paragraphs, split_paragraphs, Education, NewEducation, NewProfile, NewSkill, NewValue, NewWorkExperience,
    Profile, ProfileChildren, Value, WorkExperience,
};
use crate::domain::entities::user::User;

pub(crate) const PROFILE_NOT_FOUND: &str = "About profile not found for this user";

const DEFAULT_HEADLINE: &str = "Software Developer";
const DEFAULT_SUBHEADLINE: &str = "Building digital experiences";
const DEFAULT_STORY: &str = "Tell your story here.";

/// Create/update/delete decisions for one diffable child collection.
///
/// Entries whose id matches an existing row become updates; everything else
/// (no id, or an id the profile does not own) becomes a create. Existing rows
/// the input never mentioned are deleted: omission is how clients remove rows.
pub(crate) struct ReconcilePlan<T> {
    pub updates: Vec<(i64, T)>,
    pub creates: Vec<T>,
    pub deletes: Vec<i64>,
}

pub(crate) fn plan_reconcile<T>(existing_ids: &HashSet<i64>, entries: Vec<(Option<i64>, T)>) -> ReconcilePlan<T> {
    let mut updates = Vec::new();
    let mut creates = Vec::new();
    let mut touched = HashSet::new();
    for (id, payload) in entries {
        match id {
            Some(id) if existing_ids.contains(&id) => {
                touched.insert(id);
                updates.push((id, payload));
            }
            _ => creates.push(payload),
        }
    }
    let mut deletes: Vec<i64> = existing_ids.difference(&touched).copied().collect();
    deletes.sort_unstable();
    ReconcilePlan {
        updates,
        creates,
        deletes,
    }
}

/// Groups flattened skill rows back into categories, first-seen order.
fn group_skills(skills: &[crate::domain::entities::profile::Skill]) -> Vec<SkillCategoryDTO> {
    let mut categories: Vec<SkillCategoryDTO> = Vec::new();
    for skill in skills {
        match categories.iter_mut().find(|c| c.id == skill.category) {
            Some(category) => category.skills.push(skill.name.clone()),
            None => categories.push(SkillCategoryDTO {
                id: skill.category.clone(),
                title: skill.category_title.clone(),
                skills: vec![skill.name.clone()],
            }),
        }
    }
    categories
}

fn shape_profile(profile: &Profile, children: &ProfileChildren) -> ProfileDTO {
    ProfileDTO {
        intro: IntroViewDTO {
            headline: profile.headline.clone(),
            subheadline: profile.subheadline.clone(),
        },
        story: split_paragraphs(&profile.story),
        work_experience: children
            .work_experiences
            .iter()
            .map(|w| WorkExperienceDTO {
                id: w.id.value.to_string(),
                title: w.title.clone(),
                company: w.company.clone(),
                period: w.period.clone(),
                description: w.description.clone(),
            })
            .collect(),
        education: children
            .educations
            .iter()
            .map(|e| EducationDTO {
                id: e.id.value.to_string(),
                degree: e.degree.clone(),
                institution: e.institution.clone(),
                period: e.period.clone(),
                description: e.description.clone(),
            })
            .collect(),
        skill_categories: group_skills(&children.skills),
        values: children
            .values
            .iter()
            .map(|v| ValueDTO {
                id: v.id.value.to_string(),
                title: v.title.clone(),
                description: v.description.clone(),
            })
            .collect(),
    }
}

#[derive(Clone)]
pub struct GetProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PROFILE_NOT_FOUND.to_owned()))?;
        let children = self.profile_reader.load_children(&profile.id).await?;
        Ok(shape_profile(&profile, &children))
    }
}

#[derive(Clone)]
pub struct CreateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl CreateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: CreateProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        if self.profile_reader.find_by_user_id(&user_id).await?.is_some() {
            warn!("User {} already has an about profile", user_id.value);
            return Err(AppError::ProfileAlreadyExists);
        }

        let headline = dto
            .headline
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HEADLINE.to_owned());
        let subheadline = dto
            .subheadline
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBHEADLINE.to_owned());
        let story = dto
            .story
            .map(|paragraphs| join_paragraphs(&paragraphs))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STORY.to_owned());

        self.profile_writer
            .insert(NewProfile {
                user_id: user_id.clone(),
                headline,
                subheadline,
                story,
            })
            .await?;

        let profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PROFILE_NOT_FOUND.to_owned()))?;
        let children = self.profile_reader.load_children(&profile.id).await?;
        let response = shape_profile(&profile, &children);
        self.db_session.commit().await?;
        info!("About profile created for user {}", user_id.value);
        Ok(response)
    }
}

#[derive(Clone)]
pub struct DeleteProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl DeleteProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        let profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PROFILE_NOT_FOUND.to_owned()))?;
        self.profile_writer.delete(&profile.id).await?;
        self.db_session.commit().await?;
        info!("About profile deleted for user {}", user_id.value);
        Ok(())
    }
}

/// Synchronizes the persisted About aggregate with a client-submitted full
/// representation, inside the request's transaction.
///
/// Work experience, education and values are diffed by id; skills are always
/// purged and reinserted. The reloaded aggregate is shaped for the response
/// before the commit, so a failure anywhere leaves the previous state intact.
#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
    work_experience_writer: Arc<dyn WorkExperienceWriter>,
    education_writer: Arc<dyn EducationWriter>,
    skill_writer: Arc<dyn SkillWriter>,
    value_writer: Arc<dyn ValueWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
        work_experience_writer: Arc<dyn WorkExperienceWriter>,
        education_writer: Arc<dyn EducationWriter>,
        skill_writer: Arc<dyn SkillWriter>,
        value_writer: Arc<dyn ValueWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
            work_experience_writer,
            education_writer,
            skill_writer,
            value_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self.profile_reader.find_by_user_id(&user_id).await?.ok_or_else(|| {
            warn!("Reconcile attempt for user {} without an about profile", user_id.value);
            AppError::NotFound(PROFILE_NOT_FOUND.to_owned())
        })?;
        let children = self.profile_reader.load_children(&profile.id).await?;

        // Header fields: omitted fields keep their stored value.
        if let Some(intro) = dto.intro {
            if let Some(headline) = intro.headline {
                profile.headline = headline;
            }
            if let Some(subheadline) = intro.subheadline {
                profile.subheadline = subheadline;
            }
        }
        if let Some(story) = dto.story {
            profile.story = join_paragraphs(&story);
        }
        profile.updated_at = Utc::now();
        self.profile_writer.update(profile.clone()).await?;

        if let Some(entries) = dto.work_experience {
            self.reconcile_work_experiences(&profile, &children.work_experiences, entries).await?;
        }
        if let Some(entries) = dto.education {
            self.reconcile_educations(&profile, &children.educations, entries).await?;
        }
        if let Some(entries) = dto.values {
            self.reconcile_values(&profile, &children.values, entries).await?;
        }
        if let Some(categories) = dto.skill_categories {
            self.replace_skills(&profile, categories).await?;
        }

        let reloaded = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PROFILE_NOT_FOUND.to_owned()))?;
        let reloaded_children = self.profile_reader.load_children(&reloaded.id).await?;
        let response = shape_profile(&reloaded, &reloaded_children);
        self.db_session.commit().await?;
        info!("About profile reconciled for user {}", user_id.value);
        Ok(response)
    }

    async fn reconcile_work_experiences(
        &self,
        profile: &Profile,
        current: &[WorkExperience],
        entries: Vec<crate::application::dto::profile::WorkExperienceEntryDTO>,
    ) -> AppResult<()> {
        let existing: HashMap<i64, &WorkExperience> = current.iter().map(|w| (w.id.value, w)).collect();
        let existing_ids: HashSet<i64> = existing.keys().copied().collect();
        let plan = plan_reconcile(&existing_ids, entries.into_iter().map(|e| (e.id, e)).collect());

        for (id, entry) in plan.updates {
            let row = existing[&id];
            self.work_experience_writer
                .update(WorkExperience {
                    id: Id::new(id),
                    profile_id: profile.id.clone(),
                    title: entry.title,
                    company: entry.company,
                    period: entry.period,
                    description: entry.description,
                    created_at: row.created_at,
                    updated_at: Utc::now(),
                })
                .await?;
        }
        for entry in plan.creates {
            self.work_experience_writer
                .insert(NewWorkExperience {
                    profile_id: profile.id.clone(),
                    title: entry.title,
                    company: entry.company,
                    period: entry.period,
                    description: entry.description,
                })
                .await?;
        }
        for id in plan.deletes {
            self.work_experience_writer.delete(&Id::new(id)).await?;
        }
        Ok(())
    }

    async fn reconcile_educations(
        &self,
        profile: &Profile,
        current: &[Education],
        entries: Vec<crate::application::dto::profile::EducationEntryDTO>,
    ) -> AppResult<()> {
        let existing: HashMap<i64, &Education> = current.iter().map(|e| (e.id.value, e)).collect();
        let existing_ids: HashSet<i64> = existing.keys().copied().collect();
        let plan = plan_reconcile(&existing_ids, entries.into_iter().map(|e| (e.id, e)).collect());

        for (id, entry) in plan.updates {
            let row = existing[&id];
            self.education_writer
                .update(Education {
                    id: Id::new(id),
                    profile_id: profile.id.clone(),
                    degree: entry.degree,
                    institution: entry.institution,
                    period: entry.period,
                    description: entry.description,
                    created_at: row.created_at,
                    updated_at: Utc::now(),
                })
                .await?;
        }
        for entry in plan.creates {
            self.education_writer
                .insert(NewEducation {
                    profile_id: profile.id.clone(),
                    degree: entry.degree,
                    institution: entry.institution,
                    period: entry.period,
                    description: entry.description,
                })
                .await?;
        }
        for id in plan.deletes {
            self.education_writer.delete(&Id::new(id)).await?;
        }
        Ok(())
    }

    async fn reconcile_values(
        &self,
        profile: &Profile,
        current: &[Value],
        entries: Vec<crate::application::dto::profile::ValueEntryDTO>,
    ) -> AppResult<()> {
        let existing: HashMap<i64, &Value> = current.iter().map(|v| (v.id.value, v)).collect();
        let existing_ids: HashSet<i64> = existing.keys().copied().collect();
        let plan = plan_reconcile(&existing_ids, entries.into_iter().map(|e| (e.id, e)).collect());

        for (id, entry) in plan.updates {
            let row = existing[&id];
            self.value_writer
                .update(Value {
                    id: Id::new(id),
                    profile_id: profile.id.clone(),
                    title: entry.title,
                    description: entry.description,
                    created_at: row.created_at,
                    updated_at: Utc::now(),
                })
                .await?;
        }
        for entry in plan.creates {
            self.value_writer
                .insert(NewValue {
                    profile_id: profile.id.clone(),
                    title: entry.title,
                    description: entry.description,
                })
                .await?;
        }
        for id in plan.deletes {
            self.value_writer.delete(&Id::new(id)).await?;
        }
        Ok(())
    }

    async fn replace_skills(
        &self,
        profile: &Profile,
        categories: Vec<crate::application::dto::profile::SkillCategoryEntryDTO>,
    ) -> AppResult<()> {
        self.skill_writer.delete_by_profile(&profile.id).await?;
        for category in categories {
            for name in category.skills {
                self.skill_writer
                    .insert(NewSkill {
                        profile_id: profile.id.clone(),
                        category: category.id.clone(),
                        category_title: category.title.clone(),
                        name,
                    })
                    .await?;
            }
        }
        Ok(())
    }
}
