//! Edit session mutations — typed operations over the document's named
//! collection fields and scalar fields.
//!
//! Collection items are keyed by identifier, including replacement:
//! positional (index-based) replacement was dropped because a stale
//! index after a concurrent removal would corrupt an unrelated item.

use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::portfolio::{CareerContext, Experience, Project, Skill, SocialLinks};

const ID_LEN: usize = 9;
const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short random base-36 identifier. Uniqueness is
/// best-effort: the collision probability is non-zero and never checked,
/// matching the original client-side generator.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect()
}

/// The document's named collection fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Skills,
    Experience,
    Projects,
}

/// A scalar-field patch, tagged by field name.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldPatch {
    Name(String),
    Title(String),
    Bio(String),
    ProfileImageUrl(Option<String>),
    DetailedResumeContext(String),
    ProjectDeepDiveContext(String),
    CoreCompetencies(Vec<String>),
    Socials(SocialLinks),
    AdminPassword(Option<String>),
}

pub fn apply_field_patch(doc: &mut CareerContext, patch: FieldPatch) {
    match patch {
        FieldPatch::Name(v) => doc.name = v,
        FieldPatch::Title(v) => doc.title = v,
        FieldPatch::Bio(v) => doc.bio = v,
        FieldPatch::ProfileImageUrl(v) => doc.profile_image_url = v,
        FieldPatch::DetailedResumeContext(v) => doc.detailed_resume_context = v,
        FieldPatch::ProjectDeepDiveContext(v) => doc.project_deep_dive_context = v,
        FieldPatch::CoreCompetencies(v) => doc.core_competencies = v,
        FieldPatch::Socials(v) => doc.socials = v,
        FieldPatch::AdminPassword(v) => doc.admin_password = v.filter(|p| !p.is_empty()),
    }
}

/// Appends a new item built from `template`, assigning it a fresh
/// identifier. Returns the generated id.
pub fn add_item(
    doc: &mut CareerContext,
    collection: Collection,
    template: Value,
) -> Result<String, AppError> {
    let id = generate_id();
    match collection {
        Collection::Skills => {
            let mut skill = parse_item::<Skill>(template)?;
            skill.level = skill.level.min(100);
            skill.id = id.clone();
            doc.skills.push(skill);
        }
        Collection::Experience => {
            let mut entry = parse_item::<Experience>(template)?;
            entry.id = id.clone();
            doc.experience.push(entry);
        }
        Collection::Projects => {
            let mut project = parse_item::<Project>(template)?;
            project.id = id.clone();
            doc.projects.push(project);
        }
    }
    Ok(id)
}

/// Removes the item with the given id. Removing an unknown id is a
/// no-op, matching filter semantics.
pub fn remove_item(doc: &mut CareerContext, collection: Collection, id: &str) {
    match collection {
        Collection::Skills => doc.skills.retain(|s| s.id != id),
        Collection::Experience => doc.experience.retain(|e| e.id != id),
        Collection::Projects => doc.projects.retain(|p| p.id != id),
    }
}

/// Replaces the item with the given id. The stored item keeps its
/// identifier even if the payload carries a different one.
pub fn update_item(
    doc: &mut CareerContext,
    collection: Collection,
    id: &str,
    payload: Value,
) -> Result<(), AppError> {
    match collection {
        Collection::Skills => {
            let mut skill = parse_item::<Skill>(payload)?;
            skill.level = skill.level.min(100);
            skill.id = id.to_string();
            let slot = doc
                .skills
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| not_found(collection, id))?;
            *slot = skill;
        }
        Collection::Experience => {
            let mut entry = parse_item::<Experience>(payload)?;
            entry.id = id.to_string();
            let slot = doc
                .experience
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| not_found(collection, id))?;
            *slot = entry;
        }
        Collection::Projects => {
            let mut project = parse_item::<Project>(payload)?;
            project.id = id.to_string();
            let slot = doc
                .projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| not_found(collection, id))?;
            *slot = project;
        }
    }
    Ok(())
}

fn parse_item<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Validation(format!("Invalid item: {e}")))
}

fn not_found(collection: Collection, id: &str) -> AppError {
    AppError::NotFound(format!("No item '{id}' in {collection:?}"))
}
