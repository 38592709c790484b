//! The portfolio document — the single aggregate holding all site content.
//!
//! Wire format is camelCase JSON, compatible with exported backup files.
//! Every struct deserializes with defaults so that any well-formed JSON
//! object is accepted on import. That permissiveness is intentional and
//! covered by tests; see `store::portfolio`.

use serde::{Deserialize, Serialize};

use crate::models::defaults::default_career_context;

/// Root aggregate. Owned by `PortfolioStore`, mutated only through the
/// edit session, persisted in full after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerContext {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub skills: Vec<Skill>,
    pub core_competencies: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub socials: SocialLinks,
    /// Knowledge field — injected verbatim into the chat system prompt.
    pub detailed_resume_context: String,
    /// Knowledge field — injected verbatim into the chat system prompt.
    pub project_deep_dive_context: String,
    /// Plaintext shared secret for the access gate. This is a UI
    /// convenience, not an authentication system — anyone who can read
    /// the stored document can read the password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
}

impl Default for CareerContext {
    fn default() -> Self {
        default_career_context()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// 0–100. Clamped at the API edge, not enforced by the model.
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    /// Free-text period label ("2021 - Present"). Never parsed or ordered.
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// External URL or an inline `data:` URL from an image upload.
    pub image_url: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinks {
    pub linked_in: String,
    pub github: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_json_round_trip_is_identity() {
        let doc = CareerContext::default();
        let json = serde_json::to_string(&doc).unwrap();
        let restored: CareerContext = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let doc = CareerContext::default();
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("detailedResumeContext").is_some());
        assert!(value.get("coreCompetencies").is_some());
        assert!(value["socials"].get("linkedIn").is_some());
    }

    #[test]
    fn test_any_json_object_deserializes_with_defaults() {
        // Wrong-shape JSON is accepted as-is; missing fields fall back to
        // the default document. Current behavior, documented on purpose.
        let doc: CareerContext = serde_json::from_str(r#"{"not":"valid"}"#).unwrap();
        assert_eq!(doc, CareerContext::default());
    }

    #[test]
    fn test_partial_document_keeps_given_fields() {
        let doc: CareerContext =
            serde_json::from_str(r#"{"name":"Ada Lovelace","skills":[]}"#).unwrap();
        assert_eq!(doc.name, "Ada Lovelace");
        assert!(doc.skills.is_empty());
    }
}
