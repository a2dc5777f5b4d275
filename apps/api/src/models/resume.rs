//! Resume document model.
//!
//! The document body is stored as one JSONB column and serialized with
//! camelCase field names, so the persisted shape matches what the editing
//! frontend reads and writes. Partial saves replace whole top-level
//! subtrees (last write wins).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::sections::SectionSettings;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Deserializes the JSONB body into the typed document. Missing fields
    /// degrade to defaults; a malformed body degrades to an empty document
    /// rather than failing the request.
    pub fn document(&self) -> ResumeDocument {
        match serde_json::from_value(self.document.clone()) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(resume_id = %self.id, "malformed resume document: {e}");
                ResumeDocument::default()
            }
        }
    }
}

/// Listing row for a user's dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: Uuid,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    /// Display name of the resume itself, set at creation.
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub summary: String,
    pub job_title: String,
    pub phone: String,
    pub address: String,
    pub competitive_programming_platform: String,
    pub competitive_programming_link: String,
    pub other_profile_platform: String,
    pub other_link: String,
    pub section_settings: SectionSettings,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    #[serde(default = "default_template_key")]
    pub selected_template: String,
}

fn default_theme_color() -> String {
    "#000000".to_string()
}

fn default_template_key() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Hybrid,
    Remote,
    #[default]
    Onsite,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company_name: String,
    pub city: String,
    pub state: String,
    pub work_mode: WorkMode,
    pub start_date: String,
    pub end_date: String,
    /// Free-form string in the persisted shape, not a boolean.
    pub currently_working: String,
    /// Trusted markup (rich-text editor output).
    pub work_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub university_name: String,
    pub degree: String,
    pub major: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    pub name: String,
    /// 0–100 proficiency bar value.
    pub rating: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub project_name: String,
    pub tech_stack: String,
    pub start_date: String,
    pub end_date: String,
    /// Trusted markup (rich-text editor output).
    pub project_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_gets_wire_defaults() {
        let parsed: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.theme_color, "#000000");
        assert_eq!(parsed.selected_template, "default");
        assert!(parsed.experience.is_empty());
        assert!(parsed.section_settings.custom_sections.is_empty());
    }

    #[test]
    fn test_document_round_trip_camel_case() {
        let parsed: ResumeDocument = serde_json::from_str(
            r#"{
                "title": "My Resume",
                "firstName": "Ada",
                "jobTitle": "Engineer",
                "experience": [{"companyName": "Acme", "workMode": "remote", "workSummary": "<ul><li>Built things</li></ul>"}],
                "skills": [{"name": "Rust", "rating": 90}],
                "sectionSettings": {"skills": {"title": "Technical Skills"}}
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.first_name, "Ada");
        assert_eq!(parsed.experience[0].company_name, "Acme");
        assert_eq!(parsed.experience[0].work_mode, WorkMode::Remote);
        assert_eq!(parsed.skills[0].rating, 90);
        assert_eq!(
            parsed.section_settings.skills.title.as_deref(),
            Some("Technical Skills")
        );

        let json = serde_json::to_value(&parsed).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json["experience"][0].get("companyName").is_some());
    }
}
