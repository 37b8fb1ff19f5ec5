//! The normalized CV document consumed by the rendering core.
//!
//! Documents originate in the browser editor and arrive as camelCase JSON,
//! so every struct here carries `rename_all = "camelCase"`. The renderer
//! treats a document as an immutable snapshot: sequences keep the caller's
//! order and are never re-sorted, filtered, or truncated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Last template the editor had selected. Advisory only: render calls
    /// always name their template explicitly and never read this field.
    #[serde(default)]
    pub template_id: Option<String>,
}

/// Contact block. `full_name`, `email`, and `phone` are the validity gate;
/// everything else may be empty or absent. Missing fields deserialize to
/// empty strings so an incomplete document reaches the gate (and gets the
/// placeholder) instead of failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    /// Image reference managed by the upload collaborator; opaque here.
    pub avatar: Option<String>,
}

// Item structs use container-level `default` so a missing sub-field
// degrades to an empty value on that item alone rather than rejecting the
// whole document.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// Either a date string or the literal token `Present`.
    pub end_date: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

/// Proficiency scale used by the editor. Unrecognized wire values fall back
/// to `Unrated`, which the formatting helpers map to the minimal visual
/// weight instead of rejecting the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[default]
    #[serde(other)]
    Unrated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Spoken language. `level` is free text ("Native", "Fluent", ...), not the
/// skill proficiency enum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
