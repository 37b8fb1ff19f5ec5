//! Static metadata describing one visual skin.

use serde::{Deserialize, Serialize};

/// Immutable descriptor for a skin, constructed once at registry
/// initialization. `id` is the unique lookup key; `category` is free-text
/// grouping used by the gallery's filter and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub colors: ColorScheme,
    pub fonts: FontSet,
    /// Informational layout tag ("single-column" | "two-column").
    pub layout: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub heading: String,
    pub body: String,
}

/// The stable shape the gallery/selector UI consumes. Collaborators render
/// a catalog from this without knowing internal layout details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

impl From<&TemplateDescriptor> for TemplateSummary {
    fn from(desc: &TemplateDescriptor) -> Self {
        TemplateSummary {
            id: desc.id.clone(),
            name: desc.name.clone(),
            description: desc.description.clone(),
            category: desc.category.clone(),
        }
    }
}
