#![allow(dead_code)]

//! Renderer output types.
//!
//! A render produces a tree of layout nodes independent of the final output
//! format. The export/print collaborator walks the tree to produce paginated
//! output; the gallery UI serializes it straight to JSON.

use serde::{Deserialize, Serialize};

/// Stable identifier for a CV section, shared by every skin. The export
/// layer and tests key on this rather than on display titles, which vary
/// per skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Languages,
    Certifications,
}

/// One node of the rendered document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Top-level layout region ("header", "main", "sidebar").
    Region { name: String, children: Vec<Node> },
    /// A CV section. Skins choose the title; the key is fixed.
    Section {
        key: SectionKey,
        title: String,
        children: Vec<Node>,
    },
    Heading { level: u8, text: String },
    Text { text: String },
    /// Labeled contact line ("Email: a@b.com").
    Field { label: String, value: String },
    Bullets { items: Vec<String> },
    /// Technology/keyword chips.
    Tags { items: Vec<String> },
    /// A dated item (experience, education, project): title line, subtitle
    /// line, formatted date range, nested detail nodes.
    Entry {
        title: String,
        subtitle: String,
        meta: String,
        children: Vec<Node>,
    },
    /// Proportional proficiency indicator driven by the shared level maps.
    SkillBar {
        name: String,
        percent: u8,
        color: String,
    },
    /// Avatar or other image reference; resolution is the upload
    /// collaborator's concern.
    Image { src: String },
    Divider,
}

impl Node {
    /// Depth-first visit of this node and all descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        visit(self);
        match self {
            Node::Region { children, .. }
            | Node::Section { children, .. }
            | Node::Entry { children, .. } => {
                for child in children {
                    child.walk(visit);
                }
            }
            _ => {}
        }
    }
}

/// Print-affecting metadata attached to every rendered document regardless
/// of skin. The export layer applies these when paginating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintStyles {
    pub page_size: String,
    pub margin: String,
    /// Forces background colors/skill bars to survive print rendering.
    pub color_adjust: String,
}

impl Default for PrintStyles {
    fn default() -> Self {
        PrintStyles {
            page_size: "A4".to_string(),
            margin: "0".to_string(),
            color_adjust: "exact".to_string(),
        }
    }
}

/// The full result of a render call: which skin produced it, the node tree,
/// and the shared print fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub template_id: String,
    pub body: Vec<Node>,
    pub print: PrintStyles,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_visits_nested_children_depth_first() {
        let tree = Node::Region {
            name: "main".to_string(),
            children: vec![Node::Section {
                key: SectionKey::Experience,
                title: "Experience".to_string(),
                children: vec![Node::Entry {
                    title: "Engineer".to_string(),
                    subtitle: "Acme".to_string(),
                    meta: "01/2021 - Present".to_string(),
                    children: vec![Node::Bullets {
                        items: vec!["Shipped".to_string()],
                    }],
                }],
            }],
        };

        let mut kinds = Vec::new();
        tree.walk(&mut |node| {
            kinds.push(match node {
                Node::Region { .. } => "region",
                Node::Section { .. } => "section",
                Node::Entry { .. } => "entry",
                Node::Bullets { .. } => "bullets",
                _ => "other",
            });
        });
        assert_eq!(kinds, vec!["region", "section", "entry", "bullets"]);
    }

    #[test]
    fn test_node_serializes_with_kind_tag() {
        let node = Node::Heading {
            level: 1,
            text: "Nguyễn Văn An".to_string(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "heading");
        assert_eq!(json["level"], 1);
    }
}
