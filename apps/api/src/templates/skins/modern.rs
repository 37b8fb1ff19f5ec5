//! Modern skin. Two-column layout: contact, skills, languages, and
//! certifications in a tinted sidebar; the career narrative in the main
//! column.

use crate::models::cv::CvDocument;
use crate::render::tree::{Node, SectionKey};
use crate::templates::descriptor::{ColorScheme, FontSet, TemplateDescriptor};
use crate::templates::CvTemplate;

use super::{
    certification_entry, contact_fields, education_entry, experience_entry, language_line,
    project_entry, push_section, push_summary, region, skill_bar,
};

pub struct Modern {
    descriptor: TemplateDescriptor,
}

impl Modern {
    pub fn new() -> Self {
        Modern {
            descriptor: TemplateDescriptor {
                id: "modern".to_string(),
                name: "Modern".to_string(),
                description: "Two-column layout with a tinted sidebar and bold headings"
                    .to_string(),
                category: "Professional".to_string(),
                colors: ColorScheme {
                    primary: "#0f172a".to_string(),
                    secondary: "#475569".to_string(),
                    accent: "#2563eb".to_string(),
                },
                fonts: FontSet {
                    heading: "Poppins".to_string(),
                    body: "Inter".to_string(),
                },
                layout: "two-column".to_string(),
            },
        }
    }
}

impl Default for Modern {
    fn default() -> Self {
        Self::new()
    }
}

impl CvTemplate for Modern {
    fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    fn render_body(&self, doc: &CvDocument) -> Vec<Node> {
        let info = &doc.personal_info;

        let header = vec![
            Node::Heading {
                level: 1,
                text: info.full_name.clone(),
            },
            Node::Text {
                text: info.title.clone(),
            },
        ];

        let mut sidebar = Vec::new();
        if let Some(avatar) = &info.avatar {
            if !avatar.is_empty() {
                sidebar.push(Node::Image {
                    src: avatar.clone(),
                });
            }
        }
        sidebar.extend(contact_fields(info));
        push_section(&mut sidebar, &doc.skills, SectionKey::Skills, "Skills", skill_bar);
        push_section(
            &mut sidebar,
            &doc.languages,
            SectionKey::Languages,
            "Languages",
            language_line,
        );
        push_section(
            &mut sidebar,
            &doc.certifications,
            SectionKey::Certifications,
            "Certifications",
            certification_entry,
        );

        let mut main = Vec::new();
        push_summary(&mut main, doc, "Profile");
        push_section(
            &mut main,
            &doc.experiences,
            SectionKey::Experience,
            "Work Experience",
            experience_entry,
        );
        push_section(
            &mut main,
            &doc.education,
            SectionKey::Education,
            "Education",
            education_entry,
        );
        push_section(
            &mut main,
            &doc.projects,
            SectionKey::Projects,
            "Projects",
            project_entry,
        );

        vec![
            region("header", header),
            region("sidebar", sidebar),
            region("main", main),
        ]
    }
}
