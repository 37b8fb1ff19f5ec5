//! Creative skin. Accent-led banner header with avatar, skills and projects
//! ahead of the employment history.

use crate::models::cv::CvDocument;
use crate::render::tree::{Node, SectionKey};
use crate::templates::descriptor::{ColorScheme, FontSet, TemplateDescriptor};
use crate::templates::CvTemplate;

use super::{
    certification_entry, contact_fields, education_entry, experience_entry, language_line,
    project_entry, push_section, push_summary, region, skill_bar,
};

pub struct Creative {
    descriptor: TemplateDescriptor,
}

impl Creative {
    pub fn new() -> Self {
        Creative {
            descriptor: TemplateDescriptor {
                id: "creative".to_string(),
                name: "Creative".to_string(),
                description: "Colorful banner header that puts skills and projects first"
                    .to_string(),
                category: "Creative".to_string(),
                colors: ColorScheme {
                    primary: "#7c3aed".to_string(),
                    secondary: "#a78bfa".to_string(),
                    accent: "#f472b6".to_string(),
                },
                fonts: FontSet {
                    heading: "Montserrat".to_string(),
                    body: "Lato".to_string(),
                },
                layout: "single-column".to_string(),
            },
        }
    }
}

impl Default for Creative {
    fn default() -> Self {
        Self::new()
    }
}

impl CvTemplate for Creative {
    fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    fn render_body(&self, doc: &CvDocument) -> Vec<Node> {
        let info = &doc.personal_info;

        let mut banner = Vec::new();
        if let Some(avatar) = &info.avatar {
            if !avatar.is_empty() {
                banner.push(Node::Image {
                    src: avatar.clone(),
                });
            }
        }
        banner.push(Node::Heading {
            level: 1,
            text: info.full_name.clone(),
        });
        banner.push(Node::Text {
            text: info.title.clone(),
        });
        banner.extend(contact_fields(info));

        let mut main = Vec::new();
        push_summary(&mut main, doc, "About Me");
        push_section(&mut main, &doc.skills, SectionKey::Skills, "What I Do", skill_bar);
        push_section(
            &mut main,
            &doc.projects,
            SectionKey::Projects,
            "Things I Built",
            project_entry,
        );
        push_section(
            &mut main,
            &doc.experiences,
            SectionKey::Experience,
            "Where I Worked",
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
            &doc.languages,
            SectionKey::Languages,
            "Languages",
            language_line,
        );
        push_section(
            &mut main,
            &doc.certifications,
            SectionKey::Certifications,
            "Certifications",
            certification_entry,
        );

        vec![region("banner", banner), region("main", main)]
    }
}
