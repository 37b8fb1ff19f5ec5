//! Professional skin. Wide main column for the career narrative with a
//! compact right rail for skills, languages, and certifications.

use crate::models::cv::CvDocument;
use crate::render::tree::{Node, SectionKey};
use crate::templates::descriptor::{ColorScheme, FontSet, TemplateDescriptor};
use crate::templates::CvTemplate;

use super::{
    certification_entry, contact_fields, education_entry, experience_entry, language_line,
    project_entry, push_section, push_summary, region, skill_bar,
};

pub struct Professional {
    descriptor: TemplateDescriptor,
}

impl Professional {
    pub fn new() -> Self {
        Professional {
            descriptor: TemplateDescriptor {
                id: "professional".to_string(),
                name: "Professional".to_string(),
                description: "Executive layout with a wide narrative column and compact rail"
                    .to_string(),
                category: "Professional".to_string(),
                colors: ColorScheme {
                    primary: "#14532d".to_string(),
                    secondary: "#374151".to_string(),
                    accent: "#16a34a".to_string(),
                },
                fonts: FontSet {
                    heading: "Source Serif Pro".to_string(),
                    body: "Source Sans Pro".to_string(),
                },
                layout: "two-column".to_string(),
            },
        }
    }
}

impl Default for Professional {
    fn default() -> Self {
        Self::new()
    }
}

impl CvTemplate for Professional {
    fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    fn render_body(&self, doc: &CvDocument) -> Vec<Node> {
        let info = &doc.personal_info;

        let mut header = vec![
            Node::Heading {
                level: 1,
                text: info.full_name.clone(),
            },
            Node::Text {
                text: info.title.clone(),
            },
        ];
        header.extend(contact_fields(info));

        let mut main = Vec::new();
        push_summary(&mut main, doc, "Executive Summary");
        push_section(
            &mut main,
            &doc.experiences,
            SectionKey::Experience,
            "Experience",
            experience_entry,
        );
        push_section(
            &mut main,
            &doc.projects,
            SectionKey::Projects,
            "Key Projects",
            project_entry,
        );
        push_section(
            &mut main,
            &doc.education,
            SectionKey::Education,
            "Education",
            education_entry,
        );

        let mut rail = Vec::new();
        push_section(&mut rail, &doc.skills, SectionKey::Skills, "Expertise", skill_bar);
        push_section(
            &mut rail,
            &doc.languages,
            SectionKey::Languages,
            "Languages",
            language_line,
        );
        push_section(
            &mut rail,
            &doc.certifications,
            SectionKey::Certifications,
            "Certifications",
            certification_entry,
        );

        vec![
            region("header", header),
            region("main", main),
            region("rail", rail),
        ]
    }
}
