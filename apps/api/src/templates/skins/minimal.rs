//! Minimal skin. Single column, generous whitespace, no decoration. The
//! exemplar implementation and the designated default.

use crate::models::cv::CvDocument;
use crate::render::tree::{Node, SectionKey};
use crate::templates::descriptor::{ColorScheme, FontSet, TemplateDescriptor};
use crate::templates::CvTemplate;

use super::{
    certification_entry, contact_fields, education_entry, experience_entry, language_line,
    project_entry, push_section, push_summary, region, skill_bar,
};

pub struct Minimal {
    descriptor: TemplateDescriptor,
}

impl Minimal {
    pub fn new() -> Self {
        Minimal {
            descriptor: TemplateDescriptor {
                id: "minimal".to_string(),
                name: "Minimal".to_string(),
                description: "Clean single-column layout with plenty of whitespace".to_string(),
                category: "Simple".to_string(),
                colors: ColorScheme {
                    primary: "#1f2937".to_string(),
                    secondary: "#6b7280".to_string(),
                    accent: "#111827".to_string(),
                },
                fonts: FontSet {
                    heading: "Inter".to_string(),
                    body: "Inter".to_string(),
                },
                layout: "single-column".to_string(),
            },
        }
    }
}

impl Default for Minimal {
    fn default() -> Self {
        Self::new()
    }
}

impl CvTemplate for Minimal {
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
        push_summary(&mut main, doc, "Summary");
        push_section(
            &mut main,
            &doc.experiences,
            SectionKey::Experience,
            "Experience",
            experience_entry,
        );
        push_section(
            &mut main,
            &doc.education,
            SectionKey::Education,
            "Education",
            education_entry,
        );
        push_section(&mut main, &doc.skills, SectionKey::Skills, "Skills", skill_bar);
        push_section(
            &mut main,
            &doc.projects,
            SectionKey::Projects,
            "Projects",
            project_entry,
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

        vec![region("header", header), region("main", main)]
    }
}
