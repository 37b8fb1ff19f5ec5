//! Classic skin. Traditional serif résumé: centered header, rule between
//! sections, skills as a plain keyword line rather than bars.

use crate::models::cv::CvDocument;
use crate::render::tree::{Node, SectionKey};
use crate::templates::descriptor::{ColorScheme, FontSet, TemplateDescriptor};
use crate::templates::CvTemplate;

use super::{
    certification_entry, contact_fields, education_entry, experience_entry, language_line,
    project_entry, push_section, push_summary, region, section,
};

pub struct Classic {
    descriptor: TemplateDescriptor,
}

impl Classic {
    pub fn new() -> Self {
        Classic {
            descriptor: TemplateDescriptor {
                id: "classic".to_string(),
                name: "Classic".to_string(),
                description: "Traditional serif layout suited to conservative industries"
                    .to_string(),
                category: "Traditional".to_string(),
                colors: ColorScheme {
                    primary: "#111111".to_string(),
                    secondary: "#444444".to_string(),
                    accent: "#7c2d12".to_string(),
                },
                fonts: FontSet {
                    heading: "EB Garamond".to_string(),
                    body: "EB Garamond".to_string(),
                },
                layout: "single-column".to_string(),
            },
        }
    }
}

impl Default for Classic {
    fn default() -> Self {
        Self::new()
    }
}

impl CvTemplate for Classic {
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
        header.push(Node::Divider);

        let mut main = Vec::new();
        push_summary(&mut main, doc, "Profile");
        push_section(
            &mut main,
            &doc.experiences,
            SectionKey::Experience,
            "Professional Experience",
            experience_entry,
        );
        push_section(
            &mut main,
            &doc.education,
            SectionKey::Education,
            "Education",
            education_entry,
        );
        // Bars read as gimmicky in a serif layout; a keyword line carries
        // the same items in the same order.
        if !doc.skills.is_empty() {
            main.push(section(
                SectionKey::Skills,
                "Core Competencies",
                vec![Node::Tags {
                    items: doc.skills.iter().map(|s| s.name.clone()).collect(),
                }],
            ));
        }
        push_section(
            &mut main,
            &doc.projects,
            SectionKey::Projects,
            "Selected Projects",
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
