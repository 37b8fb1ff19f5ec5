//! Built-in skins.
//!
//! Each skin is an independent [`CvTemplate`] implementation; this module
//! holds the explicit skin list and the item-level builders every skin
//! shares. Skins differ in arrangement, region split, and section titles
//! only. The builders own the data semantics: one formatted date range per
//! dated item, items in input order, nothing filtered or re-sorted.
//!
//! Adding a skin: implement `CvTemplate` in a new file and append it to
//! [`builtins`]. The registry, dispatcher, and routes never change per skin.

pub mod classic;
pub mod creative;
pub mod minimal;
pub mod modern;
pub mod professional;

use std::sync::Arc;

use crate::models::cv::{
    Certification, CvDocument, Education, Experience, LanguageEntry, PersonalInfo, Project, Skill,
};
use crate::render::format::{
    format_date, format_date_range, skill_level_color, skill_level_width,
};
use crate::render::tree::{Node, SectionKey};

use super::CvTemplate;

/// Every built-in skin, in gallery order. The default must come first.
pub fn builtins() -> Vec<Arc<dyn CvTemplate>> {
    vec![
        Arc::new(minimal::Minimal::new()),
        Arc::new(modern::Modern::new()),
        Arc::new(classic::Classic::new()),
        Arc::new(creative::Creative::new()),
        Arc::new(professional::Professional::new()),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Shared item builders
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn section(key: SectionKey, title: &str, children: Vec<Node>) -> Node {
    Node::Section {
        key,
        title: title.to_string(),
        children,
    }
}

pub(crate) fn region(name: &str, children: Vec<Node>) -> Node {
    Node::Region {
        name: name.to_string(),
        children,
    }
}

/// Contact lines for the header or sidebar. Required fields always appear;
/// optional links appear only when present and non-empty.
pub(crate) fn contact_fields(info: &PersonalInfo) -> Vec<Node> {
    let mut fields = vec![
        field("Email", &info.email),
        field("Phone", &info.phone),
    ];
    if !info.address.is_empty() {
        fields.push(field("Address", &info.address));
    }
    for (label, value) in [
        ("Website", &info.website),
        ("LinkedIn", &info.linkedin),
        ("GitHub", &info.github),
    ] {
        if let Some(value) = value {
            if !value.is_empty() {
                fields.push(field(label, value));
            }
        }
    }
    fields
}

fn field(label: &str, value: &str) -> Node {
    Node::Field {
        label: label.to_string(),
        value: value.to_string(),
    }
}

pub(crate) fn experience_entry(exp: &Experience) -> Node {
    let mut children = Vec::new();
    if !exp.description.is_empty() {
        children.push(Node::Bullets {
            items: exp.description.clone(),
        });
    }
    if !exp.technologies.is_empty() {
        children.push(Node::Tags {
            items: exp.technologies.clone(),
        });
    }
    Node::Entry {
        title: exp.position.clone(),
        subtitle: exp.company.clone(),
        meta: format_date_range(&exp.start_date, &exp.end_date),
        children,
    }
}

pub(crate) fn education_entry(edu: &Education) -> Node {
    let mut children = Vec::new();
    if let Some(gpa) = &edu.gpa {
        if !gpa.is_empty() {
            children.push(field("GPA", gpa));
        }
    }
    if let Some(description) = &edu.description {
        if !description.is_empty() {
            children.push(Node::Text {
                text: description.clone(),
            });
        }
    }
    Node::Entry {
        title: format!("{} in {}", edu.degree, edu.field),
        subtitle: edu.institution.clone(),
        meta: format_date_range(&edu.start_date, &edu.end_date),
        children,
    }
}

pub(crate) fn project_entry(project: &Project) -> Node {
    let mut children = vec![Node::Text {
        text: project.description.clone(),
    }];
    if !project.technologies.is_empty() {
        children.push(Node::Tags {
            items: project.technologies.clone(),
        });
    }
    for (label, link) in [("URL", &project.url), ("GitHub", &project.github)] {
        if let Some(link) = link {
            if !link.is_empty() {
                children.push(field(label, link));
            }
        }
    }
    // An ongoing project has no end date; only a start/end pair gets the
    // range treatment.
    let meta = match &project.end_date {
        Some(end) => format_date_range(&project.start_date, end),
        None => format_date(&project.start_date),
    };
    Node::Entry {
        title: project.name.clone(),
        subtitle: String::new(),
        meta,
        children,
    }
}

pub(crate) fn skill_bar(skill: &Skill) -> Node {
    Node::SkillBar {
        name: skill.name.clone(),
        percent: skill_level_width(skill.level),
        color: skill_level_color(skill.level).to_string(),
    }
}

pub(crate) fn language_line(language: &LanguageEntry) -> Node {
    field(&language.name, &language.level)
}

pub(crate) fn certification_entry(cert: &Certification) -> Node {
    Node::Entry {
        title: cert.name.clone(),
        subtitle: cert.issuer.clone(),
        meta: format_date(&cert.date),
        children: Vec::new(),
    }
}

/// Pushes a section only when it has items; empty sequences leave no trace
/// in the output.
pub(crate) fn push_section<T>(
    out: &mut Vec<Node>,
    items: &[T],
    key: SectionKey,
    title: &str,
    build: impl Fn(&T) -> Node,
) {
    if items.is_empty() {
        return;
    }
    out.push(section(key, title, items.iter().map(build).collect()));
}

pub(crate) fn push_summary(out: &mut Vec<Node>, doc: &CvDocument, title: &str) {
    if doc.summary.is_empty() {
        return;
    }
    out.push(section(
        SectionKey::Summary,
        title,
        vec![Node::Text {
            text: doc.summary.clone(),
        }],
    ));
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{SkillCategory, SkillLevel};

    fn full_doc() -> CvDocument {
        CvDocument {
            personal_info: PersonalInfo {
                full_name: "Nguyễn Văn An".to_string(),
                title: "Backend Engineer".to_string(),
                email: "an@example.com".to_string(),
                phone: "0123456789".to_string(),
                address: "Hà Nội".to_string(),
                github: Some("github.com/an".to_string()),
                ..PersonalInfo::default()
            },
            summary: "Six years building services.".to_string(),
            // Deliberately not reverse-chronological: the older engagement
            // comes first, so a skin that re-sorts by date gets caught.
            experiences: vec![
                Experience {
                    id: "e1".to_string(),
                    company: "Alpha Ltd".to_string(),
                    position: "Engineer".to_string(),
                    start_date: "2019-06".to_string(),
                    end_date: "2021-12".to_string(),
                    description: vec!["Built internal tooling".to_string()],
                    technologies: vec![],
                },
                Experience {
                    id: "e2".to_string(),
                    company: "Beta Corp".to_string(),
                    position: "Senior Engineer".to_string(),
                    start_date: "2022-01".to_string(),
                    end_date: "Present".to_string(),
                    description: vec!["Led the payments rewrite".to_string()],
                    technologies: vec!["Rust".to_string()],
                },
            ],
            education: vec![Education {
                id: "ed1".to_string(),
                institution: "HUST".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2015-09".to_string(),
                end_date: "2019-06".to_string(),
                gpa: Some("3.6".to_string()),
                description: None,
            }],
            skills: vec![Skill {
                id: "s1".to_string(),
                name: "Rust".to_string(),
                level: SkillLevel::Advanced,
                category: SkillCategory::Technical,
            }],
            projects: vec![Project {
                id: "p1".to_string(),
                name: "cv-engine".to_string(),
                description: "Template renderer".to_string(),
                technologies: vec!["Rust".to_string(), "axum".to_string()],
                url: None,
                github: Some("github.com/an/cv-engine".to_string()),
                start_date: "2023-02".to_string(),
                end_date: None,
            }],
            languages: vec![LanguageEntry {
                name: "Vietnamese".to_string(),
                level: "Native".to_string(),
            }],
            certifications: vec![Certification {
                name: "CKA".to_string(),
                issuer: "CNCF".to_string(),
                date: "2022-08".to_string(),
            }],
            template_id: None,
        }
    }

    fn collect_entry_subtitles(body: &[Node], key: SectionKey) -> Vec<String> {
        let mut subtitles = Vec::new();
        for node in body {
            node.walk(&mut |n| {
                if let Node::Section { key: k, children, .. } = n {
                    if *k == key {
                        for child in children {
                            if let Node::Entry { subtitle, .. } = child {
                                subtitles.push(subtitle.clone());
                            }
                        }
                    }
                }
            });
        }
        subtitles
    }

    fn section_keys(body: &[Node]) -> Vec<SectionKey> {
        let mut keys = Vec::new();
        for node in body {
            node.walk(&mut |n| {
                if let Node::Section { key, .. } = n {
                    keys.push(*key);
                }
            });
        }
        keys
    }

    fn contains_text(body: &[Node], needle: &str) -> bool {
        let mut found = false;
        for node in body {
            node.walk(&mut |n| {
                let hit = match n {
                    Node::Heading { text, .. } | Node::Text { text } => text.contains(needle),
                    Node::Entry {
                        title,
                        subtitle,
                        meta,
                        ..
                    } => title.contains(needle) || subtitle.contains(needle) || meta.contains(needle),
                    Node::Field { label, value } => label.contains(needle) || value.contains(needle),
                    _ => false,
                };
                found |= hit;
            });
        }
        found
    }

    // ── completeness and ordering across all built-ins ──────────────────────

    #[test]
    fn test_every_skin_renders_all_items_in_input_order() {
        let doc = full_doc();
        for skin in builtins() {
            let body = skin.render_body(&doc);
            let companies = collect_entry_subtitles(&body, SectionKey::Experience);
            assert_eq!(
                companies,
                vec!["Alpha Ltd".to_string(), "Beta Corp".to_string()],
                "skin '{}' must keep caller order, no date sorting",
                skin.id()
            );
            assert_eq!(
                collect_entry_subtitles(&body, SectionKey::Education).len(),
                1,
                "skin '{}' dropped an education item",
                skin.id()
            );
            assert!(
                contains_text(&body, "cv-engine"),
                "skin '{}' dropped a project",
                skin.id()
            );
        }
    }

    #[test]
    fn test_every_skin_renders_each_experience_exactly_once() {
        let doc = full_doc();
        for skin in builtins() {
            let body = skin.render_body(&doc);
            let companies = collect_entry_subtitles(&body, SectionKey::Experience);
            assert_eq!(
                companies.iter().filter(|c| *c == "Beta Corp").count(),
                1,
                "skin '{}' duplicated an experience",
                skin.id()
            );
        }
    }

    #[test]
    fn test_every_skin_renders_name_and_title_unconditionally() {
        let doc = full_doc();
        for skin in builtins() {
            let body = skin.render_body(&doc);
            assert!(contains_text(&body, "Nguyễn Văn An"), "skin '{}'", skin.id());
            assert!(contains_text(&body, "Backend Engineer"), "skin '{}'", skin.id());
        }
    }

    #[test]
    fn test_every_skin_formats_date_ranges_via_shared_helper() {
        let doc = full_doc();
        for skin in builtins() {
            let body = skin.render_body(&doc);
            assert!(
                contains_text(&body, "01/2022 - Present"),
                "skin '{}' must use the shared range format",
                skin.id()
            );
        }
    }

    // ── optional-section omission across all built-ins ──────────────────────

    #[test]
    fn test_empty_sections_are_omitted_entirely() {
        let mut doc = full_doc();
        doc.certifications.clear();
        doc.languages.clear();
        for skin in builtins() {
            let keys = section_keys(&skin.render_body(&doc));
            assert!(
                !keys.contains(&SectionKey::Certifications),
                "skin '{}' rendered an empty certifications section",
                skin.id()
            );
            assert!(
                !keys.contains(&SectionKey::Languages),
                "skin '{}' rendered an empty languages section",
                skin.id()
            );
        }
    }

    #[test]
    fn test_empty_summary_is_omitted() {
        let mut doc = full_doc();
        doc.summary.clear();
        for skin in builtins() {
            let keys = section_keys(&skin.render_body(&doc));
            assert!(!keys.contains(&SectionKey::Summary), "skin '{}'", skin.id());
        }
    }

    #[test]
    fn test_header_only_document_renders_header_and_nothing_else() {
        // Scenario: fresh document, contact block only.
        let doc = CvDocument {
            personal_info: full_doc().personal_info,
            ..CvDocument::default()
        };
        for skin in builtins() {
            let body = skin.render_body(&doc);
            assert!(contains_text(&body, "Nguyễn Văn An"), "skin '{}'", skin.id());
            assert!(
                section_keys(&body).is_empty(),
                "skin '{}' rendered sections for an empty document",
                skin.id()
            );
        }
    }

    // ── skin list sanity ────────────────────────────────────────────────────

    #[test]
    fn test_builtin_ids_unique() {
        let skins = builtins();
        let ids: Vec<&str> = skins.iter().map(|s| s.id()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate skin id {id}");
        }
    }

    #[test]
    fn test_project_without_end_date_formats_start_only() {
        let doc = full_doc();
        for skin in builtins() {
            let body = skin.render_body(&doc);
            assert!(
                contains_text(&body, "02/2023"),
                "skin '{}' must format the lone start date",
                skin.id()
            );
            assert!(
                !contains_text(&body, "02/2023 -"),
                "skin '{}' must not fabricate a range for an ongoing project",
                skin.id()
            );
        }
    }
}
