//! Shared formatting rules and the document validity gate.
//!
//! Every skin uses these helpers; none reimplements them. They never panic:
//! unparsable dates are echoed back unchanged and unrecognized skill levels
//! map to the minimal weight, so one malformed item degrades only itself.

use chrono::{Datelike, NaiveDate};

use crate::models::cv::{CvDocument, SkillLevel};

/// Wire token and display label for a still-running engagement.
pub const PRESENT: &str = "Present";

/// Formats a date string as `MM/YYYY`.
///
/// Accepts `YYYY-MM` and `YYYY-MM-DD`. The literal token `Present` becomes
/// the current-employment label. Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if raw == PRESENT {
        return PRESENT.to_string();
    }
    if let Some(date) = parse_flexible(raw) {
        return format!("{:02}/{}", date.month(), date.year());
    }
    raw.to_string()
}

/// `"{formatDate(start)} - {formatDate(end)}"`.
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Year-month input: anchor to the first so chrono can parse it.
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

/// Fill percentage for the proportional skill indicator. Monotonic in
/// proficiency; `Unrated` gets the minimal weight.
pub fn skill_level_width(level: SkillLevel) -> u8 {
    match level {
        SkillLevel::Beginner => 40,
        SkillLevel::Intermediate => 60,
        SkillLevel::Advanced => 80,
        SkillLevel::Expert => 100,
        SkillLevel::Unrated => 25,
    }
}

/// Fixed per-level palette, same fallback policy as the width map.
pub fn skill_level_color(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Beginner => "#ef4444",
        SkillLevel::Intermediate => "#f59e0b",
        SkillLevel::Advanced => "#3b82f6",
        SkillLevel::Expert => "#22c55e",
        SkillLevel::Unrated => "#9ca3af",
    }
}

/// The single validity gate shared by all templates: full name, email, and
/// phone must be non-empty. No skin may bypass this and no skin may impose
/// a stricter requirement.
pub fn validate_document(doc: &CvDocument) -> bool {
    let info = &doc.personal_info;
    !info.full_name.is_empty() && !info.email.is_empty() && !info.phone.is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::PersonalInfo;

    fn valid_doc() -> CvDocument {
        CvDocument {
            personal_info: PersonalInfo {
                full_name: "Nguyễn Văn An".to_string(),
                email: "a@b.com".to_string(),
                phone: "0123456789".to_string(),
                ..PersonalInfo::default()
            },
            ..CvDocument::default()
        }
    }

    // ── format_date ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_date_present_token_is_current_label() {
        assert_eq!(format_date("Present"), "Present");
    }

    #[test]
    fn test_format_date_year_month() {
        assert_eq!(format_date("2022-01"), "01/2022");
        assert_eq!(format_date("2019-11"), "11/2019");
    }

    #[test]
    fn test_format_date_full_date_drops_day() {
        assert_eq!(format_date("2022-01-15"), "01/2022");
    }

    #[test]
    fn test_format_date_unparsable_echoes_unchanged() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2022-13"), "2022-13", "month 13 is not a date");
    }

    #[test]
    fn test_format_date_range_joins_with_dash() {
        assert_eq!(format_date_range("2021-03", "Present"), "03/2021 - Present");
        assert_eq!(format_date_range("2018-09", "2022-06"), "09/2018 - 06/2022");
    }

    // ── skill level maps ────────────────────────────────────────────────────

    #[test]
    fn test_skill_level_width_monotonic() {
        let widths = [
            skill_level_width(SkillLevel::Beginner),
            skill_level_width(SkillLevel::Intermediate),
            skill_level_width(SkillLevel::Advanced),
            skill_level_width(SkillLevel::Expert),
        ];
        assert!(
            widths.windows(2).all(|w| w[0] < w[1]),
            "widths must strictly increase with proficiency, got {widths:?}"
        );
        assert_eq!(widths[3], 100);
    }

    #[test]
    fn test_unrated_level_gets_minimal_weight() {
        assert!(skill_level_width(SkillLevel::Unrated) < skill_level_width(SkillLevel::Beginner));
        assert_eq!(skill_level_color(SkillLevel::Unrated), "#9ca3af");
    }

    #[test]
    fn test_skill_level_colors_distinct_per_level() {
        let colors = [
            skill_level_color(SkillLevel::Beginner),
            skill_level_color(SkillLevel::Intermediate),
            skill_level_color(SkillLevel::Advanced),
            skill_level_color(SkillLevel::Expert),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // ── validity gate ───────────────────────────────────────────────────────

    #[test]
    fn test_validate_document_accepts_minimum_fields() {
        assert!(validate_document(&valid_doc()));
    }

    #[test]
    fn test_validate_document_rejects_empty_full_name() {
        let mut doc = valid_doc();
        doc.personal_info.full_name.clear();
        assert!(!validate_document(&doc));
    }

    #[test]
    fn test_validate_document_rejects_empty_email_or_phone() {
        let mut doc = valid_doc();
        doc.personal_info.email.clear();
        assert!(!validate_document(&doc));

        let mut doc = valid_doc();
        doc.personal_info.phone.clear();
        assert!(!validate_document(&doc));
    }

    #[test]
    fn test_validate_document_ignores_other_fields() {
        // The gate is exactly three fields; an otherwise empty document with
        // them set is renderable.
        let doc = valid_doc();
        assert!(doc.personal_info.address.is_empty());
        assert!(doc.experiences.is_empty());
        assert!(validate_document(&doc));
    }
}
