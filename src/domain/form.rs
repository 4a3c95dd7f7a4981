// src/domain/form.rs
//
// Synchronous field validation for the note form. Pure functions over the
// current field values, re-evaluated after every entry.

use crate::constants::{CONTENT_MAX_CHARS, CONTENT_MIN_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS};

/// Per-field error messages. An empty-field error takes precedence over a
/// length error; a field that is merely below its minimum length carries no
/// message (it only disables saving).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// All messages joined for a single-line summary, title first.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(msg) = &self.title {
            parts.push(msg.as_str());
        }
        if let Some(msg) = &self.content {
            parts.push(msg.as_str());
        }
        parts.join("; ")
    }
}

pub fn validate(title: &str, content: &str) -> FieldErrors {
    FieldErrors {
        title: title_error(title),
        content: content_error(content),
    }
}

/// Whether the save control is enabled: both fields at or above their
/// minimum length and within their maximum bound.
pub fn submit_enabled(title: &str, content: &str) -> bool {
    let title_len = title.chars().count();
    let content_len = content.chars().count();

    (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_len)
        && (CONTENT_MIN_CHARS..=CONTENT_MAX_CHARS).contains(&content_len)
}

pub fn title_error(title: &str) -> Option<String> {
    if title.is_empty() {
        return Some("Title is required".to_string());
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Some(format!(
            "Title must be less than {TITLE_MAX_CHARS} characters"
        ));
    }
    None
}

pub fn content_error(content: &str) -> Option<String> {
    if content.is_empty() {
        return Some("Content is required".to_string());
    }
    if content.chars().count() > CONTENT_MAX_CHARS {
        return Some(format!(
            "Content must be less than {CONTENT_MAX_CHARS} characters"
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Some("Title is required"))]
    #[case("a", None)]
    #[case("Valid Title", None)]
    fn given_title_when_validating_then_reports_expected_error(
        #[case] title: &str,
        #[case] expected: Option<&str>,
    ) {
        let errors = validate(title, "Some valid content");

        assert_eq!(errors.title.as_deref(), expected);
    }

    #[test]
    fn given_title_of_exactly_100_chars_when_validating_then_no_error() {
        let title = "a".repeat(100);

        let errors = validate(&title, "Some valid content");

        assert_eq!(errors.title, None);
    }

    #[test]
    fn given_title_of_101_chars_when_validating_then_reports_length_error() {
        let title = "a".repeat(101);

        let errors = validate(&title, "Some valid content");

        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be less than 100 characters")
        );
    }

    #[test]
    fn given_empty_content_when_validating_then_reports_required_error() {
        let errors = validate("Valid Title", "");

        assert_eq!(errors.content.as_deref(), Some("Content is required"));
    }

    #[test]
    fn given_content_of_1001_chars_when_validating_then_reports_length_error() {
        let content = "b".repeat(1001);

        let errors = validate("Valid Title", &content);

        assert_eq!(
            errors.content.as_deref(),
            Some("Content must be less than 1000 characters")
        );
    }

    #[test]
    fn given_content_of_exactly_1000_chars_when_validating_then_no_error() {
        let content = "b".repeat(1000);

        let errors = validate("Valid Title", &content);

        assert_eq!(errors.content, None);
    }

    #[test]
    fn given_both_fields_over_bounds_when_validating_then_reports_both_errors() {
        let title = "a".repeat(101);
        let content = "b".repeat(1001);

        let errors = validate(&title, &content);

        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be less than 100 characters")
        );
        assert_eq!(
            errors.content.as_deref(),
            Some("Content must be less than 1000 characters")
        );
    }

    #[test]
    fn given_multibyte_title_when_validating_then_counts_characters_not_bytes() {
        // 100 umlauts are 200 bytes but exactly at the character bound
        let title = "ü".repeat(100);

        let errors = validate(&title, "Some valid content");

        assert_eq!(errors.title, None);
    }

    #[rstest]
    #[case("Hi", "This is valid content.", false)] // title below minimum
    #[case("Valid Title", "short", false)] // content below minimum
    #[case("Valid Title", "This is valid content.", true)]
    #[case("", "", false)]
    fn given_field_values_when_checking_submit_then_gates_on_minimums(
        #[case] title: &str,
        #[case] content: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(submit_enabled(title, content), expected);
    }

    #[test]
    fn given_overlong_title_when_checking_submit_then_disabled() {
        let title = "a".repeat(101);

        assert!(!submit_enabled(&title, "This is valid content."));
    }

    #[test]
    fn given_overlong_title_and_short_content_then_title_error_only() {
        // title = "a" x 101, content = "valid": save disabled, title error
        // shown, content untouched (below minimum carries no message)
        let title = "a".repeat(101);

        let errors = validate(&title, "valid");

        assert!(!submit_enabled(&title, "valid"));
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be less than 100 characters")
        );
        assert_eq!(errors.content, None);
    }

    #[test]
    fn given_errors_when_building_summary_then_joins_title_first() {
        let errors = validate("", "");

        assert_eq!(errors.summary(), "Title is required; Content is required");
    }
}
