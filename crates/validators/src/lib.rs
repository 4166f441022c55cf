// validators crate

mod github;
mod jira;
mod priority;
mod project;
mod work_type;

pub use github::validate_github;
pub use jira::validate_jira;
pub use priority::validate_priority;
pub use project::validate_project;
pub use work_type::validate_type;

use models::journal::CandidateInput;
use models::ValidationResult;

/// Outcome of an optional issue tracker reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerLink {
    /// Nothing was supplied; not an error
    Absent,
    Url(String),
    /// Input was supplied but failed validation; an error was recorded
    Rejected,
}

impl TrackerLink {
    pub fn is_ok(&self) -> bool {
        !matches!(self, TrackerLink::Rejected)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TrackerLink::Url(url) => Some(url),
            _ => None,
        }
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            TrackerLink::Url(url) => Some(url),
            _ => None,
        }
    }
}

/// Validates work journal page properties before a page is created.
///
/// Holds no state between calls: each [`validate_all`](Self::validate_all)
/// builds its own [`ValidationResult`], so one validator can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyValidator;

impl PropertyValidator {
    pub fn new() -> Self {
        PropertyValidator
    }

    /// Run every check and collect all errors; nothing short-circuits.
    ///
    /// Errors are ordered priority, project, type, Jira, GitHub.
    pub fn validate_all(&self, candidate: &CandidateInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Required properties
        validate_priority(candidate.priority, &mut result);
        validate_project(candidate.project.as_deref(), &mut result);
        validate_type(candidate.work_type.as_deref(), &mut result);

        // Optional tracker links
        let jira = validate_jira(candidate.jira.as_deref(), &mut result);
        let github = validate_github(
            candidate.github.as_deref(),
            candidate.repo.as_deref(),
            &mut result,
        );
        result.urls.jira = jira.into_url();
        result.urls.github = github.into_url();

        logging::debug(&format!(
            "Validated properties: {} error(s)",
            result.errors.len()
        ));

        result
    }
}

pub fn validate_all(candidate: &CandidateInput) -> ValidationResult {
    PropertyValidator::new().validate_all(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_candidate() -> CandidateInput {
        CandidateInput {
            priority: Some(1),
            project: Some("Platform".to_string()),
            work_type: Some("bug".to_string()),
            jira: Some("SYS-456".to_string()),
            github: Some("789".to_string()),
            repo: Some("odasoftmx/sistema-escolar".to_string()),
        }
    }

    #[test]
    fn test_full_valid_candidate() {
        let result = validate_all(&full_candidate());

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.urls.jira.as_deref(),
            Some("https://odasoftmx.atlassian.net/browse/SYS-456")
        );
        assert_eq!(
            result.urls.github.as_deref(),
            Some("https://github.com/odasoftmx/sistema-escolar/issues/789")
        );
    }

    #[test]
    fn test_empty_candidate_reports_required_fields() {
        let result = validate_all(&CandidateInput::default());

        assert!(!result.is_valid);
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Priority", "Project", "Type"]);
        assert_eq!(result.urls.jira, None);
        assert_eq!(result.urls.github, None);
    }

    #[test]
    fn test_errors_follow_check_order() {
        let candidate = CandidateInput {
            priority: Some(9),
            project: Some("  ".to_string()),
            work_type: Some("story".to_string()),
            jira: Some("Jira".to_string()),
            github: Some("12".to_string()),
            repo: None,
        };
        let result = validate_all(&candidate);

        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["Priority", "Project", "Type", "Jira issue #", "Github issue #"]
        );
    }

    #[test]
    fn test_urls_only_for_passing_trackers() {
        let candidate = CandidateInput {
            jira: Some("#2110".to_string()),
            github: Some("123".to_string()),
            repo: Some("odasoftmx".to_string()),
            ..full_candidate()
        };
        let result = validate_all(&candidate);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.urls.jira.as_deref(),
            Some("https://odasoftmx.atlassian.net/browse/2110")
        );
        assert_eq!(result.urls.github, None);
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let validator = PropertyValidator::new();

        let invalid = validator.validate_all(&CandidateInput::default());
        let first = validator.validate_all(&full_candidate());
        let second = validator.validate_all(&full_candidate());

        assert_eq!(invalid.errors.len(), 3);
        assert_eq!(first, second);
        assert!(second.errors.is_empty());
    }

    #[test]
    fn test_validator_is_shareable_across_threads() {
        let validator = PropertyValidator::new();
        let handles: Vec<_> = (0..4)
            .map(|level| {
                std::thread::spawn(move || {
                    let candidate = CandidateInput {
                        priority: Some(level),
                        ..full_candidate()
                    };
                    validator.validate_all(&candidate)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_valid);
        }
    }

    #[test]
    fn test_result_serializes_for_callers() {
        let result = validate_all(&CandidateInput {
            github: Some("abc".to_string()),
            ..full_candidate()
        });

        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["field"], "Github issue #");
        assert!(json["errors"][0]["suggestion"].is_string());
        assert!(json["urls"]["github"].is_null());
    }

    #[test]
    fn test_tracker_link_accessors() {
        assert!(TrackerLink::Absent.is_ok());
        assert!(!TrackerLink::Rejected.is_ok());
        let link = TrackerLink::Url("https://example.com".to_string());
        assert!(link.is_ok());
        assert_eq!(link.url(), Some("https://example.com"));
        assert_eq!(TrackerLink::Absent.into_url(), None);
    }
}
