use crate::TrackerLink;
use models::journal::fields;
use models::{ValidationError, ValidationResult, JIRA_BASE_URL};

/// Validate a Jira reference and build its browse URL.
///
/// Users paste keys in many shapes ("Jira #2110", "SYS-456", "#2110"), so the
/// word "jira" and any leading `#` are dropped before building the link. Key
/// formats differ between projects; anything non-empty after cleaning is
/// accepted.
pub fn validate_jira(jira_issue: Option<&str>, result: &mut ValidationResult) -> TrackerLink {
    let Some(raw) = utils::non_empty(jira_issue) else {
        return TrackerLink::Absent;
    };

    let without_token = utils::strip_jira_token(raw.trim());
    let key = utils::strip_issue_prefix(&without_token).trim();

    if key.is_empty() {
        result.add_error(ValidationError::new(
            fields::JIRA,
            "Jira issue number is empty after cleaning",
            "Check the user input for the Jira issue number. It should be in format like 'SYS-123' or just '2110'",
        ));
        return TrackerLink::Rejected;
    }

    logging::debug(&format!("Jira issue '{}' normalized to '{}'", raw, key));
    TrackerLink::Url(format!("{}{}", JIRA_BASE_URL, key))
}
