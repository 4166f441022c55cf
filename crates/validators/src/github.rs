use crate::TrackerLink;
use models::journal::fields;
use models::{ValidationError, ValidationResult, GITHUB_BASE_URL};

/// Validate a GitHub issue reference and build its URL.
///
/// The issue number must be numeric and comes with a repository, which may
/// be given as `owner/repo` or as a pasted github.com link.
pub fn validate_github(
    github_issue: Option<&str>,
    repo: Option<&str>,
    result: &mut ValidationResult,
) -> TrackerLink {
    let Some(raw_issue) = utils::non_empty(github_issue) else {
        return TrackerLink::Absent;
    };

    let issue = utils::strip_issue_prefix(raw_issue);
    if !utils::is_numeric(issue) {
        result.add_error(ValidationError::new(
            fields::GITHUB,
            format!("Invalid GitHub issue number: {}. Must be numeric", issue),
            format!(
                "The user provided '{}' which is not a valid issue number. Ask for the numeric issue number (e.g., '123')",
                issue
            ),
        ));
        return TrackerLink::Rejected;
    }

    // A valid number without a repository cannot be linked
    let Some(raw_repo) = utils::non_empty(repo) else {
        logging::warning(&format!("GitHub issue #{} has no repository", issue));
        result.add_error(ValidationError::new(
            fields::GITHUB,
            "GitHub issue provided but repository is unknown",
            "Ask the user: 'What is the full GitHub repository name? (e.g., odasoftmx/sistema-escolar)'",
        ));
        return TrackerLink::Rejected;
    };

    let repo = utils::normalize_repo(raw_repo);
    if !repo.contains('/') {
        result.add_error(ValidationError::new(
            fields::GITHUB,
            format!("Invalid repository format: {}. Must be 'user/repo'", repo),
            "The repository should be in format 'user/repo' (e.g., 'odasoftmx/app'). Ask the user for the complete repository path.",
        ));
        return TrackerLink::Rejected;
    }

    logging::debug(&format!(
        "GitHub repository '{}' normalized to '{}'",
        raw_repo, repo
    ));
    TrackerLink::Url(format!("{}{}/issues/{}", GITHUB_BASE_URL, repo, issue))
}
