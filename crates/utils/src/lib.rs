// utils crate

use once_cell::sync::Lazy;
use regex::Regex;

static JIRA_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)jira").unwrap());

/// Remove every occurrence of the word "jira", in any casing
pub fn strip_jira_token(input: &str) -> String {
    JIRA_TOKEN.replace_all(input, "").into_owned()
}

/// Trim the input and drop any leading `#` characters ("#123" -> "123")
pub fn strip_issue_prefix(input: &str) -> &str {
    input.trim().trim_start_matches('#')
}

/// True when the string is non-empty and made only of ASCII digits
pub fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Remove the first occurrence of `pattern`, if any
pub fn remove_first(input: &str, pattern: &str) -> String {
    input.replacen(pattern, "", 1)
}

/// Reduce a repository reference to `owner/repo`.
///
/// Accepts bare paths as well as pasted links such as
/// `https://github.com/owner/repo/`. Does not check that the result contains
/// a separator; that is left to the caller.
pub fn normalize_repo(input: &str) -> String {
    let repo = input.trim();
    let repo = remove_first(repo, "github.com/");
    let repo = remove_first(&repo, "https://");
    let repo = remove_first(&repo, "http://");
    repo.trim_end_matches('/').to_string()
}

/// Treat `None` and `Some("")` the same way
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
