use serde::{Deserialize, Serialize};

/// Base URL that Jira issue keys are appended to
pub const JIRA_BASE_URL: &str = "https://odasoftmx.atlassian.net/browse/";

/// Base URL that `owner/repo` paths are appended to
pub const GITHUB_BASE_URL: &str = "https://github.com/";

/// A single failed check, phrased so an agent can relay it to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Page property the error belongs to (e.g. "Priority")
    pub field: String,
    /// What went wrong
    pub message: String,
    /// How to fix it
    pub suggestion: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Issue tracker links derived from the candidate properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedUrls {
    pub jira: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(rename = "valid")]
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub urls: DerivedUrls,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            urls: DerivedUrls::default(),
        }
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Errors reported for a given property, in the order they were added
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Work journal page models
pub mod journal {
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;
    use thiserror::Error;

    /// Property names as they appear in the work journal database
    pub mod fields {
        pub const PRIORITY: &str = "Priority";
        pub const PROJECT: &str = "Project";
        pub const TYPE: &str = "Type";
        pub const JIRA: &str = "Jira issue #";
        pub const GITHUB: &str = "Github issue #";
    }

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ModelError {
        #[error("Invalid priority value: {0}. Must be 0-4")]
        InvalidPriority(i64),

        #[error("Invalid type: {0}. Must be one of: {list}", list = WorkType::valid_list())]
        InvalidWorkType(String),
    }

    /// Priority levels, lower is more urgent
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(try_from = "i64", into = "i64")]
    pub enum Priority {
        Critical = 0,
        High = 1,
        Medium = 2,
        Low = 3,
        Backlog = 4,
    }

    impl Priority {
        pub const ALL: [Priority; 5] = [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
            Priority::Backlog,
        ];

        pub fn level(self) -> i64 {
            self as i64
        }

        pub fn label(self) -> &'static str {
            match self {
                Priority::Critical => "Critical",
                Priority::High => "High",
                Priority::Medium => "Medium",
                Priority::Low => "Low",
                Priority::Backlog => "Backlog",
            }
        }

        /// "0=Critical, 1=High, ..." for prompts
        pub fn prompt_list() -> String {
            Self::ALL
                .iter()
                .map(|p| format!("{}={}", p.level(), p.label()))
                .collect::<Vec<_>>()
                .join(", ")
        }

        /// "0 (Critical), 1 (High), ..." for error suggestions
        pub fn described_list() -> String {
            Self::ALL
                .iter()
                .map(|p| format!("{} ({})", p.level(), p.label()))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    impl TryFrom<i64> for Priority {
        type Error = ModelError;

        fn try_from(value: i64) -> Result<Self, Self::Error> {
            Self::ALL
                .into_iter()
                .find(|p| p.level() == value)
                .ok_or(ModelError::InvalidPriority(value))
        }
    }

    impl From<Priority> for i64 {
        fn from(priority: Priority) -> Self {
            priority.level()
        }
    }

    impl fmt::Display for Priority {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} ({})", self.level(), self.label())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum WorkType {
        Bug,
        Feature,
        Task,
        Epic,
        Chore,
    }

    impl WorkType {
        pub const ALL: [WorkType; 5] = [
            WorkType::Bug,
            WorkType::Feature,
            WorkType::Task,
            WorkType::Epic,
            WorkType::Chore,
        ];

        pub fn as_str(self) -> &'static str {
            match self {
                WorkType::Bug => "bug",
                WorkType::Feature => "feature",
                WorkType::Task => "task",
                WorkType::Epic => "epic",
                WorkType::Chore => "chore",
            }
        }

        pub fn valid_list() -> String {
            Self::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    // Matching is exact: "Bug" is not a valid type.
    impl FromStr for WorkType {
        type Err = ModelError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Self::ALL
                .into_iter()
                .find(|t| t.as_str() == s)
                .ok_or_else(|| ModelError::InvalidWorkType(s.to_string()))
        }
    }

    impl fmt::Display for WorkType {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// Raw property values submitted for one validation pass
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CandidateInput {
        #[serde(default)]
        pub priority: Option<i64>,
        #[serde(default)]
        pub project: Option<String>,
        #[serde(default, rename = "type")]
        pub work_type: Option<String>,
        #[serde(default)]
        pub jira: Option<String>,
        #[serde(default)]
        pub github: Option<String>,
        #[serde(default)]
        pub repo: Option<String>,
    }
}
