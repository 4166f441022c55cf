use models::journal::{fields, Priority};
use models::{ValidationError, ValidationResult};

pub fn validate_priority(priority: Option<i64>, result: &mut ValidationResult) -> Option<Priority> {
    let Some(value) = priority else {
        result.add_error(ValidationError::new(
            fields::PRIORITY,
            "Priority is required but not provided",
            format!(
                "Ask the user: 'What priority should this work have? ({})'",
                Priority::prompt_list()
            ),
        ));
        return None;
    };

    match Priority::try_from(value) {
        Ok(priority) => Some(priority),
        Err(e) => {
            result.add_error(ValidationError::new(
                fields::PRIORITY,
                e.to_string(),
                format!(
                    "Valid values: {}. The user provided '{}' which is not in this range.",
                    Priority::described_list(),
                    value
                ),
            ));
            None
        }
    }
}
