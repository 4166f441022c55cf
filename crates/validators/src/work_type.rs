use models::journal::{fields, WorkType};
use models::{ValidationError, ValidationResult};

pub fn validate_type(work_type: Option<&str>, result: &mut ValidationResult) -> Option<WorkType> {
    let Some(raw) = utils::non_empty(work_type) else {
        result.add_error(ValidationError::new(
            fields::TYPE,
            "Type is required but not provided",
            format!(
                "Ask the user: 'What type of work is this? ({})'",
                WorkType::valid_list()
            ),
        ));
        return None;
    };

    match raw.parse::<WorkType>() {
        Ok(work_type) => Some(work_type),
        Err(e) => {
            result.add_error(ValidationError::new(
                fields::TYPE,
                e.to_string(),
                format!(
                    "The user mentioned '{}'. Did they mean one of: {}? Ask for clarification.",
                    raw,
                    WorkType::valid_list()
                ),
            ));
            None
        }
    }
}
