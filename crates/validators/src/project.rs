use models::journal::fields;
use models::{ValidationError, ValidationResult};

pub fn validate_project(project: Option<&str>, result: &mut ValidationResult) -> bool {
    let Some(project) = utils::non_empty(project) else {
        result.add_error(ValidationError::new(
            fields::PROJECT,
            "Project is required but not provided or is empty",
            "Ask the user: 'What project or team does this work belong to?'",
        ));
        return false;
    };

    if project.trim().is_empty() {
        result.add_error(ValidationError::new(
            fields::PROJECT,
            "Project name cannot be only whitespace",
            "Ask the user for a valid project name",
        ));
        return false;
    }

    true
}
