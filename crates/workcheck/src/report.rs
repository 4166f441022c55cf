use colored::Colorize;
use models::ValidationResult;

/// Human readable summary, one numbered entry per error
pub fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();

    if result.is_valid {
        out.push_str(&format!("✅ {}\n", "All properties are valid".green()));
    } else {
        out.push_str(&format!(
            "❌ {}\n",
            format!("{} validation error(s)", result.errors.len()).red()
        ));
        for (i, error) in result.errors.iter().enumerate() {
            out.push_str(&format!(
                "   {}. {}: {}\n",
                i + 1,
                error.field.bold(),
                error.message
            ));
            out.push_str(&format!("      → {}\n", error.suggestion.dimmed()));
        }
    }

    let links = [("Jira", &result.urls.jira), ("GitHub", &result.urls.github)];
    for (name, url) in links {
        if let Some(url) = url {
            out.push_str(&format!("🔗 {}: {}\n", name, url.cyan()));
        }
    }

    out
}
