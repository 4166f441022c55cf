use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Every formatted line, regardless of level
static LOGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

static LOG_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Warning));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    /// Pick the level from the CLI verbosity flags; debug wins over verbose
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            LogLevel::Debug
        } else if verbose {
            LogLevel::Info
        } else {
            LogLevel::Warning
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    LOG_LEVEL
        .lock()
        .map(|level| *level)
        .unwrap_or(LogLevel::Warning)
}

fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S");
    format!("[{}] {} {}", timestamp, level.prefix(), message)
}

// Output goes to stderr only; stdout carries the validation report.
pub fn log(level: LogLevel, message: &str) {
    let formatted = format_line(level, message);

    if level >= get_log_level() {
        eprintln!("{}", formatted);
    }

    if let Ok(mut logs) = LOGS.lock() {
        logs.push(formatted);
    }
}

pub fn get_logs() -> Vec<String> {
    match LOGS.lock() {
        Ok(logs) => logs.clone(),
        Err(_) => vec![format_line(LogLevel::Error, "Error accessing logs")],
    }
}

pub fn clear_logs() {
    if let Ok(mut logs) = LOGS.lock() {
        logs.clear();
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Warning);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Debug);
    }

    // Single test touching the global state so parallel tests don't race
    #[test]
    fn test_history_records_all_levels() {
        clear_logs();
        set_log_level(LogLevel::Error);
        assert_eq!(get_log_level(), LogLevel::Error);

        debug("normalizing jira key");
        warning("repository missing");

        let logs = get_logs();
        assert!(logs.iter().any(|l| l.ends_with("🔍 normalizing jira key")));
        assert!(logs.iter().any(|l| l.ends_with("⚠️ repository missing")));
        assert!(logs.iter().all(|l| l.starts_with('[')));
    }
}
