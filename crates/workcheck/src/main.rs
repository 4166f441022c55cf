mod report;

use clap::{Parser, ValueEnum};
use models::journal::CandidateInput;
use validators::PropertyValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(
    name = "workcheck",
    about = "Validate work journal page properties before creation",
    version,
    long_about = "Validate work journal page properties before the page is created, and build links for referenced Jira and GitHub issues.\n\nExits with 0 when every property is valid and 1 otherwise.\n\nExamples:\n  workcheck --priority 2 --project \"Auth Team\" --type feature\n  workcheck --priority 0 --project \"Backend\" --type bug --jira 2110\n  workcheck --priority 1 --project \"Frontend\" --type feature --github 123 --repo odasoftmx/app\n  workcheck --priority 1 --project \"Platform\" --type bug --jira SYS-456 --github 789 --repo odasoftmx/sistema-escolar"
)]
struct Workcheck {
    /// Priority level (0=Critical, 1=High, 2=Medium, 3=Low, 4=Backlog)
    #[arg(long, allow_negative_numbers = true)]
    priority: Option<i64>,

    /// Project or team name
    #[arg(long)]
    project: Option<String>,

    /// Work type: bug, feature, task, epic, or chore
    #[arg(long = "type", value_name = "TYPE")]
    work_type: Option<String>,

    /// Jira issue ID (e.g. 2110 or SYS-2110)
    #[arg(long)]
    jira: Option<String>,

    /// GitHub issue number (e.g. 123)
    #[arg(long)]
    github: Option<String>,

    /// GitHub repository as user/repo (required with --github)
    #[arg(long)]
    repo: Option<String>,

    /// Output format for the validation report
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Run in verbose mode with detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Run in debug mode, logging each normalization step
    #[arg(short, long)]
    debug: bool,
}

impl Workcheck {
    fn candidate(&self) -> CandidateInput {
        CandidateInput {
            priority: self.priority,
            project: self.project.clone(),
            work_type: self.work_type.clone(),
            jira: self.jira.clone(),
            github: self.github.clone(),
            repo: self.repo.clone(),
        }
    }
}

fn main() {
    let cli = Workcheck::parse();

    logging::set_log_level(logging::LogLevel::from_flags(cli.verbose, cli.debug));
    logging::debug("Debug mode enabled - showing detailed logs");

    let result = PropertyValidator::new().validate_all(&cli.candidate());
    logging::info(&format!(
        "Validation finished: {}",
        if result.is_valid { "valid" } else { "invalid" }
    ));

    match cli.format {
        OutputFormat::Json => match result.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                logging::error(&format!("Failed to serialize validation result: {}", e));
                std::process::exit(1);
            }
        },
        OutputFormat::Text => print!("{}", report::render_text(&result)),
    }

    std::process::exit(if result.is_valid { 0 } else { 1 });
}
