use std::path::PathBuf;

use clap::Parser;
use quick_scaffold::config::FeatureFlags;

#[derive(Parser)]
#[command(
    name = "quick-scaffold",
    about = "Generate project templates quickly",
    version
)]
pub struct Cli {
    /// Name of the project directory to create (prompts interactively when omitted)
    pub project_name: Option<String>,

    /// Project template: react, python-cli, fastapi, nextjs or node-api
    #[arg(short, long, value_name = "ID")]
    pub template: Option<String>,

    /// Include Docker setup
    #[arg(long, overrides_with = "no_docker")]
    pub docker: bool,

    /// Leave out Docker setup, even if the user config enables it
    #[arg(long, overrides_with = "docker")]
    pub no_docker: bool,

    /// Include testing framework
    #[arg(long, alias = "testing", overrides_with = "no_tests")]
    pub tests: bool,

    /// Leave out the testing framework
    #[arg(long, alias = "no-testing", overrides_with = "tests")]
    pub no_tests: bool,

    /// Include linting configuration
    #[arg(long, alias = "linting", overrides_with = "no_lint")]
    pub lint: bool,

    /// Leave out linting configuration
    #[arg(long, alias = "no-linting", overrides_with = "lint")]
    pub no_lint: bool,

    /// Directory to create the project in (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Show the files that would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// List available templates and exit
    #[arg(long)]
    pub list: bool,

    /// Never prompt; a project name must be given
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print debug logs, and file contents with --dry-run
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Only features named on the command line are set; the rest stay open
    /// for user defaults or prompts.
    pub fn feature_flags(&self) -> FeatureFlags {
        FeatureFlags {
            docker: flag(self.docker, self.no_docker),
            tests: flag(self.tests, self.no_tests),
            linting: flag(self.lint, self.no_lint),
        }
    }
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
