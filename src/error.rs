#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("Unknown template '{id}' (valid: {})", .valid.join(", "))]
    #[diagnostic(help("Pass one of the listed identifiers with --template"))]
    UnknownTemplate { id: String, valid: Vec<String> },

    #[error("Invalid project name '{name}': {reason}")]
    #[diagnostic(help(
        "Use letters, digits, '.', '_' or '-', starting with a letter or digit (e.g. my-app)"
    ))]
    InvalidProjectName { name: String, reason: String },

    #[error("Directory already exists and is not empty: {path}")]
    #[diagnostic(help("Choose another project name or remove the existing directory"))]
    TargetExists { path: PathBuf },

    #[error("Failed to write {path} ({} file(s) written before the failure)", .written.len())]
    #[diagnostic(help("Files written before the failure are left in place; remove them before retrying"))]
    WriteError {
        path: PathBuf,
        written: Vec<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {path}")]
    Render {
        path: String,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(help("Check the TOML syntax in your quick-scaffold config"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

impl ScaffoldError {
    /// Process exit code for this error kind. Each user-facing failure maps to
    /// its own code so scripts can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScaffoldError::UnknownTemplate { .. } => 3,
            ScaffoldError::InvalidProjectName { .. } => 4,
            ScaffoldError::TargetExists { .. } => 5,
            ScaffoldError::WriteError { .. } => 6,
            ScaffoldError::PromptCancelled => 130,
            ScaffoldError::Render { .. }
            | ScaffoldError::Io { .. }
            | ScaffoldError::ConfigParse { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
