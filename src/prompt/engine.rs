use std::fmt;

use inquire::validator::{ErrorMessage, Validation};
use tracing::debug;

use crate::config::{validate_name, FeatureFlags, Features, ProjectConfig, ProjectName};
use crate::error::{Result, ScaffoldError};
use crate::registry::{self, TemplateEntry, TemplateId};

/// Choices already made on the command line plus user-config defaults.
#[derive(Debug, Default)]
pub struct PromptOptions {
    pub project_name: Option<String>,
    /// `--template`, already parsed.
    pub template: Option<TemplateId>,
    /// Features set by flags, either way. A flag that is set is never asked about.
    pub features: FeatureFlags,
    pub default_template: Option<TemplateId>,
    pub default_features: Features,
    /// Ask for whatever is missing. Ignored when a project name was given.
    pub interactive: bool,
}

impl PromptOptions {
    fn fallback_template(&self) -> TemplateId {
        self.template.or(self.default_template).unwrap_or_default()
    }
}

/// Turn flags, defaults and (when interactive) answers into a configuration
/// record.
pub fn collect_config(options: &PromptOptions) -> Result<ProjectConfig> {
    if options.project_name.is_some() || !options.interactive {
        return resolve_without_prompting(options);
    }

    let project_name = prompt_project_name()?;
    let template = match options.template {
        Some(template) => template,
        None => prompt_template(options.fallback_template())?,
    };
    let features = Features {
        docker: confirm_feature(
            "Include Docker setup?",
            options.features.docker,
            options.default_features.docker,
        )?,
        tests: confirm_feature(
            "Include testing framework?",
            options.features.tests,
            options.default_features.tests,
        )?,
        linting: confirm_feature(
            "Include linting configuration?",
            options.features.linting,
            options.default_features.linting,
        )?,
    };

    debug!(%template, name = %project_name, ?features, "collected answers");
    Ok(ProjectConfig {
        template,
        project_name,
        features,
    })
}

fn resolve_without_prompting(options: &PromptOptions) -> Result<ProjectConfig> {
    let name = options.project_name.as_deref().unwrap_or_default();
    Ok(ProjectConfig {
        template: options.fallback_template(),
        project_name: ProjectName::new(name)?,
        features: options.features.or_defaults(options.default_features),
    })
}

fn prompt_project_name() -> Result<ProjectName> {
    let answer = inquire::Text::new("Project name")
        .with_validator(|input: &str| {
            Ok(match validate_name(input) {
                Ok(()) => Validation::Valid,
                Err(reason) => Validation::Invalid(ErrorMessage::Custom(reason.to_string())),
            })
        })
        .prompt()
        .map_err(|_| ScaffoldError::PromptCancelled)?;
    ProjectName::new(answer)
}

struct TemplateChoice(TemplateEntry);

impl fmt::Display for TemplateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:12} {}: {}",
            self.0.id.as_str(),
            self.0.name,
            self.0.description
        )
    }
}

fn prompt_template(default: TemplateId) -> Result<TemplateId> {
    let choices: Vec<TemplateChoice> = registry::all().into_iter().map(TemplateChoice).collect();
    let cursor = choices
        .iter()
        .position(|c| c.0.id == default)
        .unwrap_or_default();

    let answer = inquire::Select::new("Template", choices)
        .with_starting_cursor(cursor)
        .prompt()
        .map_err(|_| ScaffoldError::PromptCancelled)?;
    Ok(answer.0.id)
}

fn confirm_feature(question: &str, flag: Option<bool>, default: bool) -> Result<bool> {
    if let Some(value) = flag {
        return Ok(value);
    }
    inquire::Confirm::new(question)
        .with_default(default)
        .prompt()
        .map_err(|_| ScaffoldError::PromptCancelled)
}
