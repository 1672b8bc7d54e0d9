pub mod config;
pub mod error;
pub mod prompt;
pub mod registry;
pub mod render;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{validate_package_name, Features, ProjectConfig, ProjectName};
use crate::error::Result;
use crate::registry::{TemplateEntry, TemplateId};
use crate::render::{execute_plan, plan_render, resolve_target, EmitPhase};

pub use crate::render::{GeneratedProject, GenerationPlan, PlannedFile};

/// Raw choices as they arrive from flags, before validation.
pub struct GenerateOptions {
    pub template: String,
    pub project_name: String,
    pub features: Features,
    /// Directory the project directory is created in.
    pub output: PathBuf,
}

impl GenerateOptions {
    pub fn resolve(&self) -> Result<ProjectConfig> {
        let template: TemplateId = self.template.parse()?;
        Ok(ProjectConfig {
            template,
            project_name: ProjectName::new(self.project_name.as_str())?,
            features: self.features,
        })
    }
}

/// Everything needed to execute a generation that has been planned but not yet written.
pub struct FullGenerationPlan {
    pub render_plan: GenerationPlan,
    pub template: TemplateEntry,
    pub config: ProjectConfig,
}

/// Plan a project generation from raw options: validate them, look up the
/// template, check the target and render in memory.
///
/// Nothing is written to disk.
pub fn plan_generation(options: GenerateOptions) -> Result<FullGenerationPlan> {
    let config = options.resolve()?;
    plan_project(config, &options.output)
}

/// Plan a generation for an already-validated configuration.
pub fn plan_project(config: ProjectConfig, output_root: &Path) -> Result<FullGenerationPlan> {
    debug!(phase = %EmitPhase::Resolving, template = %config.template, "planning");
    let template = registry::entry(config.template);
    validate_package_name(&config.project_name, template.ecosystem)?;
    let target = resolve_target(output_root, &config.project_name)?;

    debug!(phase = %EmitPhase::Rendering, dir = %target.display(), "planning");
    let render_plan = plan_render(&template.rules, &config, &target)?;

    Ok(FullGenerationPlan {
        render_plan,
        template,
        config,
    })
}

/// Execute a previously planned generation.
pub fn execute_generation(plan: &FullGenerationPlan) -> Result<GeneratedProject> {
    let result = execute_plan(&plan.render_plan)?;
    debug!(
        phase = %EmitPhase::Done,
        files = result.files_written.len(),
        output = %result.output_dir.display(),
        "generation finished"
    );
    Ok(result)
}

/// Generate a project from raw options.
pub fn generate(options: GenerateOptions) -> Result<GeneratedProject> {
    let plan = plan_generation(options)?;
    execute_generation(&plan)
}
