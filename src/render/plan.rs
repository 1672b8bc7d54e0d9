use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ProjectConfig, ProjectName};
use crate::error::{Result, ScaffoldError};
use crate::registry::{Content, FileRule};
use crate::render::{build_context, render_rule};

/// Where a generation run is. `Resolving` covers the registry lookup and
/// target check, `Rendering` the in-memory plan and the writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitPhase {
    Resolving,
    Rendering,
    Done,
    Failed,
}

impl fmt::Display for EmitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmitPhase::Resolving => "resolving",
            EmitPhase::Rendering => "rendering",
            EmitPhase::Done => "done",
            EmitPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct GeneratedProject {
    pub output_dir: PathBuf,
    /// Relative paths in write order.
    pub files_written: Vec<PathBuf>,
}

/// A file that would be created during generation.
#[derive(Debug)]
pub struct PlannedFile {
    /// Path relative to the project directory.
    pub relative_path: PathBuf,
    pub content: Vec<u8>,
    /// Whether the content was written verbatim (true) or produced from the
    /// configuration (false).
    pub is_static: bool,
}

/// The result of planning a generation without writing to disk.
#[derive(Debug)]
pub struct GenerationPlan {
    /// Project directory the files are written under.
    pub target: PathBuf,
    pub files: Vec<PlannedFile>,
}

/// Compute `<output_root>/<name>` and refuse to reuse anything but a missing
/// or empty directory.
pub fn resolve_target(output_root: &Path, name: &ProjectName) -> Result<PathBuf> {
    let target = output_root.join(name);

    if target.exists() {
        let is_empty_dir = target.is_dir()
            && std::fs::read_dir(&target)
                .map_err(|e| ScaffoldError::Io {
                    context: format!("reading {}", target.display()),
                    source: e,
                })?
                .next()
                .is_none();
        if !is_empty_dir {
            return Err(ScaffoldError::TargetExists { path: target });
        }
        debug!(dir = %target.display(), "reusing empty target directory");
    }

    Ok(target)
}

/// Render every applicable rule into memory, in rule order.
pub fn plan_render(
    rules: &[FileRule],
    config: &ProjectConfig,
    target: &Path,
) -> Result<GenerationPlan> {
    let context = build_context(config);
    let mut files = Vec::new();

    for rule in rules {
        if !rule.applies(&config.features) {
            debug!(path = rule.path, "skipping rule, condition not met");
            continue;
        }

        let content = render_rule(rule, config, &context)?;
        debug!(path = rule.path, bytes = content.len(), "rendered rule");
        files.push(PlannedFile {
            relative_path: rule.path.split('/').collect(),
            content,
            is_static: matches!(rule.content, Content::Static(_)),
        });
    }

    Ok(GenerationPlan {
        target: target.to_path_buf(),
        files,
    })
}

/// Write the files from a generation plan to disk.
///
/// Stops at the first failure; the error lists what had already been written.
/// Files are created exclusively, so anything that appeared at a planned path
/// after planning is left alone and reported as a write failure.
pub fn execute_plan(plan: &GenerationPlan) -> Result<GeneratedProject> {
    let mut files_written: Vec<PathBuf> = Vec::new();

    std::fs::create_dir_all(&plan.target).map_err(|e| ScaffoldError::WriteError {
        path: plan.target.clone(),
        written: Vec::new(),
        source: e,
    })?;

    for file in &plan.files {
        let dest_path = plan.target.join(&file.relative_path);
        if let Err(e) = write_file(&dest_path, &file.content) {
            debug!(
                path = %file.relative_path.display(),
                written = files_written.len(),
                phase = %EmitPhase::Failed,
                "write failed"
            );
            return Err(ScaffoldError::WriteError {
                path: file.relative_path.clone(),
                written: files_written,
                source: e,
            });
        }
        files_written.push(file.relative_path.clone());
    }

    Ok(GeneratedProject {
        output_dir: plan.target.clone(),
        files_written,
    })
}

fn write_file(dest_path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest_path)?;
    file.write_all(content)
}
