use std::path::{Path, PathBuf};

use console::style;
use quick_scaffold::config::load_user_config;
use quick_scaffold::error::{Result, ScaffoldError};
use quick_scaffold::prompt::{collect_config, PromptOptions};
use quick_scaffold::registry::{self, TemplateId};
use quick_scaffold::{execute_generation, plan_project, FullGenerationPlan, GeneratedProject};

use crate::cli::Cli;
use crate::commands::list::print_entry;

pub fn run(cli: Cli) -> Result<()> {
    let user = load_user_config()?.unwrap_or_default();
    let template = cli
        .template
        .as_deref()
        .map(str::parse::<TemplateId>)
        .transpose()?;

    let interactive = !cli.yes && cli.project_name.is_none() && console::user_attended();
    if interactive {
        print_banner();
    }

    let features = cli.feature_flags();
    let options = PromptOptions {
        project_name: cli.project_name,
        template,
        features,
        default_template: user.default_template()?,
        default_features: user.features,
        interactive,
    };
    let config = collect_config(&options)?;

    let output = match cli.output {
        Some(dir) => dir,
        None => current_dir()?,
    };
    let plan = plan_project(config, &output)?;

    if cli.dry_run {
        print_dry_run(&plan, cli.verbose);
        return Ok(());
    }

    let result = execute_generation(&plan).map_err(|e| {
        if let ScaffoldError::WriteError { written, .. } = &e {
            print_partial(&plan, written);
        }
        e
    })?;
    print_success(&plan, &result);

    Ok(())
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| ScaffoldError::Io {
        context: "getting current directory".into(),
        source: e,
    })
}

fn print_banner() {
    println!(
        "{} Project Template Generator\n",
        style("Quick Scaffold").bold()
    );
    println!("Available templates:");
    for entry in registry::all() {
        print_entry(&entry);
    }
    println!();
}

fn print_dry_run(plan: &FullGenerationPlan, verbose: bool) {
    let files = &plan.render_plan.files;

    println!(
        "\n{} Dry run: files that would be generated in {}:",
        style("==>").cyan().bold(),
        style(plan.render_plan.target.display()).cyan()
    );

    for file in files {
        let action = if file.is_static { "copy  " } else { "create" };
        println!(
            "  {} {}",
            style(action).green(),
            file.relative_path.display()
        );

        if verbose {
            println!("  {}", style("──────").dim());
            let content = String::from_utf8_lossy(&file.content);
            for line in content.lines() {
                println!("  {}", line);
            }
            println!("  {}", style("──────").dim());
            println!();
        }
    }

    let features = plan.config.features.labels();
    println!(
        "\nSummary: {} files from template {}{}",
        files.len(),
        style(plan.template.id).cyan(),
        if features.is_empty() {
            String::new()
        } else {
            format!(" with {}", features.join(", "))
        }
    );
    println!(
        "\n{} Dry run: no files written.",
        style("\u{2139}").blue().bold()
    );
}

fn print_partial(plan: &FullGenerationPlan, written: &[PathBuf]) {
    if written.is_empty() {
        return;
    }
    eprintln!(
        "{} files written to {} before the failure:",
        style("note:").yellow().bold(),
        plan.render_plan.target.display()
    );
    for path in written {
        eprintln!("  {}", path.display());
    }
}

fn print_success(plan: &FullGenerationPlan, result: &GeneratedProject) {
    let name = plan.config.project_name.as_str();

    println!(
        "\n{} Project '{}' created successfully",
        style("✓").green().bold(),
        style(name).bold()
    );
    println!(
        "  {} files written to {}",
        result.files_written.len(),
        style(result.output_dir.display()).cyan()
    );

    let cwd = std::env::current_dir().ok();
    println!("\nNext steps:");
    println!("  cd {}", cd_target(&result.output_dir, cwd.as_deref()).display());
    for step in plan.template.next_steps {
        println!("  {step}");
    }
}

/// The project directory as the user would `cd` into it from here.
fn cd_target<'a>(output_dir: &'a Path, cwd: Option<&Path>) -> &'a Path {
    cwd.and_then(|cwd| output_dir.strip_prefix(cwd).ok())
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or(output_dir)
}
