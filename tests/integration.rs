use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use quick_scaffold::config::Features;
use quick_scaffold::error::ScaffoldError;
use quick_scaffold::registry::{self, Ecosystem, TemplateId};
use quick_scaffold::{execute_generation, generate, plan_generation, GenerateOptions};
use rstest::rstest;
use walkdir::WalkDir;

fn options(template: &str, name: &str, features: Features, output: &Path) -> GenerateOptions {
    GenerateOptions {
        template: template.to_string(),
        project_name: name.to_string(),
        features,
        output: output.to_path_buf(),
    }
}

/// Relative, `/`-separated paths of every file under `dir`.
fn collect_files(dir: &Path) -> BTreeSet<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn docker() -> Features {
    Features {
        docker: true,
        ..Default::default()
    }
}

fn everything() -> Features {
    Features {
        docker: true,
        tests: true,
        linting: true,
    }
}

#[test]
fn test_python_cli_without_features() {
    let root = tempfile::tempdir().unwrap();

    let result = generate(options("python-cli", "foo", Features::default(), root.path())).unwrap();

    let project = root.path().join("foo");
    assert_eq!(result.output_dir, project);
    let files = collect_files(&project);
    for expected in [
        "README.md",
        ".gitignore",
        "requirements.txt",
        "src/main.py",
        "tests/__init__.py",
    ] {
        assert!(files.contains(expected), "missing {expected}: {files:?}");
    }
    assert!(!files.contains("Dockerfile"));
    assert!(!files.contains("tests/test_main.py"));
    assert_eq!(result.files_written.len(), files.len());

    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.starts_with("# foo\n"));
    assert_eq!(
        std::fs::read_to_string(project.join("requirements.txt")).unwrap(),
        "click>=8.1.0\n"
    );
}

#[test]
fn test_node_api_with_docker() {
    let root = tempfile::tempdir().unwrap();

    generate(options("node-api", "bar", docker(), root.path())).unwrap();

    let project = root.path().join("bar");
    let files = collect_files(&project);
    for expected in [
        "README.md",
        ".gitignore",
        "package.json",
        "src/index.js",
        "tests/.gitkeep",
        "Dockerfile",
        ".dockerignore",
        "docker-compose.yml",
    ] {
        assert!(files.contains(expected), "missing {expected}: {files:?}");
    }
    assert!(!files.contains("requirements.txt"));

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(project.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["name"], "bar");
    assert_eq!(manifest["dependencies"]["express"], "^4.18.0");
}

#[test]
fn test_unknown_template_writes_nothing() {
    let root = tempfile::tempdir().unwrap();

    let err = generate(options("unknown", "baz", docker(), root.path())).unwrap_err();

    match &err {
        ScaffoldError::UnknownTemplate { id, valid } => {
            assert_eq!(id, "unknown");
            assert_eq!(valid, &TemplateId::valid_ids());
        }
        other => panic!("expected UnknownTemplate, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 3);
    assert!(collect_files(root.path()).is_empty());
    assert!(!root.path().join("baz").exists());
}

#[test]
fn test_invalid_name_writes_nothing() {
    let root = tempfile::tempdir().unwrap();

    let err = generate(options("react", "../escape", Features::default(), root.path())).unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidProjectName { .. }));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn test_uppercase_name_rejected_only_for_javascript() {
    let root = tempfile::tempdir().unwrap();

    let err = generate(options("node-api", "MyApi", Features::default(), root.path())).unwrap_err();
    assert!(matches!(err, ScaffoldError::InvalidProjectName { ref name, .. } if name == "MyApi"));
    assert_eq!(err.exit_code(), 4);
    assert!(!root.path().join("MyApi").exists());

    generate(options("python-cli", "MyTool", Features::default(), root.path())).unwrap();
    assert!(root.path().join("MyTool/README.md").is_file());
}

#[test]
fn test_existing_non_empty_target_is_untouched() {
    let root = tempfile::tempdir().unwrap();
    let project = root.path().join("taken");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join("README.md"), "my notes").unwrap();

    let err = generate(options("fastapi", "taken", everything(), root.path())).unwrap_err();

    assert!(matches!(err, ScaffoldError::TargetExists { ref path } if path == &project));
    assert_eq!(err.exit_code(), 5);
    assert_eq!(
        collect_files(&project),
        BTreeSet::from(["README.md".to_string()])
    );
    assert_eq!(
        std::fs::read_to_string(project.join("README.md")).unwrap(),
        "my notes"
    );
}

#[test]
fn test_existing_empty_target_is_reused() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join("empty")).unwrap();

    let result = generate(options("nextjs", "empty", Features::default(), root.path())).unwrap();

    assert!(result
        .files_written
        .contains(&PathBuf::from("app").join("page.tsx")));
}

#[rstest]
fn test_dockerfile_iff_docker(
    #[values("react", "python-cli", "fastapi", "nextjs", "node-api")] template: &str,
    #[values(false, true)] with_docker: bool,
) {
    let root = tempfile::tempdir().unwrap();
    let features = Features {
        docker: with_docker,
        ..Default::default()
    };

    generate(options(template, "proj", features, root.path())).unwrap();

    let files = collect_files(&root.path().join("proj"));
    assert_eq!(files.contains("Dockerfile"), with_docker, "{template}: {files:?}");
}

#[rstest]
fn test_layout_for_every_template(
    #[values(
        TemplateId::React,
        TemplateId::PythonCli,
        TemplateId::Fastapi,
        TemplateId::Nextjs,
        TemplateId::NodeApi
    )]
    id: TemplateId,
) {
    let root = tempfile::tempdir().unwrap();
    let entry = registry::entry(id);

    generate(options(id.as_str(), "layout", Features::default(), root.path())).unwrap();

    let project = root.path().join("layout");
    let files = collect_files(&project);
    assert!(files.contains("README.md"));
    assert!(files.contains(".gitignore"));
    assert!(files.contains(entry.ecosystem.manifest()));
    assert!(project.join("tests").is_dir());
    assert!(
        files
            .iter()
            .any(|f| f.starts_with("src/") || f.starts_with("app/")),
        "{id}: no entry point in {files:?}"
    );

    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("layout"));
    if entry.ecosystem == Ecosystem::JavaScript {
        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(project.join("package.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(manifest["name"], "layout");
    }
}

#[rstest]
#[case("python-cli", "tests/test_main.py")]
#[case("fastapi", "tests/test_main.py")]
#[case("react", "tests/smoke.test.mjs")]
#[case("nextjs", "tests/smoke.test.mjs")]
#[case("node-api", "tests/smoke.test.mjs")]
fn test_tests_feature_adds_test_file(#[case] template: &str, #[case] test_file: &str) {
    let root = tempfile::tempdir().unwrap();
    let features = Features {
        tests: true,
        ..Default::default()
    };

    generate(options(template, "tested", features, root.path())).unwrap();

    assert!(collect_files(&root.path().join("tested")).contains(test_file));
}

#[test]
fn test_fastapi_with_all_features() {
    let root = tempfile::tempdir().unwrap();

    generate(options("fastapi", "svc", everything(), root.path())).unwrap();

    let project = root.path().join("svc");
    let files = collect_files(&project);
    for expected in [
        "Dockerfile",
        "docker-compose.yml",
        ".dockerignore",
        "ruff.toml",
        "tests/test_main.py",
    ] {
        assert!(files.contains(expected), "missing {expected}");
    }

    let requirements = std::fs::read_to_string(project.join("requirements.txt")).unwrap();
    let lines: Vec<&str> = requirements.lines().collect();
    assert_eq!(
        lines,
        [
            "fastapi>=0.100.0",
            "uvicorn[standard]>=0.23.0",
            "pytest>=7.0.0",
            "httpx>=0.24.0",
            "ruff>=0.1.0",
            "black>=23.0.0",
        ]
    );
    let main_py = std::fs::read_to_string(project.join("src/main.py")).unwrap();
    assert!(main_py.contains(r#"FastAPI(title="svc")"#));
}

#[test]
fn test_linting_is_a_no_op_for_javascript() {
    let root = tempfile::tempdir().unwrap();
    let lint = Features {
        linting: true,
        ..Default::default()
    };

    generate(options("react", "plain", Features::default(), root.path())).unwrap();
    generate(options("react", "linted", lint, root.path())).unwrap();

    assert_eq!(
        collect_files(&root.path().join("plain")),
        collect_files(&root.path().join("linted"))
    );
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    generate(options("nextjs", "same", everything(), first.path())).unwrap();
    generate(options("nextjs", "same", everything(), second.path())).unwrap();

    let a = first.path().join("same");
    let b = second.path().join("same");
    let files = collect_files(&a);
    assert_eq!(files, collect_files(&b));
    for file in &files {
        assert_eq!(
            std::fs::read(a.join(file)).unwrap(),
            std::fs::read(b.join(file)).unwrap(),
            "{file} differs"
        );
    }
}

#[test]
fn test_plan_generation_writes_nothing() {
    let root = tempfile::tempdir().unwrap();

    let plan = plan_generation(options("react", "preview", docker(), root.path())).unwrap();

    assert_eq!(plan.render_plan.target, root.path().join("preview"));
    assert_eq!(plan.template.id, TemplateId::React);
    assert!(plan
        .render_plan
        .files
        .iter()
        .any(|f| f.relative_path == Path::new("Dockerfile")));
    assert!(!root.path().join("preview").exists());
}

#[test]
fn test_stale_plan_leaves_new_files_alone() {
    let root = tempfile::tempdir().unwrap();
    let plan = plan_generation(options("python-cli", "foo", Features::default(), root.path()))
        .unwrap();

    let project = root.path().join("foo");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join("README.md"), "my notes").unwrap();

    let err = execute_generation(&plan).unwrap_err();

    match &err {
        ScaffoldError::WriteError { path, written, .. } => {
            assert_eq!(path, Path::new("README.md"));
            assert!(written.is_empty());
        }
        other => panic!("expected WriteError, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 6);
    assert_eq!(
        std::fs::read_to_string(project.join("README.md")).unwrap(),
        "my notes"
    );
    assert_eq!(collect_files(&project), BTreeSet::from(["README.md".to_string()]));
}
