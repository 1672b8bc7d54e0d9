use super::rule::{with_docker, with_linting, with_tests, Content, FileRule};
use super::{Ecosystem, TemplateEntry, TemplateId};
use crate::config::ProjectConfig;

pub fn python_cli() -> TemplateEntry {
    TemplateEntry {
        id: TemplateId::PythonCli,
        name: "Python CLI",
        description: "Python CLI tool with Click",
        ecosystem: Ecosystem::Python,
        next_steps: &["pip install -r requirements.txt", "python -m src.main"],
        rules: vec![
            FileRule::always("README.md", Content::Template(CLI_README)),
            FileRule::always(".gitignore", Content::Static(GITIGNORE)),
            FileRule::always("requirements.txt", Content::Generated(cli_requirements)),
            FileRule::always("tests/__init__.py", Content::Static("")),
            FileRule::always("src/__init__.py", Content::Template(PACKAGE_INIT)),
            FileRule::always("src/main.py", Content::Template(CLI_MAIN)),
            FileRule::when("tests/test_main.py", Content::Static(CLI_TEST), with_tests),
            FileRule::when("ruff.toml", Content::Static(RUFF_TOML), with_linting),
            FileRule::when("Dockerfile", Content::Static(CLI_DOCKERFILE), with_docker),
            FileRule::when(".dockerignore", Content::Static(DOCKERIGNORE), with_docker),
        ],
    }
}

pub fn fastapi() -> TemplateEntry {
    TemplateEntry {
        id: TemplateId::Fastapi,
        name: "FastAPI",
        description: "FastAPI web application",
        ecosystem: Ecosystem::Python,
        next_steps: &[
            "pip install -r requirements.txt",
            "uvicorn src.main:app --reload",
        ],
        rules: vec![
            FileRule::always("README.md", Content::Template(FASTAPI_README)),
            FileRule::always(".gitignore", Content::Static(GITIGNORE)),
            FileRule::always(
                "requirements.txt",
                Content::Generated(fastapi_requirements),
            ),
            FileRule::always("tests/__init__.py", Content::Static("")),
            FileRule::always("src/__init__.py", Content::Template(PACKAGE_INIT)),
            FileRule::always("src/main.py", Content::Template(FASTAPI_MAIN)),
            FileRule::when(
                "tests/test_main.py",
                Content::Static(FASTAPI_TEST),
                with_tests,
            ),
            FileRule::when("ruff.toml", Content::Static(RUFF_TOML), with_linting),
            FileRule::when(
                "Dockerfile",
                Content::Static(FASTAPI_DOCKERFILE),
                with_docker,
            ),
            FileRule::when(".dockerignore", Content::Static(DOCKERIGNORE), with_docker),
            FileRule::when(
                "docker-compose.yml",
                Content::Static(FASTAPI_COMPOSE),
                with_docker,
            ),
        ],
    }
}

fn cli_requirements(config: &ProjectConfig) -> String {
    requirements(&["click>=8.1.0"], &["pytest>=7.0.0"], config)
}

fn fastapi_requirements(config: &ProjectConfig) -> String {
    requirements(
        &["fastapi>=0.100.0", "uvicorn[standard]>=0.23.0"],
        &["pytest>=7.0.0", "httpx>=0.24.0"],
        config,
    )
}

/// One requirement per line; test and lint tooling appended when selected.
fn requirements(base: &[&str], testing: &[&str], config: &ProjectConfig) -> String {
    let mut lines: Vec<&str> = base.to_vec();
    if config.features.tests {
        lines.extend_from_slice(testing);
    }
    if config.features.linting {
        lines.extend_from_slice(&["ruff>=0.1.0", "black>=23.0.0"]);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

const PACKAGE_INIT: &str = r#""""{{ project_name }} package."""
"#;

const GITIGNORE: &str = "# Python
__pycache__/
*.py[cod]
*.so
.Python
build/
dist/
*.egg-info/
.venv/
venv/

# IDE
.vscode/
.idea/

# OS
.DS_Store
";

const DOCKERIGNORE: &str = "__pycache__
*.pyc
.venv
venv
.git
.gitignore
README.md
";

const RUFF_TOML: &str = r#"line-length = 88
target-version = "py311"

[lint]
select = ["E", "F", "I", "B"]
"#;

const CLI_README: &str = r#"# {{ project_name }}

A Python CLI tool built with Click.

## Installation

```bash
pip install -r requirements.txt
```

## Usage

```bash
python -m src.main --name "Your Name"
```
"#;

const CLI_MAIN: &str = r#"#!/usr/bin/env python3
"""{{ project_name }} - CLI tool."""

import click


@click.command()
@click.option('--name', default='World', help='Name to greet')
def main(name):
    """Simple CLI tool."""
    click.echo(f'Hello, {name}!')


if __name__ == '__main__':
    main()
"#;

const CLI_TEST: &str = r#"from click.testing import CliRunner

from src.main import main


def test_main_greets_world():
    result = CliRunner().invoke(main)
    assert result.exit_code == 0
    assert "Hello, World!" in result.output


def test_main_greets_name():
    result = CliRunner().invoke(main, ["--name", "Ada"])
    assert "Hello, Ada!" in result.output
"#;

const CLI_DOCKERFILE: &str = r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

ENTRYPOINT ["python", "-m", "src.main"]
"#;

const FASTAPI_README: &str = r#"# {{ project_name }}

A FastAPI web application.

## Installation

```bash
pip install -r requirements.txt
```

## Usage

```bash
uvicorn src.main:app --reload
```

Visit http://localhost:8000/docs for API documentation.
"#;

const FASTAPI_MAIN: &str = r#"from fastapi import FastAPI

app = FastAPI(title="{{ project_name }}")


@app.get("/")
def read_root():
    return {"message": "Hello, World!"}


@app.get("/health")
def health_check():
    return {"status": "healthy"}
"#;

const FASTAPI_TEST: &str = r#"from fastapi.testclient import TestClient
from src.main import app

client = TestClient(app)


def test_read_root():
    response = client.get("/")
    assert response.status_code == 200
    assert "message" in response.json()


def test_health_check():
    response = client.get("/health")
    assert response.status_code == 200
    assert response.json()["status"] == "healthy"
"#;

const FASTAPI_DOCKERFILE: &str = r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

CMD ["uvicorn", "src.main:app", "--host", "0.0.0.0", "--port", "8000"]
"#;

const FASTAPI_COMPOSE: &str = r#"services:
  app:
    build: .
    ports:
      - "8000:8000"
    volumes:
      - .:/app
"#;
