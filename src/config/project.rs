use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::registry::{Ecosystem, TemplateId};

/// npm refuses package names longer than this, and the project name doubles
/// as the package name for JavaScript templates.
const MAX_NAME_LEN: usize = 214;

/// Device names Windows will not create as files or directories, with or
/// without an extension.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub docker: bool,
    pub tests: bool,
    pub linting: bool,
}

impl Features {
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.docker {
            labels.push("docker");
        }
        if self.tests {
            labels.push("tests");
        }
        if self.linting {
            labels.push("linting");
        }
        labels
    }
}

/// Features as given on the command line: `Some` when a flag turned the
/// feature on or off, `None` when left to the user defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub docker: Option<bool>,
    pub tests: Option<bool>,
    pub linting: Option<bool>,
}

impl FeatureFlags {
    /// Explicit flags win; anything unset falls back to `defaults`.
    pub fn or_defaults(self, defaults: Features) -> Features {
        Features {
            docker: self.docker.unwrap_or(defaults.docker),
            tests: self.tests.unwrap_or(defaults.tests),
            linting: self.linting.unwrap_or(defaults.linting),
        }
    }
}

/// A project name that is safe to use as a single directory component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name).map_err(|reason| ScaffoldError::InvalidProjectName {
            name: name.clone(),
            reason: reason.to_string(),
        })?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for ProjectName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("project name pattern is valid")
    })
}

/// Returns the reason a name is rejected, if any.
pub fn validate_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("must not be empty");
    }
    if name == "." || name == ".." {
        return Err("must not be a relative directory reference");
    }
    if name.contains('/') || name.contains('\\') {
        return Err("must not contain path separators");
    }
    if name.len() > MAX_NAME_LEN {
        return Err("must be at most 214 characters");
    }
    if name.starts_with('.') || name.starts_with('-') {
        return Err("must start with a letter or digit");
    }
    if !name_pattern().is_match(name) {
        return Err("may only contain letters, digits, '.', '_' and '-'");
    }
    if name.ends_with('.') {
        return Err("must not end with '.'");
    }
    let stem = name.split('.').next().unwrap_or(name);
    if RESERVED_NAMES
        .iter()
        .any(|reserved| stem.eq_ignore_ascii_case(reserved))
    {
        return Err("must not be a reserved device name");
    }
    Ok(())
}

/// Extra rules for names that double as a package name. npm rejects
/// uppercase letters in `package.json`.
pub fn validate_package_name(name: &ProjectName, ecosystem: Ecosystem) -> Result<()> {
    if ecosystem == Ecosystem::JavaScript && name.0.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ScaffoldError::InvalidProjectName {
            name: name.0.clone(),
            reason: "must be lowercase for an npm package".to_string(),
        });
    }
    Ok(())
}

/// The fully-resolved choices handed to the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub template: TemplateId,
    pub project_name: ProjectName,
    pub features: Features,
}

impl ProjectConfig {
    pub fn new(template: TemplateId, project_name: &str, features: Features) -> Result<Self> {
        Ok(Self {
            template,
            project_name: ProjectName::new(project_name)?,
            features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo")]
    #[case("my-app")]
    #[case("my_app.v2")]
    #[case("App2")]
    #[case("9lives")]
    #[case("console")]
    #[case("lpt10")]
    fn test_valid_names(#[case] name: &str) {
        assert_eq!(ProjectName::new(name).unwrap().as_str(), name);
    }

    #[rstest]
    #[case("", "must not be empty")]
    #[case("   ", "must not be empty")]
    #[case(".", "must not be a relative directory reference")]
    #[case("..", "must not be a relative directory reference")]
    #[case("a/b", "must not contain path separators")]
    #[case("..\\evil", "must not contain path separators")]
    #[case(".hidden", "must start with a letter or digit")]
    #[case("-rf", "must start with a letter or digit")]
    #[case("my app", "may only contain letters, digits, '.', '_' and '-'")]
    #[case("caf\u{e9}", "may only contain letters, digits, '.', '_' and '-'")]
    #[case("app.", "must not end with '.'")]
    #[case("CON", "must not be a reserved device name")]
    #[case("nul", "must not be a reserved device name")]
    #[case("com1.txt", "must not be a reserved device name")]
    fn test_invalid_names(#[case] name: &str, #[case] reason: &str) {
        assert_eq!(validate_name(name), Err(reason));

        match ProjectName::new(name).unwrap_err() {
            ScaffoldError::InvalidProjectName { name: got, reason: r } => {
                assert_eq!(got, name);
                assert_eq!(r, reason);
            }
            other => panic!("expected InvalidProjectName, got {other:?}"),
        }
    }

    #[test]
    fn test_name_length_limit() {
        assert!(validate_name(&"a".repeat(MAX_NAME_LEN)).is_ok());
        assert_eq!(
            validate_name(&"a".repeat(MAX_NAME_LEN + 1)),
            Err("must be at most 214 characters")
        );
    }

    #[test]
    fn test_explicit_flags_beat_defaults() {
        let flags = FeatureFlags {
            docker: Some(false),
            tests: Some(true),
            linting: None,
        };
        let defaults = Features {
            docker: true,
            tests: false,
            linting: true,
        };
        let features = flags.or_defaults(defaults);
        assert_eq!(features.labels(), vec!["tests", "linting"]);
        assert_eq!(FeatureFlags::default().or_defaults(defaults), defaults);
        assert!(Features::default().labels().is_empty());
    }

    #[test]
    fn test_package_name_must_be_lowercase_for_javascript() {
        let name = ProjectName::new("MyApp").unwrap();
        assert!(validate_package_name(&name, Ecosystem::Python).is_ok());
        assert!(matches!(
            validate_package_name(&name, Ecosystem::JavaScript),
            Err(ScaffoldError::InvalidProjectName { .. })
        ));

        let name = ProjectName::new("my-app").unwrap();
        assert!(validate_package_name(&name, Ecosystem::JavaScript).is_ok());
    }

    #[test]
    fn test_project_config_rejects_bad_name() {
        let result = ProjectConfig::new(TemplateId::React, "a/b", Features::default());
        assert!(matches!(
            result,
            Err(ScaffoldError::InvalidProjectName { .. })
        ));
    }
}
