use crate::config::{Features, ProjectConfig};

/// How a rule produces the bytes of its file.
#[derive(Clone, Copy)]
pub enum Content {
    /// Written verbatim.
    Static(&'static str),
    /// Interpolated with `{{ project_name }}`.
    Template(&'static str),
    /// Built from the configuration (e.g. a dependency list that depends on
    /// selected features).
    Generated(fn(&ProjectConfig) -> String),
}

/// One output file of a template: where it goes, what it contains, and when
/// it applies.
#[derive(Clone, Copy)]
pub struct FileRule {
    /// Path relative to the project root, always `/`-separated.
    pub path: &'static str,
    pub content: Content,
    pub condition: fn(&Features) -> bool,
}

impl FileRule {
    pub const fn always(path: &'static str, content: Content) -> Self {
        Self {
            path,
            content,
            condition: always,
        }
    }

    pub const fn when(
        path: &'static str,
        content: Content,
        condition: fn(&Features) -> bool,
    ) -> Self {
        Self {
            path,
            content,
            condition,
        }
    }

    pub fn applies(&self, features: &Features) -> bool {
        (self.condition)(features)
    }
}

impl std::fmt::Debug for FileRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.content {
            Content::Static(_) => "static",
            Content::Template(_) => "template",
            Content::Generated(_) => "generated",
        };
        f.debug_struct("FileRule")
            .field("path", &self.path)
            .field("content", &kind)
            .finish()
    }
}

pub fn always(_: &Features) -> bool {
    true
}

pub fn with_docker(features: &Features) -> bool {
    features.docker
}

pub fn with_tests(features: &Features) -> bool {
    features.tests
}

pub fn with_linting(features: &Features) -> bool {
    features.linting
}
