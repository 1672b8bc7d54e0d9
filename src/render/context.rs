use tera::Context;

use crate::config::ProjectConfig;

/// Variables available to `Content::Template` rules.
pub fn build_context(config: &ProjectConfig) -> Context {
    let mut context = Context::new();
    context.insert("project_name", config.project_name.as_str());
    context
}
