use tera::{Context, Tera};

use crate::config::ProjectConfig;
use crate::error::{Result, ScaffoldError};
use crate::registry::{Content, FileRule};

/// Produce the bytes for one rule. Does not look at the rule's condition.
pub fn render_rule(rule: &FileRule, config: &ProjectConfig, context: &Context) -> Result<Vec<u8>> {
    let text = match rule.content {
        Content::Static(text) => text.to_string(),
        Content::Template(template) => interpolate(rule.path, template, context)?,
        Content::Generated(generate) => generate(config),
    };
    Ok(text.into_bytes())
}

/// Substitute context variables into `template`. Autoescaping is off: output
/// files are source code, not HTML pages.
pub fn interpolate(path: &str, template: &str, context: &Context) -> Result<String> {
    Tera::one_off(template, context, false).map_err(|e| ScaffoldError::Render {
        path: path.to_string(),
        source: e,
    })
}
