mod engine;

pub use engine::{collect_config, PromptOptions};
