pub mod project;
pub mod user;

pub use project::{
    validate_name, validate_package_name, FeatureFlags, Features, ProjectConfig, ProjectName,
};
pub use user::{load_user_config, load_user_config_from, UserConfig};
