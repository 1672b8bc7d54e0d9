pub mod context;
pub mod file;
pub mod plan;

pub use context::build_context;
pub use file::render_rule;
pub use plan::{
    execute_plan, plan_render, resolve_target, EmitPhase, GeneratedProject, GenerationPlan,
    PlannedFile,
};
