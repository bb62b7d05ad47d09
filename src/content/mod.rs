//! Static portfolio content.
//!
//! Records are plain data: the built-in portfolio, or a TOML file with the
//! same shape passed via `--content` / the `content` config key.

mod builtin;
mod loader;
mod types;

pub use loader::ContentError;
pub use types::{
    Accent, Certification, ContactCommand, ContactContent, Experience, HeroContent, Metric,
    PipelineContent, PipelineStage, Portfolio, Project, ProjectMetric, Service, SkillCategory,
    StageStatus,
};
