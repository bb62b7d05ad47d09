use serde::{Deserialize, Serialize};

/// Colour family a block is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// AWS orange.
    #[default]
    Primary,
    /// Azure blue.
    Secondary,
    Success,
    Muted,
}

/// Everything the page shows. Supplied as data, never computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: HeroContent,
    pub skills: Vec<SkillCategory>,
    pub pipeline: PipelineContent,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub experience: Vec<Experience>,
    pub contact: ContactContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub system_name: String,
    pub status_label: String,
    pub availability: String,
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub metrics: Vec<Metric>,
    pub certified_on: String,
}

/// A number that counts up when its block is revealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub suffix: String,
    /// Explicit decimal count; derived from `value` when absent.
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub accent: Accent,
}

impl Metric {
    /// One decimal for fractional values, none for whole numbers.
    pub fn decimals(&self) -> u8 {
        self.decimals
            .unwrap_or(if self.value.fract() != 0.0 { 1 } else { 0 })
    }

    pub fn is_percentage(&self) -> bool {
        self.suffix.trim_start().starts_with('%')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub accent: Accent,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineContent {
    pub stages: Vec<PipelineStage>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Complete,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub id: String,
    pub name: String,
    pub status: StageStatus,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub architecture: Vec<String>,
    pub tech_stack: Vec<String>,
    pub metrics: Vec<ProjectMetric>,
    #[serde(default)]
    pub accent: Accent,
}

/// Pre-formatted result shown on a project card ("50%", "10x").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub level: String,
    pub provider: String,
    pub year: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub platforms: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub host: String,
    pub prompt: String,
    pub commands: Vec<ContactCommand>,
    pub status_line: String,
    pub credit: String,
}

/// An outbound link rendered as a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCommand {
    pub cmd: String,
    pub label: String,
    pub url: String,
}
