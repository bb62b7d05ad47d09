//! Page sections and the composer that stacks them.
//!
//! Each section owns its [`RevealTrigger`] and the animators it drives.
//! The [`Page`] lays sections out top to bottom, hands every unrevealed
//! trigger the current visibility, and fans `tick`/`unmount` out. Sections
//! never talk to each other.

mod certifications;
mod contact;
mod experience;
mod hero;
mod pipeline;
mod projects;
mod render;
mod skills;
mod status;

use std::time::Duration;

use ratatui::text::Line;
use serde::Serialize;

use crate::config::AnimationConfig;
use crate::content::{ContactCommand, Metric, Portfolio};
use crate::motion::{
    CounterConfig, CounterDisplay, Easing, MotionError, NumericCounter, Region, RevealThreshold,
    RevealTrigger, StaggeredList, TypewriterDisplay, VisibilityObserver,
};

pub use certifications::CertificationsSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
pub use pipeline::PipelineSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
pub use status::{StatusIndicator, SystemStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Hero,
    Skills,
    Pipeline,
    Projects,
    Certifications,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Skills,
        SectionId::Pipeline,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Skills => "Skills",
            SectionId::Pipeline => "Pipeline",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certs",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

/// A counter plus the label and suffix drawn around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDisplay {
    pub label: String,
    pub suffix: String,
    #[serde(flatten)]
    pub counter: CounterDisplay,
}

/// Per-item visibility of one staggered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDisplay {
    pub name: String,
    pub visible: Vec<bool>,
}

impl ListDisplay {
    pub fn new(name: impl Into<String>, list: &StaggeredList) -> Self {
        Self {
            name: name.into(),
            visible: list.flags(),
        }
    }
}

/// Pure snapshot of a section's animation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionDisplay {
    pub id: SectionId,
    pub revealed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<MetricDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typewriter: Option<TypewriterDisplay>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<ListDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl SectionDisplay {
    pub fn new(id: SectionId, revealed: bool) -> Self {
        Self {
            id,
            revealed,
            counters: Vec::new(),
            typewriter: None,
            lists: Vec::new(),
            progress: None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&ListDisplay> {
        self.lists.iter().find(|list| list.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDisplay {
    pub sections: Vec<SectionDisplay>,
}

impl PageDisplay {
    pub fn section(&self, id: SectionId) -> Option<&SectionDisplay> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// One block of the page.
///
/// `lines` must return the same number of rows whatever the animation
/// state; hidden content is drawn as blank rows so regions stay put.
pub trait Section {
    fn id(&self) -> SectionId;

    fn trigger(&self) -> &RevealTrigger;

    fn trigger_mut(&mut self) -> &mut RevealTrigger;

    /// Called once, right after the trigger flips.
    fn on_reveal(&mut self, at: Duration);

    /// Advance every animator. Returns whether anything visible changed.
    fn tick(&mut self, now: Duration) -> bool;

    /// Cancel every timer the section owns.
    fn unmount(&mut self);

    fn lines(&self, now: Duration) -> Vec<Line<'static>>;

    fn display(&self) -> SectionDisplay;

    /// Outbound links currently on screen.
    fn links(&self) -> Vec<ContactCommand> {
        Vec::new()
    }
}

pub(crate) fn metric_counter(
    metric: &Metric,
    duration: Duration,
    easing: Easing,
) -> Result<NumericCounter, MotionError> {
    let config = if metric.is_percentage() {
        CounterConfig::percent(metric.value, duration, metric.decimals())?
    } else {
        CounterConfig::new(metric.value, duration, metric.decimals())?
    };
    Ok(NumericCounter::new(config.with_easing(easing)))
}

pub(crate) fn metric_display(metric: &Metric, counter: &NumericCounter) -> MetricDisplay {
    MetricDisplay {
        label: metric.label.clone(),
        suffix: metric.suffix.clone(),
        counter: counter.display(),
    }
}

/// Rendered page plus where each section landed.
pub struct PageFrame {
    pub lines: Vec<Line<'static>>,
    pub regions: Vec<Region>,
}

/// Rows between two sections.
const SECTION_GAP: u32 = 1;

/// The composed page: every section in display order.
pub struct Page {
    sections: Vec<Box<dyn Section>>,
    mounted: bool,
}

impl Page {
    /// Build every section from `content` and mount it at `now`.
    pub fn compose(
        content: &Portfolio,
        animation: &AnimationConfig,
        threshold: RevealThreshold,
        now: Duration,
    ) -> Result<Self, MotionError> {
        let sections: Vec<Box<dyn Section>> = vec![
            Box::new(HeroSection::new(&content.hero, animation, now)?),
            Box::new(SkillsSection::new(&content.skills, animation, threshold)),
            Box::new(PipelineSection::new(&content.pipeline, animation, threshold)?),
            Box::new(ProjectsSection::new(&content.projects, animation, threshold)),
            Box::new(CertificationsSection::new(
                &content.certifications,
                animation,
                threshold,
            )),
            Box::new(ExperienceSection::new(&content.experience, animation, threshold)),
            Box::new(ContactSection::new(&content.contact, animation, threshold, now)?),
        ];
        Ok(Self::from_sections(sections))
    }

    /// Mount already-built sections. Sections revealed on mount start
    /// animating immediately.
    pub fn from_sections(mut sections: Vec<Box<dyn Section>>) -> Self {
        for section in &mut sections {
            if let Some(at) = section.trigger().revealed_at() {
                section.on_reveal(at);
            }
        }
        Self {
            sections,
            mounted: true,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|section| section.id()).collect()
    }

    pub fn frame(&self, now: Duration) -> PageFrame {
        let mut lines = Vec::new();
        let mut regions = Vec::with_capacity(self.sections.len());
        let mut top = 0u32;

        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                for _ in 0..SECTION_GAP {
                    lines.push(Line::default());
                }
                top += SECTION_GAP;
            }
            let section_lines = section.lines(now);
            let height = u32::try_from(section_lines.len()).unwrap_or(u32::MAX);
            regions.push(Region::new(top, height));
            top = top.saturating_add(height);
            lines.extend(section_lines);
        }

        PageFrame { lines, regions }
    }

    /// Feed visibility to every unrevealed section. Returns how many
    /// sections were revealed by this call.
    pub fn observe(
        &mut self,
        observer: &dyn VisibilityObserver,
        regions: &[Region],
        now: Duration,
    ) -> usize {
        if !self.mounted {
            return 0;
        }

        let mut revealed = 0;
        for (section, region) in self.sections.iter_mut().zip(regions) {
            if section.trigger_mut().observe(observer, *region, now) {
                tracing::info!(section = ?section.id(), at_ms = now.as_millis() as u64, "section revealed");
                section.on_reveal(now);
                revealed += 1;
            }
        }
        revealed
    }

    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        let mut changed = false;
        for section in &mut self.sections {
            changed |= section.tick(now);
        }
        changed
    }

    /// Tear the page down: every section cancels its timers.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for section in &mut self.sections {
            section.unmount();
        }
        self.mounted = false;
        tracing::debug!("page unmounted");
    }

    pub fn display(&self) -> PageDisplay {
        PageDisplay {
            sections: self.sections.iter().map(|section| section.display()).collect(),
        }
    }

    pub fn links(&self) -> Vec<ContactCommand> {
        self.sections
            .iter()
            .flat_map(|section| section.links())
            .collect()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.unmount();
    }
}
