use std::time::Duration;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::render::{blank, gated, header};
use super::{metric_counter, metric_display, ListDisplay, Section, SectionDisplay, SectionId};
use crate::config::AnimationConfig;
use crate::content::{Accent, PipelineContent, StageStatus};
use crate::motion::{
    MotionError, NumericCounter, RevealThreshold, RevealTrigger, StaggeredList, Tween,
};
use crate::ui::theme;

const STAGE_BASE_DELAY: Duration = Duration::from_millis(200);
const STAGE_STAGGER: Duration = Duration::from_millis(120);
const CONNECTOR_DELAY: Duration = Duration::from_millis(300);
/// Share of the connector bar filled once the tween lands.
const CONNECTOR_TARGET: f64 = 75.0;
const CONNECTOR_WIDTH: usize = 40;

/// Stage row, connector bar and pipeline metrics.
pub struct PipelineSection {
    content: PipelineContent,
    trigger: RevealTrigger,
    stages: StaggeredList,
    connector: Tween,
    connector_value: f64,
    cards: StaggeredList,
    counters: Vec<NumericCounter>,
    mounted: bool,
}

impl PipelineSection {
    pub fn new(
        content: &PipelineContent,
        animation: &AnimationConfig,
        threshold: RevealThreshold,
    ) -> Result<Self, MotionError> {
        let counters = content
            .metrics
            .iter()
            .map(|metric| metric_counter(metric, animation.counter_duration(), animation.easing))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            content: content.clone(),
            trigger: RevealTrigger::new(threshold),
            stages: StaggeredList::new(content.stages.len(), STAGE_STAGGER)
                .with_base_delay(STAGE_BASE_DELAY),
            connector: Tween::new(0.0, CONNECTOR_TARGET, animation.connector_duration())
                .with_delay(CONNECTOR_DELAY)
                .with_easing(animation.easing),
            connector_value: 0.0,
            cards: StaggeredList::new(content.metrics.len(), animation.card_stagger())
                .with_base_delay(STAGE_BASE_DELAY),
            counters,
            mounted: true,
        })
    }

    pub fn connector_value(&self) -> f64 {
        self.connector_value
    }

    fn tick_connector(&mut self, now: Duration) -> bool {
        if !self.mounted || self.connector.started_at().is_none() {
            return false;
        }
        if self.connector_value >= self.connector.to() {
            return false;
        }
        let next = self.connector.value_at(now);
        let changed = next != self.connector_value;
        self.connector_value = next;
        changed
    }

    fn connector_line(&self) -> Line<'static> {
        let filled = ((self.connector_value / 100.0) * CONNECTOR_WIDTH as f64).round() as usize;
        let filled = filled.min(CONNECTOR_WIDTH);
        Line::from(vec![
            Span::raw("  "),
            Span::styled("━".repeat(filled), theme::accent(Accent::Primary)),
            Span::styled("─".repeat(CONNECTOR_WIDTH - filled), theme::border()),
            Span::styled(format!(" {:>3.0}%", self.connector_value), theme::muted()),
        ])
    }
}

fn stage_glyph(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Complete => "✓",
        StageStatus::Active => "▶",
        StageStatus::Pending => "○",
    }
}

impl Section for PipelineSection {
    fn id(&self) -> SectionId {
        SectionId::Pipeline
    }

    fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    fn trigger_mut(&mut self) -> &mut RevealTrigger {
        &mut self.trigger
    }

    fn on_reveal(&mut self, at: Duration) {
        self.stages.trigger(at);
        self.cards.trigger(at);
        self.connector.start(at);
        for counter in &mut self.counters {
            counter.start(at);
        }
    }

    fn tick(&mut self, now: Duration) -> bool {
        let mut changed = self.stages.tick(now);
        changed |= self.cards.tick(now);
        changed |= self.tick_connector(now);
        for counter in &mut self.counters {
            changed |= counter.tick(now);
        }
        changed
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.stages.cancel();
        self.cards.cancel();
        for counter in &mut self.counters {
            counter.cancel();
        }
    }

    fn lines(&self, _now: Duration) -> Vec<Line<'static>> {
        let mut lines = header(
            "CI/CD PIPELINE",
            Accent::Primary,
            "Automated Delivery Pipeline",
            "End-to-end automation from code commit to production deployment",
        );
        lines.push(blank());

        for (idx, stage) in self.content.stages.iter().enumerate() {
            let color = Style::default().fg(theme::stage_color(stage.status));
            lines.extend(gated(
                self.stages.is_visible(idx),
                vec![Line::from(vec![
                    Span::styled(format!("  {} ", stage_glyph(stage.status)), color),
                    Span::styled(format!("{:<9}", stage.name), theme::heading()),
                    Span::styled(stage.description.clone(), theme::muted()),
                ])],
            ));
        }

        lines.push(blank());
        lines.push(self.connector_line());
        lines.push(blank());

        for (idx, (metric, counter)) in self.content.metrics.iter().zip(&self.counters).enumerate() {
            lines.extend(gated(
                self.cards.is_visible(idx),
                vec![Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{}{}", counter.text(), metric.suffix),
                        theme::badge(metric.accent),
                    ),
                    Span::raw("  "),
                    Span::styled(metric.label.clone(), theme::muted()),
                ])],
            ));
        }
        lines
    }

    fn display(&self) -> SectionDisplay {
        let mut display = SectionDisplay::new(SectionId::Pipeline, self.trigger.is_revealed());
        display.counters = self
            .content
            .metrics
            .iter()
            .zip(&self.counters)
            .map(|(metric, counter)| metric_display(metric, counter))
            .collect();
        display.lists.push(ListDisplay::new("stages", &self.stages));
        display.lists.push(ListDisplay::new("metrics", &self.cards));
        display.progress = Some(self.connector_value);
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::motion::Easing;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn revealed_at(at: u64) -> PipelineSection {
        let mut pipeline = PipelineSection::new(
            &Portfolio::builtin().pipeline,
            &AnimationConfig::default(),
            RevealThreshold::default(),
        )
        .unwrap();
        pipeline.on_reveal(ms(at));
        pipeline
    }

    #[test]
    fn stages_step_after_base_delay() {
        let mut pipeline = revealed_at(0);
        pipeline.tick(ms(199));
        assert_eq!(pipeline.stages.visible_count(), 0);
        pipeline.tick(ms(200));
        assert_eq!(pipeline.stages.visible_count(), 1);
        pipeline.tick(ms(440));
        assert_eq!(pipeline.stages.visible_count(), 3);
        pipeline.tick(ms(680));
        assert!(pipeline.stages.is_complete());
    }

    #[test]
    fn connector_waits_then_lands_on_target() {
        let mut pipeline = revealed_at(0);
        pipeline.tick(ms(300));
        assert_eq!(pipeline.connector_value(), 0.0);
        pipeline.tick(ms(1200));
        let mid = pipeline.connector_value();
        assert!(mid > 0.0 && mid < CONNECTOR_TARGET);
        pipeline.tick(ms(2100));
        assert_eq!(pipeline.connector_value(), CONNECTOR_TARGET);
        assert!(!pipeline.tick(ms(3000)));
    }

    #[test]
    fn configured_easing_drives_connector() {
        let animation = AnimationConfig {
            easing: Easing::Linear,
            ..AnimationConfig::default()
        };
        let mut pipeline = PipelineSection::new(
            &Portfolio::builtin().pipeline,
            &animation,
            RevealThreshold::default(),
        )
        .unwrap();
        pipeline.on_reveal(ms(0));
        pipeline.tick(ms(1200));
        assert_eq!(pipeline.connector_value(), CONNECTOR_TARGET / 2.0);
    }

    #[test]
    fn unmount_stops_connector() {
        let mut pipeline = revealed_at(0);
        pipeline.tick(ms(900));
        let frozen = pipeline.connector_value();
        pipeline.unmount();
        assert!(!pipeline.tick(ms(5000)));
        assert_eq!(pipeline.connector_value(), frozen);
    }

    #[test]
    fn counters_reach_targets() {
        let mut pipeline = revealed_at(0);
        pipeline.tick(ms(1500));
        let texts: Vec<_> = pipeline
            .display()
            .counters
            .into_iter()
            .map(|m| format!("{}{}", m.counter.text, m.suffix))
            .collect();
        assert_eq!(texts, vec!["60%", "95% ↓", "98%"]);
    }

    #[test]
    fn line_count_is_stable() {
        let mut pipeline = revealed_at(0);
        let before = pipeline.lines(ms(0)).len();
        pipeline.tick(ms(4000));
        assert_eq!(pipeline.lines(ms(4000)).len(), before);
    }
}
