use std::time::Duration;

use ratatui::text::{Line, Span};

use super::render::{blank, gated};
use super::status::{StatusIndicator, SystemStatus};
use super::{metric_counter, metric_display, ListDisplay, Section, SectionDisplay, SectionId};
use crate::config::AnimationConfig;
use crate::content::{Accent, HeroContent, Metric};
use crate::motion::{MotionError, NumericCounter, RevealTrigger, StaggeredList};
use crate::ui::theme;

/// Delay before the first metric card appears.
const CARD_BASE_DELAY: Duration = Duration::from_millis(300);

/// Landing block. Revealed on mount rather than by scrolling.
pub struct HeroSection {
    content: HeroContent,
    trigger: RevealTrigger,
    counters: Vec<NumericCounter>,
    /// One slot per metric plus the certification badge.
    cards: StaggeredList,
    status: StatusIndicator,
}

impl HeroSection {
    pub fn new(
        content: &HeroContent,
        animation: &AnimationConfig,
        now: Duration,
    ) -> Result<Self, MotionError> {
        let counters = content
            .metrics
            .iter()
            .map(|metric| metric_counter(metric, animation.counter_duration(), animation.easing))
            .collect::<Result<Vec<_>, _>>()?;
        let cards = StaggeredList::new(content.metrics.len() + 1, animation.card_stagger())
            .with_base_delay(CARD_BASE_DELAY);
        let status = StatusIndicator::new(SystemStatus::Online, animation.pulse_period())
            .with_label(content.status_label.clone());

        Ok(Self {
            content: content.clone(),
            trigger: RevealTrigger::immediate(now),
            counters,
            cards,
            status,
        })
    }

    fn metric_line(&self, metric: &Metric, counter: &NumericCounter) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{}{}", counter.text(), metric.suffix),
                theme::badge(metric.accent),
            ),
            Span::raw("  "),
            Span::styled(metric.label.clone(), theme::muted()),
        ])
    }
}

impl Section for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    fn trigger_mut(&mut self) -> &mut RevealTrigger {
        &mut self.trigger
    }

    fn on_reveal(&mut self, at: Duration) {
        self.cards.trigger(at);
        self.status.start(at);
        for counter in &mut self.counters {
            counter.start(at);
        }
    }

    fn tick(&mut self, now: Duration) -> bool {
        let mut changed = self.cards.tick(now);
        for counter in &mut self.counters {
            changed |= counter.tick(now);
        }
        changed
    }

    fn unmount(&mut self) {
        self.cards.cancel();
        self.status.stop();
        for counter in &mut self.counters {
            counter.cancel();
        }
    }

    fn lines(&self, now: Duration) -> Vec<Line<'static>> {
        let mut status = vec![Span::styled(
            format!("{}  ", self.content.system_name),
            theme::muted(),
        )];
        status.extend(self.status.spans(now, true));

        let mut lines = vec![
            Line::from(status),
            Line::from(Span::styled(
                self.content.availability.clone(),
                theme::accent(Accent::Success),
            )),
            blank(),
            Line::from(Span::styled(
                self.content.title.clone(),
                theme::badge(Accent::Primary),
            )),
            Line::from(Span::styled(
                self.content.subtitle.clone(),
                theme::badge(Accent::Secondary),
            )),
            Line::from(Span::styled(self.content.tagline.clone(), theme::text())),
            blank(),
        ];

        for (idx, (metric, counter)) in self.content.metrics.iter().zip(&self.counters).enumerate() {
            lines.extend(gated(
                self.cards.is_visible(idx),
                vec![self.metric_line(metric, counter)],
            ));
        }
        lines.extend(gated(
            self.cards.is_visible(self.content.metrics.len()),
            vec![Line::from(vec![
                Span::raw("  "),
                Span::styled("Certified On ", theme::muted()),
                Span::styled(self.content.certified_on.clone(), theme::heading()),
            ])],
        ));
        lines
    }

    fn display(&self) -> SectionDisplay {
        let mut display = SectionDisplay::new(SectionId::Hero, self.trigger.is_revealed());
        display.counters = self
            .content
            .metrics
            .iter()
            .zip(&self.counters)
            .map(|(metric, counter)| metric_display(metric, counter))
            .collect();
        display.lists.push(ListDisplay::new("cards", &self.cards));
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::motion::CounterPhase;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn mounted() -> HeroSection {
        let content = Portfolio::builtin().hero;
        let mut hero = HeroSection::new(&content, &AnimationConfig::default(), ms(0)).unwrap();
        hero.on_reveal(ms(0));
        hero
    }

    #[test]
    fn revealed_on_mount() {
        let hero = mounted();
        assert!(hero.trigger().is_revealed());
        assert_eq!(hero.trigger().revealed_at(), Some(ms(0)));
    }

    #[test]
    fn cards_wait_for_base_delay() {
        let mut hero = mounted();
        hero.tick(ms(0));
        assert_eq!(hero.cards.visible_count(), 0);
        hero.tick(ms(300));
        assert_eq!(hero.cards.visible_count(), 1);
        hero.tick(ms(500));
        assert_eq!(hero.cards.visible_count(), 3);
        hero.tick(ms(600));
        assert!(hero.cards.is_complete());
    }

    #[test]
    fn counters_land_on_targets() {
        let mut hero = mounted();
        hero.tick(ms(1500));
        let display = hero.display();
        let texts: Vec<_> = display.counters.iter().map(|m| m.counter.text.as_str()).collect();
        assert_eq!(texts, vec!["99.9", "500", "3"]);
        assert!(display
            .counters
            .iter()
            .all(|m| m.counter.phase == CounterPhase::Complete));
    }

    #[test]
    fn line_count_is_stable() {
        let mut hero = mounted();
        let before = hero.lines(ms(0)).len();
        hero.tick(ms(2000));
        assert_eq!(hero.lines(ms(2000)).len(), before);
    }

    #[test]
    fn unmount_freezes_counters() {
        let mut hero = mounted();
        hero.tick(ms(100));
        let frozen = hero.display();
        hero.unmount();
        assert!(!hero.tick(ms(5000)));
        let after = hero.display();
        assert_eq!(after.lists, frozen.lists);
        assert_eq!(after.counters[0].counter.value, frozen.counters[0].counter.value);
        assert_eq!(after.counters[0].counter.phase, CounterPhase::Cancelled);
    }
}
