use std::time::Duration;

use ratatui::text::{Line, Span};

use super::render::{blank, chips, gated, header};
use super::{ListDisplay, Section, SectionDisplay, SectionId};
use crate::config::AnimationConfig;
use crate::content::{Accent, Experience};
use crate::motion::{RevealThreshold, RevealTrigger, StaggeredList};
use crate::ui::theme;

/// Career timeline. Entries step at twice the card stagger and each
/// entry's achievements follow at half of it.
pub struct ExperienceSection {
    entries: Vec<Experience>,
    trigger: RevealTrigger,
    timeline: StaggeredList,
    achievements: Vec<StaggeredList>,
}

impl ExperienceSection {
    pub fn new(
        entries: &[Experience],
        animation: &AnimationConfig,
        threshold: RevealThreshold,
    ) -> Self {
        let step = animation.card_stagger().saturating_mul(2);
        let achievements = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                StaggeredList::new(entry.achievements.len(), animation.card_stagger() / 2)
                    .with_base_delay(step.saturating_mul(idx as u32))
            })
            .collect();

        Self {
            entries: entries.to_vec(),
            trigger: RevealTrigger::new(threshold),
            timeline: StaggeredList::new(entries.len(), step),
            achievements,
        }
    }
}

impl Section for ExperienceSection {
    fn id(&self) -> SectionId {
        SectionId::Experience
    }

    fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    fn trigger_mut(&mut self) -> &mut RevealTrigger {
        &mut self.trigger
    }

    fn on_reveal(&mut self, at: Duration) {
        self.timeline.trigger(at);
        for list in &mut self.achievements {
            list.trigger(at);
        }
    }

    fn tick(&mut self, now: Duration) -> bool {
        let mut changed = self.timeline.tick(now);
        for list in &mut self.achievements {
            changed |= list.tick(now);
        }
        changed
    }

    fn unmount(&mut self) {
        self.timeline.cancel();
        for list in &mut self.achievements {
            list.cancel();
        }
    }

    fn lines(&self, _now: Duration) -> Vec<Line<'static>> {
        let mut lines = header(
            "CAREER TIMELINE",
            Accent::Muted,
            "Professional Experience",
            "A journey through cloud infrastructure and DevOps excellence",
        );

        for (idx, (entry, achievements)) in self.entries.iter().zip(&self.achievements).enumerate()
        {
            let marker = if idx == 0 { Accent::Primary } else { Accent::Muted };
            let mut platforms = vec![Span::styled("│ ", theme::border())];
            platforms.extend(chips(&entry.platforms, Accent::Secondary));

            lines.push(blank());
            lines.extend(gated(
                self.timeline.is_visible(idx),
                vec![
                    Line::from(vec![
                        Span::styled("● ", theme::accent(marker)),
                        Span::styled(entry.role.clone(), theme::heading()),
                        Span::styled(format!("  {}", entry.duration), theme::muted()),
                    ]),
                    Line::from(vec![
                        Span::styled("│ ", theme::border()),
                        Span::styled(entry.company.clone(), theme::accent(Accent::Primary)),
                    ]),
                    Line::from(platforms),
                ],
            ));
            for (a, achievement) in entry.achievements.iter().enumerate() {
                lines.extend(gated(
                    achievements.is_visible(a),
                    vec![Line::from(vec![
                        Span::styled("│   ▸ ", theme::accent(Accent::Success)),
                        Span::styled(achievement.clone(), theme::text()),
                    ])],
                ));
            }
        }
        lines
    }

    fn display(&self) -> SectionDisplay {
        let mut display = SectionDisplay::new(SectionId::Experience, self.trigger.is_revealed());
        display.lists.push(ListDisplay::new("timeline", &self.timeline));
        for (entry, list) in self.entries.iter().zip(&self.achievements) {
            display.lists.push(ListDisplay::new(entry.company.clone(), list));
        }
        display
    }
}
