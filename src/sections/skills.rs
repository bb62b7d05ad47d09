use std::time::Duration;

use ratatui::text::{Line, Span};

use super::render::{blank, gated, header};
use super::{ListDisplay, Section, SectionDisplay, SectionId};
use crate::config::AnimationConfig;
use crate::content::{Accent, SkillCategory};
use crate::motion::{RevealThreshold, RevealTrigger, StaggeredList};
use crate::ui::theme;

/// Category cards, each with its own service list. Services of category
/// `c` start with the category and step at half the card stagger.
pub struct SkillsSection {
    categories: Vec<SkillCategory>,
    trigger: RevealTrigger,
    cards: StaggeredList,
    services: Vec<StaggeredList>,
}

impl SkillsSection {
    pub fn new(
        categories: &[SkillCategory],
        animation: &AnimationConfig,
        threshold: RevealThreshold,
    ) -> Self {
        let stagger = animation.card_stagger();
        let services = categories
            .iter()
            .enumerate()
            .map(|(idx, category)| {
                StaggeredList::new(category.services.len(), stagger / 2)
                    .with_base_delay(stagger.saturating_mul(idx as u32))
            })
            .collect();

        Self {
            categories: categories.to_vec(),
            trigger: RevealTrigger::new(threshold),
            cards: StaggeredList::new(categories.len(), stagger),
            services,
        }
    }
}

impl Section for SkillsSection {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    fn trigger_mut(&mut self) -> &mut RevealTrigger {
        &mut self.trigger
    }

    fn on_reveal(&mut self, at: Duration) {
        self.cards.trigger(at);
        for list in &mut self.services {
            list.trigger(at);
        }
    }

    fn tick(&mut self, now: Duration) -> bool {
        let mut changed = self.cards.tick(now);
        for list in &mut self.services {
            changed |= list.tick(now);
        }
        changed
    }

    fn unmount(&mut self) {
        self.cards.cancel();
        for list in &mut self.services {
            list.cancel();
        }
    }

    fn lines(&self, _now: Duration) -> Vec<Line<'static>> {
        let mut lines = header(
            "CLOUD SKILLS DASHBOARD",
            Accent::Muted,
            "Technology Stack",
            "Expertise across cloud platforms, automation tools, and DevOps practices",
        );

        for (idx, (category, services)) in self.categories.iter().zip(&self.services).enumerate() {
            lines.push(blank());
            lines.extend(gated(
                self.cards.is_visible(idx),
                vec![Line::from(vec![
                    Span::styled("▌ ", theme::accent(category.accent)),
                    Span::styled(category.title.clone(), theme::heading()),
                ])],
            ));
            for (s, service) in category.services.iter().enumerate() {
                lines.extend(gated(
                    services.is_visible(s),
                    vec![Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format!("{:<14}", service.name), theme::accent(category.accent)),
                        Span::styled(service.description.clone(), theme::muted()),
                    ])],
                ));
            }
        }
        lines
    }

    fn display(&self) -> SectionDisplay {
        let mut display = SectionDisplay::new(SectionId::Skills, self.trigger.is_revealed());
        display.lists.push(ListDisplay::new("categories", &self.cards));
        for (category, list) in self.categories.iter().zip(&self.services) {
            display.lists.push(ListDisplay::new(category.title.clone(), list));
        }
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn section() -> SkillsSection {
        SkillsSection::new(
            &Portfolio::builtin().skills,
            &AnimationConfig::default(),
            RevealThreshold::default(),
        )
    }

    #[test]
    fn nothing_moves_before_reveal() {
        let mut skills = section();
        assert!(!skills.tick(ms(10_000)));
        assert_eq!(skills.cards.visible_count(), 0);
    }

    #[test]
    fn services_follow_their_category() {
        let mut skills = section();
        skills.on_reveal(ms(1000));
        skills.tick(ms(1000));
        assert_eq!(skills.cards.visible_count(), 1);
        assert_eq!(skills.services[0].visible_count(), 1);
        assert_eq!(skills.services[1].visible_count(), 0);

        // Category 1 starts at +100 ms, its second service at +150 ms.
        skills.tick(ms(1150));
        assert_eq!(skills.services[1].visible_count(), 2);
    }

    #[test]
    fn line_count_is_stable() {
        let mut skills = section();
        let before = skills.lines(ms(0)).len();
        skills.on_reveal(ms(0));
        skills.tick(ms(5000));
        assert_eq!(skills.lines(ms(5000)).len(), before);
    }
}
