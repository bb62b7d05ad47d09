use std::time::Duration;

use ratatui::text::{Line, Span};

use super::render::{blank, chips, gated, gated_span, header};
use super::{ListDisplay, Section, SectionDisplay, SectionId};
use crate::config::AnimationConfig;
use crate::content::{Accent, Project};
use crate::motion::{RevealThreshold, RevealTrigger, StaggeredList};
use crate::ui::theme;

/// Project cards with an architecture diagram that draws node by node.
pub struct ProjectsSection {
    projects: Vec<Project>,
    trigger: RevealTrigger,
    cards: StaggeredList,
    nodes: Vec<StaggeredList>,
}

impl ProjectsSection {
    pub fn new(
        projects: &[Project],
        animation: &AnimationConfig,
        threshold: RevealThreshold,
    ) -> Self {
        let stagger = animation.card_stagger();
        let nodes = projects
            .iter()
            .enumerate()
            .map(|(idx, project)| {
                StaggeredList::new(project.architecture.len(), stagger)
                    .with_base_delay(stagger.saturating_mul(idx as u32))
            })
            .collect();

        Self {
            projects: projects.to_vec(),
            trigger: RevealTrigger::new(threshold),
            cards: StaggeredList::new(projects.len(), stagger.saturating_mul(3) / 2),
            nodes,
        }
    }

    /// Nodes belong to their card and stay blank until it is shown.
    fn architecture_line(
        project: &Project,
        nodes: &StaggeredList,
        card_visible: bool,
    ) -> Line<'static> {
        let mut spans = vec![Span::raw("  ")];
        for (n, node) in project.architecture.iter().enumerate() {
            let visible = card_visible && nodes.is_visible(n);
            if n > 0 {
                spans.push(gated_span(visible, Span::styled(" → ", theme::muted())));
            }
            spans.push(gated_span(
                visible,
                Span::styled(format!("[{node}]"), theme::accent(project.accent)),
            ));
        }
        Line::from(spans)
    }
}

impl Section for ProjectsSection {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    fn trigger_mut(&mut self) -> &mut RevealTrigger {
        &mut self.trigger
    }

    fn on_reveal(&mut self, at: Duration) {
        self.cards.trigger(at);
        for list in &mut self.nodes {
            list.trigger(at);
        }
    }

    fn tick(&mut self, now: Duration) -> bool {
        let mut changed = self.cards.tick(now);
        for list in &mut self.nodes {
            changed |= list.tick(now);
        }
        changed
    }

    fn unmount(&mut self) {
        self.cards.cancel();
        for list in &mut self.nodes {
            list.cancel();
        }
    }

    fn lines(&self, _now: Duration) -> Vec<Line<'static>> {
        let mut lines = header(
            "ARCHITECTURE MODE",
            Accent::Muted,
            "Infrastructure Projects",
            "Real-world cloud architectures and automation solutions",
        );

        for (idx, (project, nodes)) in self.projects.iter().zip(&self.nodes).enumerate() {
            let card_visible = self.cards.is_visible(idx);
            lines.push(blank());
            lines.extend(gated(
                card_visible,
                vec![
                    Line::from(Span::styled(project.title.clone(), theme::heading())),
                    Line::from(Span::styled(project.description.clone(), theme::muted())),
                ],
            ));
            lines.push(Self::architecture_line(project, nodes, card_visible));

            let mut stack = vec![Span::raw("  ")];
            stack.extend(chips(&project.tech_stack, Accent::Muted));
            let mut metrics = vec![Span::raw("  ")];
            for (m, metric) in project.metrics.iter().enumerate() {
                if m > 0 {
                    metrics.push(Span::styled("  ·  ", theme::border()));
                }
                metrics.push(Span::styled(metric.value.clone(), theme::badge(project.accent)));
                metrics.push(Span::styled(format!(" {}", metric.label), theme::muted()));
            }
            lines.extend(gated(card_visible, vec![Line::from(stack), Line::from(metrics)]));
        }
        lines
    }

    fn display(&self) -> SectionDisplay {
        let mut display = SectionDisplay::new(SectionId::Projects, self.trigger.is_revealed());
        display.lists.push(ListDisplay::new("cards", &self.cards));
        for (project, list) in self.projects.iter().zip(&self.nodes) {
            display.lists.push(ListDisplay::new(project.title.clone(), list));
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

    fn revealed() -> ProjectsSection {
        let mut projects = ProjectsSection::new(
            &Portfolio::builtin().projects,
            &AnimationConfig::default(),
            RevealThreshold::default(),
        );
        projects.on_reveal(ms(0));
        projects
    }

    #[test]
    fn cards_step_at_150ms() {
        let mut projects = revealed();
        projects.tick(ms(149));
        assert_eq!(projects.cards.visible_count(), 1);
        projects.tick(ms(150));
        assert_eq!(projects.cards.visible_count(), 2);
        projects.tick(ms(300));
        assert!(projects.cards.is_complete());
    }

    #[test]
    fn nodes_offset_by_project() {
        let mut projects = revealed();
        projects.tick(ms(100));
        assert_eq!(projects.nodes[0].visible_count(), 2);
        assert_eq!(projects.nodes[1].visible_count(), 1);
        assert_eq!(projects.nodes[2].visible_count(), 0);
    }

    #[test]
    fn nodes_wait_for_their_card() {
        let mut projects = revealed();
        projects.tick(ms(100));
        assert_eq!(projects.nodes[1].visible_count(), 1);
        assert!(!projects.cards.is_visible(1));
        // Header, six rows of the first card, then blank/title/description.
        let diagram = projects.lines(ms(100))[3 + 6 + 3].to_string();
        assert!(diagram.trim().is_empty(), "{diagram:?}");

        projects.tick(ms(150));
        let diagram = projects.lines(ms(150))[3 + 6 + 3].to_string();
        assert!(diagram.contains('['));
    }

    #[test]
    fn hidden_nodes_keep_line_width() {
        let before = revealed();
        let mut after = revealed();
        after.tick(ms(1000));
        let hidden =
            ProjectsSection::architecture_line(&before.projects[0], &before.nodes[0], false);
        let shown = ProjectsSection::architecture_line(&after.projects[0], &after.nodes[0], true);
        assert_eq!(hidden.width(), shown.width());
        assert_eq!(before.lines(ms(0)).len(), after.lines(ms(1000)).len());
    }
}
