use std::time::Duration;

use ratatui::text::{Line, Span};

use super::render::{blank, gated, header};
use super::{ListDisplay, Section, SectionDisplay, SectionId};
use crate::config::AnimationConfig;
use crate::content::{Accent, ContactCommand, ContactContent};
use crate::motion::{
    MotionError, RevealThreshold, RevealTrigger, StaggeredList, TypewriterConfig,
    TypewriterSequencer,
};
use crate::ui::theme;

/// Terminal window that types its prompt once revealed, then lists the
/// contact commands.
///
/// The command list is triggered off the typewriter's gate, not off the
/// section reveal: nothing is listed before the prompt is fully typed.
pub struct ContactSection {
    content: ContactContent,
    trigger: RevealTrigger,
    typewriter: TypewriterSequencer,
    commands: StaggeredList,
}

impl ContactSection {
    /// Mount at `now`. The cursor blinks from here on; typing waits for
    /// the reveal.
    pub fn new(
        content: &ContactContent,
        animation: &AnimationConfig,
        threshold: RevealThreshold,
        now: Duration,
    ) -> Result<Self, MotionError> {
        let config = TypewriterConfig::new(content.prompt.clone(), animation.type_interval())?
            .with_blink_interval(animation.cursor_blink());

        Ok(Self {
            content: content.clone(),
            trigger: RevealTrigger::new(threshold),
            typewriter: TypewriterSequencer::new(config, now),
            commands: StaggeredList::new(content.commands.len(), animation.contact_stagger()),
        })
    }

    pub fn typewriter(&self) -> &TypewriterSequencer {
        &self.typewriter
    }

    pub fn commands(&self) -> &StaggeredList {
        &self.commands
    }

    fn prompt_line(&self) -> Line<'static> {
        let cursor = if self.typewriter.cursor_on() { "█" } else { " " };
        Line::from(vec![
            Span::styled(format!("{} ", self.content.host), theme::accent(Accent::Success)),
            Span::styled(self.typewriter.shown_text().to_string(), theme::text()),
            Span::styled(cursor, theme::accent(Accent::Success)),
        ])
    }

    fn command_line(command: &ContactCommand) -> Line<'static> {
        Line::from(vec![
            Span::styled("$ ", theme::accent(Accent::Success)),
            Span::styled(format!("{} ", command.cmd), theme::accent(Accent::Primary)),
            Span::styled(format!("{:<10}", command.label), theme::heading()),
            Span::styled(command.url.clone(), theme::muted()),
        ])
    }
}

impl Section for ContactSection {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    fn trigger_mut(&mut self) -> &mut RevealTrigger {
        &mut self.trigger
    }

    fn on_reveal(&mut self, at: Duration) {
        self.typewriter.start(at);
        // An empty prompt completes on start.
        if let Some(unlocked) = self.typewriter.gate().unlocked_at() {
            self.commands.trigger(unlocked);
        }
    }

    fn tick(&mut self, now: Duration) -> bool {
        let mut changed = self.typewriter.tick(now);
        if let Some(unlocked) = self.typewriter.gate().unlocked_at() {
            self.commands.trigger(unlocked);
        }
        changed |= self.commands.tick(now);
        changed
    }

    fn unmount(&mut self) {
        self.typewriter.cancel();
        self.commands.cancel();
    }

    fn lines(&self, _now: Duration) -> Vec<Line<'static>> {
        let mut lines = header(
            "TERMINAL",
            Accent::Success,
            "Let's Connect",
            "Ready to discuss your next infrastructure project",
        );
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            format!("┌─ {} ", self.content.host),
            theme::border(),
        )));
        lines.push(self.prompt_line());
        lines.push(blank());
        lines.push(Line::from(Span::styled("Available connections:", theme::muted())));

        for (idx, command) in self.content.commands.iter().enumerate() {
            lines.extend(gated(
                self.commands.is_visible(idx),
                vec![Self::command_line(command)],
            ));
        }

        lines.push(blank());
        lines.extend(gated(
            self.commands.is_triggered() && self.commands.is_complete(),
            vec![Line::from(Span::styled(
                format!("✓ {}", self.content.status_line),
                theme::accent(Accent::Success),
            ))],
        ));
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            self.content.credit.clone(),
            theme::muted(),
        )));
        lines
    }

    fn display(&self) -> SectionDisplay {
        let mut display = SectionDisplay::new(SectionId::Contact, self.trigger.is_revealed());
        display.typewriter = Some(self.typewriter.current_display());
        display.lists.push(ListDisplay::new("commands", &self.commands));
        display
    }

    fn links(&self) -> Vec<ContactCommand> {
        self.content
            .commands
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.commands.is_visible(*idx))
            .map(|(_, command)| command.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::motion::TypewriterPhase;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn section(type_ms: u64) -> ContactSection {
        let animation = AnimationConfig {
            type_interval_ms: type_ms,
            ..AnimationConfig::default()
        };
        ContactSection::new(
            &Portfolio::builtin().contact,
            &animation,
            RevealThreshold::default(),
            ms(0),
        )
        .unwrap()
    }

    #[test]
    fn commands_wait_for_the_prompt() {
        let mut contact = section(80);
        contact.on_reveal(ms(0));
        for t in (0..1040).step_by(10) {
            contact.tick(ms(t));
            assert_eq!(contact.commands().visible_count(), 0, "t={t}");
            assert!(contact.links().is_empty());
        }
        contact.tick(ms(1040));
        assert!(contact.typewriter().commands_unlocked());
        assert_eq!(contact.commands().visible_count(), 1);
    }

    #[test]
    fn commands_stagger_off_unlock_time() {
        let mut contact = section(80);
        contact.on_reveal(ms(0));
        // Coarse frames: the gate still opens at the exact due time.
        contact.tick(ms(1100));
        assert_eq!(contact.typewriter().gate().unlocked_at(), Some(ms(1040)));
        assert_eq!(contact.commands().visible_count(), 1);
        contact.tick(ms(1140));
        assert_eq!(contact.commands().visible_count(), 2);
        contact.tick(ms(1340));
        let cmds: Vec<_> = contact.links().into_iter().map(|c| c.cmd).collect();
        assert_eq!(cmds, vec!["ssh", "curl", "wget", "git clone"]);
    }

    #[test]
    fn unrevealed_section_never_types() {
        let mut contact = section(80);
        contact.tick(ms(5000));
        assert_eq!(contact.typewriter().phase(), TypewriterPhase::Idle);
        assert_eq!(contact.typewriter().shown_length(), 0);
    }

    #[test]
    fn unmount_mid_typing_freezes_state() {
        let mut contact = section(80);
        contact.on_reveal(ms(0));
        contact.tick(ms(400));
        let frozen = contact.display();
        contact.unmount();
        for t in (400..3000).step_by(33) {
            assert!(!contact.tick(ms(t)));
        }
        assert_eq!(contact.display(), frozen);
    }

    #[test]
    fn connections_heading_is_always_drawn() {
        let mut contact = section(80);
        assert_eq!(contact.lines(ms(0))[7].to_string(), "Available connections:");
        contact.on_reveal(ms(0));
        contact.tick(ms(1340));
        let lines = contact.lines(ms(1340));
        assert_eq!(lines[7].to_string(), "Available connections:");
        assert!(lines[8].to_string().contains("ssh"));
    }

    #[test]
    fn status_line_after_last_command() {
        let mut contact = section(80);
        contact.on_reveal(ms(0));
        let rows = contact.lines(ms(0)).len();
        contact.tick(ms(1339));
        let text: String = contact.lines(ms(1339))[13].to_string();
        assert!(text.trim().is_empty());
        contact.tick(ms(1340));
        let lines = contact.lines(ms(1340));
        assert_eq!(lines.len(), rows);
        assert!(lines[13].to_string().contains("Ready to accept connections"));
    }
}
