use std::time::Duration;

use ratatui::text::{Line, Span};

use super::render::{blank, gated, header};
use super::{ListDisplay, Section, SectionDisplay, SectionId};
use crate::config::AnimationConfig;
use crate::content::{Accent, Certification};
use crate::motion::{RevealThreshold, RevealTrigger, StaggeredList};
use crate::ui::theme;

pub struct CertificationsSection {
    certifications: Vec<Certification>,
    trigger: RevealTrigger,
    badges: StaggeredList,
}

impl CertificationsSection {
    pub fn new(
        certifications: &[Certification],
        animation: &AnimationConfig,
        threshold: RevealThreshold,
    ) -> Self {
        Self {
            certifications: certifications.to_vec(),
            trigger: RevealTrigger::new(threshold),
            badges: StaggeredList::new(certifications.len(), animation.card_stagger()),
        }
    }
}

impl Section for CertificationsSection {
    fn id(&self) -> SectionId {
        SectionId::Certifications
    }

    fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    fn trigger_mut(&mut self) -> &mut RevealTrigger {
        &mut self.trigger
    }

    fn on_reveal(&mut self, at: Duration) {
        self.badges.trigger(at);
    }

    fn tick(&mut self, now: Duration) -> bool {
        self.badges.tick(now)
    }

    fn unmount(&mut self) {
        self.badges.cancel();
    }

    fn lines(&self, _now: Duration) -> Vec<Line<'static>> {
        let mut lines = header(
            "CERTIFICATIONS",
            Accent::Secondary,
            "Professional Credentials",
            "Validated expertise across cloud platforms and DevOps tools",
        );
        lines.push(blank());

        for (idx, cert) in self.certifications.iter().enumerate() {
            lines.extend(gated(
                self.badges.is_visible(idx),
                vec![Line::from(vec![
                    Span::styled("  ◆ ", theme::accent(cert.accent)),
                    Span::styled(cert.name.clone(), theme::heading()),
                    Span::styled(format!(" ({})", cert.level), theme::accent(cert.accent)),
                    Span::styled(format!("  {} · {}", cert.provider, cert.year), theme::muted()),
                ])],
            ));
        }
        lines
    }

    fn display(&self) -> SectionDisplay {
        let mut display =
            SectionDisplay::new(SectionId::Certifications, self.trigger.is_revealed());
        display.lists.push(ListDisplay::new("badges", &self.badges));
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

    #[test]
    fn badges_appear_in_order() {
        let mut certs = CertificationsSection::new(
            &Portfolio::builtin().certifications,
            &AnimationConfig::default(),
            RevealThreshold::default(),
        );
        certs.on_reveal(ms(500));
        certs.tick(ms(650));
        assert_eq!(
            certs.display().list("badges").unwrap().visible,
            vec![true, true, false, false]
        );
        certs.unmount();
        assert!(!certs.tick(ms(2000)));
        assert_eq!(certs.badges.visible_count(), 2);
    }
}
