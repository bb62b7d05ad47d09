use std::time::Duration;

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::motion::Pulse;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Online,
    Warning,
    Offline,
}

impl SystemStatus {
    pub fn label(self) -> &'static str {
        match self {
            SystemStatus::Online => "Online",
            SystemStatus::Warning => "Warning",
            SystemStatus::Offline => "Offline",
        }
    }

    pub fn color(self) -> Color {
        match self {
            SystemStatus::Online => theme::SUCCESS_GREEN,
            SystemStatus::Warning => theme::AWS_ORANGE,
            SystemStatus::Offline => theme::DESTRUCTIVE_RED,
        }
    }
}

/// Pulsing status dot with an optional label.
#[derive(Debug, Clone)]
pub struct StatusIndicator {
    status: SystemStatus,
    label: Option<String>,
    pulse: Pulse,
}

impl StatusIndicator {
    pub fn new(status: SystemStatus, period: Duration) -> Self {
        Self {
            status,
            label: None,
            pulse: Pulse::new(period),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn start(&mut self, now: Duration) {
        self.pulse.start(now);
    }

    pub fn stop(&mut self) {
        self.pulse.stop();
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.status.label())
    }

    pub fn dot(&self, now: Duration) -> char {
        if self.pulse.is_high(now) {
            '●'
        } else {
            '○'
        }
    }

    pub fn spans(&self, now: Duration, show_label: bool) -> Vec<Span<'static>> {
        let style = Style::default().fg(self.status.color());
        let mut spans = vec![Span::styled(self.dot(now).to_string(), style)];
        if show_label {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(self.label().to_string(), theme::text()));
        }
        spans
    }
}
