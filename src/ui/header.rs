use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::theme;

const SITE_TITLE: &str = "devops-portfolio.sys";

pub struct Header;

impl Header {
    pub fn widget(app: &App) -> Paragraph<'static> {
        let separator = Style::default().fg(theme::PANEL_BORDER);
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(SITE_TITLE, theme::heading()),
            Span::styled("  │  ", separator),
        ];
        spans.extend(app.status().spans(app.now(), true));
        if let Some(section) = app.current_section() {
            spans.push(Span::styled("  │  ", separator));
            spans.push(Span::styled(section.title(), theme::muted()));
        }
        spans.push(Span::styled("  │  ", separator));
        spans.push(Span::styled(
            format!("{:>3.0}%", app.scroll().progress() * 100.0),
            theme::muted(),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(theme::border()),
        )
    }
}
