use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::Accent;
use crate::ui::app::App;
use crate::ui::theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " j/k: Scroll │ Space: Page │ 1-7: Section │ Tab: Link │ q: Quit";

pub struct Footer;

impl Footer {
    pub fn widget(app: &App, area: Rect) -> Paragraph<'static> {
        let text_style = theme::muted().add_modifier(Modifier::DIM);
        let version = format!("v{VERSION} ");

        let mut spans = Vec::new();
        let left_width = match app.selected_link() {
            Some(link) => {
                let label = format!(" {} → ", link.label);
                let width = label.chars().count() + link.url.chars().count();
                spans.push(Span::styled(label, theme::muted()));
                spans.push(Span::styled(link.url, theme::accent(Accent::Primary)));
                width
            }
            None => {
                spans.push(Span::styled(HINTS, text_style));
                HINTS.chars().count()
            }
        };

        // Char count, not bytes: hints contain box-drawing glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border()),
        )
    }
}
