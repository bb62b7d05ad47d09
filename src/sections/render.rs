use ratatui::text::{Line, Span};

use crate::content::Accent;
use crate::ui::theme;

/// Badge, title and subtitle rows that open every section.
pub(crate) fn header(badge: &str, accent: Accent, title: &str, subtitle: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(format!("[ {badge} ]"), theme::badge(accent))),
        Line::from(Span::styled(title.to_string(), theme::heading())),
        Line::from(Span::styled(subtitle.to_string(), theme::muted())),
    ]
}

/// Keep the rows, drop the content while hidden.
pub(crate) fn gated(visible: bool, lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    if visible {
        lines
    } else {
        vec![Line::default(); lines.len()]
    }
}

/// Same as [`gated`] for a single span: hidden spans keep their width.
pub(crate) fn gated_span(visible: bool, span: Span<'static>) -> Span<'static> {
    if visible {
        span
    } else {
        Span::raw(" ".repeat(span.width()))
    }
}

pub(crate) fn blank() -> Line<'static> {
    Line::default()
}

pub(crate) fn chips(items: &[String], accent: Accent) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{item}]"), theme::accent(accent)));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_keeps_row_count() {
        let lines = vec![Line::from("a"), Line::from("b")];
        let hidden = gated(false, lines.clone());
        assert_eq!(hidden.len(), 2);
        assert_eq!(hidden[0].width(), 0);
        assert_eq!(gated(true, lines.clone()), lines);
    }

    #[test]
    fn gated_span_keeps_width() {
        let span = gated_span(false, Span::raw("Route 53"));
        assert_eq!(span.width(), 8);
        assert!(span.content.trim().is_empty());
    }
}
