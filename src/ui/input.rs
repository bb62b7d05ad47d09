use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::scroll::ScrollIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('j') | KeyCode::Down => app.dispatch(ScrollIntent::LineDown),
        KeyCode::Char('k') | KeyCode::Up => app.dispatch(ScrollIntent::LineUp),
        KeyCode::PageDown | KeyCode::Char(' ') => app.dispatch(ScrollIntent::PageDown),
        KeyCode::PageUp => app.dispatch(ScrollIntent::PageUp),
        KeyCode::Char('g') | KeyCode::Home => app.dispatch(ScrollIntent::Top),
        KeyCode::Char('G') | KeyCode::End => app.dispatch(ScrollIntent::Bottom),
        KeyCode::Tab => app.cycle_link(),
        KeyCode::Char(ch @ '1'..='7') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.jump_to_section(index);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
