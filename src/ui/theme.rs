use ratatui::style::{Color, Modifier, Style};

use crate::content::{Accent, StageStatus};

pub const AWS_ORANGE: Color = Color::Rgb(0xff, 0x99, 0x00);
pub const AZURE_BLUE: Color = Color::Rgb(0x00, 0x78, 0xd4);
pub const SUCCESS_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DESTRUCTIVE_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FOREGROUND: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PANEL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Primary => AWS_ORANGE,
        Accent::Secondary => AZURE_BLUE,
        Accent::Success => SUCCESS_GREEN,
        Accent::Muted => FOREGROUND,
    }
}

pub fn accent(accent: Accent) -> Style {
    Style::default().fg(accent_color(accent))
}

pub fn text() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED_TEXT)
}

pub fn heading() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn badge(accent_kind: Accent) -> Style {
    accent(accent_kind).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(PANEL_BORDER)
}

pub fn stage_color(status: StageStatus) -> Color {
    match status {
        StageStatus::Complete => SUCCESS_GREEN,
        StageStatus::Active => AWS_ORANGE,
        StageStatus::Pending => MUTED_TEXT,
    }
}
