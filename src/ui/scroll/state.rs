use crate::ui::mvi::UiState;

/// Vertical position of the viewport over the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// First page row drawn at the top of the body.
    pub offset: u32,
    pub content_height: u32,
    pub viewport_height: u32,
}

impl UiState for ScrollState {}

impl ScrollState {
    pub fn new(content_height: u32, viewport_height: u32) -> Self {
        Self {
            offset: 0,
            content_height,
            viewport_height,
        }
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Share of the page scrolled past, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            return 1.0;
        }
        f64::from(self.offset.min(max)) / f64::from(max)
    }
}
