use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIntent {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Put the given page row at the top of the viewport.
    JumpTo(u32),
    /// The body area changed height.
    Resize(u32),
    /// The page was re-rendered with a new total height.
    ContentHeight(u32),
}

impl Intent for ScrollIntent {}
