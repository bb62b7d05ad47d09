use crate::ui::mvi::Reducer;
use crate::ui::scroll::intent::ScrollIntent;
use crate::ui::scroll::state::ScrollState;

/// Applies scroll intents; the offset always lands in `[0, max_offset]`.
pub struct ScrollReducer;

impl Reducer for ScrollReducer {
    type State = ScrollState;
    type Intent = ScrollIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let page = state.viewport_height.max(1);
        let next = match intent {
            ScrollIntent::LineUp => ScrollState {
                offset: state.offset.saturating_sub(1),
                ..state
            },
            ScrollIntent::LineDown => ScrollState {
                offset: state.offset.saturating_add(1),
                ..state
            },
            ScrollIntent::PageUp => ScrollState {
                offset: state.offset.saturating_sub(page),
                ..state
            },
            ScrollIntent::PageDown => ScrollState {
                offset: state.offset.saturating_add(page),
                ..state
            },
            ScrollIntent::Top => ScrollState { offset: 0, ..state },
            ScrollIntent::Bottom => ScrollState {
                offset: state.max_offset(),
                ..state
            },
            ScrollIntent::JumpTo(row) => ScrollState {
                offset: row,
                ..state
            },
            ScrollIntent::Resize(viewport_height) => ScrollState {
                viewport_height,
                ..state
            },
            ScrollIntent::ContentHeight(content_height) => ScrollState {
                content_height,
                ..state
            },
        };
        clamp(next)
    }
}

fn clamp(state: ScrollState) -> ScrollState {
    ScrollState {
        offset: state.offset.min(state.max_offset()),
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(offset: u32) -> ScrollState {
        ScrollState {
            offset,
            content_height: 100,
            viewport_height: 20,
        }
    }

    #[test]
    fn line_moves_clamp_at_edges() {
        assert_eq!(ScrollReducer::reduce(state(0), ScrollIntent::LineUp).offset, 0);
        assert_eq!(ScrollReducer::reduce(state(5), ScrollIntent::LineDown).offset, 6);
        assert_eq!(ScrollReducer::reduce(state(80), ScrollIntent::LineDown).offset, 80);
    }

    #[test]
    fn page_moves_by_viewport() {
        assert_eq!(ScrollReducer::reduce(state(10), ScrollIntent::PageDown).offset, 30);
        assert_eq!(ScrollReducer::reduce(state(70), ScrollIntent::PageDown).offset, 80);
        assert_eq!(ScrollReducer::reduce(state(10), ScrollIntent::PageUp).offset, 0);
    }

    #[test]
    fn zero_viewport_pages_by_one_row() {
        let hidden = ScrollState {
            viewport_height: 0,
            ..state(10)
        };
        assert_eq!(ScrollReducer::reduce(hidden, ScrollIntent::PageDown).offset, 11);
        assert_eq!(ScrollReducer::reduce(hidden, ScrollIntent::PageUp).offset, 9);
    }

    #[test]
    fn jump_and_bottom_respect_max_offset() {
        assert_eq!(ScrollReducer::reduce(state(0), ScrollIntent::JumpTo(500)).offset, 80);
        assert_eq!(ScrollReducer::reduce(state(0), ScrollIntent::Bottom).offset, 80);
        assert_eq!(ScrollReducer::reduce(state(40), ScrollIntent::Top).offset, 0);
    }

    #[test]
    fn growing_viewport_pulls_offset_back() {
        let next = ScrollReducer::reduce(state(80), ScrollIntent::Resize(50));
        assert_eq!(next.offset, 50);
        assert!(next.is_at_bottom());
    }

    #[test]
    fn short_content_never_scrolls() {
        let short = ScrollState::new(10, 20);
        let next = ScrollReducer::reduce(short, ScrollIntent::PageDown);
        assert_eq!(next.offset, 0);
        assert_eq!(next.progress(), 1.0);
    }

    #[test]
    fn shrinking_content_clamps() {
        let next = ScrollReducer::reduce(state(80), ScrollIntent::ContentHeight(30));
        assert_eq!(next.offset, 10);
    }
}
