use std::time::Duration;

use ratatui::text::Line;

use crate::content::ContactCommand;
use crate::motion::{Region, ViewportObserver};
use crate::sections::{Page, SectionId, StatusIndicator, SystemStatus};
use crate::ui::mvi::Reducer;
use crate::ui::scroll::{ScrollIntent, ScrollReducer, ScrollState};

/// Interactive session state: the page, where the viewport sits over it,
/// and which contact link is highlighted.
pub struct App {
    page: Page,
    lines: Vec<Line<'static>>,
    regions: Vec<Region>,
    scroll: ScrollState,
    status: StatusIndicator,
    now: Duration,
    selected_link: Option<usize>,
    should_quit: bool,
}

impl App {
    pub fn new(page: Page, viewport_height: u32, pulse_period: Duration, now: Duration) -> Self {
        let frame = page.frame(now);
        let content_height = u32::try_from(frame.lines.len()).unwrap_or(u32::MAX);
        let mut status = StatusIndicator::new(SystemStatus::Online, pulse_period)
            .with_label("ALL SYSTEMS OPERATIONAL");
        status.start(now);

        Self {
            page,
            lines: frame.lines,
            regions: frame.regions,
            scroll: ScrollState::new(content_height, viewport_height),
            status,
            now,
            selected_link: None,
            should_quit: false,
        }
    }

    pub fn dispatch(&mut self, intent: ScrollIntent) {
        self.scroll = ScrollReducer::reduce(self.scroll, intent);
    }

    /// Feed the viewport to every waiting section, advance animators and
    /// re-render. Returns whether anything visible changed.
    pub fn on_tick(&mut self, now: Duration) -> bool {
        self.now = now;
        let observer = ViewportObserver::new(self.scroll.offset, self.scroll.viewport_height);
        let revealed = self.page.observe(&observer, &self.regions, now);
        let changed = self.page.tick(now) || revealed > 0;

        let frame = self.page.frame(now);
        let content_height = u32::try_from(frame.lines.len()).unwrap_or(u32::MAX);
        self.lines = frame.lines;
        self.regions = frame.regions;
        if content_height != self.scroll.content_height {
            self.dispatch(ScrollIntent::ContentHeight(content_height));
        }
        changed
    }

    pub fn on_resize(&mut self, viewport_height: u32) {
        self.dispatch(ScrollIntent::Resize(viewport_height));
    }

    /// Scroll so the `index`-th section starts at the top of the viewport.
    pub fn jump_to_section(&mut self, index: usize) {
        if let Some(region) = self.regions.get(index) {
            let section = self.page.section_ids().get(index).copied();
            tracing::debug!(?section, top = region.top, "jump to section");
            self.dispatch(ScrollIntent::JumpTo(region.top));
        }
    }

    /// Move the highlight to the next visible contact link, wrapping.
    pub fn cycle_link(&mut self) {
        let count = self.page.links().len();
        self.selected_link = match (self.selected_link, count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), count) => Some((idx + 1) % count),
        };
    }

    pub fn selected_link(&self) -> Option<ContactCommand> {
        let idx = self.selected_link?;
        self.page.links().into_iter().nth(idx)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cancel every section timer. Called before the terminal is restored.
    pub fn unmount(&mut self) {
        self.status.stop();
        self.page.unmount();
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn status(&self) -> &StatusIndicator {
        &self.status
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Section whose region contains the top viewport row.
    pub fn current_section(&self) -> Option<SectionId> {
        let ids = self.page.section_ids();
        self.regions
            .iter()
            .zip(ids)
            .take_while(|(region, _)| region.top <= self.scroll.offset)
            .last()
            .map(|(_, id)| id)
    }
}
