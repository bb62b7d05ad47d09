//! Non-interactive rendition: every section counts as visible from the
//! first frame and time comes from a virtual clock, so a run is fully
//! deterministic. Each change of display state is written as one JSON
//! line.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::motion::{AlwaysRevealed, Clock, ManualClock};
use crate::sections::{Page, PageDisplay, SectionDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessOptions {
    /// Virtual time between frames.
    pub frame: Duration,
    /// Last instant rendered.
    pub until: Duration,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            frame: Duration::from_millis(33),
            until: Duration::from_millis(4000),
        }
    }
}

#[derive(Error, Debug)]
pub enum HeadlessError {
    #[error("Frame interval must be greater than zero")]
    ZeroFrame,

    #[error("Failed to write frame: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    t_ms: u64,
    sections: &'a [SectionDisplay],
}

/// Step `page` from `clock.now()` to `options.until` and write every
/// distinct display snapshot to `out`. Returns the number of lines
/// written. The page is unmounted before returning.
pub fn run<W: Write>(
    page: &mut Page,
    clock: &ManualClock,
    options: &HeadlessOptions,
    out: &mut W,
) -> Result<usize, HeadlessError> {
    if options.frame.is_zero() {
        return Err(HeadlessError::ZeroFrame);
    }

    let mut last: Option<PageDisplay> = None;
    let mut written = 0;
    loop {
        let now = clock.now();
        let frame = page.frame(now);
        page.observe(&AlwaysRevealed, &frame.regions, now);
        page.tick(now);

        let display = page.display();
        if last.as_ref() != Some(&display) {
            let record = FrameRecord {
                t_ms: u64::try_from(now.as_millis()).unwrap_or(u64::MAX),
                sections: &display.sections,
            };
            serde_json::to_writer(&mut *out, &record)?;
            out.write_all(b"\n")?;
            written += 1;
            last = Some(display);
        }

        if now >= options.until {
            break;
        }
        clock.set((now + options.frame).min(options.until));
    }

    out.flush()?;
    page.unmount();
    tracing::info!(frames = written, until_ms = options.until.as_millis() as u64, "headless run finished");
    Ok(written)
}
