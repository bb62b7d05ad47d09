use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::motion::{Clock, SystemClock};
use crate::sections::Page;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::viewport_height;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Drive `page` in the terminal until the user quits or a signal arrives.
///
/// Every section is unmounted before the terminal is handed back.
pub fn run(
    page: Page,
    clock: &SystemClock,
    frame_interval: Duration,
    pulse_period: Duration,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(page, viewport_height(cols, rows), pulse_period, clock.now());
    let events = EventHandler::new(frame_interval, shutdown.clone());
    app.on_tick(clock.now());
    tracing::info!(cols, rows, "interactive session started");

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(frame_interval) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {
                app.on_tick(clock.now());
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(viewport_height(cols, rows)),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    app.unmount();
    shutdown.signal();
    drop(guard);
    tracing::info!("interactive session ended");
    result
}
