//! Logs the GUI events each frame produces, without a GUI library.
//!
//! Run with `RUST_LOG=info cargo run -p imbridge --example event_log [options.json]`.
//! Press Escape or close the window to quit.

use imbridge::{run_app, GuiEvent, HostApp, Options, RecordingFrame, RecordingGui};

#[derive(Default)]
struct EventLog {
    logged: usize,
}

impl HostApp<RecordingGui> for EventLog {
    fn gui(&mut self, frame: &mut RecordingFrame) {
        for event in frame.events() {
            // Pointer motion would drown everything else
            if !matches!(event, GuiEvent::MousePos(_)) {
                log::info!("{event:?}");
                self.logged += 1;
            }
        }
    }
}

fn main() -> imbridge::Result<()> {
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    run_app::<RecordingGui, _>(options, EventLog::default())
}
