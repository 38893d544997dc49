//! Dear ImGui over a raywhite host window.
//!
//! Run with `cargo run -p imbridge --example basic_window --features dear-imgui`.

use imbridge::dear_imgui_rs::Ui;
use imbridge::{run_app, HostApp, ImguiLayer, Options, WgpuBatch, WinitInput};

#[derive(Default)]
struct Demo {
    clicks: u32,
    show_demo: bool,
    frames: u64,
}

impl HostApp<ImguiLayer> for Demo {
    fn update(&mut self, _input: &WinitInput) {
        self.frames += 1;
    }

    fn draw(&mut self, batch: &mut WgpuBatch<'_>) {
        // Host content goes here; the overlay is composited on top.
        let _pass = batch.host_pass("host scene");
    }

    fn gui(&mut self, ui: &mut Ui) {
        ui.window("imbridge").build(|| {
            ui.text(format!("frame {}", self.frames));
            if ui.button("Click me") {
                self.clicks += 1;
            }
            ui.text(format!("clicked {} times", self.clicks));
            ui.checkbox("Demo window", &mut self.show_demo);
        });
        if self.show_demo {
            ui.show_demo_window(&mut self.show_demo);
        }
    }
}

fn main() -> imbridge::Result<()> {
    let mut options = Options::default();
    options.window.title = "imbridge basic window".to_string();
    run_app::<ImguiLayer, _>(options, Demo::default())
}
