//! Rotating torus runner (default binary).
//!
//! Renders 1000 frames of a spinning torus to stdout, 50 ms apart. Frames
//! scroll by default; `DONUT_DISPLAY=redraw` repaints in place instead.
//! Diagnostics go to stderr via `RUST_LOG`.

use anyhow::Result;
use log::info;

use tui_donut::engine::{FrameLoop, RunConfig, ThreadPacer};
use tui_donut::term::{ScrollSink, TerminalRenderer};
use tui_donut::types::{DisplayMode, TorusConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RunConfig::from_env();
    info!("display mode: {}", config.display.as_str());

    let torus = TorusConfig::default();
    let margin = torus.left_margin;
    let mut frame_loop = FrameLoop::new(torus, config.frame_loop);
    let mut pacer = ThreadPacer;

    match config.display {
        DisplayMode::Scroll => {
            let mut sink = ScrollSink::stdout(margin);
            frame_loop.run(&mut sink, &mut pacer)?;
            Ok(())
        }
        DisplayMode::Redraw => {
            let mut term = TerminalRenderer::new(margin);
            term.enter()?;

            let result = frame_loop.run(&mut term, &mut pacer);

            // Always try to restore terminal state.
            let _ = term.exit();
            result.map(|_| ())
        }
    }
}
