//! Animation engine: the frame loop and its pacing.
//!
//! Starting from A = 1.0, B = 1.0 the loop renders a frame, hands it to a
//! [`DisplaySink`](tui_donut_term::DisplaySink), pauses 50 ms, and advances
//! A by 0.07 and B by 0.02, for 1000 frames. Pausing goes through [`Pacer`]
//! so tests can run the schedule instantly.

pub mod config;
pub mod frame_loop;
pub mod pacer;

pub use tui_donut_core as core;
pub use tui_donut_term as term;
pub use tui_donut_types as types;

pub use config::RunConfig;
pub use frame_loop::{drive, FrameLoop, LoopStats};
pub use pacer::{InstantPacer, Pacer, ThreadPacer};
