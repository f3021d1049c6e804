//! Terminal presentation module.
//!
//! This layer takes finished [`Frame`](tui_donut_core::Frame)s from the pure
//! renderer and gets them onto a terminal. The renderer never knows how its
//! output is displayed.
//!
//! Two sinks are provided:
//! - [`ScrollSink`]: plain text, one frame printed below the other
//! - [`TerminalRenderer`]: crossterm repaint in place, rewriting only changed runs

pub mod renderer;
pub mod sink;
pub mod text;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::{DisplaySink, ScrollSink};
pub use text::{encode_text_into, frame_to_text, text_len};
