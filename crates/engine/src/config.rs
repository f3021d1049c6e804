//! Run configuration from environment variables.
//!
//! - `DONUT_FRAMES`: number of frames (default 1000)
//! - `DONUT_FRAME_MS`: pause between frames in milliseconds (default 50)
//! - `DONUT_DISPLAY`: `scroll` (default) or `redraw`
//!
//! Missing or unparsable values fall back to the defaults.

use std::env;

use log::warn;

use crate::types::{DisplayMode, LoopConfig};

pub const FRAMES_VAR: &str = "DONUT_FRAMES";
pub const FRAME_MS_VAR: &str = "DONUT_FRAME_MS";
pub const DISPLAY_VAR: &str = "DONUT_DISPLAY";

/// Everything `main` needs to start a run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunConfig {
    pub frame_loop: LoopConfig,
    pub display: DisplayMode,
}

impl RunConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut frame_loop = LoopConfig::default();

        if let Some(frames) = parse_var(&lookup, FRAMES_VAR) {
            frame_loop.frames = frames;
        }
        if let Some(ms) = parse_var(&lookup, FRAME_MS_VAR) {
            frame_loop.frame_delay_ms = ms;
        }

        let display = match lookup(DISPLAY_VAR) {
            Some(raw) => DisplayMode::from_str(&raw).unwrap_or_else(|| {
                warn!("ignoring {DISPLAY_VAR}={raw:?}: expected `scroll` or `redraw`");
                DisplayMode::default()
            }),
            None => DisplayMode::default(),
        };

        Self {
            frame_loop,
            display,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a number");
            None
        }
    }
}
