//! Rotating ASCII torus (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_donut::{core,engine,term,types}` and hosts the
//! binary.

pub use tui_donut_core as core;
pub use tui_donut_engine as engine;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
