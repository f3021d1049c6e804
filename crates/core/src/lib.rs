//! Core rendering module - pure, deterministic, and testable
//!
//! This module turns two rotation angles into a character grid. It has
//! **zero dependencies** on terminals, timing, or I/O, making it:
//!
//! - **Deterministic**: The same angles always produce the same grid
//! - **Testable**: Geometry, projection and shading are exposed per sample
//! - **Fast**: [`Frame::render_into`] is allocation-free after the first call
//!
//! # Module Structure
//!
//! - [`surface`]: torus parameterization, the two rotations, projection and
//!   luminance for a single `(θ, φ)` sample
//! - [`frame`]: the flat character grid, its depth buffer, and the full-frame
//!   scan
//!
//! # Rendering
//!
//! For each θ in `[0, 2π)` (step 0.07) and φ in `[0, 2π)` (step 0.02) the
//! renderer rotates the surface point, projects it with reciprocal depth
//! `ooz = 1/z`, drops it when the luminance is not positive, and keeps it only
//! when it is strictly nearer than what the cell already holds. Points that
//! project outside the grid are skipped.
//!
//! # Example
//!
//! ```
//! use tui_donut_core::render_frame;
//! use tui_donut_types::{Angles, TorusConfig};
//!
//! let config = TorusConfig::default();
//! let frame = render_frame(&config, Angles::new(1.0, 1.0));
//!
//! assert_eq!(frame.rows().count(), 32);
//! assert!(frame.plotted_count() > 0);
//! ```

pub mod frame;
pub mod surface;

pub use tui_donut_types as types;

pub use frame::{render_frame, Frame, BLANK};
pub use surface::{
    angle_steps, luminance_index, sample_surface, RotationTrig, SurfaceSample, Trig,
};
