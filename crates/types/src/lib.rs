//! Core types module - shared constants and configuration
//!
//! This module defines the fixed torus geometry, the camera constants and the
//! animation timing used throughout the application. All types are plain data
//! with no external dependencies, so they can be shared by the renderer, the
//! terminal layer and the frame loop alike.
//!
//! # Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TUBE_RADIUS` | 1 | R1, radius of the tube cross-section |
//! | `REVOLUTION_RADIUS` | 2 | R2, distance from the axis to the tube center |
//! | `VIEWER_DISTANCE` | 5 | K2, offset added to every z |
//! | `SCREEN_WIDTH` | 32 | Grid columns |
//! | `SCREEN_HEIGHT` | 32 | Grid rows |
//! | `THETA_SPACING` | 0.07 | Step around the tube cross-section (rad) |
//! | `PHI_SPACING` | 0.02 | Step around the revolution axis (rad) |
//!
//! The projection scale K1 is derived: the widest point of the torus
//! (x = R1 + R2 at z = K2) lands 3/8 of the screen width from the center.
//!
//! # Animation Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 1000 | Frames rendered before exit |
//! | `FRAME_DELAY_MS` | 50 | Pause between frames |
//! | `ANGLE_A_STEP` | 0.07 | Per-frame increment of A |
//! | `ANGLE_B_STEP` | 0.02 | Per-frame increment of B |
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{DisplayMode, TorusConfig, LUMINANCE_RAMP};
//!
//! let config = TorusConfig::default();
//! assert_eq!(config.width, 32);
//! assert_eq!(config.k1(), 20.0);
//!
//! assert_eq!(LUMINANCE_RAMP.len(), 12);
//! assert_eq!(DisplayMode::from_str("Redraw"), Some(DisplayMode::Redraw));
//! ```

/// Tube radius R1.
pub const TUBE_RADIUS: f64 = 1.0;

/// Revolution radius R2.
pub const REVOLUTION_RADIUS: f64 = 2.0;

/// Viewer distance K2.
pub const VIEWER_DISTANCE: f64 = 5.0;

/// Grid width in characters.
pub const SCREEN_WIDTH: u16 = 32;

/// Grid height in characters.
pub const SCREEN_HEIGHT: u16 = 32;

/// Step around the tube cross-section, in radians.
pub const THETA_SPACING: f64 = 0.07;

/// Step around the revolution axis, in radians.
pub const PHI_SPACING: f64 = 0.02;

/// Shading characters, dimmest to brightest.
pub const LUMINANCE_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Luminance is scaled by this factor before indexing the ramp (8 * sqrt(2) = 11.3).
pub const LUMINANCE_SCALE: f64 = 8.0;

/// Spaces printed before every grid row.
pub const LEFT_MARGIN: usize = 14;

/// Frames rendered by a full run.
pub const FRAME_COUNT: u32 = 1000;

/// Pause between frames in milliseconds.
pub const FRAME_DELAY_MS: u64 = 50;

/// Initial rotation angle A (radians).
pub const INITIAL_ANGLE_A: f64 = 1.0;

/// Initial rotation angle B (radians).
pub const INITIAL_ANGLE_B: f64 = 1.0;

/// Per-frame increment of A.
pub const ANGLE_A_STEP: f64 = 0.07;

/// Per-frame increment of B.
pub const ANGLE_B_STEP: f64 = 0.02;

/// The two whole-torus rotation angles, in radians.
///
/// Values are never wrapped modulo 2π; callers must not assume normalization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub a: f64,
    pub b: f64,
}

impl Angles {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Advance both angles by the given increments.
    pub fn advance(&mut self, da: f64, db: f64) {
        self.a += da;
        self.b += db;
    }
}

/// Immutable geometry, camera and presentation constants for one renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TorusConfig {
    /// R1
    pub tube_radius: f64,
    /// R2
    pub revolution_radius: f64,
    /// K2
    pub viewer_distance: f64,
    pub width: u16,
    pub height: u16,
    pub theta_spacing: f64,
    pub phi_spacing: f64,
    pub ramp: [char; 12],
    pub left_margin: usize,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            tube_radius: TUBE_RADIUS,
            revolution_radius: REVOLUTION_RADIUS,
            viewer_distance: VIEWER_DISTANCE,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            theta_spacing: THETA_SPACING,
            phi_spacing: PHI_SPACING,
            ramp: LUMINANCE_RAMP,
            left_margin: LEFT_MARGIN,
        }
    }
}

impl TorusConfig {
    /// Projection scale K1 = width * K2 * 3 / (8 * (R1 + R2)).
    pub fn k1(&self) -> f64 {
        self.width as f64 * self.viewer_distance * 3.0
            / (8.0 * (self.tube_radius + self.revolution_radius))
    }

    /// Smallest z any surface point can reach, K2 - R1 - R2.
    ///
    /// Rendering requires this to be positive.
    pub fn min_depth(&self) -> f64 {
        self.viewer_distance - self.tube_radius - self.revolution_radius
    }

    /// Number of cells in one grid.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Timing and angle schedule of the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    pub frames: u32,
    pub frame_delay_ms: u64,
    pub initial: Angles,
    pub a_step: f64,
    pub b_step: f64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frames: FRAME_COUNT,
            frame_delay_ms: FRAME_DELAY_MS,
            initial: Angles::new(INITIAL_ANGLE_A, INITIAL_ANGLE_B),
            a_step: ANGLE_A_STEP,
            b_step: ANGLE_B_STEP,
        }
    }
}

/// How finished frames reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Print every frame below the previous one; no control sequences.
    #[default]
    Scroll,
    /// Repaint in place at a fixed origin.
    Redraw,
}

impl DisplayMode {
    /// Parse display mode from string (case-insensitive)
    ///
    /// ```
    /// use tui_donut_types::DisplayMode;
    ///
    /// assert_eq!(DisplayMode::from_str("scroll"), Some(DisplayMode::Scroll));
    /// assert_eq!(DisplayMode::from_str("REDRAW"), Some(DisplayMode::Redraw));
    /// assert_eq!(DisplayMode::from_str("curses"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "scroll" => Some(DisplayMode::Scroll),
            "redraw" => Some(DisplayMode::Redraw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Scroll => "scroll",
            DisplayMode::Redraw => "redraw",
        }
    }
}
