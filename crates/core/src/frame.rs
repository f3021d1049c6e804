//! Frame module - the character grid and its depth buffer
//!
//! Both grids use flat row-major storage (`y * width + x`). A frame is reset
//! at the start of every render, so nothing leaks from one frame to the next.

use crate::surface::{angle_steps, luminance_index, sample_surface, RotationTrig, Trig};
use crate::types::{Angles, TorusConfig};

/// Character written to cells nothing was plotted into.
pub const BLANK: char = ' ';

/// One rendered frame: a character grid plus the reciprocal depth per cell.
#[derive(Debug, PartialEq)]
pub struct Frame {
    width: u16,
    height: u16,
    angles: Angles,
    cells: Vec<char>,
    /// 0.0 means nothing plotted yet (infinitely far).
    depth: Vec<f64>,
}

impl Clone for Frame {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            angles: self.angles,
            cells: self.cells.clone(),
            depth: self.depth.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.angles = source.angles;
        self.cells.clone_from(&source.cells);
        self.depth.clone_from(&source.depth);
    }
}

impl Frame {
    /// Create a blank frame.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            angles: Angles::default(),
            cells: vec![BLANK; len],
            depth: vec![0.0; len],
        }
    }

    /// Create a blank frame sized for `config`.
    pub fn for_config(config: &TorusConfig) -> Self {
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Angles this frame was last rendered with.
    pub fn angles(&self) -> Angles {
        self.angles
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Calculate flat index from signed screen coordinates.
    /// Returns None if out of bounds.
    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index(x as i64, y as i64).map(|i| self.cells[i])
    }

    /// Reciprocal depth stored at `(x, y)`.
    pub fn depth_at(&self, x: u16, y: u16) -> Option<f64> {
        self.index(x as i64, y as i64).map(|i| self.depth[i])
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // `max(1)` keeps `chunks` happy on a zero-width frame (no cells, no rows).
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of cells holding a plotted character.
    pub fn plotted_count(&self) -> usize {
        self.depth.iter().filter(|&&d| d > 0.0).count()
    }

    /// Reset every cell to blank and every depth to zero.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.depth.fill(0.0);
    }

    /// Resize the frame.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, BLANK);
        self.depth.resize(len, 0.0);
    }

    /// Plot `ch` at `(x, y)` if `ooz` is strictly nearer than what is stored.
    ///
    /// Out-of-grid coordinates are skipped. Returns true when the cell was
    /// written.
    #[inline(always)]
    pub fn plot(&mut self, x: i64, y: i64, ooz: f64, ch: char) -> bool {
        match self.index(x, y) {
            Some(i) if ooz > self.depth[i] => {
                self.depth[i] = ooz;
                self.cells[i] = ch;
                true
            }
            _ => false,
        }
    }

    /// Render the torus at `angles` into this frame.
    ///
    /// This is the allocation-free hot path: the frame is resized to the
    /// config (a no-op after the first call) and cleared, then every `(θ, φ)`
    /// sample is projected and depth-tested.
    pub fn render_into(&mut self, config: &TorusConfig, angles: Angles) {
        self.resize(config.width, config.height);
        self.clear();
        self.angles = angles;

        let rot = RotationTrig::new(angles);
        let k1 = config.k1();

        for theta in angle_steps(config.theta_spacing) {
            let theta = Trig::of(theta);
            for phi in angle_steps(config.phi_spacing) {
                let phi = Trig::of(phi);
                let sample = sample_surface(config, &rot, theta, phi);

                // Back-facing or edge-on: not plotted.
                let Some(li) = luminance_index(sample.luminance, config.ramp.len()) else {
                    continue;
                };

                let (xp, yp) = sample.project(config, k1);
                self.plot(xp, yp, sample.ooz, config.ramp[li]);
            }
        }
    }
}

/// Render one frame into a freshly allocated grid.
pub fn render_frame(config: &TorusConfig, angles: Angles) -> Frame {
    let mut frame = Frame::for_config(config);
    frame.render_into(config, angles);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_blank_and_far() {
        let frame = Frame::new(4, 3);
        assert_eq!(frame.cells().len(), 12);
        assert!(frame.cells().iter().all(|&c| c == BLANK));
        assert_eq!(frame.depth_at(3, 2), Some(0.0));
        assert_eq!(frame.plotted_count(), 0);
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let frame = Frame::new(4, 3);
        assert_eq!(frame.get(4, 0), None);
        assert_eq!(frame.get(0, 3), None);
        assert_eq!(frame.depth_at(0, 3), None);
    }

    #[test]
    fn plot_keeps_nearest() {
        let mut frame = Frame::new(2, 2);
        assert!(frame.plot(1, 0, 0.2, 'a'));
        assert!(!frame.plot(1, 0, 0.1, 'b'));
        assert!(!frame.plot(1, 0, 0.2, 'c'));
        assert!(frame.plot(1, 0, 0.3, 'd'));
        assert_eq!(frame.get(1, 0), Some('d'));
        assert_eq!(frame.depth_at(1, 0), Some(0.3));
    }

    #[test]
    fn plot_skips_out_of_grid() {
        let mut frame = Frame::new(2, 2);
        assert!(!frame.plot(-1, 0, 1.0, 'x'));
        assert!(!frame.plot(0, 2, 1.0, 'x'));
        assert!(!frame.plot(2, 0, 1.0, 'x'));
        assert_eq!(frame.plotted_count(), 0);
    }

    #[test]
    fn rows_are_row_major() {
        let mut frame = Frame::new(3, 2);
        frame.plot(0, 1, 1.0, 'q');
        frame.plot(2, 0, 1.0, 'p');
        let rows: Vec<String> = frame.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["  p".to_string(), "q  ".to_string()]);
    }

    #[test]
    fn render_into_resets_previous_frame() {
        let config = TorusConfig::default();
        let mut frame = Frame::for_config(&config);
        frame.render_into(&config, Angles::new(1.0, 1.0));
        let first = frame.clone();

        frame.render_into(&config, Angles::new(2.5, 0.3));
        frame.render_into(&config, Angles::new(1.0, 1.0));
        assert_eq!(frame, first);
    }

    #[test]
    fn render_into_resizes_to_config() {
        let config = TorusConfig::default();
        let mut frame = Frame::new(5, 5);
        frame.render_into(&config, Angles::new(1.0, 1.0));
        assert_eq!((frame.width(), frame.height()), (32, 32));
        assert_eq!(frame.angles(), Angles::new(1.0, 1.0));
    }

    #[test]
    fn render_into_skips_samples_projecting_off_a_short_grid() {
        // K1 follows the width, so the torus overflows an 8-row grid.
        let config = TorusConfig {
            height: 8,
            ..TorusConfig::default()
        };
        let frame = render_frame(&config, Angles::new(1.0, 1.0));

        assert_eq!(frame.rows().count(), 8);
        assert_eq!(frame.cells().len(), 32 * 8);
        assert!(frame.plotted_count() > 0);
        assert!(frame
            .cells()
            .iter()
            .all(|&c| c == BLANK || config.ramp.contains(&c)));

        // Overflowing rows are dropped, not wrapped: the surviving window
        // matches the full-height render 12 rows down, up to floor rounding.
        let full = render_frame(&TorusConfig::default(), Angles::new(1.0, 1.0));
        let mut differing = 0;
        for y in 0..8 {
            for x in 0..32 {
                if frame.get(x, y) != full.get(x, y + 12) {
                    differing += 1;
                }
            }
        }
        assert!(differing <= 8, "{differing} cells differ");
    }

    #[test]
    fn plotted_cells_hold_ramp_characters() {
        let config = TorusConfig::default();
        let frame = render_frame(&config, Angles::new(1.0, 1.0));
        assert!(frame.plotted_count() > 0);
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let depth = frame.depth_at(x, y).unwrap();
                let ch = frame.get(x, y).unwrap();
                if depth > 0.0 {
                    assert!(config.ramp.contains(&ch), "unexpected {ch:?} at ({x}, {y})");
                } else {
                    assert_eq!(ch, BLANK);
                }
            }
        }
    }
}
