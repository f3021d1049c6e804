//! TerminalRenderer: repaints frames in place on a real terminal.
//!
//! The first frame after `enter` is a full redraw; later
//! frames only rewrite the runs of cells that changed. The grid is drawn one
//! row below the top edge and `margin` columns in, matching the scrolling
//! layout.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::Frame;
use crate::sink::DisplaySink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    margin: u16,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(margin: usize) -> Self {
        Self {
            stdout: io::stdout(),
            margin: u16::try_from(margin).unwrap_or(u16::MAX),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Hide the cursor and start from a clean screen.
    ///
    /// Raw mode stays off so Ctrl-C still terminates the process.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the cursor and park it below the grid.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        let below = self
            .last
            .as_ref()
            .map(|f| f.height().saturating_add(2))
            .unwrap_or(0);
        self.buf.queue(cursor::MoveTo(0, below))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        let prev = self
            .last
            .as_mut()
            .filter(|p| p.width() == frame.width() && p.height() == frame.height());
        if let Some(prev) = prev {
            encode_diff_into(prev, frame, self.margin, &mut self.buf)?;
            // Reuses the previous allocation.
            prev.clone_from(frame);
        } else {
            encode_full_into(frame, self.margin, &mut self.buf)?;
            self.last = Some(frame.clone());
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DisplaySink for TerminalRenderer {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.draw(frame)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(frame: &Frame, margin: u16, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for (y, row) in frame.rows().enumerate() {
        out.queue(cursor::MoveTo(margin, grid_row(y as u16)))?;
        for &ch in row {
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &Frame, next: &Frame, margin: u16, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(margin.saturating_add(x), grid_row(y)))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or(' ')))?;
        }
        Ok(())
    })
}

/// Terminal row of grid row `y`; one blank line sits above the grid.
fn grid_row(y: u16) -> u16 {
    y.saturating_add(1)
}

fn for_each_changed_run(
    prev: &Frame,
    next: &Frame,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
