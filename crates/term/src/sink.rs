//! Display sinks: where finished frames go.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::Frame;
use crate::text::encode_text_into;

/// Consumer of rendered frames.
pub trait DisplaySink {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        (**self).present(frame)
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        (**self).present(frame)
    }
}

/// Writes each frame as plain text below the previous one.
///
/// Output is byte-for-byte the scrolling layout; no control sequences.
pub struct ScrollSink<W: Write> {
    out: W,
    margin: usize,
    buf: Vec<u8>,
}

impl ScrollSink<io::Stdout> {
    pub fn stdout(margin: usize) -> Self {
        Self::new(io::stdout(), margin)
    }
}

impl<W: Write> ScrollSink<W> {
    pub fn new(out: W, margin: usize) -> Self {
        Self {
            out,
            margin,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for ScrollSink<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_text_into(frame, self.margin, &mut self.buf);
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
