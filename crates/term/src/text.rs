//! Plain-text encoding of a frame.
//!
//! This is the scrolling presentation: no cursor movement, no colors, just
//! lines. Each frame is a blank line, one line per grid row (left margin plus
//! the row's characters), and a trailing blank line.

use crate::core::Frame;

/// Append the scrolling text form of `frame` to `out`.
///
/// Does not clear `out`, so several frames can be batched into one buffer.
pub fn encode_text_into(frame: &Frame, margin: usize, out: &mut Vec<u8>) {
    let mut utf8 = [0u8; 4];

    out.push(b'\n');
    for row in frame.rows() {
        out.resize(out.len() + margin, b' ');
        for &ch in row {
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        out.push(b'\n');
    }
    out.push(b'\n');
}

/// Convenience helper that allocates a new string.
pub fn frame_to_text(frame: &Frame, margin: usize) -> String {
    let mut out = Vec::with_capacity(text_len(frame, margin));
    encode_text_into(frame, margin, &mut out);
    // Every byte came from `char::encode_utf8` or ASCII.
    String::from_utf8_lossy(&out).into_owned()
}

/// Encoded length in bytes, assuming single-byte characters.
pub fn text_len(frame: &Frame, margin: usize) -> usize {
    let h = frame.height() as usize;
    let w = frame.width() as usize;
    2 + h * (margin + w + 1)
}
