//! Spinner glyph shown next to rows that are spinning.

/// Braille spinner frames.
pub const FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Return the frame for the given spinner index.
///
pub fn frame(index: usize) -> char {
    FRAMES[index % FRAMES.len()]
}
