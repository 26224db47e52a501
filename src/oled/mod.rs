//! Rendering of status glyphs and animations on the OLED
//!
//! The host owns the display driver and the refresh schedule; it exposes the
//! character-cell primitives through [`Screen`] and calls back into the
//! renderers on every refresh opportunity. All drawing is sequential glyph
//! runs, there is no pixel addressing here.

/// Walking dino animation
pub mod dino;
/// Glyph code tables for the custom OLED fonts
pub mod glyphs;
/// Status column renderer
pub mod status;

/// Character-cell display primitives provided by the host display driver
///
/// Glyph codes index the custom font flashed with the display. Writes start
/// at the current cursor and advance it, wrapping to the next display line.
/// The host resets the cursor to the top-left cell before each render
/// callback.
pub trait Screen {
    /// Write a run of glyph codes, optionally color-inverted
    fn write_glyphs(&mut self, glyphs: &[u8], inverted: bool);

    /// Write ASCII text through the font's character range
    fn write_text(&mut self, text: &str, inverted: bool) {
        self.write_glyphs(text.as_bytes(), inverted);
    }

    /// Clear the whole display buffer
    fn clear(&mut self);

    /// Turn the display panel on
    fn turn_on(&mut self);

    /// Turn the display panel off
    fn turn_off(&mut self);
}
