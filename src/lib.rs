#![no_std]

// Use std when running tests, see: https://stackoverflow.com/a/28186509
// Make sure to use different target when testing, e.g.
//   cargo test --target x86_64-unknown-linux-gnu
#[cfg(test)]
#[macro_use]
extern crate std;

/// Keymap state and the callbacks invoked by the host firmware
pub mod keymap;
/// Layout and functions of keys on the keyboard
pub mod layers;
/// Rendering of status glyphs and animations on the OLED
pub mod oled;
/// Small shared helpers
pub mod utils;
