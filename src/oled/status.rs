//! Status column renderer
//!
//! Draws the logo, active layer, modifier icons and typing speed as one
//! column of glyph runs. Selection logic lives in small pure functions so the
//! priority contracts can be tested without a display.

use heapless::String;
use ufmt::uwrite;

use crate::keymap::state::{HostState, Layer, LayerMask, Modifiers};
use super::glyphs::{self, ModIcon};
use super::Screen;

/// Layer indicator rows in display priority order, first active wins
static LAYER_INDICATORS: [(Layer, &[u8; 15]); 3] = [
    (Layer::Adjust, &glyphs::LAYER_ADJUST),
    (Layer::Lower, &glyphs::LAYER_LOWER),
    (Layer::Raise, &glyphs::LAYER_RAISE),
];

/// Indicator row for the topmost-active layer
pub fn layer_indicator(mask: LayerMask) -> &'static [u8; 15] {
    LAYER_INDICATORS
        .iter()
        .find(|(layer, _)| mask.contains(*layer))
        .map(|(_, row)| *row)
        .unwrap_or(&glyphs::LAYER_DEFAULT)
}

fn icon_cells(icon: &ModIcon, lit: bool, line: usize) -> &[u8; 2] {
    if lit {
        &icon.on[line]
    } else {
        &icon.off[line]
    }
}

/// Meta/alt icon block, two display lines
pub fn mod_icons_gui_alt(screen: &mut impl Screen, mods: Modifiers) {
    for line in 0..2 {
        screen.write_glyphs(icon_cells(&glyphs::GUI, mods.gui(), line), false);
        screen.write_glyphs(&[glyphs::filler(mods.gui(), mods.alt(), line)], false);
        screen.write_glyphs(icon_cells(&glyphs::ALT, mods.alt(), line), false);
    }
}

/// Ctrl/shift icon block, two display lines
///
/// Caps-lock lights the shift icon like a held shift; the filler between the
/// icons tracks only the actual modifier bits.
pub fn mod_icons_ctrl_shift(screen: &mut impl Screen, mods: Modifiers, caps_lock: bool) {
    let shift_lit = mods.shift() || caps_lock;
    for line in 0..2 {
        screen.write_glyphs(icon_cells(&glyphs::CTRL, mods.ctrl(), line), false);
        screen.write_glyphs(&[glyphs::filler(mods.ctrl(), mods.shift(), line)], false);
        screen.write_glyphs(icon_cells(&glyphs::SHIFT, shift_lit, line), false);
    }
}

/// Typing speed label and value, right-aligned to three characters
pub fn wpm(screen: &mut impl Screen, wpm: u8) {
    screen.write_text(" WPM  ", false);
    let mut value: String<3> = String::new();
    uwrite!(value, "{}", wpm).ok();
    for _ in value.len()..3 {
        screen.write_text(" ", false);
    }
    screen.write_text(&value, false);
}

fn spacer(screen: &mut impl Screen) {
    screen.write_glyphs(&glyphs::SPACER, false);
}

/// Draw the whole status column
pub fn render(screen: &mut impl Screen, mask: LayerMask, state: &HostState) {
    let mods = state.all_mods();
    screen.write_glyphs(&glyphs::LOGO, false);
    screen.write_text(glyphs::LOGO_TEXT, false);
    spacer(screen);
    screen.write_glyphs(layer_indicator(mask), false);
    spacer(screen);
    mod_icons_gui_alt(screen, mods);
    mod_icons_ctrl_shift(screen, mods, state.leds.caps_lock());
    spacer(screen);
    wpm(screen, state.wpm);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockScreen {
        cells: Vec<u8>,
    }

    impl Screen for MockScreen {
        fn write_glyphs(&mut self, glyphs: &[u8], _inverted: bool) {
            self.cells.extend_from_slice(glyphs);
        }
        fn clear(&mut self) {
            self.cells.clear();
        }
        fn turn_on(&mut self) {}
        fn turn_off(&mut self) {}
    }

    fn mask_of(layers: &[Layer]) -> LayerMask {
        let mut mask = LayerMask::new();
        for layer in layers {
            mask.set(*layer, true);
        }
        mask
    }

    fn mods(ctrl: bool, shift: bool, alt: bool, gui: bool) -> Modifiers {
        let mut mods = Modifiers::default();
        mods.set_left_ctrl(ctrl);
        mods.set_left_shift(shift);
        mods.set_left_alt(alt);
        mods.set_left_gui(gui);
        mods
    }

    #[test]
    fn layer_indicator_priority() {
        use Layer::*;
        // adjust beats lower beats raise; default only when no overlay is active
        assert_eq!(layer_indicator(mask_of(&[])), &glyphs::LAYER_DEFAULT);
        assert_eq!(layer_indicator(mask_of(&[Raise])), &glyphs::LAYER_RAISE);
        assert_eq!(layer_indicator(mask_of(&[Lower])), &glyphs::LAYER_LOWER);
        assert_eq!(layer_indicator(mask_of(&[Lower, Raise])), &glyphs::LAYER_LOWER);
        assert_eq!(layer_indicator(mask_of(&[Adjust])), &glyphs::LAYER_ADJUST);
        assert_eq!(
            layer_indicator(mask_of(&[Lower, Raise, Adjust])),
            &glyphs::LAYER_ADJUST
        );
    }

    #[test]
    fn layer_indicator_selects_exactly_one_row() {
        for bits in 0..8u8 {
            let mut mask = LayerMask::new();
            mask.set(Layer::Lower, bits & 1 != 0);
            mask.set(Layer::Raise, bits & 2 != 0);
            mask.set(Layer::Adjust, bits & 4 != 0);
            let row = layer_indicator(mask);
            let known = [
                &glyphs::LAYER_DEFAULT,
                &glyphs::LAYER_LOWER,
                &glyphs::LAYER_RAISE,
                &glyphs::LAYER_ADJUST,
            ];
            assert_eq!(known.iter().filter(|r| ***r == *row).count(), 1);
        }
    }

    #[test]
    fn gui_alt_icons_follow_modifiers() {
        for gui in [false, true] {
            for alt in [false, true] {
                let mut screen = MockScreen::default();
                mod_icons_gui_alt(&mut screen, mods(false, false, alt, gui));

                let mut expected = Vec::new();
                for line in 0..2 {
                    expected.extend_from_slice(icon_cells(&glyphs::GUI, gui, line));
                    expected.push(glyphs::filler(gui, alt, line));
                    expected.extend_from_slice(icon_cells(&glyphs::ALT, alt, line));
                }
                assert_eq!(screen.cells, expected, "gui={} alt={}", gui, alt);
            }
        }
    }

    #[test]
    fn gui_alt_icons_see_oneshot_modifiers() {
        // the caller merges held and one-shot; verify the OR at snapshot level
        for held in [false, true] {
            for oneshot in [false, true] {
                let state = HostState {
                    mods: mods(false, false, false, held),
                    oneshot_mods: mods(false, false, false, oneshot),
                    ..Default::default()
                };
                assert_eq!(state.all_mods().gui(), held || oneshot);
            }
        }
    }

    #[test]
    fn shift_icon_forced_on_by_caps_lock() {
        for shift in [false, true] {
            for caps in [false, true] {
                let mut screen = MockScreen::default();
                mod_icons_ctrl_shift(&mut screen, mods(false, shift, false, false), caps);

                let lit = shift || caps;
                // first line: ctrl cells, filler, shift cells
                assert_eq!(&screen.cells[3..5], icon_cells(&glyphs::SHIFT, lit, 0));
                // the filler only tracks the shift modifier, never caps-lock
                assert_eq!(screen.cells[2], glyphs::filler(false, shift, 0));
            }
        }
    }

    #[test]
    fn wpm_value_is_right_aligned() {
        let expect = [(0u8, b"  0"), (7, b"  7"), (42, b" 42"), (123, b"123")];
        for (value, padded) in expect {
            let mut screen = MockScreen::default();
            wpm(&mut screen, value);
            assert!(screen.cells.starts_with(b" WPM  "));
            assert_eq!(&screen.cells[6..], padded);
        }
    }

    #[test]
    fn full_render_sequence() {
        let mut screen = MockScreen::default();
        let state = HostState { wpm: 55, ..Default::default() };
        render(&mut screen, LayerMask::new(), &state);

        let mut expected = Vec::new();
        expected.extend_from_slice(&glyphs::LOGO);
        expected.extend_from_slice(glyphs::LOGO_TEXT.as_bytes());
        expected.extend_from_slice(&glyphs::SPACER);
        expected.extend_from_slice(&glyphs::LAYER_DEFAULT);
        expected.extend_from_slice(&glyphs::SPACER);
        for line in 0..2 {
            expected.extend_from_slice(&glyphs::GUI.off[line]);
            expected.push(glyphs::filler(false, false, line));
            expected.extend_from_slice(&glyphs::ALT.off[line]);
        }
        for line in 0..2 {
            expected.extend_from_slice(&glyphs::CTRL.off[line]);
            expected.push(glyphs::filler(false, false, line));
            expected.extend_from_slice(&glyphs::SHIFT.off[line]);
        }
        expected.extend_from_slice(&glyphs::SPACER);
        expected.extend_from_slice(b" WPM   55");
        assert_eq!(screen.cells, expected);
    }
}
