//! Layout and functions of keys on the keyboard
//!
//! The table is plain constant data: `[layer][row][col]`, four layers over a
//! 4x12 grid (three finger rows of a Corne plus the 6-key thumb row padded
//! with no-ops). The host matrix scanner reports positions; key resolution
//! against the active-layer mask happens in [`resolve`].

use keyberon::key_code::KeyCode::{self, *};

use crate::keymap::actions::{
    Action, ConsumerKey, Inc, LedAction, MouseAction, MouseButton, MouseMovement,
};
use crate::keymap::state::{LayerMask, NLAYERS};

/// Number of key columns across both halves
pub const NCOLS: usize = 12;
/// Number of key rows, thumb row included
pub const NROWS: usize = 4;

/// Layer-indexed key table
pub type Layers = [[[Key; NCOLS]; NROWS]; NLAYERS];

/// A single position in the layout table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Plain HID keycode
    Code(KeyCode),
    /// Keycode sent with left shift held
    Shifted(KeyCode),
    /// Action interpreted by the keymap dispatcher or forwarded to the host
    Act(Action),
    /// Dual-role key resolved by the host tap-dance engine
    TapDance(&'static TapDance),
    /// Transparent: falls through to the next active layer below
    Trans,
    /// No key at this position
    NoOp,
}

/// Declarative tap-dance configuration, executed by the host
///
/// `taps[0]` is emitted on a single tap, `taps[1]` on a double tap.
#[derive(Debug, PartialEq, Eq)]
pub struct TapDance {
    pub taps: [KeyCode; 2],
}

/// Single tap shift, double tap caps-lock
pub static TD_CAPS: TapDance = TapDance { taps: [LShift, CapsLock] };
/// Single tap right alt, double tap left alt
pub static TD_ALT: TapDance = TapDance { taps: [RAlt, LAlt] };

/// Literal emitted by the first text macro key
pub const MACRO1_TEXT: &str = "Macro 1 text:\nsanti";
/// Literal emitted by the second text macro key
pub const MACRO2_TEXT: &str = "Macro 2 text:\nsanti";

const fn k(code: KeyCode) -> Key {
    Key::Code(code)
}

const fn s(code: KeyCode) -> Key {
    Key::Shifted(code)
}

const fn a(action: Action) -> Key {
    Key::Act(action)
}

const XX: Key = Key::NoOp;
const __: Key = Key::Trans;

const LOWER: Key = a(Action::Lower);
const RAISE: Key = a(Action::Raise);
const ADJUST: Key = a(Action::Adjust);
const MACRO1: Key = a(Action::SendText(MACRO1_TEXT));
const MACRO2: Key = a(Action::SendText(MACRO2_TEXT));
const RESET: Key = a(Action::Reset);
const CAPS_TD: Key = Key::TapDance(&TD_CAPS);
const ALT_TD: Key = Key::TapDance(&TD_ALT);

const LED_TOG: Key = a(Action::Led(LedAction::Toggle));
const LED_MOD: Key = a(Action::Led(LedAction::Mode(Inc::Up)));
const HUE_U: Key = a(Action::Led(LedAction::Hue(Inc::Up)));
const HUE_D: Key = a(Action::Led(LedAction::Hue(Inc::Down)));
const SAT_U: Key = a(Action::Led(LedAction::Saturation(Inc::Up)));
const SAT_D: Key = a(Action::Led(LedAction::Saturation(Inc::Down)));
const VAL_U: Key = a(Action::Led(LedAction::Value(Inc::Up)));
const VAL_D: Key = a(Action::Led(LedAction::Value(Inc::Down)));

const BTN1: Key = a(Action::Mouse(MouseAction::Click(MouseButton::Left)));
const MS_L: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::Left)));
const MS_D: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::Down)));
const MS_U: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::Up)));
const MS_R: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::Right)));
const WH_L: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::WheelLeft)));
const WH_D: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::WheelDown)));
const WH_U: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::WheelUp)));
const WH_R: Key = a(Action::Mouse(MouseAction::Move(MouseMovement::WheelRight)));

const BRI_U: Key = a(Action::Consumer(ConsumerKey::BrightnessUp));
const BRI_D: Key = a(Action::Consumer(ConsumerKey::BrightnessDown));

/// Keyboard layout
#[rustfmt::skip]
pub static LAYERS: Layers = [
    [ // Default (qwerty)
        [k(Tab),   k(Q),  k(W),  k(E),    k(R),  k(T),     k(Y),     k(U),   k(I),     k(O),   k(P),      k(BSpace)],
        [k(LCtrl), k(A),  k(S),  k(D),    k(F),  k(G),     k(H),     k(J),   k(K),     k(L),   k(SColon), k(Quote) ],
        [CAPS_TD,  k(Z),  k(X),  k(C),    k(V),  k(B),     k(N),     k(M),   k(Comma), k(Dot), k(Slash),  k(Escape)],
        [XX,       XX,    XX,    k(LGui), LOWER, k(Space), k(Enter), RAISE,  ALT_TD,   XX,     XX,        XX       ],
    ],
    [ // Lower
        [k(Tab),   k(Kb1), k(Kb2), k(Kb3),  k(Kb4), k(Kb5),   k(Kb6),   k(Kb7),  k(Kb8), k(Kb9),  k(Kb0),  k(BSpace)],
        [k(LCtrl), k(F1),  k(F2),  k(F3),   k(F4),  k(F5),    k(Left),  k(Down), k(Up),  k(Right), k(Up),  XX       ],
        [CAPS_TD,  k(F6),  k(F7),  k(F8),   k(F9),  k(F10),   k(F11),   k(F12),  XX,     k(Left), k(Down), k(Right) ],
        [XX,       XX,     XX,     k(LGui), __,     k(Space), k(Enter), ADJUST,  ALT_TD, XX,      XX,      XX       ],
    ],
    [ // Raise
        [k(Tab),   s(Kb1), s(Kb2), s(Kb3),  s(Kb4), s(Kb5),   s(Kb6),   s(Kb7),   s(Kb8),      s(Kb9),      s(Kb0),     k(BSpace)],
        [k(LCtrl), XX,     XX,     XX,      XX,     MACRO1,   k(Minus), k(Equal), k(LBracket), k(RBracket), k(Bslash),  k(Grave) ],
        [CAPS_TD,  XX,     XX,     XX,      XX,     MACRO2,   s(Minus), s(Equal), s(LBracket), s(RBracket), s(Bslash),  s(Grave) ],
        [XX,       XX,     XX,     k(LGui), ADJUST, k(Space), k(Enter), __,       ALT_TD,      XX,          XX,         XX       ],
    ],
    [ // Adjust
        [RESET,   XX,    XX,    XX,      XX, k(MediaSleep),     BTN1,     XX,    XX,     XX,      k(MediaVolDown),      k(MediaVolUp)  ],
        [LED_TOG, HUE_U, SAT_U, VAL_U,   XX, k(MediaPlayPause), MS_L,     MS_D,  MS_U,   MS_R,    BRI_D,                BRI_U          ],
        [LED_MOD, HUE_D, SAT_D, VAL_D,   XX, k(PScreen),        WH_R,     WH_U,  WH_D,   WH_L,    k(MediaPreviousSong), k(MediaNextSong)],
        [XX,      XX,    XX,    k(LGui), __, k(Space),          k(Enter), __,    ALT_TD, XX,      XX,                   XX             ],
    ],
];

/// Resolve the key at a position against the active-layer mask
///
/// The topmost active layer with a non-transparent entry wins; transparency
/// falls through layer by layer down to the always-active default layer.
/// Out-of-range positions resolve to [`Key::NoOp`].
pub fn resolve(layers: &Layers, mask: LayerMask, row: u8, col: u8) -> Key {
    let (row, col) = (row as usize, col as usize);
    if row >= NROWS || col >= NCOLS {
        return Key::NoOp;
    }
    for layer in mask.top_down() {
        match layers[layer as usize][row][col] {
            Key::Trans => continue,
            key => return key,
        }
    }
    Key::NoOp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::state::Layer;

    #[test]
    fn base_layer_lookup() {
        let mask = LayerMask::new();
        assert_eq!(resolve(&LAYERS, mask, 0, 1), k(Q));
        assert_eq!(resolve(&LAYERS, mask, 3, 4), LOWER);
        assert_eq!(resolve(&LAYERS, mask, 3, 7), RAISE);
        assert_eq!(resolve(&LAYERS, mask, 2, 0), CAPS_TD);
        assert_eq!(resolve(&LAYERS, mask, 3, 8), ALT_TD);
    }

    #[test]
    fn overlay_wins_over_default() {
        let mut mask = LayerMask::new();
        mask.set(Layer::Lower, true);
        assert_eq!(resolve(&LAYERS, mask, 0, 1), k(Kb1));
        mask.set(Layer::Raise, true);
        mask.set(Layer::Adjust, true);
        // highest layer index wins when several overlays define the key
        assert_eq!(resolve(&LAYERS, mask, 0, 0), RESET);
    }

    #[test]
    fn transparency_falls_through_to_default() {
        let mut mask = LayerMask::new();
        mask.set(Layer::Lower, true);
        // the Lower key position is transparent on the Lower layer itself
        assert_eq!(resolve(&LAYERS, mask, 3, 4), LOWER);

        let mut mask = LayerMask::new();
        mask.set(Layer::Raise, true);
        assert_eq!(resolve(&LAYERS, mask, 3, 7), RAISE);
    }

    #[test]
    fn transparency_falls_through_intermediate_layers() {
        // with Adjust on top, its transparent thumb key falls to the layer below
        let mut mask = LayerMask::new();
        mask.set(Layer::Raise, true);
        mask.set(Layer::Adjust, true);
        assert_eq!(resolve(&LAYERS, mask, 3, 7), RAISE);
    }

    #[test]
    fn macros_live_on_raise() {
        let mut mask = LayerMask::new();
        mask.set(Layer::Raise, true);
        assert_eq!(resolve(&LAYERS, mask, 1, 5), a(Action::SendText(MACRO1_TEXT)));
        assert_eq!(resolve(&LAYERS, mask, 2, 5), a(Action::SendText(MACRO2_TEXT)));
    }

    #[test]
    fn thumb_row_padding_is_noop_everywhere() {
        for layer in &LAYERS {
            for col in (0..3).chain(9..12) {
                assert_eq!(layer[3][col], Key::NoOp);
            }
        }
    }

    #[test]
    fn out_of_range_resolves_to_noop() {
        let mask = LayerMask::new();
        assert_eq!(resolve(&LAYERS, mask, 4, 0), Key::NoOp);
        assert_eq!(resolve(&LAYERS, mask, 0, 12), Key::NoOp);
    }

    #[test]
    fn tap_dance_tables() {
        assert_eq!(TD_CAPS.taps, [LShift, CapsLock]);
        assert_eq!(TD_ALT.taps, [RAlt, LAlt]);
    }
}
