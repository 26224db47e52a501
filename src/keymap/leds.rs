//! RGB matrix indicator colors
//!
//! One flat color for the whole matrix, chosen by an ordered rule list
//! evaluated first-match-wins. The priority contract (raise over lower over
//! caps-lock) is data, not an if/else ladder, so it can be tested directly.

use rgb::RGB8;

use super::state::{Layer, LayerMask, LockLeds};

/// Condition for an indicator rule to apply
pub enum Condition {
    /// The given layer is active
    Layer(Layer),
    /// Host reports the caps-lock indicator lit
    CapsLock,
}

/// Indicator rule: the first rule whose condition holds selects the color
pub struct LedRule {
    pub condition: Condition,
    pub color: RGB8,
}

const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };

/// Indicator rules, highest priority first
pub static RULES: &[LedRule] = &[
    LedRule { condition: Condition::Layer(Layer::Raise), color: RED },
    LedRule { condition: Condition::Layer(Layer::Lower), color: BLUE },
    LedRule { condition: Condition::CapsLock, color: GREEN },
];

impl Condition {
    pub fn applies(&self, mask: LayerMask, leds: LockLeds) -> bool {
        match self {
            Condition::Layer(layer) => mask.contains(*layer),
            Condition::CapsLock => leds.caps_lock(),
        }
    }
}

/// Uniform color for all LEDs, or `None` to leave the host idle effect alone
pub fn indicator_color(mask: LayerMask, leds: LockLeds) -> Option<RGB8> {
    RULES
        .iter()
        .find(|rule| rule.condition.applies(mask, leds))
        .map(|rule| rule.color)
}
