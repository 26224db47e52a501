use bitfield::bitfield;
use static_assertions::const_assert_eq;

/// Number of layers in the layout table
pub const NLAYERS: usize = 4;

/// Keymap layers in stacking order
///
/// Higher layers win during key resolution; the display and RGB indicators
/// use their own priority orders defined where they are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Default = 0,
    Lower = 1,
    Raise = 2,
    Adjust = 3,
}

const_assert_eq!(Layer::Adjust as usize + 1, NLAYERS);

impl Layer {
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Bitmask of active layers
///
/// The default layer is logically always present beneath any overlay, so
/// [`LayerMask::contains`] reports it active regardless of the raw bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerMask(u8);

impl LayerMask {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn set(&mut self, layer: Layer, active: bool) {
        if active {
            self.0 |= layer.bit();
        } else {
            self.0 &= !layer.bit();
        }
    }

    pub const fn contains(self, layer: Layer) -> bool {
        matches!(layer, Layer::Default) || self.0 & layer.bit() != 0
    }

    /// Active layers from the topmost overlay down to the default layer
    pub fn top_down(self) -> impl Iterator<Item = Layer> {
        [Layer::Adjust, Layer::Raise, Layer::Lower, Layer::Default]
            .into_iter()
            .filter(move |layer| self.contains(*layer))
    }

    /// Recompute the derived Adjust layer after a Lower/Raise change
    ///
    /// Tri-layer convention: Adjust is active iff Lower and Raise are both
    /// active at the same time. A direct Adjust key bypasses this by calling
    /// [`LayerMask::set`] on its own.
    pub fn update_tri_layer(&mut self) {
        let both = self.contains(Layer::Lower) && self.contains(Layer::Raise);
        self.set(Layer::Adjust, both);
    }
}

bitfield! {
    /// Snapshot of the host HID modifier byte
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers(u8);
    impl Debug;
    pub left_ctrl, set_left_ctrl: 0;
    pub left_shift, set_left_shift: 1;
    pub left_alt, set_left_alt: 2;
    pub left_gui, set_left_gui: 3;
    pub right_ctrl, set_right_ctrl: 4;
    pub right_shift, set_right_shift: 5;
    pub right_alt, set_right_alt: 6;
    pub right_gui, set_right_gui: 7;
}

impl Modifiers {
    pub fn ctrl(&self) -> bool {
        self.left_ctrl() || self.right_ctrl()
    }

    pub fn shift(&self) -> bool {
        self.left_shift() || self.right_shift()
    }

    pub fn alt(&self) -> bool {
        self.left_alt() || self.right_alt()
    }

    pub fn gui(&self) -> bool {
        self.left_gui() || self.right_gui()
    }
}

impl core::ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

bitfield! {
    /// Host lock-indicator state, fed by the USB HID class
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct LockLeds(u8);
    impl Debug;
    pub num_lock, set_num_lock: 0;
    pub caps_lock, set_caps_lock: 1;
    pub scroll_lock, set_scroll_lock: 2;
    pub compose, set_compose: 3;
    pub kana, set_kana: 4;
}

impl keyberon::keyboard::Leds for LockLeds {
    fn num_lock(&mut self, status: bool) { self.set_num_lock(status); }
    fn caps_lock(&mut self, status: bool) { self.set_caps_lock(status); }
    fn scroll_lock(&mut self, status: bool) { self.set_scroll_lock(status); }
    fn compose(&mut self, status: bool) { self.set_compose(status); }
    fn kana(&mut self, status: bool) { self.set_kana(status); }
}

/// Per-tick snapshot of host-owned state consumed by the renderers
#[derive(Clone, Copy, Debug, Default)]
pub struct HostState {
    /// Currently held modifiers
    pub mods: Modifiers,
    /// Armed one-shot modifiers
    pub oneshot_mods: Modifiers,
    /// Lock indicators reported by the host PC
    pub leds: LockLeds,
    /// Rolling words-per-minute estimate
    pub wpm: u8,
}

impl HostState {
    /// Held and one-shot modifiers combined, as presented on the screen
    pub fn all_mods(&self) -> Modifiers {
        self.mods | self.oneshot_mods
    }
}
