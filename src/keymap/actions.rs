/// Additional key actions beyond plain HID keycodes
///
/// Layer keys, macros and reset are consumed by the keymap dispatcher; the
/// remaining variants only name host-owned features (RGB effect controls,
/// mouse emulation, consumer page keys) and are passed through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Momentarily activate the Lower layer, with tri-layer derivation
    Lower,
    /// Momentarily activate the Raise layer, with tri-layer derivation
    Raise,
    /// Directly activate the Adjust layer while held
    Adjust,
    /// Type out a fixed literal via the host text-injection primitive
    SendText(&'static str),
    /// Reboot the MCU into its bootloader
    Reset,
    /// Modify RGB matrix lightning
    Led(LedAction),
    /// Use mouse emulation
    Mouse(MouseAction),
    /// Send USB HID consumer page keys
    Consumer(ConsumerKey),
}

/// Actions for RGB matrix control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedAction {
    /// Toggle the RGB matrix on/off
    Toggle,
    /// Cycle through animation modes
    Mode(Inc),
    /// Modify hue
    Hue(Inc),
    /// Modify saturation
    Saturation(Inc),
    /// Modify brightness value
    Value(Inc),
}

/// Actions related to mouse emulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseAction {
    /// Key emulates a mouse button
    Click(MouseButton),
    /// Key performs mouse or wheel movement when held
    Move(MouseMovement),
}

/// Emulated mouse button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Mid,
    Right,
}

/// Emulated mouse (or mouse wheel) movement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseMovement {
    Up,
    Down,
    Left,
    Right,
    WheelUp,
    WheelDown,
    WheelLeft,
    WheelRight,
}

/// USB HID consumer page keys not covered by the keyboard page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumerKey {
    BrightnessUp,
    BrightnessDown,
}

/// Increment/decrement direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inc {
    Up,
    Down,
}
