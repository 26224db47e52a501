//! Keymap state and the callbacks invoked by the host firmware
//!
//! The host owns matrix scanning, HID reporting and the display/LED drivers.
//! It constructs one [`Keymap`] at boot and calls back on its own schedule:
//! [`Keymap::handle_event`] once per key transition, [`Keymap::render_tick`]
//! on every display refresh opportunity, [`Keymap::lighting_tick`] from the
//! lighting refresh cycle, and the suspend hooks on USB suspend/resume.
//! Everything this crate mutates lives in the [`Keymap`] struct; there are
//! no globals.

/// Custom key actions
pub mod actions;
/// RGB matrix indicator colors
pub mod leds;
/// Layer, modifier and lock-indicator state
pub mod state;

use rgb::RGB8;

use crate::layers::{self, Key, Layers, NCOLS, NROWS};
use crate::oled::{dino::DinoWalk, status, Screen};
use crate::utils::elapsed_ms;
use actions::Action;
use state::{HostState, Layer, LayerMask};

/// Number of addressable RGB matrix LEDs across both halves
pub const NLEDS: usize = 54;

/// Side-effecting primitives provided by the host firmware
///
/// All of these are infallible by contract; the host swallows transport
/// errors on its side of the boundary.
pub trait HostServices {
    /// Type out a literal string over HID
    fn send_string(&mut self, text: &str);
    /// Set the color of a single RGB matrix LED
    fn set_led(&mut self, index: usize, color: RGB8);
    /// Suspend or resume the RGB matrix driver
    fn rgb_suspend(&mut self, suspended: bool);
    /// Reboot the MCU into its bootloader
    fn jump_to_bootloader(&mut self);
}

/// A single key transition reported by the host matrix scanner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

/// Which renderer drives the OLED
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OledMode {
    /// Logo, layer, modifier and typing speed status column
    Status,
    /// Walking dino animation
    Dino,
}

/// Keymap configuration
pub struct KeymapConfig {
    /// Keyboard layers configuration
    pub layers: &'static Layers,
    /// OLED renderer variant
    pub oled: OledMode,
    /// Display is turned off after this long without activity, in ms
    pub oled_timeout_ms: u32,
    /// Duration of a single animation frame, in ms
    pub anim_frame_ms: u32,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            layers: &layers::LAYERS,
            oled: OledMode::Status,
            oled_timeout_ms: 30_000,
            anim_frame_ms: 200,
        }
    }
}

/// Keymap logic state
pub struct Keymap {
    config: KeymapConfig,
    mask: LayerMask,
    dino: DinoWalk,
    /// Keys latched at press time, so a release always matches its press
    /// even when the layer state changed in between
    held: [[Option<Key>; NCOLS]; NROWS],
    /// Time of the last key press, drives display idle sleep
    activity_at: u32,
}

impl Keymap {
    pub fn new(config: KeymapConfig) -> Self {
        Self {
            config,
            mask: LayerMask::new(),
            dino: DinoWalk::new(),
            held: [[None; NCOLS]; NROWS],
            activity_at: 0,
        }
    }

    /// Currently active layers
    pub fn layer_mask(&self) -> LayerMask {
        self.mask
    }

    /// Process one key transition
    ///
    /// Returns the resolved key when the host's default HID handling should
    /// proceed, or `None` when the event was consumed here. Every press also
    /// counts as display activity for the idle-sleep logic.
    pub fn handle_event(
        &mut self,
        host: &mut impl HostServices,
        event: KeyEvent,
        now: u32,
    ) -> Option<Key> {
        let (row, col) = (event.row as usize, event.col as usize);
        if row >= NROWS || col >= NCOLS {
            return Some(Key::NoOp);
        }

        if event.pressed {
            self.activity_at = now;
        }

        let key = if event.pressed {
            let key = layers::resolve(self.config.layers, self.mask, event.row, event.col);
            self.held[row][col] = Some(key);
            key
        } else {
            self.held[row][col]
                .take()
                .unwrap_or_else(|| layers::resolve(self.config.layers, self.mask, event.row, event.col))
        };

        match key {
            Key::Act(Action::Lower) => {
                self.mask.set(Layer::Lower, event.pressed);
                self.mask.update_tri_layer();
                #[cfg(feature = "defmt")]
                defmt::debug!("layers: {}", self.mask);
                None
            }
            Key::Act(Action::Raise) => {
                self.mask.set(Layer::Raise, event.pressed);
                self.mask.update_tri_layer();
                #[cfg(feature = "defmt")]
                defmt::debug!("layers: {}", self.mask);
                None
            }
            Key::Act(Action::Adjust) => {
                self.mask.set(Layer::Adjust, event.pressed);
                None
            }
            Key::Act(Action::SendText(text)) => {
                if event.pressed {
                    host.send_string(text);
                }
                None
            }
            Key::Act(Action::Reset) => {
                if event.pressed {
                    #[cfg(feature = "defmt")]
                    defmt::info!("rebooting to bootloader");
                    host.jump_to_bootloader();
                }
                None
            }
            key => Some(key),
        }
    }

    /// Render one display refresh opportunity
    ///
    /// Returns `false`: the host's default rendering is always suppressed.
    pub fn render_tick(&mut self, screen: &mut impl Screen, state: &HostState, now: u32) -> bool {
        match self.config.oled {
            OledMode::Status => {
                if elapsed_ms(now, self.activity_at) > self.config.oled_timeout_ms {
                    screen.turn_off();
                    return false;
                }
                screen.turn_on();
                status::render(screen, self.mask, state);
            }
            OledMode::Dino => {
                self.dino.tick(
                    screen,
                    state.wpm,
                    now,
                    self.config.anim_frame_ms,
                    self.config.oled_timeout_ms,
                );
            }
        }
        false
    }

    /// Choose the RGB matrix color for one lighting refresh cycle
    ///
    /// Paints all LEDs with the indicator color when one applies; otherwise
    /// leaves whatever the host's idle lighting effect produced.
    pub fn lighting_tick(&self, host: &mut impl HostServices, state: &HostState) {
        if let Some(color) = leds::indicator_color(self.mask, state.leds) {
            for index in 0..NLEDS {
                host.set_led(index, color);
            }
        }
    }

    /// USB suspend entered
    pub fn suspend(&mut self, host: &mut impl HostServices) {
        host.rgb_suspend(true);
    }

    /// USB suspend left
    pub fn resume(&mut self, host: &mut impl HostServices) {
        host.rgb_suspend(false);
    }
}
