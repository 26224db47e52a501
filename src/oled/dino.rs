//! Walking dino animation
//!
//! Drives the dino variant of the OLED font: a two-frame walk cycle that runs
//! while the host reports a non-zero typing speed, plus typing-driven display
//! power. Frame pacing and idle sleep use two independent timers; advancing a
//! frame never resets the idle timer.

use crate::utils::elapsed_ms;
use super::glyphs;
use super::Screen;

/// Animation and display-power state for the dino screen
pub struct DinoWalk {
    frame: usize,
    /// Time of the last frame advance
    frame_at: u32,
    /// Time typing was last observed
    active_at: u32,
}

impl DinoWalk {
    pub const fn new() -> Self {
        Self { frame: 0, frame_at: 0, active_at: 0 }
    }

    /// Current index into the walk cycle
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advance the animation and display power for one refresh opportunity
    ///
    /// While typing speed is non-zero the display is kept on and the walk
    /// advances every `frame_ms`. Once typing stops, the last frame stays on
    /// screen until `sleep_ms` with no typing has elapsed, then the display
    /// is turned off.
    pub fn tick(&mut self, screen: &mut impl Screen, wpm: u8, now: u32, frame_ms: u32, sleep_ms: u32) {
        if wpm > 0 {
            screen.turn_on();
            self.active_at = now;
            if elapsed_ms(now, self.frame_at) > frame_ms {
                self.frame_at = now;
                screen.clear();
                self.step(screen);
            }
        } else if elapsed_ms(now, self.active_at) > sleep_ms {
            screen.turn_off();
        }
    }

    fn step(&mut self, screen: &mut impl Screen) {
        self.frame = (self.frame + 1) % glyphs::DINO_WALK.len();
        screen.write_glyphs(&glyphs::DINO_WALK[self.frame], false);
    }
}

impl Default for DinoWalk {
    fn default() -> Self {
        Self::new()
    }
}
