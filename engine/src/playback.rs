//! Celebration playback. A built-in frame animation cycles at a fixed
//! interval, standing in for an embedded video;
//! sound (the terminal bell on firework bursts) stays off until the user
//! explicitly asks for it, the platform-policy analog of browsers muting
//! autoplay.

use std::time::Duration;

const FRAMES: &[&str] = &[
    r"
   .:::.   .:::.
  :::::::.:::::::
  :::::::::::::::
  ':::::::::::::'
    ':::::::::'
      ':::::'
        ':'
",
    r"
    .::.   .::.
   ::::::.::::::
   ::::::::::::
    '::::::::'
      '::::'
       '::'
        '
",
    r"
   .:::.   .:::.
  :::::::.:::::::
  :::::::::::::::
  ':::::::::::::'
    ':::::::::'
      ':::::'
        ':'
",
    r"
  .:::::. .:::::.
 :::::::::::::::::
 :::::::::::::::::
  ':::::::::::::'
    ':::::::::'
      ':::::'
        ':'
",
];

#[derive(Debug)]
pub struct Playback {
    frame_interval: Duration,
    in_frame: Duration,
    index: usize,
    active: bool,
    sound_enabled: bool,
    hint_dismissed: bool,
}

impl Playback {
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            in_frame: Duration::ZERO,
            index: 0,
            active: false,
            sound_enabled: false,
            hint_dismissed: false,
        }
    }

    /// Begin playback. Idempotent.
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn tick(&mut self, delta: Duration) {
        if !self.active || self.frame_interval.is_zero() {
            return;
        }
        self.in_frame = self.in_frame.saturating_add(delta);
        while self.in_frame >= self.frame_interval {
            self.in_frame -= self.frame_interval;
            self.index = (self.index + 1) % FRAMES.len();
        }
    }

    #[must_use]
    pub fn current_frame(&self) -> &'static str {
        FRAMES[self.index]
    }

    /// The explicit user gesture that unlocks audio.
    pub fn enable_sound(&mut self) {
        self.sound_enabled = true;
        self.hint_dismissed = true;
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Whether the "tap for sound" affordance is still shown.
    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.active && !self.hint_dismissed
    }
}
