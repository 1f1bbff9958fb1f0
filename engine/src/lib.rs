//! Core engine for Valentine - the card state machine without TUI
//! dependencies.
//!
//! Everything here is driven by the render loop: once per frame the binary
//! calls [`App::tick`], which measures the elapsed delta and advances the
//! reveal sequencer, the fireworks simulation, and the playback animation.
//! User input arrives as plain method calls. There is no other source of
//! mutation, so teardown cannot race a pending timer.

use std::time::{Duration, Instant};

pub use valentine_types::{
    AnimPhase, CellRect, EffectTimer, EvadePosition, RevealStage, UiOptions, ease_out_cubic,
};

mod config;
mod evasion;
mod fireworks;
mod playback;
mod sequencer;

pub use config::{CardConfig, CardText, ConfigError, DEFAULT_STAGE_DWELL};
pub use fireworks::{Fireworks, MAX_SPARKS, Spark};
pub use sequencer::{Sequencer, StageChange};

use evasion::DeclineButton;
use playback::Playback;

/// Duration of the headline fade-in on each stage.
const FADE_DURATION: Duration = Duration::from_millis(1200);

/// Cell rectangles the renderer laid out last frame, for pointer
/// hit-testing. Stale for at most one frame after an evasion, which only
/// makes the button marginally easier to chase - never easier to hit.
#[derive(Debug, Default, Clone, Copy)]
struct Layout {
    yes: Option<CellRect>,
    no: Option<CellRect>,
    sound_hint: Option<CellRect>,
}

pub struct App {
    options: UiOptions,
    text: CardText,
    sequencer: Sequencer,
    fade: EffectTimer,
    decline: DeclineButton,
    fireworks: Fireworks,
    playback: Playback,
    layout: Layout,
    should_quit: bool,
    last_frame: Instant,
}

impl App {
    /// Build the app from the user's config file and environment.
    pub fn new() -> anyhow::Result<Self> {
        let config = match CardConfig::load() {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Config ignored: {err}");
                CardConfig::default()
            }
        };
        let options = config.ui_options();
        Ok(Self::with_config(&config, options))
    }

    /// Build the app from an explicit config, bypassing file and env lookup.
    #[must_use]
    pub fn with_config(config: &CardConfig, options: UiOptions) -> Self {
        let fade = if options.reduced_motion {
            // A zero-length fade reads as "already complete".
            EffectTimer::new(Duration::ZERO)
        } else {
            EffectTimer::new(FADE_DURATION)
        };
        Self {
            options,
            text: CardText::resolve(config),
            sequencer: Sequencer::new(config.stage_dwell()),
            fade,
            decline: DeclineButton::default(),
            fireworks: Fireworks::default(),
            playback: Playback::new(config.playback_frame_interval()),
            layout: Layout::default(),
            should_quit: false,
            last_frame: Instant::now(),
        }
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Advance one frame using wall-clock elapsed time.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta);
    }

    /// Advance the presentation by an explicit delta. The frame loop calls
    /// this through [`App::tick`]; tests call it directly.
    pub fn advance(&mut self, delta: Duration) {
        self.fade.advance(delta);

        if let Some(change) = self.sequencer.tick(delta) {
            self.on_stage_change(change);
        }

        if !self.options.reduced_motion {
            self.fireworks.tick(delta);
            self.playback.tick(delta);
        }
    }

    fn on_stage_change(&mut self, change: StageChange) {
        self.fade.reset();
        // Rects from the previous screen must not keep catching clicks.
        self.layout = Layout::default();
        if change.to == RevealStage::Celebration {
            self.fireworks.activate();
            self.playback.start();
        }
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    /// The "yes" action. Only legal from `Prompt`; idempotent.
    pub fn confirm(&mut self) {
        if let Some(change) = self.sequencer.confirm() {
            self.on_stage_change(change);
        }
    }

    /// Any attempt to reach the decline button makes it jump.
    pub fn decline_attempt(&mut self) {
        if self.stage() == RevealStage::Prompt {
            self.decline.evade();
        }
    }

    /// The explicit gesture that unlocks audio.
    pub fn enable_sound(&mut self) {
        if self.stage() == RevealStage::Celebration {
            self.playback.enable_sound();
        }
    }

    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        if self.stage() == RevealStage::Prompt
            && self.layout.no.is_some_and(|rect| rect.contains(col, row))
        {
            self.decline.evade();
        }
    }

    pub fn pointer_clicked(&mut self, col: u16, row: u16) {
        match self.stage() {
            RevealStage::Prompt => {
                if self.layout.yes.is_some_and(|rect| rect.contains(col, row)) {
                    self.confirm();
                } else if self.layout.no.is_some_and(|rect| rect.contains(col, row)) {
                    self.decline.evade();
                }
            }
            RevealStage::Celebration => {
                if self
                    .layout
                    .sound_hint
                    .is_some_and(|rect| rect.contains(col, row))
                {
                    self.enable_sound();
                }
            }
            RevealStage::Greeting | RevealStage::Question => {}
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------
    // Renderer contract
    // ------------------------------------------------------------------

    /// Called by the renderer after laying out the prompt buttons.
    pub fn update_prompt_layout(&mut self, yes: CellRect, no: CellRect) {
        self.layout.yes = Some(yes);
        self.layout.no = Some(no);
    }

    /// Called by the renderer after laying out the sound affordance.
    pub fn update_sound_hint_layout(&mut self, rect: Option<CellRect>) {
        self.layout.sound_hint = rect;
    }

    #[must_use]
    pub fn stage(&self) -> RevealStage {
        self.sequencer.stage()
    }

    /// Eased fade-in progress for the current stage's headline.
    #[must_use]
    pub fn fade_progress(&self) -> f32 {
        match self.fade.phase() {
            AnimPhase::Completed => 1.0,
            AnimPhase::Running { progress } => ease_out_cubic(progress),
        }
    }

    #[must_use]
    pub fn text(&self) -> &CardText {
        &self.text
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn decline_position(&self) -> Option<EvadePosition> {
        self.decline.position()
    }

    #[must_use]
    pub fn decline_evasions(&self) -> u32 {
        self.decline.evasions()
    }

    #[must_use]
    pub fn fireworks_active(&self) -> bool {
        self.fireworks.is_active()
    }

    #[must_use]
    pub fn sparks(&self) -> &[Spark] {
        self.fireworks.sparks()
    }

    /// Bursts since the last frame; zero unless sound has been enabled.
    pub fn take_booms(&mut self) -> u32 {
        let booms = self.fireworks.take_booms();
        if self.playback.sound_enabled() { booms } else { 0 }
    }

    #[must_use]
    pub fn playback_frame(&self) -> &'static str {
        self.playback.current_frame()
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.playback.sound_enabled()
    }

    #[must_use]
    pub fn sound_hint_visible(&self) -> bool {
        self.playback.hint_visible()
    }

}
