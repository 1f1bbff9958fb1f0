//! Core domain types for Valentine - no IO, no async.

pub mod animation;
pub mod stage;
pub mod ui;
pub mod viewport;

pub use animation::{AnimPhase, EffectTimer, ease_out_cubic};
pub use stage::RevealStage;
pub use ui::UiOptions;
pub use viewport::{CellRect, EvadePosition};
