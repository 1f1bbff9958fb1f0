//! Render options shared between the engine and the TUI.

/// Presentation toggles resolved from config and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and particles.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Disable fade-ins, fireworks motion, and the playback animation.
    pub reduced_motion: bool,
}
