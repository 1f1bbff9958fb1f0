//! Color theme and glyphs for the Valentine TUI.
//!
//! A rose-tinted palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use valentine_types::UiOptions;

/// Rose palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(24, 16, 24);
    pub const BG_PANEL: Color = Color::Rgb(38, 24, 34);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(58, 36, 50);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(246, 234, 236);
    pub const TEXT_SECONDARY: Color = Color::Rgb(216, 188, 198);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 104, 116);

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(244, 114, 160); // rose
    pub const PRIMARY_DIM: Color = Color::Rgb(178, 98, 132);

    // === Accent Colors ===
    pub const GOLD: Color = Color::Rgb(246, 196, 118);
    pub const CRIMSON: Color = Color::Rgb(226, 68, 92);
    pub const LILAC: Color = Color::Rgb(186, 148, 214);
    pub const MINT: Color = Color::Rgb(148, 206, 168);

    // === Semantic Aliases ===
    pub const ACCENT: Color = GOLD;
    pub const SUCCESS: Color = MINT;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub gold: Color,
    pub crimson: Color,
    pub lilac: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            gold: colors::GOLD,
            crimson: colors::CRIMSON,
            lilac: colors::LILAC,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Magenta,
            primary_dim: Color::Gray,
            accent: Color::Yellow,
            success: Color::Green,
            gold: Color::Yellow,
            crimson: Color::Red,
            lilac: Color::Magenta,
        }
    }

    /// Colors the firework sparks cycle through, keyed by burst seed.
    #[must_use]
    pub fn spark_colors(&self) -> [Color; 4] {
        [self.gold, self.primary, self.lilac, self.crimson]
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for hearts, sparks, and hints.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub heart: &'static str,
    pub heart_outline: &'static str,
    pub note: &'static str,
    /// Spark appearance from freshly burst to almost faded.
    pub spark_frames: &'static [&'static str],
    /// Faint glyphs used for the memory mosaic behind the prompt.
    pub mosaic: &'static [&'static str],
}

const SPARK_FRAMES: &[&str] = &["✦", "✧", "*", "·"];
const SPARK_FRAMES_ASCII: &[&str] = &["*", "+", "x", "."];
const MOSAIC: &[&str] = &["♥", "♡", "·"];
const MOSAIC_ASCII: &[&str] = &["v", "o", "."];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            heart: "<3",
            heart_outline: "<3",
            note: "s",
            spark_frames: SPARK_FRAMES_ASCII,
            mosaic: MOSAIC_ASCII,
        }
    } else {
        Glyphs {
            heart: "♥",
            heart_outline: "♡",
            note: "♪",
            spark_frames: SPARK_FRAMES,
            mosaic: MOSAIC,
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn headline(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn yes_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn no_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::{glyphs, palette};
    use valentine_types::UiOptions;

    #[test]
    fn ascii_glyphs_contain_no_unicode() {
        let glyphs = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for frame in glyphs.spark_frames {
            assert!(frame.is_ascii());
        }
        for cell in glyphs.mosaic {
            assert!(cell.is_ascii());
        }
        assert!(glyphs.heart.is_ascii());
        assert!(glyphs.note.is_ascii());
    }

    #[test]
    fn high_contrast_pins_backgrounds_to_black() {
        let options = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        let palette = palette(options);
        assert_eq!(palette.bg_dark, ratatui::style::Color::Black);
        assert_eq!(palette.bg_panel, ratatui::style::Color::Black);
    }

    #[test]
    fn spark_ramp_has_a_frame_for_every_quarter() {
        for options in [
            UiOptions::default(),
            UiOptions {
                ascii_only: true,
                ..UiOptions::default()
            },
        ] {
            assert_eq!(glyphs(options).spark_frames.len(), 4);
        }
    }
}
