//! Card configuration loaded from `~/.valentine/config.toml`.

use serde::Deserialize;
use std::time::Duration;
use std::{env, path::PathBuf};

use valentine_types::UiOptions;

/// Default dwell on the auto-advancing stages.
pub const DEFAULT_STAGE_DWELL: Duration = Duration::from_secs(5);

/// Default interval between playback animation frames.
pub const DEFAULT_PLAYBACK_FRAME: Duration = Duration::from_millis(250);

#[derive(Debug, Default, Deserialize)]
pub struct CardConfig {
    pub card: Option<CardSection>,
    pub app: Option<AppSection>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// `[card]` - texts and timings of the presentation.
#[derive(Debug, Default, Deserialize)]
pub struct CardSection {
    /// Name used in the default greeting when no explicit text is given.
    pub recipient: Option<String>,
    pub greeting: Option<String>,
    pub question: Option<String>,
    pub prompt: Option<String>,
    pub yes_label: Option<String>,
    pub no_label: Option<String>,
    pub celebration: Option<String>,
    /// Seconds each auto-advancing stage stays on screen.
    pub stage_dwell_secs: Option<f64>,
    /// Milliseconds between playback animation frames.
    pub playback_frame_ms: Option<u64>,
}

/// `[app]` - presentation toggles.
#[derive(Debug, Default, Deserialize)]
pub struct AppSection {
    /// Use ASCII-only glyphs for icons and particles.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable fade-ins, fireworks, and the playback animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl CardConfig {
    /// Load the config file if one exists. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve UI options: config first, then `VALENTINE_*` env overrides.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: env_flag("VALENTINE_ASCII")
                .unwrap_or_else(|| app.is_some_and(|a| a.ascii_only)),
            high_contrast: env_flag("VALENTINE_HIGH_CONTRAST")
                .unwrap_or_else(|| app.is_some_and(|a| a.high_contrast)),
            reduced_motion: env_flag("VALENTINE_REDUCED_MOTION")
                .unwrap_or_else(|| app.is_some_and(|a| a.reduced_motion)),
        }
    }

    #[must_use]
    pub fn stage_dwell(&self) -> Duration {
        self.card
            .as_ref()
            .and_then(|card| card.stage_dwell_secs)
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map_or(DEFAULT_STAGE_DWELL, Duration::from_secs_f64)
    }

    #[must_use]
    pub fn playback_frame_interval(&self) -> Duration {
        self.card
            .as_ref()
            .and_then(|card| card.playback_frame_ms)
            .map_or(DEFAULT_PLAYBACK_FRAME, Duration::from_millis)
    }
}

fn env_flag(name: &str) -> Option<bool> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        },
        Err(_) => None,
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".valentine").join("config.toml"))
}

/// The resolved, user-facing texts of the card.
#[derive(Debug, Clone)]
pub struct CardText {
    pub greeting: String,
    pub question: String,
    pub prompt: String,
    pub yes_label: String,
    pub no_label: String,
    pub celebration: String,
}

impl CardText {
    #[must_use]
    pub fn resolve(config: &CardConfig) -> Self {
        let card = config.card.as_ref();
        let pick = |field: Option<&String>, fallback: String| {
            field
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map_or(fallback, str::to_string)
        };

        let greeting_fallback = match card.and_then(|c| c.recipient.as_deref()) {
            Some(name) if !name.trim().is_empty() => {
                format!("Hi {}, I have something to ask you...", name.trim())
            }
            _ => "Hi, I have something to ask you...".to_string(),
        };

        Self {
            greeting: pick(card.and_then(|c| c.greeting.as_ref()), greeting_fallback),
            question: pick(
                card.and_then(|c| c.question.as_ref()),
                "Are you ready?".to_string(),
            ),
            prompt: pick(
                card.and_then(|c| c.prompt.as_ref()),
                "Will you be my Valentine?".to_string(),
            ),
            yes_label: pick(
                card.and_then(|c| c.yes_label.as_ref()),
                "Yes, I will!".to_string(),
            ),
            no_label: pick(
                card.and_then(|c| c.no_label.as_ref()),
                "No, I won't".to_string(),
            ),
            celebration: pick(
                card.and_then(|c| c.celebration.as_ref()),
                "I love you! Happy Valentine's Day!".to_string(),
            ),
        }
    }
}

impl Default for CardText {
    fn default() -> Self {
        Self::resolve(&CardConfig::default())
    }
}
