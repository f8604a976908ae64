//! Application configuration
//!
//! Window settings come from environment variables, falling back to
//! defaults sized like a phone screen.

use std::env;

/// Smallest window the screen is allowed to shrink to
pub const MIN_WINDOW_SIZE: [f32; 2] = [320.0, 480.0];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Native window configuration
    pub window: WindowConfig,
}

/// Native window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Title shown in the window decoration
    pub title: String,
    /// Initial inner width in points
    pub width: f32,
    /// Initial inner height in points
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ReddotMobile".to_string(),
            width: 390.0,
            height: 844.0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = WindowConfig::default();
        Self {
            window: WindowConfig {
                title: lookup("REDDOT_WINDOW_TITLE")
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or(defaults.title),
                width: parse_dimension(lookup("REDDOT_WINDOW_WIDTH")).unwrap_or(defaults.width),
                height: parse_dimension(lookup("REDDOT_WINDOW_HEIGHT"))
                    .unwrap_or(defaults.height),
            },
        }
    }

    /// Initial inner window size as `[width, height]`
    pub fn inner_size(&self) -> [f32; 2] {
        [self.window.width, self.window.height]
    }
}

fn parse_dimension(value: Option<String>) -> Option<f32> {
    value
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
