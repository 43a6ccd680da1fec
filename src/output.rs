//! # Output Configuration
//!
//! This module controls whether CLI output is colored, based on terminal
//! capabilities and user preferences.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use revstamp::output::{OutputConfig, highlight};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! println!("Version: {}", highlight(&config, "1.2.0"));
//! ```

use std::env;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Renders a resolved value in bold green when colors are enabled.
pub fn highlight(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        style(text).green().bold().force_styling(true).to_string()
    } else {
        text.to_string()
    }
}

/// Renders secondary information dimmed when colors are enabled.
pub fn dim(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        style(text).dim().force_styling(true).to_string()
    } else {
        text.to_string()
    }
}
