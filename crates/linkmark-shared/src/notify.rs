//! User-facing notification banners.
//!
//! The state layer only records the notification; rendering, the dismiss
//! timeout and the banner widget itself belong to the UI.

use serde::{Deserialize, Serialize};

/// Severity of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// Display options handed to the banner widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Show a dismiss button.
    pub button: bool,
    /// How long the banner stays visible, in milliseconds.
    pub duration_ms: u32,
    /// Screen position ("bottom", "top", ...).
    pub position: String,
    /// Keep the banner until explicitly closed.
    pub sticky: bool,
    /// Widget theme name.
    pub theme: String,
    /// Whether the message may contain HTML.
    pub html: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            button: false,
            duration_ms: 4000,
            position: "bottom".to_string(),
            sticky: false,
            theme: "pure".to_string(),
            html: false,
        }
    }
}

/// A notification with its display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    #[serde(default)]
    pub config: NotificationConfig,
}

impl Notification {
    /// An info-level notification with default display config.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            config: NotificationConfig::default(),
        }
    }

    /// A warning-level notification with default display config.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            config: NotificationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_banner_widget() {
        let n = Notification::info("x");

        assert_eq!(n.level, NotificationLevel::Info);
        assert!(!n.config.button);
        assert_eq!(n.config.duration_ms, 4000);
        assert_eq!(n.config.position, "bottom");
        assert!(!n.config.sticky);
        assert_eq!(n.config.theme, "pure");
        assert!(!n.config.html);
    }
}
