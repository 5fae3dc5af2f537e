//! Layout presets loaded from JSON.
//!
//! ```json
//! {
//!   "horizontal": { "spacing": 8, "paddingBefore": 12, "paddingAfter": 12 },
//!   "vertical": { "spacing": 4, "resizeToFit": false },
//!   "logLevel": "debug"
//! }
//! ```
//!
//! Every key is optional; missing ones take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trellis_core::Axis;
use trellis_layout::ChildViewLayoutOptions;

use crate::logging;

/// Errors raised while loading a [`LayoutConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for a [`LayoutConfig`].
    #[error("invalid layout config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A padding or spacing is negative.
    #[error("{axis} {field} must not be negative, got {value}")]
    Negative {
        /// The preset the value belongs to.
        axis: &'static str,
        /// The offending option.
        field: &'static str,
        /// The value found.
        value: f32,
    },
}

/// Stack option presets for each axis, plus the log level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Options for horizontal stacks.
    pub horizontal: ChildViewLayoutOptions,
    /// Options for vertical stacks.
    pub vertical: ChildViewLayoutOptions,
    /// Level cap handed to [`logging::set_log_level`].
    pub log_level: Option<String>,
}

impl LayoutConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::Negative`] for negative paddings or spacing.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the presets back to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `serde_json` rejects the value.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The preset for stacks along `axis`.
    #[must_use]
    pub const fn options(&self, axis: Axis) -> ChildViewLayoutOptions {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Applies `log_level`, if any, to the global cap.
    pub fn apply_log_level(&self) {
        if let Some(level) = &self.log_level {
            logging::set_log_level(level);
        }
    }

    /// Rejects negative paddings and spacing.
    ///
    /// # Errors
    ///
    /// Returns the first negative value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("horizontal", &self.horizontal)?;
        check("vertical", &self.vertical)
    }
}

fn check(axis: &'static str, options: &ChildViewLayoutOptions) -> Result<(), ConfigError> {
    let fields = [
        ("paddingBefore", options.padding_before),
        ("paddingAfter", options.padding_after),
        ("spacing", options.spacing),
    ];
    for (field, value) in fields {
        if value < 0.0 {
            return Err(ConfigError::Negative { axis, field, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = LayoutConfig::from_json(r#"{ "horizontal": { "spacing": 8 } }"#).unwrap();

        assert_eq!(config.horizontal, ChildViewLayoutOptions::spaced(8.0));
        assert_eq!(config.vertical, ChildViewLayoutOptions::default());
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn camel_case_keys_are_read() {
        let config = LayoutConfig::from_json(
            r#"{
                "vertical": { "paddingBefore": 4, "paddingAfter": 6, "resizeToFit": false },
                "logLevel": "debug"
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.options(Axis::Vertical),
            ChildViewLayoutOptions::spaced(0.0)
                .padding(4.0, 6.0)
                .resize_to_fit(false)
        );
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let error = LayoutConfig::from_json(r#"{ "vertical": { "spacing": -2 } }"#).unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Negative {
                axis: "vertical",
                field: "spacing",
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "vertical spacing must not be negative, got -2"
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = LayoutConfig::from_json("{ horizontal: }").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn presets_survive_serialization() {
        let config = LayoutConfig {
            horizontal: ChildViewLayoutOptions::spaced(8.0).padding(12.0, 12.0),
            ..LayoutConfig::default()
        };

        let json = config.to_json().unwrap();
        assert!(json.contains("\"paddingBefore\": 12.0"));
        assert_eq!(LayoutConfig::from_json(&json).unwrap(), config);
    }
}
