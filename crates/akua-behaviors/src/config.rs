//! Attach configuration.
//!
//! [`BehaviorConfig`] carries every selector and class name the behaviors
//! use. The defaults are the markup conventions of the Akua templates; a page
//! can override any of them from JSON or TOML, and omitted fields keep their
//! defaults.
//!
//! ```rust
//! use akua_behaviors::BehaviorConfig;
//!
//! let config = BehaviorConfig::from_json(r#"{ "active_class": "is-on" }"#).unwrap();
//! assert_eq!(config.active_class, "is-on");
//! assert_eq!(config.chip.to_css(), "[data-chip]");
//! ```

use serde::{Deserialize, Serialize};

use crate::capability::DatePickerOptions;
use crate::counter::CounterSelectors;
use crate::error::ConfigError;
use crate::selector::Selector;

/// Selectors, class names and widget options for one attach pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Elements that toggle when clicked.
    pub chip: Selector,
    /// Class a chip click flips.
    pub active_class: String,
    /// The counter's decrement, increment and output elements.
    pub counter: CounterSelectors,
    /// Inputs handed to the date picker.
    pub date_input: Selector,
    /// Options passed with every date input.
    pub date_picker: DatePickerOptions,
    /// Elements that get a tooltip.
    pub tooltip: Selector,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            chip: Selector::attribute("data-chip"),
            active_class: "active".to_string(),
            counter: CounterSelectors::default(),
            date_input: Selector::any_of([Selector::input_type("date"), Selector::class("js-date")]),
            date_picker: DatePickerOptions::default(),
            tooltip: Selector::attribute_value("data-bs-toggle", "tooltip"),
        }
    }
}

impl BehaviorConfig {
    /// Check selectors and names before they reach a document.
    ///
    /// # Errors
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("chip", &self.chip),
            ("counter.decrement", &self.counter.decrement),
            ("counter.increment", &self.counter.increment),
            ("counter.output", &self.counter.output),
            ("date_input", &self.date_input),
            ("tooltip", &self.tooltip),
        ];
        for (field, selector) in selectors {
            selector
                .validate()
                .map_err(|reason| ConfigError::InvalidSelector { field, reason })?;
        }

        if self.active_class.is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(ConfigError::EmptyClass("active_class"));
        }
        if self.date_picker.date_format.trim().is_empty() {
            return Err(ConfigError::InvalidDateFormat);
        }
        Ok(())
    }

    /// Load from JSON text.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markup_conventions() {
        let config = BehaviorConfig::default();
        assert_eq!(config.chip.to_css(), "[data-chip]");
        assert_eq!(config.counter.decrement.to_css(), "[data-dec]");
        assert_eq!(config.counter.increment.to_css(), "[data-inc]");
        assert_eq!(config.counter.output.to_css(), "[data-out]");
        assert_eq!(config.date_input.to_css(), "input[type='date'], .js-date");
        assert_eq!(config.tooltip.to_css(), "[data-bs-toggle=\"tooltip\"]");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.date_picker.date_format, "Y-m-d");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(BehaviorConfig::from_json("{}").unwrap(), BehaviorConfig::default());
    }

    #[test]
    fn empty_nested_tables_keep_defaults() {
        let config = BehaviorConfig::from_json(r#"{ "date_picker": {}, "counter": {} }"#).unwrap();
        assert_eq!(config, BehaviorConfig::default());

        let config = BehaviorConfig::from_toml(
            r#"
            [counter.output]
            kind = "attribute"
            name = "data-count"
            "#,
        )
        .unwrap();
        assert_eq!(config.counter.output.to_css(), "[data-count]");
        assert_eq!(config.counter.decrement.to_css(), "[data-dec]");
    }

    #[test]
    fn json_overrides_nested_fields() {
        let config = BehaviorConfig::from_json(
            r#"{
                "chip": { "kind": "class", "name": "chip" },
                "date_picker": { "dateFormat": "d/m/Y" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.chip, Selector::class("chip"));
        assert_eq!(config.date_picker.date_format, "d/m/Y");
        assert_eq!(config.tooltip, BehaviorConfig::default().tooltip);
    }

    #[test]
    fn toml_round_trip_of_counter_markers() {
        let config = BehaviorConfig::from_toml(
            r#"
            [counter.decrement]
            kind = "attribute"
            name = "data-minus"

            [counter.increment]
            kind = "attribute"
            name = "data-plus"

            [counter.output]
            kind = "attribute"
            name = "data-count"
            "#,
        )
        .unwrap();
        assert_eq!(config.counter.decrement.to_css(), "[data-minus]");
        assert_eq!(config.counter.output.to_css(), "[data-count]");
    }

    #[test]
    fn rejects_bad_values() {
        let err = BehaviorConfig::from_json(r#"{ "active_class": "" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyClass("active_class")));

        let err = BehaviorConfig::from_json(r#"{ "chip": { "kind": "attribute", "name": "a]" } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSelector { field: "chip", .. }));

        let err =
            BehaviorConfig::from_json(r#"{ "date_picker": { "dateFormat": " " } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDateFormat));

        assert!(matches!(
            BehaviorConfig::from_json("[").unwrap_err(),
            ConfigError::Json(_)
        ));
    }
}
