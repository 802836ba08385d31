//! Element selectors.
//!
//! Behaviors find their elements through a small, closed set of matchers
//! rather than free-form CSS. A [`Selector`] renders to a CSS selector string
//! for `querySelectorAll` in the browser, and matches [`ElementData`] directly
//! in the in-memory document.
//!
//! # Example
//!
//! ```rust
//! use akua_behaviors::Selector;
//!
//! let dates = Selector::any_of([Selector::input_type("date"), Selector::class("js-date")]);
//! assert_eq!(dates.to_css(), "input[type='date'], .js-date");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::memory::ElementData;

/// A matcher for page elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selector {
    /// Element carries the attribute, any value: `[data-chip]`.
    Attribute { name: String },
    /// Attribute with an exact value: `[data-bs-toggle="tooltip"]`.
    AttributeValue { name: String, value: String },
    /// `<input>` with the given `type`: `input[type='date']`.
    InputType {
        #[serde(rename = "type")]
        input_type: String,
    },
    /// Element has the class: `.js-date`.
    Class { name: String },
    /// Union of selectors: `a, b`.
    AnyOf { selectors: Vec<Selector> },
}

impl Selector {
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute { name: name.into() }
    }

    pub fn attribute_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AttributeValue {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn input_type(input_type: impl Into<String>) -> Self {
        Self::InputType {
            input_type: input_type.into(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Class { name: name.into() }
    }

    pub fn any_of(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self::AnyOf {
            selectors: selectors.into_iter().collect(),
        }
    }

    /// Render as a CSS selector list.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Attribute { name } => format!("[{name}]"),
            Self::AttributeValue { name, value } => format!("[{name}=\"{value}\"]"),
            Self::InputType { input_type } => format!("input[type='{input_type}']"),
            Self::Class { name } => format!(".{name}"),
            Self::AnyOf { selectors } => selectors
                .iter()
                .map(Self::to_css)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Whether an in-memory element matches.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Attribute { name } => element.attribute(name).is_some(),
            Self::AttributeValue { name, value } => element.attribute(name) == Some(value.as_str()),
            // HTML treats both the tag name and the `type` keyword case-insensitively.
            Self::InputType { input_type } => {
                element.tag().eq_ignore_ascii_case("input")
                    && element
                        .attribute("type")
                        .is_some_and(|t| t.eq_ignore_ascii_case(input_type))
            }
            Self::Class { name } => element.has_class(name),
            Self::AnyOf { selectors } => selectors.iter().any(|s| s.matches(element)),
        }
    }

    /// Check that every identifier is a plain CSS name.
    ///
    /// Values are interpolated into selector strings unescaped, so only
    /// `[A-Za-z0-9_-]` is accepted for names, and quotes and backslashes are
    /// rejected in attribute values.
    ///
    /// # Errors
    /// Returns a description of the first offending part.
    pub fn validate(&self) -> Result<(), String> {
        fn ident(kind: &str, s: &str) -> Result<(), String> {
            if s.is_empty() {
                return Err(format!("{kind} must not be empty"));
            }
            if let Some(c) = s
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            {
                return Err(format!("{kind} {s:?} contains {c:?}"));
            }
            Ok(())
        }

        match self {
            Self::Attribute { name } | Self::Class { name } => ident("name", name),
            Self::AttributeValue { name, value } => {
                ident("name", name)?;
                if value.contains(['"', '\'', '\\']) {
                    return Err(format!("value {value:?} contains a quote or backslash"));
                }
                Ok(())
            }
            Self::InputType { input_type } => ident("input type", input_type),
            Self::AnyOf { selectors } => {
                if selectors.is_empty() {
                    return Err("any_of needs at least one selector".into());
                }
                selectors.iter().try_for_each(Self::validate)
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
