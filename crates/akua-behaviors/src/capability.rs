//! Optional third-party widget capabilities.
//!
//! The date-picker and tooltip steps depend on libraries the page may or may
//! not load. Rather than probing globals at the point of use, the host detects
//! them once and hands the attacher a [`Capabilities`] value; a missing
//! capability turns its step into a no-op.
//!
//! Closures implement both traits, which keeps test doubles short:
//!
//! ```rust
//! use akua_behaviors::{Capabilities, DatePickerOptions, ElementId, Result};
//!
//! let caps = Capabilities::<ElementId>::none()
//!     .with_date_picker(|_el: &ElementId, _opts: &DatePickerOptions| -> Result<()> { Ok(()) });
//! assert!(caps.date_picker().is_some());
//! assert!(caps.tooltip().is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Date format handed to the date picker: `2024-03-09`.
pub const ISO_DATE_FORMAT: &str = "Y-m-d";

/// Options passed to the date-picker initializer for every element.
///
/// Serializes to the picker's own option names (`{"dateFormat": "Y-m-d"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatePickerOptions {
    /// Display and parse format, in the picker's token syntax.
    pub date_format: String,
}

impl Default for DatePickerOptions {
    fn default() -> Self {
        Self {
            date_format: ISO_DATE_FORMAT.to_string(),
        }
    }
}

/// A date-picker library that can enhance one element at a time.
pub trait DatePicker<E> {
    /// Initialize the picker on `element`. The widget instance is not kept.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Capability`](crate::BehaviorError::Capability)
    /// if the library throws.
    fn initialize(&self, element: &E, options: &DatePickerOptions) -> Result<()>;
}

impl<E, F> DatePicker<E> for F
where
    F: Fn(&E, &DatePickerOptions) -> Result<()>,
{
    fn initialize(&self, element: &E, options: &DatePickerOptions) -> Result<()> {
        self(element, options)
    }
}

/// A tooltip library that attaches one widget per element.
pub trait TooltipFactory<E> {
    /// Construct a tooltip on `element`.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Capability`](crate::BehaviorError::Capability)
    /// if the library throws.
    fn attach(&self, element: &E) -> Result<()>;
}

impl<E, F> TooltipFactory<E> for F
where
    F: Fn(&E) -> Result<()>,
{
    fn attach(&self, element: &E) -> Result<()> {
        self(element)
    }
}

/// The optional libraries available to one attach pass.
pub struct Capabilities<E> {
    date_picker: Option<Box<dyn DatePicker<E>>>,
    tooltip: Option<Box<dyn TooltipFactory<E>>>,
}

impl<E> Default for Capabilities<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E> fmt::Debug for Capabilities<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("date_picker", &self.date_picker.is_some())
            .field("tooltip", &self.tooltip.is_some())
            .finish()
    }
}

impl<E> Capabilities<E> {
    /// No optional libraries.
    pub fn none() -> Self {
        Self {
            date_picker: None,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_date_picker(mut self, picker: impl DatePicker<E> + 'static) -> Self {
        self.date_picker = Some(Box::new(picker));
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, factory: impl TooltipFactory<E> + 'static) -> Self {
        self.tooltip = Some(Box::new(factory));
        self
    }

    pub fn date_picker(&self) -> Option<&dyn DatePicker<E>> {
        self.date_picker.as_deref()
    }

    pub fn tooltip(&self) -> Option<&dyn TooltipFactory<E>> {
        self.tooltip.as_deref()
    }
}
