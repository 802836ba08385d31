#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! # Akua behaviors
//!
//! The small set of page behaviors the Akua templates rely on, attached once
//! the document is ready:
//!
//! - **Chips**: elements marked `data-chip` toggle an `active` class on click.
//! - **Traveler counter**: `data-dec` / `data-inc` buttons step the number in
//!   `data-out`, never below 1.
//! - **Date inputs**: `input[type=date]` and `.js-date` get a flatpickr picker
//!   using `Y-m-d`, when flatpickr is loaded.
//! - **Tooltips**: `[data-bs-toggle="tooltip"]` elements get a Bootstrap
//!   tooltip, when Bootstrap is loaded.
//!
//! Behaviors run against the [`Dom`] trait. [`MemoryDocument`] implements it
//! natively; the `wasm` feature adds [`wasm::WebDocument`] for the browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use akua_behaviors::{BehaviorAttacher, Capabilities, Dom, ElementSpec, MemoryDocument};
//!
//! let doc = MemoryDocument::new();
//! let dec = doc.append(ElementSpec::new("button").attr("data-dec", ""));
//! let out = doc.append(ElementSpec::new("span").attr("data-out", "").text("3"));
//! let inc = doc.append(ElementSpec::new("button").attr("data-inc", ""));
//!
//! let report = BehaviorAttacher::default().attach(&doc, &Capabilities::none());
//! assert!(report.counter.is_bound());
//!
//! doc.click(inc);
//! assert_eq!(doc.text(&out), "4");
//! for _ in 0..4 {
//!     doc.click(dec);
//! }
//! assert_eq!(doc.text(&out), "1");
//! ```

pub mod attacher;
pub mod capability;
pub mod chip;
pub mod config;
pub mod counter;
pub mod date_input;
pub mod dom;
pub mod error;
pub mod memory;
pub mod report;
pub mod selector;
pub mod tooltip;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports
pub use attacher::BehaviorAttacher;
pub use capability::{Capabilities, DatePicker, DatePickerOptions, ISO_DATE_FORMAT, TooltipFactory};
pub use chip::bind_chips;
pub use config::BehaviorConfig;
pub use counter::{COUNTER_FLOOR, Counter, CounterBinding, CounterSelectors, bind_counter};
pub use date_input::enhance_date_inputs;
pub use dom::{ClickHandler, Dom};
pub use error::{BehaviorError, ConfigError, Result};
pub use memory::{ElementData, ElementId, ElementSpec, MemoryDocument};
pub use report::{AttachReport, CounterOutcome, StepOutcome};
pub use selector::Selector;
pub use tooltip::enhance_tooltips;

#[cfg(feature = "wasm")]
pub use wasm::{BootstrapTooltip, Flatpickr, WebDocument};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::attacher::BehaviorAttacher;
    pub use crate::capability::{Capabilities, DatePicker, DatePickerOptions, TooltipFactory};
    pub use crate::config::BehaviorConfig;
    pub use crate::dom::Dom;
    pub use crate::memory::{ElementSpec, MemoryDocument};
    pub use crate::report::{AttachReport, CounterOutcome, StepOutcome};
    pub use crate::selector::Selector;
    #[cfg(feature = "wasm")]
    pub use crate::wasm::WebDocument;
}
