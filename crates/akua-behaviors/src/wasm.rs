//! Browser backend.
//!
//! [`WebDocument`] implements [`Dom`] over `web-sys`, and [`Capabilities::detect`]
//! looks for the page's `flatpickr` and `bootstrap.Tooltip` globals once.
//!
//! # Example
//!
//! ```rust,ignore
//! use akua_behaviors::wasm::WebDocument;
//! use akua_behaviors::{BehaviorAttacher, Capabilities};
//!
//! let document = WebDocument::current()?;
//! document.on_ready(move |document| {
//!     let caps = Capabilities::detect(&web_sys::window().unwrap());
//!     BehaviorAttacher::default().attach(&document, &caps);
//! })?;
//! ```

use serde::Serialize;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::capability::{Capabilities, DatePicker, DatePickerOptions, TooltipFactory};
use crate::dom::{ClickHandler, Dom};
use crate::error::{BehaviorError, Result};
use crate::selector::Selector;

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{value:?}"), |e| String::from(e.message()))
}

/// The live browser document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Unavailable`] outside a window context, e.g.
    /// in a worker.
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(BehaviorError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(BehaviorError::Unavailable("document"))?;
        Ok(Self::new(document))
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Run `callback` once the document structure is ready.
    ///
    /// If `DOMContentLoaded` has already fired, the callback runs immediately.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Listener`] if the listener cannot be added.
    pub fn on_ready(&self, callback: impl FnOnce(Self) + 'static) -> Result<()> {
        if self.document.ready_state() != "loading" {
            debug!(ready_state = %self.document.ready_state(), "Document already parsed");
            callback(self.clone());
            return Ok(());
        }

        let this = self.clone();
        let closure = Closure::once_into_js(move || callback(this));
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
            .map_err(|e| BehaviorError::Listener {
                event: "DOMContentLoaded",
                message: js_message(&e),
            })
    }
}

impl Dom for WebDocument {
    type Element = Element;

    fn query_all(&self, selector: &Selector) -> Result<Vec<Element>> {
        let css = selector.to_css();
        let nodes = self
            .document
            .query_selector_all(&css)
            .map_err(|e| BehaviorError::Query {
                selector: css.clone(),
                message: js_message(&e),
            })?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn query_first(&self, selector: &Selector) -> Result<Option<Element>> {
        let css = selector.to_css();
        self.document
            .query_selector(&css)
            .map_err(|e| BehaviorError::Query {
                selector: css,
                message: js_message(&e),
            })
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) -> Result<()> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn toggle_class(&self, element: &Element, class: &str) -> Result<bool> {
        element
            .class_list()
            .toggle(class)
            .map_err(|e| BehaviorError::Mutation(js_message(&e)))
    }

    fn on_click(&self, element: &Element, handler: ClickHandler) -> Result<()> {
        let closure = Closure::wrap(handler);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::Listener {
                event: "click",
                message: js_message(&e),
            })?;
        // Handlers live as long as the page.
        closure.forget();
        Ok(())
    }
}

/// The global `flatpickr(element, options)` function.
#[derive(Debug, Clone)]
pub struct Flatpickr {
    function: js_sys::Function,
}

impl Flatpickr {
    pub const GLOBAL: &'static str = "flatpickr";

    /// Look up `window.flatpickr`.
    pub fn detect(window: &Window) -> Option<Self> {
        js_sys::Reflect::get(window, &JsValue::from_str(Self::GLOBAL))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .map(|function| Self { function })
    }
}

impl DatePicker<Element> for Flatpickr {
    fn initialize(&self, element: &Element, options: &DatePickerOptions) -> Result<()> {
        let capability_err = |message: String| BehaviorError::Capability {
            name: Self::GLOBAL,
            message,
        };
        let options = options
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| capability_err(e.to_string()))?;
        self.function
            .call2(&JsValue::NULL, element, &options)
            .map_err(|e| capability_err(js_message(&e)))?;
        Ok(())
    }
}

/// The global `bootstrap.Tooltip` constructor.
#[derive(Debug, Clone)]
pub struct BootstrapTooltip {
    constructor: js_sys::Function,
}

impl BootstrapTooltip {
    pub const GLOBAL: &'static str = "bootstrap";

    /// Look up `window.bootstrap.Tooltip`.
    pub fn detect(window: &Window) -> Option<Self> {
        let bootstrap = js_sys::Reflect::get(window, &JsValue::from_str(Self::GLOBAL)).ok()?;
        if !bootstrap.is_object() {
            return None;
        }
        js_sys::Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .map(|constructor| Self { constructor })
    }
}

impl TooltipFactory<Element> for BootstrapTooltip {
    fn attach(&self, element: &Element) -> Result<()> {
        js_sys::Reflect::construct(&self.constructor, &js_sys::Array::of1(element))
            .map_err(|e| BehaviorError::Capability {
                name: "bootstrap.Tooltip",
                message: js_message(&e),
            })?;
        Ok(())
    }
}

impl Capabilities<Element> {
    /// Probe `window` once for the optional libraries.
    pub fn detect(window: &Window) -> Self {
        let flatpickr = Flatpickr::detect(window);
        let tooltip = BootstrapTooltip::detect(window);
        debug!(
            flatpickr = flatpickr.is_some(),
            bootstrap_tooltip = tooltip.is_some(),
            "Capabilities detected"
        );

        let mut caps = Self::none();
        if let Some(picker) = flatpickr {
            caps = caps.with_date_picker(picker);
        }
        if let Some(factory) = tooltip {
            caps = caps.with_tooltip(factory);
        }
        caps
    }
}
