//! # akua-wasm
//!
//! Akua page behaviors compiled to WebAssembly.
//!
//! Loading the module is enough: on start it waits for `DOMContentLoaded`
//! (or runs straight away if the document is already parsed) and attaches
//! the chip, counter, date picker and tooltip behaviors.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init from './pkg/akua_wasm.js';
//!
//! await init();
//! ```
//!
//! Built without the `autostart` feature, nothing runs until the page asks:
//!
//! ```javascript
//! import init, { attachBehaviorsWith } from './pkg/akua_wasm.js';
//!
//! await init();
//! const report = attachBehaviorsWith('{"active_class": "is-selected"}');
//! console.log(report.counter.status);
//! ```

#![forbid(unsafe_code)]

pub mod logging;

use akua_behaviors::wasm::WebDocument;
use akua_behaviors::{AttachReport, BehaviorAttacher, BehaviorConfig, Capabilities};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Module entry point.
///
/// # Errors
/// Returns a JS error if there is no document to attach to.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());

    #[cfg(feature = "autostart")]
    {
        let document = WebDocument::current().map_err(to_js_error)?;
        document
            .on_ready(|document| {
                run(&BehaviorAttacher::default(), &document);
            })
            .map_err(to_js_error)?;
    }
    Ok(())
}

fn run(attacher: &BehaviorAttacher, document: &WebDocument) -> AttachReport {
    let capabilities = web_sys::window().map_or_else(Capabilities::none, |w| Capabilities::detect(&w));
    attacher.attach(document, &capabilities)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn report_to_js(report: &AttachReport) -> Result<JsValue, JsValue> {
    report
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(to_js_error)
}

/// Attach the behaviors with the default markup conventions.
///
/// Returns the attach report as a plain object. Each call binds again, so
/// call it once per page unless the markup was replaced.
///
/// # Errors
/// Returns a JS error if there is no document.
#[wasm_bindgen(js_name = "attachBehaviors")]
pub fn attach_behaviors() -> Result<JsValue, JsValue> {
    let document = WebDocument::current().map_err(to_js_error)?;
    report_to_js(&run(&BehaviorAttacher::default(), &document))
}

/// Attach the behaviors with a JSON configuration.
///
/// Omitted fields keep their defaults.
///
/// # Errors
/// Returns a JS error if the configuration is invalid or there is no document.
#[wasm_bindgen(js_name = "attachBehaviorsWith")]
pub fn attach_behaviors_with(config_json: &str) -> Result<JsValue, JsValue> {
    let config = BehaviorConfig::from_json(config_json).map_err(to_js_error)?;
    let attacher = BehaviorAttacher::new(config).map_err(to_js_error)?;
    let document = WebDocument::current().map_err(to_js_error)?;
    report_to_js(&run(&attacher, &document))
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }
}
