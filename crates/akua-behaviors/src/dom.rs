//! The document abstraction behaviors run against.
//!
//! [`Dom`] covers the handful of operations the behaviors need: selecting
//! elements, reading and writing text, toggling a class and registering a
//! click handler. [`MemoryDocument`](crate::MemoryDocument) implements it for
//! native hosts and tests; with the `wasm` feature,
//! [`WebDocument`](crate::wasm::WebDocument) implements it over `web-sys`.

use crate::error::Result;
use crate::selector::Selector;

/// Click handler stored by a backend for the lifetime of the page.
pub type ClickHandler = Box<dyn FnMut()>;

/// A document whose elements can be selected, mutated and listened to.
///
/// Handles are cheap to clone and share the same underlying document, so a
/// click handler can capture one and mutate the page when it fires. All
/// operations run on the single UI thread; nothing here is `Send`.
pub trait Dom: Clone + 'static {
    /// Handle to one element of this document.
    type Element: Clone + 'static;

    /// All elements matching `selector`, in document order.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Query`](crate::BehaviorError::Query) if the
    /// backend rejects the selector.
    fn query_all(&self, selector: &Selector) -> Result<Vec<Self::Element>>;

    /// The first element matching `selector`.
    ///
    /// # Errors
    /// Same as [`Dom::query_all`].
    fn query_first(&self, selector: &Selector) -> Result<Option<Self::Element>> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    /// Text content of an element (empty if it has none).
    fn text(&self, element: &Self::Element) -> String;

    /// Replace an element's text content.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Mutation`](crate::BehaviorError::Mutation) if
    /// the element can no longer be updated.
    fn set_text(&self, element: &Self::Element, text: &str) -> Result<()>;

    /// Whether an element has `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Flip `class` on an element and return whether it is now present.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Mutation`](crate::BehaviorError::Mutation) if
    /// the class list cannot be changed.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> Result<bool>;

    /// Run `handler` every time the element is clicked.
    ///
    /// # Errors
    /// Returns [`BehaviorError::Listener`](crate::BehaviorError::Listener) if
    /// the listener cannot be registered.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<()>;
}
