//! Headless in-memory document.
//!
//! A flat list of elements with attributes, classes and text, plus click
//! listeners. It is enough to run every behavior natively: build the markup
//! with [`ElementSpec`], attach, then drive it with [`MemoryDocument::click`].
//!
//! # Example
//!
//! ```rust
//! use akua_behaviors::{Dom, ElementSpec, MemoryDocument, Selector};
//!
//! let doc = MemoryDocument::new();
//! let chip = doc.append(ElementSpec::new("button").attr("data-chip", ""));
//!
//! let found = doc.query_all(&Selector::attribute("data-chip")).unwrap();
//! assert_eq!(found, vec![chip]);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::{ClickHandler, Dom};
use crate::error::{BehaviorError, Result};
use crate::selector::Selector;

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

/// The state of one in-memory element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
}

impl ElementData {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Builder for an element appended to a [`MemoryDocument`].
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    data: ElementData,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            data: ElementData {
                tag: tag.into(),
                ..ElementData::default()
            },
        }
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.data.has_class(&class) {
            self.data.classes.push(class);
        }
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.data.text = text.into();
        self
    }

    pub fn into_data(self) -> ElementData {
        self.data
    }
}

type SharedHandler = Rc<RefCell<ClickHandler>>;

#[derive(Default)]
struct Tree {
    elements: Vec<ElementData>,
    listeners: Vec<(ElementId, SharedHandler)>,
}

/// A cloneable handle to an in-memory document.
///
/// Clones share the same elements and listeners.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("MemoryDocument")
            .field("elements", &tree.elements)
            .field("listeners", &tree.listeners.len())
            .finish()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn append(&self, spec: ElementSpec) -> ElementId {
        let mut tree = self.tree.borrow_mut();
        tree.elements.push(spec.data);
        ElementId(tree.elements.len() - 1)
    }

    /// Snapshot of an element's state.
    pub fn element(&self, id: ElementId) -> Option<ElementData> {
        self.tree.borrow().elements.get(id.0).cloned()
    }

    pub fn len(&self) -> usize {
        self.tree.borrow().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of click listeners registered on an element.
    pub fn listener_count(&self, id: ElementId) -> usize {
        self.tree
            .borrow()
            .listeners
            .iter()
            .filter(|(target, _)| *target == id)
            .count()
    }

    /// Dispatch a click to an element, running its listeners in registration
    /// order. Returns how many ran.
    pub fn click(&self, id: ElementId) -> usize {
        // Collect first so handlers can borrow the tree while they run.
        let handlers: Vec<SharedHandler> = self
            .tree
            .borrow()
            .listeners
            .iter()
            .filter(|(target, _)| *target == id)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in &handlers {
            let mut run = handler.borrow_mut();
            (*run)();
        }
        handlers.len()
    }

    fn with_element<T>(&self, id: ElementId, f: impl FnOnce(&mut ElementData) -> T) -> Result<T> {
        let mut tree = self.tree.borrow_mut();
        let element = tree
            .elements
            .get_mut(id.0)
            .ok_or_else(|| BehaviorError::Mutation(format!("no element {}", id.0)))?;
        Ok(f(element))
    }
}

impl Dom for MemoryDocument {
    type Element = ElementId;

    fn query_all(&self, selector: &Selector) -> Result<Vec<ElementId>> {
        Ok(self
            .tree
            .borrow()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| selector.matches(el))
            .map(|(i, _)| ElementId(i))
            .collect())
    }

    fn text(&self, element: &ElementId) -> String {
        self.element(*element).map(|el| el.text).unwrap_or_default()
    }

    fn set_text(&self, element: &ElementId, text: &str) -> Result<()> {
        self.with_element(*element, |el| el.text = text.to_string())
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.element(*element).is_some_and(|el| el.has_class(class))
    }

    fn toggle_class(&self, element: &ElementId, class: &str) -> Result<bool> {
        self.with_element(*element, |el| {
            if let Some(pos) = el.classes.iter().position(|c| c == class) {
                el.classes.remove(pos);
                false
            } else {
                el.classes.push(class.to_string());
                true
            }
        })
    }

    fn on_click(&self, element: &ElementId, handler: ClickHandler) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        if element.0 >= tree.elements.len() {
            return Err(BehaviorError::Listener {
                event: "click",
                message: format!("no element {}", element.0),
            });
        }
        tree.listeners.push((*element, Rc::new(RefCell::new(handler))));
        Ok(())
    }
}
