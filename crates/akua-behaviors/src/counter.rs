//! Traveler counter.
//!
//! A decrement control, an increment control and an output element share one
//! integer. Decrement floors at [`COUNTER_FLOOR`]; increment has no ceiling.
//! The value belongs to the [`CounterBinding`] created at attach time, so two
//! attach passes (or two documents) never share state.
//!
//! # Example
//!
//! ```rust
//! use akua_behaviors::Counter;
//!
//! let c = Counter::parse(" 3 ");
//! assert_eq!(c.increment().value(), 4);
//! assert_eq!(Counter::parse("2").decrement().decrement().value(), 1);
//! assert_eq!(Counter::parse("").value(), 1);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dom::Dom;
use crate::error::Result;
use crate::report::CounterOutcome;
use crate::selector::Selector;

/// Lowest value a decrement can produce.
pub const COUNTER_FLOOR: i64 = 1;

/// The counter's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter(i64);

impl Default for Counter {
    fn default() -> Self {
        Self(COUNTER_FLOOR)
    }
}

impl Counter {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse displayed text.
    ///
    /// Surrounding whitespace is ignored and empty text counts as the floor.
    /// Otherwise the leading integer is read (an optional sign then decimal
    /// digits, anything after is ignored), so `"4 travelers"` reads as 4.
    /// Text with no leading integer, or one that overflows, yields the floor.
    pub fn parse(text: &str) -> Self {
        leading_integer(text.trim()).map_or_else(Self::default, Self)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// One more, saturating at `i64::MAX`.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One less, never below [`COUNTER_FLOOR`].
    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(COUNTER_FLOOR))
    }

    pub fn render(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let digits_start = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..digits_start + digits_len].parse().ok()
}

/// Markers for the three counter elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSelectors {
    pub decrement: Selector,
    pub increment: Selector,
    pub output: Selector,
}

impl Default for CounterSelectors {
    fn default() -> Self {
        Self {
            decrement: Selector::attribute("data-dec"),
            increment: Selector::attribute("data-inc"),
            output: Selector::attribute("data-out"),
        }
    }
}

/// A live counter bound to its output element.
///
/// Clones share the same value.
#[derive(Clone)]
pub struct CounterBinding<D: Dom> {
    dom: D,
    output: D::Element,
    value: Rc<Cell<Counter>>,
}

impl<D: Dom> fmt::Debug for CounterBinding<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterBinding")
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}

impl<D: Dom> CounterBinding<D> {
    /// Read the initial value from `output`.
    pub fn new(dom: &D, output: D::Element) -> Self {
        let initial = Counter::parse(&dom.text(&output));
        Self {
            dom: dom.clone(),
            output,
            value: Rc::new(Cell::new(initial)),
        }
    }

    pub fn value(&self) -> Counter {
        self.value.get()
    }

    pub fn increment(&self) {
        self.update(Counter::increment);
    }

    pub fn decrement(&self) {
        self.update(Counter::decrement);
    }

    fn update(&self, step: impl FnOnce(Counter) -> Counter) {
        let next = step(self.value.get());
        self.value.set(next);
        if let Err(err) = self.dom.set_text(&self.output, &next.render()) {
            warn!(behavior.step = "counter", error = %err, "Counter render failed");
        }
    }
}

/// Bind the counter if all three elements are present.
///
/// The first match of each selector is used. When any is missing, nothing is
/// bound and the outcome lists the missing markers. If a listener cannot be
/// registered, any listener already added stays inert.
///
/// # Errors
/// Returns an error if a query fails or a listener cannot be registered.
pub fn bind_counter<D: Dom>(dom: &D, selectors: &CounterSelectors) -> Result<CounterOutcome> {
    let dec = dom.query_first(&selectors.decrement)?;
    let inc = dom.query_first(&selectors.increment)?;
    let out = dom.query_first(&selectors.output)?;

    let (Some(dec), Some(inc), Some(out)) = (&dec, &inc, &out) else {
        let missing: Vec<String> = [
            (dec.is_none(), &selectors.decrement),
            (inc.is_none(), &selectors.increment),
            (out.is_none(), &selectors.output),
        ]
        .into_iter()
        .filter(|(absent, _)| *absent)
        .map(|(_, sel)| sel.to_css())
        .collect();
        debug!(behavior.step = "counter", missing = ?missing, "Counter inactive");
        return Ok(CounterOutcome::Inactive { missing });
    };

    let binding = CounterBinding::new(dom, out.clone());
    let initial = binding.value().value();

    // Listeners cannot be removed, so both stay inert until both are registered.
    let armed = Rc::new(Cell::new(false));

    let on_dec = binding.clone();
    let dec_armed = Rc::clone(&armed);
    dom.on_click(
        dec,
        Box::new(move || {
            if dec_armed.get() {
                on_dec.decrement();
            }
        }),
    )?;
    let on_inc = binding;
    let inc_armed = Rc::clone(&armed);
    dom.on_click(
        inc,
        Box::new(move || {
            if inc_armed.get() {
                on_inc.increment();
            }
        }),
    )?;
    armed.set(true);

    debug!(behavior.step = "counter", initial, "Counter bound");
    Ok(CounterOutcome::Bound { initial })
}
