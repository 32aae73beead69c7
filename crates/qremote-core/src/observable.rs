//! Observable value cells.
//!
//! An [`Observed`] wraps one settings value together with its logical
//! field name. Assigning through [`Observed::set`] compares old and new
//! by value and reports the field name to a [`Notifier`] only when the
//! value actually changed. The cell itself is purely mechanical; all
//! cross-field coupling lives in the model that owns the cells.
//!
//! Listener callbacks run synchronously on the mutating thread. A model
//! performs cascading adjustments by writing sibling cells directly, so
//! a cascade can never re-enter the setter of the field that triggered
//! it.

/// Fan-out point for field change events.
///
/// Holds the subscriber list and the global enable flag. When disabled
/// (bulk restore of a model from persisted state) no events are emitted
/// regardless of how many cells change.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Box<dyn FnMut(&str)>>,
    muted: bool,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The callback receives the logical field name.
    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Emit a change event for `field` unless notifications are muted.
    pub fn notify(&mut self, field: &str) {
        if self.muted {
            return;
        }
        for listener in &mut self.listeners {
            listener(field);
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Run `f` with notifications suppressed, restoring the previous
    /// state afterwards on every path. Used for bulk restores so that
    /// re-applying N persisted fields does not fan out N events against
    /// a half-restored model.
    pub fn muted<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let prev = self.muted;
        self.muted = true;
        let out = f(self);
        self.muted = prev;
        out
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .field("muted", &self.muted)
            .finish()
    }
}

/// One observable settings value with its logical field name.
#[derive(Debug, Clone)]
pub struct Observed<T> {
    name: &'static str,
    value: T,
}

impl<T: PartialEq> Observed<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value if it differs from the current one, reporting
    /// the change through `events`. Returns whether a change happened.
    /// Total: equal assignments are silently absorbed.
    pub fn set(&mut self, value: T, events: &mut Notifier) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        events.notify(self.name);
        true
    }
}

impl<T: PartialEq + Copy> Observed<T> {
    pub fn value(&self) -> T {
        self.value
    }
}
