//! In-memory implementations of the page traits.
//!
//! Used by unit tests, the integration suite, and `pagekit-tester` to drive
//! the selector and the mailto adapter without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::{
    ColorScheme, FormFieldSet, FormSubmission, InputSource, Navigator, PreferenceStore,
    SchemeSurface, SubmitSource,
};

#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("write rejected for key {0}")]
    WriteRejected(String),
    #[error("fields unreadable for {0}")]
    FieldsUnreadable(String),
    #[error("navigation rejected: {0}")]
    NavigationRejected(String),
}

/// Shared key-value map. Clones see the same entries, like two page loads
/// reading the same origin's storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn insert(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Number of successful `set_item` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Make subsequent writes fail, as a full or private-mode store would.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PreferenceStore for MemoryStorage {
    type Error = MemoryError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.value(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.fail_writes.get() {
            return Err(MemoryError::WriteRejected(key.to_string()));
        }
        self.insert(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Remembers the last rendered and selected schemes.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    rendered: Rc<Cell<Option<ColorScheme>>>,
    selected: Rc<Cell<Option<ColorScheme>>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn rendered(&self) -> Option<ColorScheme> {
        self.rendered.get()
    }

    #[must_use]
    pub fn selected(&self) -> Option<ColorScheme> {
        self.selected.get()
    }
}

impl SchemeSurface for RecordingSurface {
    type Error = MemoryError;

    fn set_color_scheme(&self, scheme: ColorScheme) -> Result<(), Self::Error> {
        self.rendered.set(Some(scheme));
        Ok(())
    }

    fn select_option(&self, scheme: ColorScheme) {
        self.selected.set(Some(scheme));
    }
}

/// A control whose change events are fired by hand.
#[derive(Clone, Default)]
pub struct ScriptedControl {
    handlers: Rc<RefCell<Vec<Box<dyn Fn(&str)>>>>,
}

impl ScriptedControl {
    /// Deliver `value` to every registered handler, in registration order.
    pub fn emit(&self, value: &str) {
        for handler in self.handlers.borrow().iter() {
            handler(value);
        }
    }
}

impl InputSource for ScriptedControl {
    fn on_input(&self, handler: Box<dyn Fn(&str)>) {
        self.handlers.borrow_mut().push(handler);
    }
}

/// One submission of a [`ScriptedForm`].
#[derive(Debug, Clone)]
pub struct ScriptedSubmission {
    action: String,
    fields: FormFieldSet,
    unreadable: bool,
    prevented: Rc<Cell<bool>>,
}

impl ScriptedSubmission {
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl FormSubmission for ScriptedSubmission {
    type Error = MemoryError;

    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn action(&self) -> String {
        self.action.clone()
    }

    fn fields(&self) -> Result<FormFieldSet, Self::Error> {
        if self.unreadable {
            return Err(MemoryError::FieldsUnreadable(self.action.clone()));
        }
        Ok(self.fields.clone())
    }
}

/// A form with a fixed action and editable fields.
#[derive(Clone)]
pub struct ScriptedForm {
    action: String,
    fields: Rc<RefCell<FormFieldSet>>,
    unreadable: Rc<Cell<bool>>,
    handlers: Rc<RefCell<Vec<Box<dyn Fn(&ScriptedSubmission)>>>>,
}

impl ScriptedForm {
    pub fn new<I, N, V>(action: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            action: action.to_string(),
            fields: Rc::new(RefCell::new(fields.into_iter().collect())),
            unreadable: Rc::default(),
            handlers: Rc::default(),
        }
    }

    pub fn set_fields<I, N, V>(&self, fields: I)
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        *self.fields.borrow_mut() = fields.into_iter().collect();
    }

    /// Make later submissions fail to report their fields.
    pub fn fail_reads(&self, fail: bool) {
        self.unreadable.set(fail);
    }

    /// Snapshot of the form as it would be submitted now.
    #[must_use]
    pub fn submission(&self) -> ScriptedSubmission {
        ScriptedSubmission {
            action: self.action.clone(),
            fields: self.fields.borrow().clone(),
            unreadable: self.unreadable.get(),
            prevented: Rc::default(),
        }
    }

    /// Fire a submit event through every handler and return it for inspection.
    pub fn submit(&self) -> ScriptedSubmission {
        let submission = self.submission();
        for handler in self.handlers.borrow().iter() {
            handler(&submission);
        }
        submission
    }
}

impl SubmitSource for ScriptedForm {
    type Submission = ScriptedSubmission;

    fn on_submit(&self, handler: Box<dyn Fn(&Self::Submission)>) {
        self.handlers.borrow_mut().push(handler);
    }
}

/// Records every address it is asked to open.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
    fail: Rc<Cell<bool>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn fail(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl Navigator for RecordingNavigator {
    type Error = MemoryError;

    fn navigate(&self, address: &str) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(MemoryError::NavigationRejected(address.to_string()));
        }
        self.visited.borrow_mut().push(address.to_string());
        Ok(())
    }
}
