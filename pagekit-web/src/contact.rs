//! Contact form to `mailto:` hand-off.

use std::rc::Rc;

use pagekit_core::constants::CONTACT_FORM_ID;
use pagekit_core::{FormFieldSet, FormSubmission, MailtoAdapter, Navigator, SubmitSource};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, FormData, HtmlFormElement, Location};

use crate::dom::{self, DomError, js_error_message};

/// Sets `window.location.href`.
#[derive(Debug, Clone)]
pub struct LocationNavigator {
    location: Location,
}

impl LocationNavigator {
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self { location }
    }

    /// # Errors
    /// Returns an error outside a browser window.
    pub fn current() -> Result<Self, DomError> {
        Ok(Self::new(dom::window().ok_or(DomError::NoWindow)?.location()))
    }
}

impl Navigator for LocationNavigator {
    type Error = DomError;

    fn navigate(&self, address: &str) -> Result<(), Self::Error> {
        self.location
            .set_href(address)
            .map_err(|e| DomError::Js(js_error_message(&e)))
    }
}

/// A submit event together with the form it was fired on.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    event: Event,
    form: HtmlFormElement,
}

impl ContactSubmission {
    #[must_use]
    pub const fn new(event: Event, form: HtmlFormElement) -> Self {
        Self { event, form }
    }
}

impl FormSubmission for ContactSubmission {
    type Error = DomError;

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn action(&self) -> String {
        self.form.action()
    }

    fn fields(&self) -> Result<FormFieldSet, Self::Error> {
        form_fields(&self.form)
    }
}

/// Read the form's entries through `FormData`, in document order.
///
/// File entries have no string value and are skipped.
///
/// # Errors
/// Returns an error if `FormData` cannot be built or iterated.
pub fn form_fields(form: &HtmlFormElement) -> Result<FormFieldSet, DomError> {
    let data = FormData::new_with_form(form)?;
    let mut fields = FormFieldSet::new();
    for entry in data.entries() {
        let pair: js_sys::Array = entry?.unchecked_into();
        let name = pair.get(0).as_string().unwrap_or_default();
        match pair.get(1).as_string() {
            Some(value) => fields.push(name, value),
            None => log::debug!("skipping non-text field {name:?}"),
        }
    }
    Ok(fields)
}

/// The page's contact form element.
#[derive(Debug, Clone)]
pub struct ContactForm(pub HtmlFormElement);

impl ContactForm {
    /// Look up `#contactForm`; `None` when the page has no such form.
    #[must_use]
    pub fn find(document: &Document) -> Option<Self> {
        document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            .map(Self)
    }
}

impl SubmitSource for ContactForm {
    type Submission = ContactSubmission;

    fn on_submit(&self, handler: Box<dyn Fn(&Self::Submission)>) {
        let form = self.0.clone();
        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            handler(&ContactSubmission::new(event, form.clone()));
        });
        if let Err(err) = self
            .0
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        {
            log::error!("failed to listen to contact form: {}", js_error_message(&err));
            return;
        }
        closure.forget();
    }
}

/// Redirect `#contactForm` submissions to the mail client.
///
/// Returns whether a form was found and wired up.
///
/// # Errors
/// Returns an error if there is no window to navigate.
pub fn install(document: &Document) -> Result<bool, DomError> {
    let form = ContactForm::find(document);
    let adapter = Rc::new(MailtoAdapter::new(LocationNavigator::current()?));
    Ok(adapter.attach(form.as_ref()))
}
