//! pagekit core
//!
//! Platform-agnostic page enhancement logic: color scheme persistence and the
//! contact form to `mailto:` hand-off. Browser bindings live in `pagekit-web`;
//! this crate only talks to the page through the traits below.

pub mod constants;
pub mod encode;
pub mod form;
pub mod mailto;
pub mod memory;
pub mod scheme;
pub mod theme;

pub use encode::encode_uri_component;
pub use form::{FormFieldSet, MailtoAddress};
pub use mailto::{MailtoAdapter, MailtoError};
pub use scheme::{ColorScheme, ParseColorSchemeError};
pub use theme::{ThemeError, ThemeSelector};

/// Durable string key-value storage, such as browser `localStorage`.
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected (quota, privacy mode).
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// The parts of the page the theme selector renders into.
pub trait SchemeSurface {
    type Error: std::error::Error + 'static;

    /// Set the live rendering property on the document root.
    ///
    /// # Errors
    ///
    /// Returns an error if the style cannot be updated.
    fn set_color_scheme(&self, scheme: ColorScheme) -> Result<(), Self::Error>;

    /// Show `scheme` as the selected option of the control.
    fn select_option(&self, scheme: ColorScheme);
}

/// A control that reports its new value on every user change.
pub trait InputSource {
    /// Register `handler` to run with the control's value on each change.
    fn on_input(&self, handler: Box<dyn Fn(&str)>);
}

/// A pending form submission handed to a submit listener.
pub trait FormSubmission {
    type Error: std::error::Error + 'static;

    /// Stop the platform from performing its own submission.
    fn prevent_default(&self);

    /// The form's configured target address.
    fn action(&self) -> String;

    /// Current field values in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the form's entries cannot be read.
    fn fields(&self) -> Result<FormFieldSet, Self::Error>;
}

/// A form that can be listened to for submissions.
pub trait SubmitSource {
    type Submission: FormSubmission;

    /// Register `handler` to run for each submission.
    fn on_submit(&self, handler: Box<dyn Fn(&Self::Submission)>);
}

/// Moves the current browsing context to a new address.
pub trait Navigator {
    type Error: std::error::Error + 'static;

    /// Navigate to `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses the navigation.
    fn navigate(&self, address: &str) -> Result<(), Self::Error>;
}
