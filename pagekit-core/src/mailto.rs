use std::rc::Rc;

use crate::{FormSubmission, MailtoAddress, Navigator, SubmitSource};

#[derive(Debug, thiserror::Error)]
pub enum MailtoError {
    #[error("Form fields unreadable: {0}")]
    Fields(String),
    #[error("Navigation error: {0}")]
    Navigation(String),
}

/// Turns contact form submissions into `mailto:` navigations.
pub struct MailtoAdapter<N: Navigator> {
    navigator: N,
}

impl<N: Navigator> MailtoAdapter<N> {
    pub const fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Cancel the submission, build the address from its fields, and navigate.
    ///
    /// The default submission is suppressed before anything else happens, so
    /// it stays suppressed even when a later step fails. Unreadable fields
    /// abort the hand-off without navigating.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields cannot be read or the navigator refuses
    /// the address.
    pub fn handle_submit<F: FormSubmission>(
        &self,
        submission: &F,
    ) -> Result<MailtoAddress, MailtoError> {
        submission.prevent_default();
        let fields = submission
            .fields()
            .map_err(|e| MailtoError::Fields(e.to_string()))?;
        let address = MailtoAddress::build(&submission.action(), &fields);
        log::debug!("redirecting {} field(s) to mail client", fields.len());
        self.navigator
            .navigate(address.as_str())
            .map_err(|e| MailtoError::Navigation(e.to_string()))?;
        Ok(address)
    }
}

impl<N: Navigator + 'static> MailtoAdapter<N> {
    /// Listen to `form` if it exists. Returns whether a listener was attached.
    pub fn attach<T: SubmitSource>(self: &Rc<Self>, form: Option<&T>) -> bool {
        let Some(form) = form else {
            log::debug!("no contact form on this page");
            return false;
        };
        let adapter = Rc::clone(self);
        form.on_submit(Box::new(move |submission| {
            if let Err(err) = adapter.handle_submit(submission) {
                log::error!("contact form hand-off failed: {err}");
            }
        }));
        true
    }
}
