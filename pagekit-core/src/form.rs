use std::fmt;

use crate::encode::encode_uri_component;

/// Ordered `(name, value)` pairs captured from a form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFieldSet {
    fields: Vec<(String, String)>,
}

impl FormFieldSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field, keeping submission order. Repeated names are kept.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// `name=value` segments joined by `&`.
    ///
    /// Only values are percent-encoded; names go out verbatim.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}={}", encode_uri_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<N, V> FromIterator<(N, V)> for FormFieldSet
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.push(name, value);
        }
        set
    }
}

/// Navigation target built from a form's action and its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoAddress(String);

impl MailtoAddress {
    /// Build `action?query`, or just `action` when there are no fields.
    ///
    /// The action is used as given and not validated.
    #[must_use]
    pub fn build(action: &str, fields: &FormFieldSet) -> Self {
        if fields.is_empty() {
            return Self(action.to_string());
        }
        Self(format!("{action}?{}", fields.query_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MailtoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MailtoAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
