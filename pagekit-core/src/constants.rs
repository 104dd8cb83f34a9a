//! Fixed identifiers shared by the web bindings and the tester.

use crate::scheme::ColorScheme;

/// Local storage key holding the persisted color scheme.
pub const STORAGE_KEY: &str = "colorScheme";

/// Element id of the injected theme `<select>`.
pub const THEME_SWITCHER_ID: &str = "theme-switcher";

/// Element id of the contact form intercepted by the mailto adapter.
pub const CONTACT_FORM_ID: &str = "contactForm";

/// CSS property driven by the theme selector.
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// Console marker written when the module starts.
pub const STARTUP_MARKER: &str = "IT\u{2019}S ALIVE!";

/// Scheme applied when nothing has been persisted yet.
pub const DEFAULT_SCHEME: ColorScheme = ColorScheme::Automatic;
