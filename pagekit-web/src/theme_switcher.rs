//! Theme selector control injected at the top of `<body>`.

use std::fmt::Write;
use std::rc::Rc;

use pagekit_core::constants::{COLOR_SCHEME_PROPERTY, THEME_SWITCHER_ID};
use pagekit_core::{ColorScheme, InputSource, SchemeSurface, ThemeSelector};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, HtmlSelectElement};

use crate::dom::{DomError, js_error_message};
use crate::storage::LocalStorage;

pub type WebThemeSelector = ThemeSelector<LocalStorage, RootStyleSurface>;

/// Markup for the labelled `<select>`, one option per scheme.
#[must_use]
pub fn switcher_markup() -> String {
    let mut options = String::new();
    for scheme in ColorScheme::ALL {
        let _ = writeln!(
            options,
            "          <option value=\"{}\">{}</option>",
            scheme.as_str(),
            scheme.label()
        );
    }
    format!(
        "\n  <label class=\"color-scheme\">\n      Theme:\n      <select id=\"{THEME_SWITCHER_ID}\">\n{options}      </select>\n  </label>\n"
    )
}

/// Insert the control as the first child of `<body>` and return its `<select>`.
///
/// # Errors
/// Returns an error if the document has no body or the insert fails.
pub fn inject(document: &Document) -> Result<HtmlSelectElement, DomError> {
    let body = document.body().ok_or(DomError::Missing("body"))?;
    body.insert_adjacent_html("afterbegin", &switcher_markup())?;
    document
        .get_element_by_id(THEME_SWITCHER_ID)
        .ok_or(DomError::Missing("theme switcher"))?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| DomError::WrongElement(THEME_SWITCHER_ID.to_string(), "select"))
}

/// Renders the scheme on `<html>` and mirrors it in the `<select>`.
#[derive(Debug, Clone)]
pub struct RootStyleSurface {
    root: HtmlElement,
    select: HtmlSelectElement,
}

impl RootStyleSurface {
    /// # Errors
    /// Returns an error if the document has no `<html>` element.
    pub fn new(document: &Document, select: HtmlSelectElement) -> Result<Self, DomError> {
        let root = document
            .document_element()
            .ok_or(DomError::Missing("root element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::WrongElement("html".to_string(), "HTML element"))?;
        Ok(Self { root, select })
    }
}

impl SchemeSurface for RootStyleSurface {
    type Error = DomError;

    fn set_color_scheme(&self, scheme: ColorScheme) -> Result<(), Self::Error> {
        self.root
            .style()
            .set_property(COLOR_SCHEME_PROPERTY, scheme.as_str())
            .map_err(|e| DomError::Js(js_error_message(&e)))
    }

    fn select_option(&self, scheme: ColorScheme) {
        self.select.set_value(scheme.as_str());
    }
}

/// `input` events of the theme `<select>`.
#[derive(Debug, Clone)]
pub struct SelectInput(pub HtmlSelectElement);

impl InputSource for SelectInput {
    fn on_input(&self, handler: Box<dyn Fn(&str)>) {
        let select = self.0.clone();
        let closure = Closure::<dyn Fn(Event)>::new(move |_event: Event| {
            handler(&select.value());
        });
        if let Err(err) = self
            .0
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        {
            log::error!("failed to listen to theme switcher: {}", js_error_message(&err));
            return;
        }
        // The listener lives as long as the page.
        closure.forget();
    }
}

/// Inject the control, restore the saved scheme, and follow user changes.
///
/// A storage failure while restoring is logged; the control still works.
///
/// # Errors
/// Returns an error if the control cannot be injected or storage is missing.
pub fn install(document: &Document) -> Result<Rc<WebThemeSelector>, Box<dyn std::error::Error>> {
    let select = inject(document)?;
    let surface = RootStyleSurface::new(document, select.clone())?;
    let selector = Rc::new(ThemeSelector::new(LocalStorage::open()?, surface));
    if let Some(scheme) = selector.activate(&SelectInput(select)) {
        log::info!("theme selector ready ({scheme})");
    }
    Ok(selector)
}
