#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod contact;
pub mod dom;
pub mod storage;
pub mod theme_switcher;

/// Run every page enhancement against `document`.
///
/// Each feature fails on its own: a broken theme selector does not stop the
/// contact form from being wired, and vice versa.
pub fn enhance(document: &web_sys::Document) {
    if let Err(err) = theme_switcher::install(document) {
        log::error!("theme selector disabled: {err}");
    }
    match contact::install(document) {
        Ok(true) => log::info!("contact form redirects to mail client"),
        Ok(false) => {}
        Err(err) => log::error!("contact form left as-is: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (tests, hot reload) keeps the existing logger.
    let _ = console_log::init_with_level(log::Level::Info);
    dom::console_marker(pagekit_core::constants::STARTUP_MARKER);
    match dom::document() {
        Some(document) => enhance(&document),
        None => log::error!("no document; page enhancements skipped"),
    }
}
