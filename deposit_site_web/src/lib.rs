//! Browser glue for the bank deposit prediction site.
//!
//! Binds the interactive parts of the served pages (dark mode toggle,
//! smooth-scrolling anchors, the prediction form, the static charts) against
//! whatever subset of the markup the current page carries.

mod charts;
mod events;
mod predict;
mod scroll;
mod theme;

use deposit_site::{Activation, PageConfig};
use wasm_bindgen::JsValue;
use web_sys::Window;

pub use events::EventBinding;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_COMMIT: &str = env!("SITE_COMMIT");

/// Version and commit stamp logged at boot.
pub fn build_info() -> String {
    format!("{APP_VERSION} ({APP_COMMIT})")
}

/// A fully initialised page: what activated, plus the live listener
/// registrations. Dropping it detaches every listener the wiring attached.
pub struct PageInit {
    pub activation: Activation,
    bindings: Vec<EventBinding>,
}

impl PageInit {
    /// Number of DOM listeners currently held.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

/// Wire every page unit found in the current document.
///
/// Absent markup is skipped, not an error; the only failure here is a window
/// without a document.
pub fn init_page(window: &Window, config: &PageConfig) -> Result<PageInit, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let storage = window.local_storage().ok().flatten();

    let mut activation = Activation::default();
    let mut bindings = Vec::new();

    if let Some(binding) = theme::init(&document, storage.as_ref(), config) {
        bindings.push(binding);
        activation.theme = true;
    }

    let anchor_bindings = scroll::init(&document);
    activation.smooth_scroll = anchor_bindings.len();
    bindings.extend(anchor_bindings);

    if let Some(binding) = predict::init(&document, config) {
        bindings.push(binding);
        activation.predict_form = true;
    }

    activation.charts = charts::init(&document);

    Ok(PageInit {
        activation,
        bindings,
    })
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static PAGE: std::cell::RefCell<Option<PageInit>> = const { std::cell::RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    match init_page(&window, &PageConfig::default()) {
        Ok(page) => {
            web_sys::console::log_1(
                &format!(
                    "deposit_site_web {}: {}",
                    build_info(),
                    page.activation.summary()
                )
                .into(),
            );
            // Parked for the lifetime of the page so the listeners stay
            // attached.
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
        }
        Err(err) => web_sys::console::error_1(&err),
    }
}
