#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod router;
pub mod shop;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Some(html) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = html.set_attribute("lang", i18n::LANG);
    }
    // Restore the text size before the first paint
    a11y::apply_text_size(a11y::saved_text_size());
    yew::Renderer::<app::App>::new().render();
}
