//! Thin wrappers over the browser globals.
//!
//! Outside the browser (server-side rendering and native tests) every helper
//! degrades to `None` or a no-op, so components can call them unconditionally.

use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Storage, Window};
use ziller_core::CalendarDate;
#[cfg(target_arch = "wasm32")]
use ziller_core::navigation::scroll_offset;

#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub const fn window() -> Option<Window> {
    None
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Today in the visitor's local time zone.
#[must_use]
pub fn today() -> CalendarDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        i32::try_from(now.get_full_year())
            .ok()
            .and_then(|year| CalendarDate::from_ymd(year, now.get_month() + 1, now.get_date()).ok())
            .unwrap_or_else(CalendarDate::today)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        CalendarDate::today()
    }
}

/// Inner width of the viewport in CSS pixels.
#[must_use]
pub fn viewport_width() -> Option<u32> {
    let width = window()?.inner_width().ok()?.as_f64()?;
    if width.is_finite() && width >= 0.0 {
        // Clamped above, so the cast cannot wrap.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(width.min(f64::from(u32::MAX)) as u32)
    } else {
        None
    }
}

/// Path of the current page, e.g. `/werkstatt.html`.
#[must_use]
pub fn current_path() -> Option<String> {
    window()?.location().pathname().ok()
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(win) = window()
        && let Err(err) = win.alert_with_message(message)
    {
        console_error(&js_error_message(&err));
    }
}

/// Scroll the element with `id` into view.
pub fn scroll_into_view(id: &str) {
    if let Some(el) = document().and_then(|doc| doc.get_element_by_id(id)) {
        el.scroll_into_view();
    }
}

/// Smoothly scroll to the element an in-page anchor (`#id`) points at,
/// leaving room for the sticky header. Returns `false` when there is no target.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_anchor(href: &str, header_offset_px: u32) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Some(target) = win
        .document()
        .and_then(|doc| doc.query_selector(href).ok().flatten())
    else {
        return false;
    };
    let top = scroll_offset(
        target.get_bounding_client_rect().top(),
        win.page_y_offset().unwrap_or(0.0),
        f64::from(header_offset_px),
    );
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub const fn scroll_to_anchor(_href: &str, _header_offset_px: u32) -> bool {
    false
}

/// Run `f` once after `delay_ms` milliseconds.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = window() else {
            return;
        };
        let callback = Closure::once_into_js(f);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(err) = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            console_error(&js_error_message(&err));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (delay_ms, f);
    }
}

/// Window resize subscription; the listener is removed on drop.
#[cfg(target_arch = "wasm32")]
pub struct ResizeListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}

/// Call `on_resize` with the new viewport width whenever the window resizes.
#[cfg(target_arch = "wasm32")]
pub fn on_window_resize(mut on_resize: impl FnMut(u32) + 'static) -> Option<ResizeListener> {
    let window = window()?;
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Some(width) = viewport_width() {
            on_resize(width);
        }
    });
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|err| console_error(&js_error_message(&err)))
        .ok()?;
    Some(ResizeListener { window, closure })
}
