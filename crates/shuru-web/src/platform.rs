//! Browser capabilities for the page behaviors.
//! Real implementations under `hydrate`, inert fallbacks for SSR and native builds.

use crate::behavior::{Clipboard, ClipboardError, Diagnostics, Platform, Timer};

/// `navigator.clipboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

/// `setTimeout` based delays.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

/// Reports to the developer console (browser) or the tracing subscriber (server).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

pub type BrowserPlatform = Platform<BrowserClipboard, BrowserTimer, ConsoleDiagnostics>;

pub fn browser() -> BrowserPlatform {
    Platform::default()
}

#[cfg(feature = "hydrate")]
mod hydrate {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    impl Clipboard for BrowserClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
            let navigator = window.navigator();

            // Missing entirely outside secure contexts.
            let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                .map_err(|_| ClipboardError::Unavailable)?;
            if clipboard.is_undefined() || clipboard.is_null() {
                return Err(ClipboardError::Unavailable);
            }
            let clipboard: web_sys::Clipboard = clipboard.unchecked_into();

            JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(describe_js_error(&e)))
        }
    }

    impl Timer for BrowserTimer {
        async fn sleep(&self, duration: Duration) {
            gloo_timers::future::sleep(duration).await;
        }
    }

    impl Diagnostics for ConsoleDiagnostics {
        fn copy_failed(&self, error: &ClipboardError) {
            web_sys::console::error_1(&format!("Failed to copy: {}", error).into());
        }
    }

    fn describe_js_error(value: &JsValue) -> String {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return String::from(err.message());
        }
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }

    /// Current `window.innerWidth`. Unknown widths count as desktop.
    pub fn viewport_width() -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    /// Current `window.scrollY`.
    pub fn scroll_offset() -> f64 {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    /// Smooth-scroll the element with `id` into view.
    /// Returns false when there is no such element.
    pub fn scroll_to_anchor(id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    /// Add or remove a class on `<body>`.
    pub fn set_body_class(class: &str, on: bool) {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        if let Some(body) = body {
            let _ = body.class_list().toggle_with_force(class, on);
        }
    }

    /// Whether the event target is `container` or one of its descendants.
    pub fn event_within(event: &web_sys::Event, container: Option<&web_sys::Node>) -> bool {
        let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        match (container, target) {
            (Some(container), Some(target)) => container.contains(Some(&target)),
            _ => false,
        }
    }
}

#[cfg(feature = "hydrate")]
pub use hydrate::*;

// Fallbacks for server rendering and native tests: nothing to copy to, nothing to wait for.
#[cfg(not(feature = "hydrate"))]
mod fallback {
    use super::*;
    use std::time::Duration;

    impl Clipboard for BrowserClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

    impl Timer for BrowserTimer {
        async fn sleep(&self, _duration: Duration) {}
    }

    impl Diagnostics for ConsoleDiagnostics {
        fn copy_failed(&self, error: &ClipboardError) {
            tracing::error!(%error, "Failed to copy");
        }
    }

    pub fn viewport_width() -> f64 {
        f64::INFINITY
    }

    pub fn scroll_offset() -> f64 {
        0.0
    }

    pub fn scroll_to_anchor(_id: &str) -> bool {
        false
    }

    pub fn set_body_class(_class: &str, _on: bool) {}
}

#[cfg(not(feature = "hydrate"))]
pub use fallback::*;
