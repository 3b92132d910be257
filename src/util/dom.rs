//! Small DOM helpers shared by pages and components.
//!
//! Every lookup degrades to a no-op (or a zeroed value) outside the browser
//! or when an element is missing.

use motion::geom::Rect;
use motion::navigator::ScrollMetrics;

/// Current wall clock in milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// A 64-bit seed from the browser's RNG.
pub fn random_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        // `Math.random` yields 52 random mantissa bits.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        (hi << 32) | lo
    }
    #[cfg(not(feature = "csr"))]
    {
        0x5EED
    }
}

/// Document scroll position and extents.
pub fn scroll_metrics() -> ScrollMetrics {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let content = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        ScrollMetrics::new(scroll_top, viewport, content)
    }
    #[cfg(not(feature = "csr"))]
    {
        ScrollMetrics::default()
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let list = body.class_list();
            if enabled {
                let _ = list.add_1(class);
            } else {
                let _ = list.remove_1(class);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (class, enabled);
    }
}

/// Set `<body>`'s inline `overflow`. An empty value removes the property.
pub fn set_body_overflow(value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let style = body.style();
            if value.is_empty() {
                let _ = style.remove_property("overflow");
            } else {
                let _ = style.set_property("overflow", value);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}

/// Bounding box of the first element matching `selector`.
pub fn query_rect(selector: &str) -> Option<Rect> {
    #[cfg(feature = "csr")]
    {
        let el = web_sys::window()?.document()?.query_selector(selector).ok()??;
        Some(to_rect(&el.get_bounding_client_rect()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selector;
        None
    }
}

#[cfg(feature = "csr")]
pub fn to_rect(r: &web_sys::DomRect) -> Rect {
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Whether `target` sits inside an element matching `selector`.
#[cfg(feature = "csr")]
pub fn closest_matches(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
