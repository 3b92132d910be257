//! Startup resource hints for above-the-fold images.

#[cfg(test)]
#[path = "preload_test.rs"]
mod preload_test;

/// Images every first paint needs: the home background and both hero variants.
pub const CRITICAL_IMAGES: &[&str] = &["/assets/img/BG.webp", "/assets/img/hero.svg", "/assets/img/hero.png"];

/// Origins worth resolving early.
pub const DNS_PREFETCH: &[&str] = &["https://api.emailjs.com"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHint {
    pub rel: &'static str,
    pub href: &'static str,
    /// The `as` attribute; only meaningful for `preload`.
    pub kind: Option<&'static str>,
}

#[must_use]
pub fn resource_hints() -> Vec<ResourceHint> {
    let preloads = CRITICAL_IMAGES
        .iter()
        .map(|&href| ResourceHint { rel: "preload", href, kind: Some("image") });
    let prefetches = DNS_PREFETCH
        .iter()
        .map(|&href| ResourceHint { rel: "dns-prefetch", href, kind: None });
    preloads.chain(prefetches).collect()
}

/// Append a `<link>` to `<head>` for every hint. Failures are ignored; a
/// missing hint only costs latency.
pub fn add_resource_hints() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(head) = document.head() else {
            return;
        };
        for hint in resource_hints() {
            let Some(link) = document
                .create_element("link")
                .ok()
                .and_then(|el| el.dyn_into::<web_sys::HtmlLinkElement>().ok())
            else {
                continue;
            };
            link.set_rel(hint.rel);
            link.set_href(hint.href);
            if let Some(kind) = hint.kind {
                link.set_as(kind);
            }
            let _ = head.append_child(&link);
        }
    }
}
