//! `<img>` wrapper with a loading placeholder and a failure panel.

use leptos::prelude::*;

use crate::state::image::ImageStatus;

/// Lazy image that fades in once decoded.
///
/// `priority` images load eagerly; use it for above-the-fold content only.
#[component]
pub fn OptimizedImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] priority: bool,
) -> impl IntoView {
    let status = RwSignal::new(ImageStatus::default());

    let on_load = move |_| status.update(|s| *s = s.on_load());
    let on_error = move |_| {
        leptos::logging::warn!("image failed to load");
        status.update(|s| *s = s.on_error());
    };

    let wrapper_class = format!("optimized-image-wrapper {class}");
    let loading = if priority { "eager" } else { "lazy" };

    view! {
        <div class=wrapper_class>
            <Show when=move || status.get().shows_placeholder()>
                <div class="image-placeholder" aria-hidden="true">
                    <div class="placeholder-pulse"></div>
                </div>
            </Show>
            <Show
                when=move || status.get() != ImageStatus::Failed
                fallback=|| {
                    view! {
                        <div class="image-error">
                            <span>"Failed to load image"</span>
                        </div>
                    }
                }
            >
                <img
                    class=move || status.get().image_class()
                    src=src.clone()
                    alt=alt.clone()
                    loading=loading
                    decoding="async"
                    on:load=on_load
                    on:error=on_error
                />
            </Show>
        </div>
    }
}
