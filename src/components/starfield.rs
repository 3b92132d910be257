//! Decorative twinkling star layer.

use leptos::prelude::*;
use motion::starfield::{StarfieldConfig, generate_seeded};

use crate::util::dom::random_seed;

/// A field of `count` stars. The set is drawn once per mount.
///
/// `class` names the container so each page can style its own layer
/// (`home-stars`, `about-stars`, ...); every star gets `{class}__star`.
#[component]
pub fn Starfield(#[prop(into)] class: String, #[prop(optional)] count: Option<usize>) -> impl IntoView {
    let config = count.map_or_else(StarfieldConfig::default, StarfieldConfig::with_count);
    let stars = generate_seeded(&config, random_seed());
    let star_class = format!("star {class}__star");

    view! {
        <div class=format!("starfield {class}") aria-hidden="true">
            {stars
                .into_iter()
                .map(|star| view! { <div class=star_class.clone() style=star.style()></div> })
                .collect_view()}
        </div>
    }
}
