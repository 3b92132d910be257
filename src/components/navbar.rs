//! Site navigation: a glass pill navbar with a sliding active indicator on
//! desktop, and a full-screen menu on phones and tablets.
//!
//! ARCHITECTURE
//! ============
//! The indicator is positioned from live layout: after a short delay the
//! active link and the link list are measured and `motion::indicator`
//! computes the offset. Requests are debounced through a single pending
//! timer, so a burst of resize events measures once. Tablets never render the
//! desktop bar and show the full-screen menu toggle instead.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use motion::device::DeviceProfile;
use motion::indicator::IndicatorState;

use crate::state::nav::{MobileMenu, Section};
use crate::util::dom::set_body_overflow;

#[component]
pub fn Navbar() -> impl IntoView {
    let device = expect_context::<DeviceProfile>();
    let pathname = use_location().pathname;
    let active = Memo::new(move |_| pathname.with(|p| Section::from_path(p)));

    let indicator = RwSignal::new(IndicatorState::default());
    let menu = RwSignal::new(MobileMenu::default());

    #[cfg(feature = "csr")]
    {
        if !device.tablet {
            install_indicator(indicator, pathname);
        }
        install_escape(menu);
    }

    // Route change closes the menu.
    Effect::new(move |_| {
        pathname.track();
        if menu.get_untracked().open {
            menu.update(MobileMenu::close);
        }
    });

    Effect::new(move |_| set_body_overflow(menu.get().body_overflow()));
    on_cleanup(|| set_body_overflow(""));

    let desktop = (!device.tablet).then(move || {
        let indicator_class = move || {
            if indicator.get().is_initialized() { "nav-indicator initialized" } else { "nav-indicator" }
        };
        let indicator_style = move || indicator.get().current().map(|p| p.style()).unwrap_or_default();

        view! {
            <nav class="navbar" role="navigation" aria-label="Main navigation">
                <div class="glass-surface">
                    <div class=indicator_class style=indicator_style aria-hidden="true"></div>
                    <ul class="nav-links">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                let is_active = move || active.get() == Some(section);
                                view! {
                                    <li>
                                        <a
                                            href=section.path()
                                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                                            aria-current=move || is_active().then_some("page")
                                        >
                                            {section.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </nav>
        }
    });

    let fullscreen_class = if device.tablet {
        "mobile-navbar-fullscreen show-for-ipad"
    } else {
        "mobile-navbar-fullscreen"
    };
    let open_class = move |base: &'static str| if menu.get().open { format!("{base} open") } else { base.to_owned() };

    view! {
        {desktop}
        <nav class=fullscreen_class role="navigation" aria-label="Mobile navigation">
            <div class="mobile-navbar-toggle-wrapper">
                <div class="glass-surface glass-surface--round">
                    <button
                        class=move || open_class("mobile-navbar-toggle-inner")
                        on:click=move |_| menu.update(MobileMenu::toggle)
                        aria-label=move || menu.get().toggle_label()
                        aria-expanded=move || menu.get().open.to_string()
                    >
                        <div class=move || open_class("hamburger-icon")>
                            <span class="line line-1"></span>
                            <span class="line line-2"></span>
                            <span class="line line-3"></span>
                        </div>
                    </button>
                </div>
            </div>

            <div class=move || open_class("mobile-menu-overlay") role="dialog" aria-modal="true">
                <div class="mobile-menu-content">
                    <div class="mobile-menu-header">
                        <div class="brand-text">
                            <span class="brand-number">"7"</span>
                            <span class="brand-name">"SADAKONR"</span>
                        </div>
                    </div>
                    <nav class="mobile-menu-nav">
                        <ul class="mobile-menu-list">
                            {Section::ALL
                                .into_iter()
                                .enumerate()
                                .map(|(index, section)| {
                                    let is_active = move || active.get() == Some(section);
                                    view! {
                                        <li class="mobile-menu-item" style=format!("--item-index: {index};")>
                                            <a
                                                href=section.path()
                                                class=move || {
                                                    if is_active() { "mobile-menu-link active" } else { "mobile-menu-link" }
                                                }
                                                aria-current=move || is_active().then_some("page")
                                                on:click=move |_| menu.update(MobileMenu::close)
                                            >
                                                <span class="menu-link-text">{section.label()}</span>
                                                <div class="menu-link-indicator">
                                                    <span class="indicator-dot"></span>
                                                </div>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>
            </div>
        </nav>
    }
}

#[cfg(feature = "csr")]
fn install_indicator(indicator: RwSignal<IndicatorState>, pathname: Memo<String>) {
    use gloo_timers::callback::Timeout;
    use motion::consts::{INDICATOR_MOUNT_DELAY_MS, INDICATOR_ROUTE_DELAY_MS, INDICATOR_SETTLE_MS};

    use crate::util::dom::query_rect;
    use crate::util::listener::EventListener;

    let pending = StoredValue::new_local(None::<Timeout>);

    let measure = move || {
        let (Some(link), Some(container)) = (query_rect(".nav-item.active"), query_rect(".nav-links")) else {
            return;
        };
        indicator.update(|s| {
            s.place(link, container);
        });
    };

    // A newer request replaces (and so cancels) the pending one.
    let request = move |delay_ms: u32| {
        pending.set_value(Some(Timeout::new(delay_ms, move || {
            pending.set_value(Some(Timeout::new(INDICATOR_SETTLE_MS, measure)));
        })));
    };

    request(INDICATOR_MOUNT_DELAY_MS);

    Effect::new(move |prev: Option<()>| {
        pathname.track();
        if prev.is_some() && indicator.get_untracked().is_initialized() {
            request(INDICATOR_ROUTE_DELAY_MS);
        }
    });

    let resize = EventListener::on_window("resize", true, move |_: web_sys::Event| request(0));
    StoredValue::new_local(resize);
}

#[cfg(feature = "csr")]
fn install_escape(menu: RwSignal<MobileMenu>) {
    use crate::util::listener::EventListener;

    let keydown = EventListener::on_document("keydown", true, move |ev: web_sys::KeyboardEvent| {
        if menu.get_untracked().open {
            menu.update(|m| {
                m.key_pressed(&ev.key());
            });
        }
    });
    StoredValue::new_local(keydown);
}
