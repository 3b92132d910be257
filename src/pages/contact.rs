//! Contact page: info card and the EmailJS-backed message form.
//!
//! Wheel or swipe past the top returns to Project.

use leptos::prelude::*;

use crate::components::starfield::Starfield;
use crate::state::contact::{ContactForm, FormField, SubmissionStatus};
use crate::state::nav::Section;
use crate::util::section_nav::use_section_navigator;

const SHOOTING_STARS: usize = 8;

/// Single-line input bound to one form field.
#[component]
fn FieldInput(
    form: RwSignal<ContactForm>,
    field: FormField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.attr()>{label}</label>
            <input
                type=kind
                id=field.attr()
                name=field.attr()
                placeholder=placeholder
                required=true
                prop:value=move || form.with(|f| f.data.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn StatusPanel(status: SubmissionStatus) -> impl IntoView {
    match status {
        SubmissionStatus::Success => view! {
            <div class="form-success" role="status">
                <div class="success-icon">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path>
                        <polyline points="22 4 12 14.01 9 11.01"></polyline>
                    </svg>
                </div>
                <h3>"Message Sent!"</h3>
                <p>"Thank you for reaching out. I'll get back to you soon!"</p>
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="form-error" role="alert">
                <div class="error-icon">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10"></circle>
                        <line x1="15" y1="9" x2="9" y2="15"></line>
                        <line x1="9" y1="9" x2="15" y2="15"></line>
                    </svg>
                </div>
                <h3>"Oops! Something went wrong"</h3>
                <p>"Please try again or email me directly."</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let transition = use_section_navigator(Section::Contact);
    let wrapper_class = move || match transition.get() {
        Some(direction) => format!("contact-page-wrapper {}", direction.class()),
        None => "contact-page-wrapper".to_owned(),
    };

    let form = RwSignal::new(ContactForm::default());
    #[cfg(feature = "csr")]
    let revert = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(data) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            use gloo_timers::callback::Timeout;

            use crate::config::EmailConfig;
            use crate::net::email::{EmailJsClient, deliver};
            use crate::state::contact::STATUS_REVERT_MS;

            leptos::task::spawn_local(async move {
                let delivered = deliver(&EmailJsClient, EmailConfig::from_build_env(), &data).await.is_ok();
                let Some(ticket) = form.try_update(|f| f.complete_submit(delivered)).flatten() else {
                    return;
                };
                revert.set_value(Some(Timeout::new(STATUS_REVERT_MS, move || {
                    form.update(|f| {
                        f.expire_status(ticket);
                    });
                })));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = data;
        }
    };

    let status = Memo::new(move |_| form.with(ContactForm::status));
    let showing_result = move || matches!(status.get(), SubmissionStatus::Success | SubmissionStatus::Error);

    view! {
        <div class=wrapper_class>
            <div class="contact-bg"></div>
            <Starfield class="contact-star-layer"/>
            <div class="contact-shooting-stars" aria-hidden="true">
                {(0..SHOOTING_STARS).map(|_| view! { <div class="shooting-star"></div> }).collect_view()}
            </div>
            <div class="contact-mesh"></div>
            <div class="contact-mesh-extra"></div>
            <div class="contact-floor-glow"></div>
            <div class="contact-vignette"></div>

            <div class="contact-content">
                <section class="contact-hero">
                    <h1 class="contact-hero-title">
                        "Get In "
                        <span class="gradient-text">
                            <span class="gradient-text-glow">"Touch"</span>
                            <span class="gradient-text-content">"Touch"</span>
                        </span>
                    </h1>
                    <p class="contact-hero-subtitle">
                        "Have a project in mind or just want to say hello? I'd love to hear from you. \
                         Let's create something amazing together."
                    </p>
                </section>

                <section class="contact-section">
                    <div class="contact-grid">
                        <div class="contact-info-card glass-card">
                            <h2 class="contact-info-title">"Let's Connect"</h2>
                            <p class="contact-info-description">
                                "I'm always open to discussing new projects, creative ideas, or opportunities to be \
                                 part of your vision."
                            </p>
                            <div class="contact-items">
                                <div class="contact-item">
                                    <a href="mailto:7sadakonr@gmail.com" class="contact-item-text">
                                        "7sadakonr@gmail.com"
                                    </a>
                                </div>
                                <div class="contact-item">
                                    <span class="contact-item-text">"Ayutthaya, Thailand"</span>
                                </div>
                            </div>
                            <div class="social-section">
                                <span class="social-label">"Follow Me"</span>
                                <div class="social-links">
                                    <a
                                        href="https://github.com/7sadakonr"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link"
                                        aria-label="GitHub"
                                    >
                                        "GitHub"
                                    </a>
                                </div>
                            </div>
                        </div>

                        <div class="contact-form-card glass-card">
                            <h2 class="contact-form-title">"Send a Message"</h2>
                            <Show
                                when=move || !showing_result()
                                fallback=move || view! { <StatusPanel status=status.get()/> }
                            >
                                <form class="contact-form" on:submit=on_submit>
                                    <div class="form-row">
                                        <FieldInput
                                            form=form
                                            field=FormField::Name
                                            label="Name"
                                            kind="text"
                                            placeholder="Your name"
                                        />
                                        <FieldInput
                                            form=form
                                            field=FormField::Email
                                            label="Email"
                                            kind="email"
                                            placeholder="your@email.com"
                                        />
                                    </div>
                                    <FieldInput
                                        form=form
                                        field=FormField::Subject
                                        label="Subject"
                                        kind="text"
                                        placeholder="What's this about?"
                                    />
                                    <div class="form-group">
                                        <label for=FormField::Message.attr()>"Message"</label>
                                        <textarea
                                            id=FormField::Message.attr()
                                            name=FormField::Message.attr()
                                            placeholder="Tell me about your project..."
                                            rows="5"
                                            required=true
                                            prop:value=move || form.with(|f| f.data.message.clone())
                                            on:input=move |ev| {
                                                form.update(|f| f.update_field(FormField::Message, event_target_value(&ev)));
                                            }
                                        ></textarea>
                                    </div>
                                    <button
                                        type="submit"
                                        class="submit-btn"
                                        disabled=move || form.with(ContactForm::is_submitting)
                                    >
                                        <Show when=move || form.with(ContactForm::is_submitting)>
                                            <span class="spinner"></span>
                                        </Show>
                                        {move || form.with(ContactForm::button_label)}
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}
