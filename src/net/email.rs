//! Contact form delivery through the EmailJS REST API.
//!
//! Client-side (csr): one `POST` via `gloo-net`.
//! Native builds (tests): the real transport refuses to send; tests drive
//! [`deliver`] with their own [`EmailTransport`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`ContactError`], is logged once in [`deliver`],
//! and reaches the page only as "it failed". Visitors see a generic retry
//! message, never the error text.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use leptos::logging::{log, warn};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::state::contact::FormData;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// A required build-time variable was absent or blank.
    #[error("missing email config: {var} was not set at build time")]
    MissingConfig { var: String },

    /// The request never produced a response.
    #[error("email request failed: {0}")]
    Request(String),

    /// EmailJS answered with a non-2xx status.
    #[error("email service rejected the message: status {status}")]
    Rejected { status: u16 },
}

/// Template variables the EmailJS template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    /// The form's subject line.
    pub title: String,
    pub message: String,
    pub email: String,
    pub reply_to: String,
}

impl From<&FormData> for TemplateParams {
    fn from(form: &FormData) -> Self {
        Self {
            name: form.name.clone(),
            title: form.subject.clone(),
            message: form.message.clone(),
            email: form.email.clone(),
            reply_to: form.email.clone(),
        }
    }
}

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl SendRequest {
    #[must_use]
    pub fn new(config: &EmailConfig, form: &FormData) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams::from(form),
        }
    }
}

/// Sends one request. Success means a 2xx response; the body is ignored.
#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    async fn send(&self, url: &str, request: &SendRequest) -> Result<(), ContactError>;
}

/// The production transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailJsClient;

impl EmailTransport for EmailJsClient {
    #[allow(clippy::unused_async)]
    async fn send(&self, url: &str, request: &SendRequest) -> Result<(), ContactError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(request)
                .map_err(|e| ContactError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContactError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ContactError::Rejected { status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(ContactError::Request("email delivery requires a browser".to_owned()))
        }
    }
}

/// Deliver `form` with `config`, logging the outcome.
///
/// # Errors
///
/// Propagates the config error or the transport error unchanged.
pub async fn deliver<T: EmailTransport>(
    transport: &T,
    config: Result<EmailConfig, ContactError>,
    form: &FormData,
) -> Result<(), ContactError> {
    let result = match config {
        Ok(config) => transport.send(&config.api_url, &SendRequest::new(&config, form)).await,
        Err(e) => Err(e),
    };
    match &result {
        Ok(()) => log!("contact message delivered"),
        Err(e) => warn!("EmailJS error: {e}"),
    }
    result
}
