//! EmailJS credentials baked in at build time.

use crate::net::email::ContactError;

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    /// Sent as `user_id`; EmailJS calls this the public key.
    pub public_key: String,
    pub api_url: String,
}

impl EmailConfig {
    /// Build typed email config from compile-time environment variables.
    ///
    /// Required:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `EMAILJS_API_URL`: defaults to the public EmailJS send endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingConfig`] naming the first absent or
    /// blank variable.
    pub fn from_build_env() -> Result<Self, ContactError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
            option_env!("EMAILJS_API_URL"),
        )
    }

    /// # Errors
    ///
    /// Same as [`EmailConfig::from_build_env`].
    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        api_url: Option<&str>,
    ) -> Result<Self, ContactError> {
        let service_id = required("EMAILJS_SERVICE_ID", service_id)?;
        let template_id = required("EMAILJS_TEMPLATE_ID", template_id)?;
        let public_key = required("EMAILJS_PUBLIC_KEY", public_key)?;
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_EMAILJS_API_URL)
            .to_string();
        Ok(Self { service_id, template_id, public_key, api_url })
    }
}

fn required(var: &str, raw: Option<&str>) -> Result<String, ContactError> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ContactError::MissingConfig { var: var.into() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
