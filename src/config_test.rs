use super::*;

#[test]
fn from_values_accepts_complete_config() {
    let cfg = EmailConfig::from_values(Some("svc_1"), Some("tpl_1"), Some("pk_1"), None).unwrap();
    assert_eq!(cfg.service_id, "svc_1");
    assert_eq!(cfg.template_id, "tpl_1");
    assert_eq!(cfg.public_key, "pk_1");
    assert_eq!(cfg.api_url, DEFAULT_EMAILJS_API_URL);
}

#[test]
fn from_values_trims_whitespace() {
    let cfg = EmailConfig::from_values(Some(" svc "), Some("tpl\n"), Some("\tpk"), None).unwrap();
    assert_eq!(cfg.service_id, "svc");
    assert_eq!(cfg.template_id, "tpl");
    assert_eq!(cfg.public_key, "pk");
}

#[test]
fn from_values_honors_api_url_override() {
    let cfg =
        EmailConfig::from_values(Some("s"), Some("t"), Some("k"), Some("https://mail.example.test/send")).unwrap();
    assert_eq!(cfg.api_url, "https://mail.example.test/send");
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let cfg = EmailConfig::from_values(Some("s"), Some("t"), Some("k"), Some("   ")).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_EMAILJS_API_URL);
}

#[test]
fn missing_service_id_is_reported_first() {
    let err = EmailConfig::from_values(None, None, None, None).unwrap_err();
    assert_eq!(err, ContactError::MissingConfig { var: "EMAILJS_SERVICE_ID".into() });
}

#[test]
fn missing_template_id_is_reported() {
    let err = EmailConfig::from_values(Some("s"), None, Some("k"), None).unwrap_err();
    assert_eq!(err, ContactError::MissingConfig { var: "EMAILJS_TEMPLATE_ID".into() });
}

#[test]
fn blank_public_key_counts_as_missing() {
    let err = EmailConfig::from_values(Some("s"), Some("t"), Some(""), None).unwrap_err();
    assert_eq!(err, ContactError::MissingConfig { var: "EMAILJS_PUBLIC_KEY".into() });
    assert!(err.to_string().contains("EMAILJS_PUBLIC_KEY"));
}

#[test]
fn default_endpoint_is_emailjs() {
    assert_eq!(DEFAULT_EMAILJS_API_URL, "https://api.emailjs.com/api/v1.0/email/send");
}
