use super::*;

#[test]
fn default_is_loading_with_placeholder() {
    let status = ImageStatus::default();
    assert_eq!(status, ImageStatus::Loading);
    assert!(status.shows_placeholder());
    assert_eq!(status.image_class(), "optimized-image");
}

#[test]
fn load_reveals_image() {
    let status = ImageStatus::Loading.on_load();
    assert_eq!(status, ImageStatus::Loaded);
    assert!(!status.shows_placeholder());
    assert_eq!(status.image_class(), "optimized-image loaded");
}

#[test]
fn error_shows_fallback() {
    assert_eq!(ImageStatus::Loading.on_error(), ImageStatus::Failed);
    assert_eq!(ImageStatus::Loaded.on_error(), ImageStatus::Failed);
    assert!(!ImageStatus::Failed.shows_placeholder());
}

#[test]
fn late_load_after_error_stays_failed() {
    assert_eq!(ImageStatus::Failed.on_load(), ImageStatus::Failed);
}
