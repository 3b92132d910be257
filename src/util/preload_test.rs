use super::*;

#[test]
fn every_critical_image_is_preloaded_as_image() {
    let hints = resource_hints();
    for href in CRITICAL_IMAGES {
        let hint = hints.iter().find(|h| h.href == *href).unwrap();
        assert_eq!(hint.rel, "preload");
        assert_eq!(hint.kind, Some("image"));
    }
}

#[test]
fn dns_prefetch_has_no_as_attribute() {
    let hints = resource_hints();
    let prefetch: Vec<_> = hints.iter().filter(|h| h.rel == "dns-prefetch").collect();
    assert_eq!(prefetch.len(), DNS_PREFETCH.len());
    assert!(prefetch.iter().all(|h| h.kind.is_none()));
}

#[test]
fn preloads_come_first() {
    let hints = resource_hints();
    let first_prefetch = hints.iter().position(|h| h.rel == "dns-prefetch").unwrap();
    assert!(hints[..first_prefetch].iter().all(|h| h.rel == "preload"));
}

#[test]
fn hints_are_absolute_paths_or_origins() {
    for hint in resource_hints() {
        assert!(hint.href.starts_with('/') || hint.href.starts_with("https://"), "{}", hint.href);
    }
}
