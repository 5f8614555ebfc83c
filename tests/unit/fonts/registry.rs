use super::*;

#[test]
fn builtin_registers_default_family() {
    let reg = FontRegistry::builtin();
    assert!(reg.get("CaveatBrush").is_some());
    assert_eq!(reg.width_ratio("CaveatBrush"), 0.5);
    assert_eq!(reg.width_ratio("Merriweather"), 0.6);
    assert_eq!(reg.len(), 6);
}

#[test]
fn width_ratio_falls_back_for_unknown_family() {
    let reg = FontRegistry::builtin();
    assert_eq!(reg.width_ratio("Comic Sans"), 0.5);

    let reg = FontRegistry::new().with_default_width_ratio(0.7);
    assert!(reg.is_empty());
    assert_eq!(reg.width_ratio("anything"), 0.7);
}

#[test]
fn url_error_enumerates_registered_names() {
    let mut reg = FontRegistry::new();
    reg.register("B", FontEntry::new("b.ttf", 0.5, FontLocality::Bundled));
    reg.register("A", FontEntry::new("a.ttf", 0.5, FontLocality::Bundled));

    assert_eq!(reg.url("A").unwrap(), "a.ttf");

    let err = reg.url("Missing").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("font error:"));
    assert!(msg.contains("'Missing'"));
    assert!(msg.contains("[A, B]"));
}

#[test]
fn register_replaces_existing_entry() {
    let mut reg = FontRegistry::builtin();
    reg.register("Inter", FontEntry::new("x.ttf", 0.9, FontLocality::Remote));
    assert_eq!(reg.width_ratio("Inter"), 0.9);
    assert_eq!(reg.get("Inter").unwrap().locality, FontLocality::Remote);
}
