use ziller_core::{EligibilityEngine, ShopConfig, SlotSchedule};

#[test]
fn bundled_site_config_matches_defaults() {
    let config = ShopConfig::from_json(include_str!("../../ziller-web/static/config/shop.json"))
        .expect("bundled shop config should parse");
    assert_eq!(config, ShopConfig::default());
}

#[test]
fn engine_from_bundled_config_matches_default_engine() {
    let config = ShopConfig::from_json(include_str!("../../ziller-web/static/config/shop.json"))
        .expect("bundled shop config should parse");
    assert_eq!(EligibilityEngine::from_config(&config), EligibilityEngine::default());
}

#[test]
fn config_survives_serialization() {
    let json = serde_json::to_string_pretty(&ShopConfig::default()).unwrap();
    let back = ShopConfig::from_json(&json).unwrap();
    assert_eq!(back.friday_hours, SlotSchedule::friday());
    assert_eq!(back.holidays.len(), 8);
}
