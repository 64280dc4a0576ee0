//! Unit tests for settings presets and the settings file.

use carousel::settings::{
    EVENT_TYPES, PHOTO_GALLERY, PRICING_PLANS, SettingsFile, default_settings_path,
};
use carousel::{CarouselController, CarouselError, CarouselSettings, SettingsError, SwipeThreshold};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_presets() {
    let pricing = CarouselSettings::pricing_plans();
    assert_eq!(pricing.interval(), Duration::from_secs(6));
    assert!(pricing.resume_after_scroll);

    let events = CarouselSettings::event_types();
    assert_eq!(events.interval(), Duration::from_secs(5));
    assert!(!events.resume_after_scroll);

    let gallery = CarouselSettings::photo_gallery();
    assert!(!gallery.auto_advance);
    assert_eq!(gallery.swipe_threshold, SwipeThreshold::Pixels(80.0));
}

#[test]
fn test_preset_lookup() {
    assert_eq!(CarouselSettings::preset(PRICING_PLANS), Some(CarouselSettings::pricing_plans()));
    assert_eq!(CarouselSettings::preset(EVENT_TYPES), Some(CarouselSettings::event_types()));
    assert_eq!(CarouselSettings::preset(PHOTO_GALLERY), Some(CarouselSettings::photo_gallery()));
    assert_eq!(CarouselSettings::preset("testimonials"), None);
}

#[test]
fn test_validate_rejects_zero_interval() {
    let settings = CarouselSettings {
        auto_advance_interval_ms: 0,
        ..CarouselSettings::default()
    };
    assert!(matches!(settings.validate(), Err(CarouselError::InvalidConfiguration(_))));
}

#[test]
fn test_validate_rejects_bad_threshold() {
    let settings = CarouselSettings {
        swipe_threshold: SwipeThreshold::Pixels(-5.0),
        ..CarouselSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_builder_rejects_invalid_settings() {
    let settings = CarouselSettings {
        swipe_threshold: SwipeThreshold::ViewportFraction(0.0),
        ..CarouselSettings::default()
    };
    let result = CarouselController::builder(3).settings(settings).build();
    assert!(matches!(result, Err(CarouselError::InvalidConfiguration(_))));
}

#[test]
fn test_load_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "carousels": {
                "pricing_plans": { "auto_advance_interval_ms": 7000 },
                "gallery": { "auto_advance": false, "swipe_threshold": { "unit": "viewport_fraction", "value": 0.2 } }
            }
        }"#,
    )
    .unwrap();

    let file = SettingsFile::load(&path).unwrap();
    let pricing = file.settings_for(PRICING_PLANS);
    assert_eq!(pricing.auto_advance_interval_ms, 7000);
    assert!(pricing.auto_advance);
    assert_eq!(pricing.swipe_threshold, SwipeThreshold::Pixels(80.0));

    let gallery = file.settings_for("gallery");
    assert!(!gallery.auto_advance);
    assert_eq!(gallery.swipe_threshold, SwipeThreshold::ViewportFraction(0.2));
}

#[test]
fn test_settings_for_falls_back_to_preset_then_default() {
    let file = SettingsFile::default();
    assert_eq!(file.settings_for(EVENT_TYPES), CarouselSettings::event_types());
    assert_eq!(file.settings_for("unknown"), CarouselSettings::default());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = SettingsFile::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_load_malformed_json_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(SettingsFile::load(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_load_invalid_values_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{ "carousels": { "pricing_plans": { "auto_advance_interval_ms": 0 } } }"#,
    )
    .unwrap();
    assert!(matches!(SettingsFile::load(&path), Err(SettingsError::Invalid(_))));
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "carousels = 3").unwrap();
    assert_eq!(SettingsFile::load_or_default(&path), SettingsFile::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut file = SettingsFile::default();
    file.carousels.insert(PHOTO_GALLERY.to_string(), CarouselSettings::photo_gallery());
    file.save(&path).unwrap();

    assert_eq!(SettingsFile::load(&path).unwrap(), file);
}

#[test]
fn test_default_path() {
    let path = default_settings_path();
    assert!(path.is_none() || path.unwrap().ends_with("carousel/settings.json"));
}
