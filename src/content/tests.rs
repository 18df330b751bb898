//! Content domain: tests for level and tuning parsing.

use std::path::Path;

use super::DATA_DIR;
use super::assets::SHEETS;
use super::data::level_file_name;
use super::loader::{
    ContentError, load_level_catalog, load_level_file, load_tuning_file, parse_level, parse_tuning,
};
use crate::core::GameTuning;

const MINIMAL_LEVEL: &str = r#"{
    "platforms": [{"x": 0, "y": 546, "image": "ground"}],
    "coins": [{"x": 100, "y": 500}, {"x": 130, "y": 500}],
    "spiders": [{"x": 400, "y": 500}],
    "hero": {"x": 21, "y": 525},
    "key": {"x": 750, "y": 95},
    "door": {"x": 169, "y": 546}
}"#;

// -----------------------------------------------------------------------------
// Level parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_minimal_level() {
    let level = parse_level(MINIMAL_LEVEL).expect("level should parse");
    assert_eq!(level.platforms.len(), 1);
    assert_eq!(level.platforms[0].image, "ground");
    assert_eq!(level.coins.len(), 2);
    assert_eq!(level.spiders.len(), 1);
    assert_eq!(level.hero.x, 21.0);
    assert_eq!(level.door.y, 546.0);
}

#[test]
fn test_parse_level_defaults_missing_lists() {
    let json = r#"{
        "platforms": [],
        "hero": {"x": 0, "y": 0},
        "key": {"x": 1, "y": 1},
        "door": {"x": 2, "y": 2}
    }"#;
    let level = parse_level(json).expect("level should parse");
    assert!(level.coins.is_empty());
    assert!(level.spiders.is_empty());
}

#[test]
fn test_parse_level_ignores_unknown_fields() {
    let json = MINIMAL_LEVEL.replacen('{', r#"{"decoration": [{"frame": 1}],"#, 1);
    assert!(parse_level(&json).is_ok());
}

#[test]
fn test_parse_level_requires_hero() {
    let json = r#"{"platforms": [], "key": {"x": 1, "y": 1}, "door": {"x": 2, "y": 2}}"#;
    assert!(parse_level(json).is_err());
}

#[test]
fn test_level_file_name_is_zero_padded() {
    assert_eq!(level_file_name(0), "level00.json");
    assert_eq!(level_file_name(2), "level02.json");
    assert_eq!(level_file_name(12), "level12.json");
}

#[test]
fn test_missing_level_file_reports_io_error() {
    let result = load_level_file(Path::new("does/not/exist/level00.json"));
    assert!(matches!(result, Err(ContentError::Io { .. })));
}

#[test]
fn test_catalog_skips_missing_levels() {
    let (catalog, errors) = load_level_catalog(Path::new("does/not/exist"), 3);
    assert!(catalog.is_empty());
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_shipped_levels_load() {
    let tuning = GameTuning::default();
    let (catalog, errors) = load_level_catalog(Path::new(DATA_DIR), tuning.level_count);
    assert!(errors.is_empty(), "errors: {:?}", errors);
    assert_eq!(catalog.len(), tuning.level_count);

    for index in 0..tuning.level_count {
        let level = catalog.get(index).expect("level present");
        assert!(!level.platforms.is_empty());
    }
}

// -----------------------------------------------------------------------------
// Tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_partial_tuning_keeps_defaults() {
    let tuning = parse_tuning("(hero_speed: 250.0, level_count: 5)").expect("tuning should parse");
    assert_eq!(tuning.hero_speed, 250.0);
    assert_eq!(tuning.level_count, 5);
    assert_eq!(tuning.hero_jump_speed, GameTuning::default().hero_jump_speed);
    assert_eq!(tuning.gravity, GameTuning::default().gravity);
}

#[test]
fn test_parse_tuning_rejects_garbage() {
    assert!(parse_tuning("(hero_speed: \"fast\")").is_err());
}

#[test]
fn test_missing_tuning_file_is_not_an_error() {
    let result = load_tuning_file(Path::new("does/not/exist/tuning.ron"));
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let path = Path::new(DATA_DIR).join("tuning.ron");
    let loaded = load_tuning_file(&path)
        .expect("tuning should parse")
        .expect("tuning file present");
    assert_eq!(loaded, GameTuning::default());
}

// -----------------------------------------------------------------------------
// Sheet manifest
// -----------------------------------------------------------------------------

fn sheet_frame(key: &str) -> Option<bevy::math::Vec2> {
    SHEETS
        .iter()
        .find(|sheet| sheet.key == key)
        .map(|sheet| sheet.frame_size.as_vec2())
}

#[test]
fn test_sheet_keys_are_unique() {
    for (i, sheet) in SHEETS.iter().enumerate() {
        assert!(SHEETS[i + 1..].iter().all(|other| other.key != sheet.key));
    }
}

#[test]
fn test_body_colliders_match_sheet_frames() {
    assert_eq!(sheet_frame("hero"), Some(crate::hero::spawn::HERO_SIZE));
    assert_eq!(sheet_frame("spider"), Some(crate::spider::spawn::SPIDER_SIZE));
}
