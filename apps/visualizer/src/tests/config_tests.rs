use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_match_engine_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.sort_config(), SortConfig::default());
    assert_eq!(settings.algorithm, "bubble");
    assert!(settings.seed.is_none());
}

#[test]
fn reads_partial_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("visualizer.toml");
    fs::write(&path, "size = 120\nalgorithm = \"radix\"\n").expect("write");

    let settings = read_settings_file(&path).expect("settings");
    assert_eq!(settings.size, 120);
    assert_eq!(settings.algorithm, "radix");
    assert_eq!(settings.speed, DEFAULT_SPEED);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");
    let err = load_settings(Some(missing.as_path())).expect_err("should fail");
    assert!(err.to_string().contains("failed to read settings file"));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "size = \"many\"").expect("write");

    let err = read_settings_file(&path).expect_err("should fail");
    assert!(err.to_string().contains("failed to parse settings file"));
}

#[test]
fn environment_overrides_file_values() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("SORTVIZ__SIZE", "30"),
            ("SORTVIZ__SPEED", "90"),
            ("SORTVIZ__ALGORITHM", "quick"),
            ("SORTVIZ__SEED", "7"),
        ]),
    );

    assert_eq!(settings.size, 30);
    assert_eq!(settings.speed, 90);
    assert_eq!(settings.algorithm, "quick");
    assert_eq!(settings.seed, Some(7));
}

#[test]
fn unparsable_environment_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[("SORTVIZ__SIZE", "lots"), ("SORTVIZ__SEED", "-1")]),
    );
    assert_eq!(settings, Settings::default());
}
