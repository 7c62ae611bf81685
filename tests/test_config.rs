use std::collections::HashMap;
use std::path::PathBuf;

use space_garbage::config::Settings;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn defaults_without_environment() {
    let settings = Settings::from_lookup(lookup(&[])).expect("defaults parse");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.assets_dir, PathBuf::from("animation_frames"));
    assert!(settings.log_file.is_none());
    assert!(settings.seed.is_none());
}

#[test]
fn environment_overrides() {
    let settings = Settings::from_lookup(lookup(&[
        ("SPACE_GARBAGE_ASSETS", "/tmp/frames"),
        ("SPACE_GARBAGE_LOG", "game.log"),
        ("SPACE_GARBAGE_SEED", " 1234 "),
    ]))
    .expect("overrides parse");
    assert_eq!(settings.assets_dir, PathBuf::from("/tmp/frames"));
    assert_eq!(settings.log_file, Some(PathBuf::from("game.log")));
    assert_eq!(settings.seed, Some(1234));
}

#[test]
fn bad_seed_is_rejected() {
    let err = Settings::from_lookup(lookup(&[("SPACE_GARBAGE_SEED", "soon")])).unwrap_err();
    assert!(err.to_string().contains("SPACE_GARBAGE_SEED"));
}
