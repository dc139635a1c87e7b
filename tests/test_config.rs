use std::path::PathBuf;

use galaxy_defender::config::Settings;
use galaxy_defender::error::ConfigError;

#[test]
fn empty_file_gives_defaults() {
    let s = Settings::from_toml("").unwrap();
    assert_eq!(s, Settings::default());
    assert!(s.sound);
    assert_eq!(s.log_file, None);
}

#[test]
fn fields_override_defaults() {
    let s = Settings::from_toml(
        r#"
        assets_dir = "/opt/galaxy/assets"
        log_file = "galaxy.log"
        sound = false
        "#,
    )
    .unwrap();
    assert_eq!(s.assets_dir, Some(PathBuf::from("/opt/galaxy/assets")));
    assert_eq!(s.log_file, Some(PathBuf::from("galaxy.log")));
    assert!(!s.sound);
    assert_eq!(s.resolve_assets_dir(), PathBuf::from("/opt/galaxy/assets"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Settings::from_toml("volume = 11").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_types_are_rejected() {
    assert!(Settings::from_toml("sound = \"loud\"").is_err());
}

#[test]
fn missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("galaxy_defender_no_such_settings.toml");
    let _ = std::fs::remove_file(&path);
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!(
        "galaxy_defender_settings_{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "sound = false\n").unwrap();
    let s = Settings::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(!s.sound);
}
