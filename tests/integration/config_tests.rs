use conscious_choice::cli::ThemeArg;
use conscious_choice::config::{Config, DEFAULT_SITE_ROOT};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.theme, ThemeArg::Auto);
    assert_eq!(config.site_root, None);
    assert_eq!(config.shuffle_seed, None);
    assert_eq!(config.resolve_site_root(None), PathBuf::from(DEFAULT_SITE_ROOT));
}

#[test]
fn test_config_load_from_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let toml_content = r#"
site_root = "/srv/conscious-choice"
theme = "light"
shuffle_seed = 7
"#;
    fs::write(&config_path, toml_content).unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.theme, ThemeArg::Light);
    assert_eq!(config.shuffle_seed, Some(7));
    assert_eq!(
        config.resolve_site_root(None),
        PathBuf::from("/srv/conscious-choice")
    );
}

#[test]
fn test_config_partial_file_keeps_defaults() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "theme = \"dark\"\n").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.theme, ThemeArg::Dark);
    assert_eq!(config.site_root, None);
}

#[test]
fn test_config_invalid_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "theme = \"purple\"\n").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid config file"));
}

#[test]
fn test_config_save_and_reload() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        site_root: Some(PathBuf::from("site")),
        theme: ThemeArg::Dark,
        shuffle_seed: Some(99),
    };
    config.save_to(&config_path).unwrap();

    let reloaded = Config::load_from(&config_path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_cli_values_override_config() {
    let config = Config {
        site_root: Some(PathBuf::from("from-config")),
        theme: ThemeArg::Light,
        shuffle_seed: Some(1),
    };

    assert_eq!(
        config.resolve_site_root(Some(PathBuf::from("from-cli"))),
        PathBuf::from("from-cli")
    );
    assert_eq!(config.resolve_seed(Some(2)), Some(2));
    assert_eq!(config.resolve_seed(None), Some(1));
    assert_eq!(config.resolve_theme(Some(ThemeArg::Dark)), ThemeArg::Dark);
    assert_eq!(config.resolve_theme(None), ThemeArg::Light);
}
