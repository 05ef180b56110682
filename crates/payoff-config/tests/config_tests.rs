use payoff_config::{Config, ConfigError, ConfigManager};
use payoff_domain::PayoffMethod;
use tempfile::tempdir;

#[test]
fn default_config_is_valid_avalanche_with_rollover() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.default_method, PayoffMethod::Avalanche);
    assert!(cfg.keep_minimums);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    let mut cfg = Config::default();
    cfg.default_method = PayoffMethod::Snowball;
    cfg.default_extra_per_month = 25_000;
    cfg.round_up_to_nearest = Some(1_000);

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn loading_never_creates_directories() {
    let dir = tempdir().expect("tempdir");
    let base = dir.path().join("debt-payoff");
    let manager = ConfigManager::with_base_dir(base.clone());

    assert_eq!(manager.load().expect("defaults"), Config::default());
    assert!(!base.exists());

    manager.save(&Config::default()).expect("save config");
    assert!(manager.config_path().exists());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));
    assert_eq!(manager.load().expect("defaults"), Config::default());
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale":"en-GB","currency":"GBP"}"#).expect("write");
    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.currency, "GBP");
    assert!(loaded.keep_minimums);
    assert_eq!(loaded.default_extra_per_month, 0);
}

#[test]
fn invalid_settings_are_rejected_on_save() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    let mut cfg = Config::default();
    cfg.round_up_to_nearest = Some(0);
    assert!(matches!(
        manager.save(&cfg),
        Err(ConfigError::Invalid {
            field: "round_up_to_nearest",
            ..
        })
    ));
}

#[test]
fn payoff_options_follow_defaults() {
    let mut cfg = Config::default();
    cfg.keep_minimums = false;
    cfg.default_extra_per_month = 5_000;
    let options = cfg.payoff_options();
    assert!(!options.keep_minimums);
    assert_eq!(options.extra_per_month, 5_000);
    assert_eq!(options.method, PayoffMethod::Avalanche);
}
