use config::Map;

use fldarklint::settings::Settings;

fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v.to_string());
    }
    map
}

#[test]
fn defaults_when_nothing_is_set() {
    let settings = Settings::from_vars(vars(&[])).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_level, "INFO");
    assert!(!settings.log_json);
    assert!(!settings.log_show_file_locations);
}

#[test]
fn switches_read_true_in_any_case() {
    let settings = Settings::from_vars(vars(&[
        ("FLDARKLINT_LOG_JSON", "TRUE"),
        ("FLDARKLINT_LOG_SHOW_FILE_LOCATIONS", "true"),
        ("FLDARKLINT_LOG_LEVEL", "DEBUG"),
    ]))
    .expect("settings");
    assert!(settings.log_json);
    assert!(settings.log_show_file_locations);
    assert_eq!(settings.log_level, "DEBUG");
}

#[test]
fn anything_but_true_is_off() {
    let settings = Settings::from_vars(vars(&[("FLDARKLINT_LOG_JSON", "1"), ("FLDARKLINT_LOG_SHOW_FILE_LOCATIONS", "yes")]))
        .expect("settings");
    assert!(!settings.log_json);
    assert!(!settings.log_show_file_locations);
}

#[test]
fn other_prefixes_are_ignored() {
    let settings = Settings::from_vars(vars(&[("OTHER_LOG_JSON", "true")])).expect("settings");
    assert!(!settings.log_json);
}

#[test]
fn logging_installs_only_once() {
    let settings = Settings::default();
    assert!(settings.init_logging().is_ok());
    assert!(settings.init_logging().is_err());
}

#[test]
fn invalid_level_is_a_config_error() {
    let settings = Settings {
        log_level: "fldarklint=loud".to_string(),
        ..Settings::default()
    };
    let err = settings.init_logging().unwrap_err();
    assert!(err.to_string().starts_with("Config error"), "{err}");
}
