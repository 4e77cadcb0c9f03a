use barstat::core::config::{Config, MAX_DATE_OUTPUT, MAX_STATUS_OUTPUT};
use barstat::error::BarError;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.wireless_interface, "wlp4s0");
    assert_eq!(config.battery_slots, vec!["BAT0", "BAT1"]);
    assert_eq!(config.mixer_card, "default");
    assert_eq!(config.mixer_channel, "Master");
    assert_eq!(config.poll_interval, Duration::from_secs(1));
    assert_eq!(MAX_STATUS_OUTPUT, 512);
    assert_eq!(MAX_DATE_OUTPUT, 32);
}

#[test]
fn test_battery_files_follow_slots() {
    let config = Config {
        power_supply_dir: PathBuf::from("/tmp/ps"),
        battery_slots: vec!["BAT1".to_string()],
        ..Default::default()
    };

    let files = config.battery_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].energy_now, PathBuf::from("/tmp/ps/BAT1/energy_now"));
    assert_eq!(files[0].energy_full, PathBuf::from("/tmp/ps/BAT1/energy_full"));
    assert_eq!(files[0].status, PathBuf::from("/tmp/ps/BAT1/status"));
}

#[test]
fn test_cli_overrides_are_validated() {
    let mut config = Config::default();

    assert!(config.set_wireless_interface("wlan0".to_string()).is_ok());
    assert_eq!(config.wireless_interface, "wlan0");
    assert!(matches!(
        config.set_wireless_interface("wl an0".to_string()),
        Err(BarError::Config(_))
    ));

    assert!(config.set_poll_interval(5).is_ok());
    assert_eq!(config.poll_interval, Duration::from_secs(5));
    assert!(config.set_poll_interval(0).is_err());
    assert_eq!(config.poll_interval, Duration::from_secs(5));
}

#[test]
fn test_media_player_file_under_config_dir() {
    if let Some(path) = Config::default().media_player_file {
        assert!(path.ends_with("Google Play Music Desktop Player/json_store/playback.json"));
    }
}
