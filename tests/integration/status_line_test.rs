use barstat::core::config::{Config, MAX_STATUS_OUTPUT};
use barstat::core::status::Status;
use barstat::core::system_info::MixerReading;
use barstat::platform::fs::FsUsage;
use barstat::ui::status_line::{compose, FOREGROUND, SCHEME_RESET, WIFI_PLACEHOLDER};
use barstat::utils::icons;
use chrono::{NaiveDate, Utc};

fn segment(icon: &str, value: &str) -> String {
    format!("{}{}{} {}", FOREGROUND, icon, SCHEME_RESET, value)
}

fn scenario() -> Status {
    let mut status = Status::new(Config::default()).unwrap();
    let at = NaiveDate::from_ymd_opt(2024, 3, 8)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap()
        .and_utc();

    status.date.update_at(&at).unwrap();
    status.time.update_at(&at).unwrap();
    status.cpu.utilization = 42.3;
    status.memory.apply_counters(8_000_000_000, 4_000_000_000);
    status.disk.apply_usage(FsUsage {
        block_size: 4096,
        blocks: 100_000_000_000 / 4096,
        blocks_free: 50_000_000_000 / 4096,
    });
    status.volume.apply_reading(MixerReading {
        min: 0,
        max: 63,
        current: 30,
        muted: false,
    });
    status.select_icons();
    status
}

#[test]
fn test_desktop_without_wifi_or_battery() {
    let mut status = scenario();
    let line = status.render().to_string();

    assert!(line.contains(&segment(icons::CPU, "42%")));
    assert!(line.contains(&segment(icons::MEMORY, "50%")));
    assert!(line.contains(&segment(icons::DISK, "50%")));
    assert!(line.contains(&segment(icons::SPEAKER_UNMUTED, "48%")));
    assert!(line.contains(&segment(icons::DATE, "Friday 03/08/24")));
    assert!(line.contains(&segment(icons::TIME_WITH_SPACE, " 9:15")));

    assert!(!line.contains(icons::WIFI));
    assert!(!line.contains(WIFI_PLACEHOLDER));
    assert!(!line.contains(icons::BATTERY_0));
    assert!(line.len() <= MAX_STATUS_OUTPUT);
}

#[test]
fn test_muted_volume_shows_muted_icon() {
    let mut status = scenario();
    status.volume.apply_reading(MixerReading {
        min: 0,
        max: 63,
        current: 30,
        muted: true,
    });
    status.select_icons();

    let line = compose(&status);
    assert!(line.contains(&segment(icons::SPEAKER_MUTED, "48%")));
    assert!(!line.contains(icons::SPEAKER_UNMUTED));
}

#[test]
fn test_every_optional_combination_is_bounded() {
    for bits in 0..8u8 {
        let mut status = scenario();
        status.wifi.active = bits & 1 != 0;
        status.wifi.capable = bits & 2 != 0;
        status.wifi.strength = 100.0;
        status.battery.active = bits & 4 != 0;
        status.battery.percent = 100.0;
        status.date.output = "W".repeat(31);
        status.time.output = "\u{f017}".repeat(10);
        status.select_icons();

        let line = compose(&status);
        assert!(line.len() <= MAX_STATUS_OUTPUT, "combination {:03b}", bits);
        assert_eq!(line.contains(icons::WIFI), status.wifi.active);
        assert_eq!(line.contains(icons::BATTERY_100), status.battery.active);
    }
}

#[test]
fn test_wifi_forms_are_distinct() {
    let mut status = scenario();
    let absent = compose(&status);

    status.wifi.capable = true;
    let placeholder = compose(&status);

    status.wifi.active = true;
    status.wifi.strength = 77.14;
    let active = compose(&status);

    assert_ne!(absent, placeholder);
    assert_ne!(placeholder, active);
    assert_eq!(placeholder.len(), absent.len() + WIFI_PLACEHOLDER.len());
    assert!(active.starts_with(&format!(" {} ", segment(icons::WIFI, "77.1%"))));
}
