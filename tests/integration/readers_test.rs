use barstat::core::config::Config;
use barstat::core::system_info::{Battery, Cpu, Wifi};
use barstat::utils::icons;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_slot(dir: &Path, slot: &str, now: &str, full: &str, status: &str) {
    let slot_dir = dir.join(slot);
    fs::create_dir_all(&slot_dir).unwrap();
    fs::write(slot_dir.join("energy_now"), now).unwrap();
    fs::write(slot_dir.join("energy_full"), full).unwrap();
    fs::write(slot_dir.join("status"), status).unwrap();
}

fn config_in(dir: &TempDir) -> Config {
    Config {
        power_supply_dir: dir.path().to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_two_batteries_are_summed() {
    let temp_dir = TempDir::new().unwrap();
    write_slot(temp_dir.path(), "BAT0", "30000000\n", "50000000\n", "Discharging\n");
    write_slot(temp_dir.path(), "BAT1", "10000000\n", "29999999\n", "Charging\n");

    let mut battery = Battery::default();
    battery.update(&config_in(&temp_dir).battery_files());

    assert!(battery.active);
    assert!(battery.charging);
    assert_eq!(battery.current_energy, 40_000_000);
    assert_eq!(battery.capacity_energy, 80_000_000);
    assert_eq!(battery.percent, 50.0);

    icons::set_battery_icon(&mut battery);
    assert_eq!(battery.icon, icons::BATTERY_CHARGING);
}

#[test]
fn test_no_battery_is_inactive() {
    let temp_dir = TempDir::new().unwrap();

    let mut battery = Battery::default();
    battery.update(&config_in(&temp_dir).battery_files());

    assert!(!battery.active);
    assert!(!battery.charging);
    assert_eq!(battery.capacity_energy, 1);
}

#[test]
fn test_battery_icon_tracks_level() {
    let temp_dir = TempDir::new().unwrap();
    write_slot(temp_dir.path(), "BAT0", "18\n", "99\n", "Discharging\n");

    let mut battery = Battery::default();
    battery.update(&config_in(&temp_dir).battery_files());
    icons::set_battery_icon(&mut battery);

    assert_eq!(battery.percent, 18.0);
    assert_eq!(battery.icon, icons::BATTERY_25);
}

#[test]
fn test_cpu_utilization_from_two_samples() {
    let temp_dir = TempDir::new().unwrap();
    let stat = temp_dir.path().join("stat");
    let mut cpu = Cpu::default();

    fs::write(&stat, "cpu  100 0 100 800 0 0 0 0 0 0\ncpu0 1 2 3 4 5 6 7\n").unwrap();
    cpu.update(&stat).unwrap();
    assert_eq!(cpu.previous_total_jiffies, 1000);

    fs::write(&stat, "cpu  130 0 130 840 0 0 0 0 0 0\n").unwrap();
    cpu.update(&stat).unwrap();
    assert_eq!(cpu.utilization, 60.0);

    // Unchanged counters keep the previous reading
    cpu.update(&stat).unwrap();
    assert_eq!(cpu.utilization, 60.0);
    assert_eq!(cpu.previous_total_jiffies, 1100);
}

#[test]
fn test_cpu_short_line_fails_without_touching_state() {
    let temp_dir = TempDir::new().unwrap();
    let stat = temp_dir.path().join("stat");
    fs::write(&stat, "cpu  1 2 3\n").unwrap();

    let mut cpu = Cpu::default();
    assert!(cpu.update(&stat).is_err());
    assert_eq!(cpu.previous_total_jiffies, 0);
    assert_eq!(cpu.utilization, 0.0);
}

#[test]
fn test_wifi_appears_and_drops() {
    let temp_dir = TempDir::new().unwrap();
    let wireless = temp_dir.path().join("wireless");
    let header = "Inter-| sta-|   Quality        |   Discarded packets               | Missed | WE\n \
                  face | tus | link level noise |  nwid  crypt   frag  retry   misc | beacon | 22\n";

    let mut wifi = Wifi::new("wlp4s0");
    fs::write(&wireless, format!("{}wlp4s0: 0000   35.  -70.  -256        0      0      0      0      0        0\n", header)).unwrap();
    wifi.update(&wireless).unwrap();
    assert!(wifi.active && wifi.capable);
    assert_eq!(wifi.strength, 50.0);

    fs::write(&wireless, header).unwrap();
    wifi.update(&wireless).unwrap();
    assert!(!wifi.active);
    assert!(wifi.capable);
    assert_eq!(wifi.strength, 50.0);
}

#[test]
fn test_wifi_malformed_row_fails_only_wifi() {
    let temp_dir = TempDir::new().unwrap();
    let wireless = temp_dir.path().join("wireless");
    fs::write(&wireless, "wlp4s0: 0000\n").unwrap();

    let mut wifi = Wifi::new("wlp4s0");
    wifi.active = true;
    assert!(wifi.update(&wireless).is_err());
    assert!(!wifi.active);
}
