use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BarError, Result};

/// Upper bound for the composed status line, in bytes
pub const MAX_STATUS_OUTPUT: usize = 512;
/// Upper bound for a formatted date or time string, in bytes
pub const MAX_DATE_OUTPUT: usize = 32;

const GPMDP_PLAYBACK_FILE: &str = "Google Play Music Desktop Player/json_store/playback.json";

/// Compiled-in settings for every reader.
///
/// There is no configuration file; `main` overrides a few fields from the
/// command line and tests point the paths at temporary directories.
#[derive(Debug, Clone)]
pub struct Config {
    pub wireless_interface: String,
    pub wireless_path: PathBuf,
    pub power_supply_dir: PathBuf,
    pub battery_slots: Vec<String>,
    pub proc_stat_path: PathBuf,
    pub disk_path: PathBuf,
    pub mixer_card: String,
    pub mixer_channel: String,
    pub date_format: String,
    pub time_format: String,
    pub poll_interval: Duration,
    pub media_player_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wireless_interface: "wlp4s0".to_string(),
            wireless_path: PathBuf::from("/proc/net/wireless"),
            power_supply_dir: PathBuf::from("/sys/class/power_supply"),
            battery_slots: vec!["BAT0".to_string(), "BAT1".to_string()],
            proc_stat_path: PathBuf::from("/proc/stat"),
            disk_path: PathBuf::from("/"),
            mixer_card: "default".to_string(),
            mixer_channel: "Master".to_string(),
            date_format: "%A %x".to_string(),
            // %k pads single-digit hours with a space
            time_format: "%k:%M".to_string(),
            poll_interval: Duration::from_secs(1),
            media_player_file: dirs::config_dir().map(|dir| dir.join(GPMDP_PLAYBACK_FILE)),
        }
    }
}

impl Config {
    /// Energy, capacity and status file paths for every configured battery slot
    pub fn battery_files(&self) -> Vec<BatteryFiles> {
        self.battery_slots
            .iter()
            .map(|slot| {
                let dir = self.power_supply_dir.join(slot);
                BatteryFiles {
                    energy_now: dir.join("energy_now"),
                    energy_full: dir.join("energy_full"),
                    status: dir.join("status"),
                }
            })
            .collect()
    }

    pub fn set_wireless_interface(&mut self, interface: String) -> Result<()> {
        if interface.trim().is_empty() || interface.contains(char::is_whitespace) {
            return Err(BarError::config(format!(
                "invalid wireless interface name: {:?}",
                interface
            )));
        }
        self.wireless_interface = interface;
        Ok(())
    }

    pub fn set_poll_interval(&mut self, secs: u64) -> Result<()> {
        if secs == 0 {
            return Err(BarError::config("poll interval must be at least 1 second"));
        }
        self.poll_interval = Duration::from_secs(secs);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryFiles {
    pub energy_now: PathBuf,
    pub energy_full: PathBuf,
    pub status: PathBuf,
}
