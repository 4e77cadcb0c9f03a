use std::fs;
use std::path::Path;

use crate::core::config::BatteryFiles;
use crate::core::system_info::types::{percent_of, Battery};

const CHARGING_STATUS: &str = "Charging";

impl Battery {
    /// Sum energy readings across all battery slots.
    ///
    /// Never fails: a slot whose files are missing or unreadable contributes
    /// zero, and the battery only counts as active when some slot reported a
    /// capacity.
    pub fn update(&mut self, slots: &[BatteryFiles]) {
        self.current_energy = 0;
        self.capacity_energy = 1;
        self.charging = false;

        for slot in slots {
            self.current_energy = self.current_energy.saturating_add(read_energy(&slot.energy_now));
            self.capacity_energy = self.capacity_energy.saturating_add(read_energy(&slot.energy_full));
        }

        self.charging = slots.iter().any(|slot| is_charging(&slot.status));
        self.active = self.capacity_energy > 1;
        self.percent = percent_of(self.current_energy as f64, self.capacity_energy as f64);
    }
}

/// Energy in µWh, or 0 when the file can't be read
fn read_energy(path: &Path) -> u64 {
    match fs::read_to_string(path) {
        Ok(contents) => contents.trim().parse().unwrap_or_else(|_| {
            log::debug!("Unparsable battery value in {}", path.display());
            0
        }),
        Err(_) => 0,
    }
}

fn is_charging(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|contents| contents.lines().next() == Some(CHARGING_STATUS))
        .unwrap_or(false)
}
