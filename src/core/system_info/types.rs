use crate::utils::icons;

/// Share of `part` in `whole` as a percentage; 0 when `whole` is 0
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct Battery {
    pub current_energy: u64,
    /// Summed over all slots on top of a baseline of 1
    pub capacity_energy: u64,
    pub charging: bool,
    pub percent: f64,
    pub active: bool,
    pub icon: &'static str,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            current_energy: 0,
            capacity_energy: 1,
            charging: false,
            percent: 0.0,
            active: false,
            icon: icons::BATTERY_0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cpu {
    pub utilization: f64,
    /// Baseline from the previous successful sample
    pub previous_total_jiffies: u64,
    pub previous_idle_jiffies: u64,
    pub icon: &'static str,
}

impl Default for Cpu {
    fn default() -> Self {
        Self {
            utilization: 0.0,
            previous_total_jiffies: 0,
            previous_idle_jiffies: 0,
            icon: icons::CPU,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Memory {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub icon: &'static str,
}

impl Memory {
    pub fn usage_percent(&self) -> f64 {
        percent_of(self.used_bytes as f64, self.total_bytes as f64)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            used_bytes: 0,
            total_bytes: 0,
            icon: icons::MEMORY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Disk {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub icon: &'static str,
}

impl Disk {
    pub fn usage_percent(&self) -> f64 {
        percent_of(self.used_bytes as f64, self.total_bytes as f64)
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self {
            used_bytes: 0,
            total_bytes: 0,
            icon: icons::DISK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wifi {
    pub interface: String,
    pub active: bool,
    /// Set once the interface has been seen; never cleared
    pub capable: bool,
    pub strength: f64,
    pub icon: &'static str,
}

impl Wifi {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            active: false,
            capable: false,
            strength: 0.0,
            icon: icons::WIFI,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Volume {
    pub current: i64,
    pub min: i64,
    pub max: i64,
    pub muted: bool,
    pub percent: f64,
    pub icon: &'static str,
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            current: 0,
            min: 0,
            max: 0,
            muted: false,
            percent: 0.0,
            icon: icons::SPEAKER_UNMUTED,
        }
    }
}

/// One formatted clock reading; used for both the date and the time segment
#[derive(Debug, Clone)]
pub struct Clock {
    pub output: String,
    pub format: String,
    pub icon: &'static str,
}

impl Clock {
    pub fn new(format: impl Into<String>, icon: &'static str) -> Self {
        Self {
            output: String::new(),
            format: format.into(),
            icon,
        }
    }
}
