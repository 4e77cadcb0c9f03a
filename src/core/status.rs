//! The status aggregate and its poll cycle.
//!
//! One [`Status`] lives for the whole process. Each cycle every reader
//! mutates its own record in place, icons are re-selected, and the composer
//! renders the line into a fixed-capacity buffer. Reader failures never abort
//! a cycle: the metric keeps its previous value and the failure is logged.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info, warn};

use crate::core::config::{Config, MAX_STATUS_OUTPUT};
use crate::core::system_info::clock::validate_format;
use crate::core::system_info::{Battery, Clock, Cpu, Disk, Memory, MemoryProbe, Volume, Wifi};
use crate::error::{BarError, Result};
use crate::ui::formatters::BoundedBuffer;
use crate::ui::status_line;
use crate::utils::icons;

/// Readers that can fail independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
    Wifi,
    Volume,
    Date,
    Time,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Cpu => "cpu",
            Metric::Memory => "memory",
            Metric::Disk => "disk",
            Metric::Wifi => "wifi",
            Metric::Volume => "volume",
            Metric::Date => "date",
            Metric::Time => "time",
        };
        f.write_str(name)
    }
}

pub struct Status {
    pub battery: Battery,
    pub cpu: Cpu,
    pub memory: Memory,
    pub disk: Disk,
    pub wifi: Wifi,
    pub volume: Volume,
    pub date: Clock,
    pub time: Clock,
    output: BoundedBuffer,
    config: Config,
    memory_probe: MemoryProbe,
    failing: HashSet<Metric>,
}

impl Status {
    /// Build the aggregate; fails only on an unusable date or time pattern
    pub fn new(config: Config) -> Result<Self> {
        validate_format(&config.date_format)
            .and_then(|_| validate_format(&config.time_format))
            .map_err(|e| BarError::config(e.to_string()))?;

        Ok(Self {
            battery: Battery::default(),
            cpu: Cpu::default(),
            memory: Memory::default(),
            disk: Disk::default(),
            wifi: Wifi::new(config.wireless_interface.clone()),
            volume: Volume::default(),
            date: Clock::new(config.date_format.clone(), icons::DATE),
            time: Clock::new(config.time_format.clone(), icons::TIME),
            output: BoundedBuffer::new(MAX_STATUS_OUTPUT),
            config,
            memory_probe: MemoryProbe::new(),
            failing: HashSet::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every reader once, then re-select icons
    pub fn refresh(&mut self) {
        let result = self.date.update();
        self.record(Metric::Date, result);
        let result = self.time.update();
        self.record(Metric::Time, result);

        self.battery.update(&self.config.battery_files());

        let result = self
            .volume
            .update(&self.config.mixer_card, &self.config.mixer_channel);
        self.record(Metric::Volume, result);

        let result = self.memory.update(&mut self.memory_probe);
        self.record(Metric::Memory, result);
        let result = self.disk.update(&self.config.disk_path);
        self.record(Metric::Disk, result);
        let result = self.cpu.update(&self.config.proc_stat_path);
        self.record(Metric::Cpu, result);
        let result = self.wifi.update(&self.config.wireless_path);
        self.record(Metric::Wifi, result);

        self.select_icons();
    }

    /// Re-read only the mixer; used when a volume key changed the level
    pub fn refresh_volume(&mut self) {
        let result = self
            .volume
            .update(&self.config.mixer_card, &self.config.mixer_channel);
        self.record(Metric::Volume, result);
        self.select_icons();
    }

    /// Icons that depend on the freshly read state
    pub fn select_icons(&mut self) {
        icons::set_battery_icon(&mut self.battery);
        icons::set_volume_icon(&mut self.volume);
        icons::set_time_icon(&mut self.time);
    }

    /// Compose the status line from the current state
    pub fn render(&mut self) -> &str {
        let mut buffer = std::mem::replace(&mut self.output, BoundedBuffer::new(0));
        buffer.clear();
        status_line::compose_into(&mut buffer, self);
        if buffer.is_truncated() {
            debug!("Status line truncated to {} bytes", MAX_STATUS_OUTPUT);
        }
        self.output = buffer;
        self.output.as_str()
    }

    /// The line produced by the last `render`
    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    pub fn is_failing(&self, metric: Metric) -> bool {
        self.failing.contains(&metric)
    }

    /// Log a reader outcome: warn on the first failure, stay quiet on
    /// repeats, and note the recovery.
    fn record(&mut self, metric: Metric, result: Result<()>) {
        match result {
            Ok(()) => {
                if self.failing.remove(&metric) {
                    info!("{} reading recovered", metric);
                }
            }
            Err(e) => {
                if self.failing.insert(metric) {
                    warn!("Failed to read {}: {}", metric, e);
                } else {
                    debug!("{} still failing: {}", metric, e);
                }
            }
        }
    }
}
