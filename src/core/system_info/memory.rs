use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::core::system_info::types::Memory;
use crate::error::{BarError, Result};

/// Keeps one `sysinfo::System` around so each cycle only refreshes RAM counters
pub struct MemoryProbe {
    system: System,
}

impl MemoryProbe {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
        Self {
            system: System::new_with_specifics(refresh),
        }
    }

    /// Current (total, free) RAM in bytes
    pub fn sample(&mut self) -> Result<(u64, u64)> {
        self.system
            .refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());

        let total = self.system.total_memory();
        if total == 0 {
            return Err(BarError::metric_collection("system reported 0 bytes of RAM"));
        }

        Ok((total, self.system.free_memory()))
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// On failure the previous figures are kept
    pub fn update(&mut self, probe: &mut MemoryProbe) -> Result<()> {
        let (total, free) = probe.sample()?;
        self.apply_counters(total, free);
        Ok(())
    }

    pub fn apply_counters(&mut self, total: u64, free: u64) {
        self.total_bytes = total;
        self.used_bytes = total.saturating_sub(free);
    }
}
