use std::path::Path;

use crate::core::system_info::types::Disk;
use crate::error::Result;
use crate::platform::fs::{statvfs, FsUsage};

impl Disk {
    /// Query the filesystem holding `path` (normally `/`).
    ///
    /// On failure the previous figures are kept.
    pub fn update(&mut self, path: &Path) -> Result<()> {
        let usage = statvfs(path)?;
        self.apply_usage(usage);
        Ok(())
    }

    pub fn apply_usage(&mut self, usage: FsUsage) {
        self.total_bytes = usage.total_bytes();
        self.used_bytes = self.total_bytes.saturating_sub(usage.free_bytes());
    }
}
