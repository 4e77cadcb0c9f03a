use std::fs;
use std::path::Path;

use crate::core::fields::{self, Field, FieldKind, Syntax};
use crate::core::system_info::types::Wifi;
use crate::error::Result;

/// Typical maximum of the driver's link quality value
const LINK_QUALITY_MAX: f64 = 70.0;

/// `wlp4s0: 0000   54.  -56.  -256 ...`: status, then link quality
const WIRELESS_SYNTAX: Syntax<'static> = Syntax {
    separator: Some(':'),
    delimiters: " .\t",
};

/// Find the interface's row in `/proc/net/wireless` and return its link quality.
///
/// `Ok(None)` means the interface isn't listed (no association).
pub fn parse_link_quality(table: &str, interface: &str) -> Result<Option<u32>> {
    let Some(row) = table
        .lines()
        .find(|line| line.trim_start().split(':').next() == Some(interface))
    else {
        return Ok(None);
    };

    let tokens = fields::extract(row, &[Field::new(interface, FieldKind::Nth(1))], WIRELESS_SYNTAX)?;
    let quality = fields::parse_number(tokens[0], "link quality")?;
    Ok(Some(quality))
}

impl Wifi {
    /// Refresh from the wireless status table.
    ///
    /// Interface missing: inactive, `capable` and `strength` untouched.
    /// Malformed row: inactive and the parse error is returned.
    /// Unreadable table: nothing changes.
    pub fn update(&mut self, wireless_path: &Path) -> Result<()> {
        let table = fs::read_to_string(wireless_path)?;

        match parse_link_quality(&table, &self.interface) {
            Ok(Some(quality)) => {
                self.capable = true;
                self.active = true;
                self.strength = quality as f64 * 100.0 / LINK_QUALITY_MAX;
                Ok(())
            }
            Ok(None) => {
                self.active = false;
                Ok(())
            }
            Err(e) => {
                self.active = false;
                Err(e)
            }
        }
    }
}
