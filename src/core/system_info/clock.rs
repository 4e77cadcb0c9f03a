use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};

use crate::core::config::MAX_DATE_OUTPUT;
use crate::core::system_info::types::Clock;
use crate::error::{BarError, Result};
use crate::ui::formatters::truncate_to_boundary;

/// Reject strftime patterns chrono can't render
pub fn validate_format(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(BarError::format(format!("invalid time format {:?}", pattern)));
    }
    Ok(())
}

/// Render `at` with a strftime pattern, bounded to `MAX_DATE_OUTPUT - 1` bytes
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    validate_format(pattern)?;

    let mut output = String::with_capacity(MAX_DATE_OUTPUT);
    write!(output, "{}", at.format(pattern))
        .map_err(|_| BarError::format(format!("could not render {:?}", pattern)))?;

    truncate_to_boundary(&mut output, MAX_DATE_OUTPUT - 1);
    Ok(output)
}

impl Clock {
    /// Format the current local time
    pub fn update(&mut self) -> Result<()> {
        self.update_at(&Local::now())
    }

    pub fn update_at<Tz>(&mut self, at: &DateTime<Tz>) -> Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.output = format_timestamp(at, &self.format)?;
        Ok(())
    }
}
