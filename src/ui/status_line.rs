//! Status line composition.
//!
//! Each segment is an icon wrapped in dwm color markup followed by its value.
//! Optional segments (wifi, battery) are left out rather than rendered empty.

use std::fmt::Write;

use crate::core::config::MAX_STATUS_OUTPUT;
use crate::core::status::Status;
use crate::ui::formatters::{round_percent, BoundedBuffer};

/// Switch to the icon color scheme
pub const FOREGROUND: &str = "^c#68a7d4^";
/// Back to the bar's default scheme
pub const SCHEME_RESET: &str = "^d^";

/// Keeps the line from shifting when a known interface drops its link
pub const WIFI_PLACEHOLDER: &str = "           ";
const RIGHT_PADDING: &str = "      ";

/// Render `status` into a fresh line of at most `MAX_STATUS_OUTPUT` bytes
pub fn compose(status: &Status) -> String {
    let mut buffer = BoundedBuffer::new(MAX_STATUS_OUTPUT);
    compose_into(&mut buffer, status);
    buffer.into_string()
}

/// Render `status` into `buffer`; overflow is cut by the buffer.
pub fn compose_into(buffer: &mut BoundedBuffer, status: &Status) {
    // BoundedBuffer's fmt::Write never reports an error
    let _ = write_segments(buffer, status);
}

fn write_segments(out: &mut BoundedBuffer, status: &Status) -> std::fmt::Result {
    let wifi = &status.wifi;
    if wifi.active {
        write!(out, " {}{}{} {:.1}% ", FOREGROUND, wifi.icon, SCHEME_RESET, wifi.strength)?;
    } else if wifi.capable {
        out.push_str(WIFI_PLACEHOLDER);
    }

    write!(
        out,
        " {}{}{} {:.0}% ",
        FOREGROUND, status.cpu.icon, SCHEME_RESET, status.cpu.utilization
    )?;
    write!(
        out,
        " {}{}{} {:.0}% ",
        FOREGROUND,
        status.memory.icon,
        SCHEME_RESET,
        status.memory.usage_percent()
    )?;
    write!(
        out,
        " {}{}{} {:.0}% ",
        FOREGROUND,
        status.disk.icon,
        SCHEME_RESET,
        status.disk.usage_percent()
    )?;
    write!(
        out,
        " {}{}{} {}%  ",
        FOREGROUND,
        status.volume.icon,
        SCHEME_RESET,
        round_percent(status.volume.percent)
    )?;

    let battery = &status.battery;
    if battery.active {
        write!(out, "{}{}{} {:.0}%  ", FOREGROUND, battery.icon, SCHEME_RESET, battery.percent)?;
    }

    write!(
        out,
        "{}{}{} {}  {}{}{} {}{}",
        FOREGROUND,
        status.date.icon,
        SCHEME_RESET,
        status.date.output,
        FOREGROUND,
        status.time.icon,
        SCHEME_RESET,
        status.time.output,
        RIGHT_PADDING
    )
}
