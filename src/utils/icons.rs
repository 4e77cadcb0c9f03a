//! Status bar glyphs
//!
//! Glyphs come from the Font Awesome symbol font the bar is configured with.
//! Selection functions are pure and run after every reader has refreshed.

use crate::core::system_info::types::{Battery, Clock, Volume};

pub const WIFI: &str = "\u{f1eb}";
pub const MEMORY: &str = "\u{f538}";
pub const DISK: &str = "\u{f0a0}";
pub const CPU: &str = "\u{f2db}";
pub const SPEAKER_UNMUTED: &str = "\u{f028}";
pub const SPEAKER_MUTED: &str = "\u{f6a9}";
pub const DATE: &str = "\u{f073}";
pub const TIME: &str = "\u{f017}";
pub const TIME_WITH_SPACE: &str = "\u{f017} ";
pub const BATTERY_CHARGING: &str = "\u{f0e7}";
pub const BATTERY_100: &str = "\u{f240}";
pub const BATTERY_75: &str = "\u{f241}";
pub const BATTERY_50: &str = "\u{f242}";
pub const BATTERY_25: &str = "\u{f243}";
pub const BATTERY_0: &str = "\u{f244}";

/// Returns the battery glyph for a charge state
///
/// The percentage is truncated before bucketing, so 89.9 still shows the
/// three-quarter glyph.
///
/// # Examples
///
/// ```
/// use barstat::utils::icons::{battery_icon, BATTERY_100, BATTERY_CHARGING};
///
/// assert_eq!(battery_icon(95.0, false), BATTERY_100);
/// assert_eq!(battery_icon(5.0, true), BATTERY_CHARGING);
/// ```
pub fn battery_icon(percent: f64, charging: bool) -> &'static str {
    if charging {
        return BATTERY_CHARGING;
    }

    match percent as i64 {
        90..=100 => BATTERY_100,
        60..=89 => BATTERY_75,
        30..=59 => BATTERY_50,
        10..=29 => BATTERY_25,
        _ => BATTERY_0,
    }
}

/// The icon shows the current mute state
pub fn volume_icon(muted: bool) -> &'static str {
    if muted {
        SPEAKER_MUTED
    } else {
        SPEAKER_UNMUTED
    }
}

/// Space-padded single-digit hours get the spaced variant
pub fn time_icon(formatted: &str) -> &'static str {
    if formatted.starts_with(' ') {
        TIME_WITH_SPACE
    } else {
        TIME
    }
}

pub fn set_battery_icon(battery: &mut Battery) {
    battery.icon = battery_icon(battery.percent, battery.charging);
}

pub fn set_volume_icon(volume: &mut Volume) {
    volume.icon = volume_icon(volume.muted);
}

pub fn set_time_icon(time: &mut Clock) {
    time.icon = time_icon(&time.output);
}
