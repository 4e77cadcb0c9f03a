//! Master volume via the ALSA simple mixer interface.
//!
//! The mixer is queried with `amixer -D <card> sget <channel>` on every
//! refresh, so no mixer handle outlives a single call.

use std::process::Command;

use crate::core::fields::{self, Field, FieldKind, Syntax};
use crate::core::system_info::types::{percent_of, Volume};
use crate::error::{BarError, Result};

/// Mono controls report a `Mono:` row; stereo ones fall back to the left channel
const CHANNEL_ROWS: [&str; 2] = ["Mono:", "Front Left:"];
const MUTED_SWITCH: &str = "[off]";

const LIMITS_FIELDS: [Field<'static>; 1] = [Field::new("Limits: Playback", FieldKind::Columns(3))];
const LEVEL_FIELDS: [Field<'static>; 1] = [Field::token("Playback")];
const MIXER_SYNTAX: Syntax<'static> = Syntax {
    separator: None,
    delimiters: " \t",
};

/// One reading of a simple mixer control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixerReading {
    pub min: i64,
    pub max: i64,
    pub current: i64,
    pub muted: bool,
}

/// Parse the output of `amixer sget <control>`
pub fn parse_mixer(output: &str) -> Result<MixerReading> {
    let limits = fields::extract(output, &LIMITS_FIELDS, MIXER_SYNTAX)?;
    if limits[1] != "-" {
        return Err(BarError::parse(format!(
            "unexpected mixer limits: {}",
            limits.join(" ")
        )));
    }
    let min = fields::parse_number(limits[0], "mixer minimum")?;
    let max = fields::parse_number(limits[2], "mixer maximum")?;

    let row = CHANNEL_ROWS
        .iter()
        .find_map(|label| {
            output
                .lines()
                .map(str::trim_start)
                .find(|line| line.starts_with(label) && line.contains("Playback"))
        })
        .ok_or_else(|| BarError::parse("mixer output has no playback channel row"))?;

    let level = fields::extract(row, &LEVEL_FIELDS, MIXER_SYNTAX)?;
    let current = fields::parse_number(level[0], "mixer level")?;

    Ok(MixerReading {
        min,
        max,
        current,
        muted: row.contains(MUTED_SWITCH),
    })
}

/// Run `amixer` against one card/control and parse the result
pub fn query_mixer(card: &str, channel: &str) -> Result<MixerReading> {
    let output = Command::new("amixer")
        .args(["-D", card, "sget", channel])
        .output()
        .map_err(|e| BarError::mixer(format!("failed to run amixer: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BarError::mixer(format!(
            "amixer could not read '{}' on card '{}': {}",
            channel,
            card,
            stderr.trim()
        )));
    }

    parse_mixer(&String::from_utf8_lossy(&output.stdout))
}

impl Volume {
    /// On failure the previous reading is kept
    pub fn update(&mut self, card: &str, channel: &str) -> Result<()> {
        let reading = query_mixer(card, channel)?;
        self.apply_reading(reading);
        Ok(())
    }

    pub fn apply_reading(&mut self, reading: MixerReading) {
        self.min = reading.min;
        self.max = reading.max;
        self.current = reading.current;
        self.muted = reading.muted;
        self.percent = percent_of(reading.current as f64, reading.max as f64);
    }
}
