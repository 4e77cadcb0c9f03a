use std::fs;
use std::path::Path;

use crate::core::fields::{self, Field, FieldKind, Syntax};
use crate::core::system_info::types::Cpu;
use crate::error::Result;

/// Columns of the aggregate `cpu` line: user nice system idle iowait irq softirq
const LOAD_COLUMNS: usize = 7;
const IDLE_COLUMN: usize = 3;

const STAT_FIELDS: [Field<'static>; 1] = [Field::new("cpu", FieldKind::Columns(LOAD_COLUMNS))];
const STAT_SYNTAX: Syntax<'static> = Syntax {
    separator: None,
    delimiters: " \t",
};

/// Cumulative jiffy counters from one `/proc/stat` sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JiffySample {
    pub total: u64,
    pub idle: u64,
}

impl JiffySample {
    /// Parse the aggregate `cpu` line of `/proc/stat`
    pub fn parse(stat: &str) -> Result<Self> {
        let columns = fields::extract(stat, &STAT_FIELDS, STAT_SYNTAX)?;

        let mut total = 0u64;
        let mut idle = 0u64;
        for (i, column) in columns.iter().enumerate() {
            let value: u64 = fields::parse_number(column, "cpu jiffies")?;
            if i == IDLE_COLUMN {
                idle = value;
            }
            total = total.saturating_add(value);
        }

        Ok(Self { total, idle })
    }
}

impl Cpu {
    /// Read `/proc/stat` and recompute utilization against the stored baseline.
    ///
    /// A read or parse failure leaves every field untouched.
    pub fn update(&mut self, stat_path: &Path) -> Result<()> {
        let contents = fs::read_to_string(stat_path)?;
        let sample = JiffySample::parse(&contents)?;
        self.apply_sample(sample);
        Ok(())
    }

    /// Fold a new sample into the utilization figure.
    ///
    /// Deltas are absolute differences so a counter reset doesn't underflow.
    /// When no jiffies elapsed the previous reading and baseline are kept.
    pub fn apply_sample(&mut self, sample: JiffySample) {
        let total_delta = sample.total.abs_diff(self.previous_total_jiffies);
        let idle_delta = sample.idle.abs_diff(self.previous_idle_jiffies);

        if total_delta == 0 {
            return;
        }

        let busy_delta = total_delta.saturating_sub(idle_delta);
        self.utilization = 100.0 * busy_delta as f64 / total_delta as f64;
        self.previous_total_jiffies = sample.total;
        self.previous_idle_jiffies = sample.idle;
    }
}
