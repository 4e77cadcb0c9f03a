//! Where the composed status line goes

use std::io::{self, Write};
use std::process::Command;

use crate::error::{BarError, Result};

/// Output target for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// The X11 root window name, read by dwm's bar
    RootWindow,
    /// One line per update on stdout
    Stdout,
}

impl Sink {
    pub fn publish(&self, line: &str) -> Result<()> {
        match self {
            Sink::RootWindow => set_root_name(line),
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", line)?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

/// Set the root window name with `xsetroot -name`
pub fn set_root_name(name: &str) -> Result<()> {
    let output = Command::new("xsetroot")
        .args(["-name", name])
        .output()
        .map_err(|e| BarError::display(format!("failed to run xsetroot: {}", e)))?;

    if !output.status.success() {
        return Err(BarError::display(format!(
            "xsetroot exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}
