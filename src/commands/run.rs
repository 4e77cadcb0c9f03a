//! The status loop: refresh, render, publish, sleep.
//!
//! SIGINT/SIGTERM stop the loop after the current cycle. SIGUSR1 re-reads
//! the mixer and republishes right away, so volume-key bindings can
//! `pkill -USR1 barstat` instead of waiting for the next cycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info, warn};

use crate::core::config::Config;
use crate::core::status::Status;
use crate::platform::display::Sink;

/// Granularity of the signal checks while sleeping
const SIGNAL_POLL: Duration = Duration::from_millis(100);

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::default();
    if let Some(interface) = matches.get_one::<String>("interface") {
        config.set_wireless_interface(interface.clone())?;
    }
    if let Some(&secs) = matches.get_one::<u64>("interval") {
        config.set_poll_interval(secs)?;
    }

    let once = matches.get_flag("once");
    let sink = if matches.get_flag("stdout") {
        Sink::Stdout
    } else {
        Sink::RootWindow
    };

    let mut status = Status::new(config).context("Invalid status bar configuration")?;

    if once {
        status.refresh();
        sink.publish(status.render())
            .context("Failed to publish status line")?;
        return Ok(());
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();
    ctrlc::set_handler(move || {
        shutdown_clone.store(true, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set signal handler: {}", e))?;

    let volume_changed = Arc::new(AtomicBool::new(false));
    register_volume_signal(&volume_changed)?;

    run_loop(&mut status, sink, &shutdown, &volume_changed);
    Ok(())
}

#[cfg(unix)]
fn register_volume_signal(flag: &Arc<AtomicBool>) -> Result<()> {
    signal_hook::flag::register(signal_hook::consts::SIGUSR1, Arc::clone(flag))
        .context("Failed to register SIGUSR1 handler")?;
    Ok(())
}

#[cfg(not(unix))]
fn register_volume_signal(_flag: &Arc<AtomicBool>) -> Result<()> {
    Ok(())
}

/// What ended a wait between cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    Deadline,
    Shutdown,
    VolumeChanged,
}

/// Sink wrapper that logs delivery failures once until they recover
struct Publisher {
    sink: Sink,
    failing: bool,
}

impl Publisher {
    fn publish(&mut self, line: &str) {
        match self.sink.publish(line) {
            Ok(()) if self.failing => {
                info!("Status line delivery recovered");
                self.failing = false;
            }
            Ok(()) => {}
            Err(e) if self.failing => debug!("Status line still not delivered: {}", e),
            Err(e) => {
                warn!("Failed to publish status line: {}", e);
                self.failing = true;
            }
        }
    }
}

/// Poll until `shutdown` is raised, refreshing the volume segment early
/// whenever `volume_changed` is raised.
pub fn run_loop(status: &mut Status, sink: Sink, shutdown: &AtomicBool, volume_changed: &AtomicBool) {
    let interval = status.config().poll_interval;
    let mut publisher = Publisher {
        sink,
        failing: false,
    };

    info!(
        "Updating status every {}s on interface {}",
        interval.as_secs(),
        status.config().wireless_interface
    );

    while !shutdown.load(Ordering::Relaxed) {
        status.refresh();
        publisher.publish(status.render());

        let deadline = Instant::now() + interval;
        while wait_until(deadline, shutdown, volume_changed) == Wake::VolumeChanged {
            debug!("Volume change signalled");
            status.refresh_volume();
            publisher.publish(status.render());
        }
    }

    info!("Shutting down");
}

/// Sleep until `deadline`, returning early when either flag is raised.
/// A raised `volume_changed` flag is consumed.
fn wait_until(deadline: Instant, shutdown: &AtomicBool, volume_changed: &AtomicBool) -> Wake {
    loop {
        if shutdown.load(Ordering::Relaxed) {
            return Wake::Shutdown;
        }
        if volume_changed.swap(false, Ordering::Relaxed) {
            return Wake::VolumeChanged;
        }
        let now = Instant::now();
        if now >= deadline {
            return Wake::Deadline;
        }
        thread::sleep(SIGNAL_POLL.min(deadline - now));
    }
}
