use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use barstat::commands;

fn main() -> Result<()> {
    barstat::init_logging();

    let matches = Command::new("barstat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Status line generator for the dwm bar")
        .arg(
            Arg::new("interface")
                .short('i')
                .long("interface")
                .value_name("IFACE")
                .help("Wireless interface to report link quality for")
                .default_value("wlp4s0"),
        )
        .arg(
            Arg::new("interval")
                .short('n')
                .long("interval")
                .value_name("SECS")
                .help("Seconds between updates")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("1"),
        )
        .arg(
            Arg::new("once")
                .short('1')
                .long("once")
                .help("Print a single update and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Write the status line to stdout instead of the root window name")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("now-playing")
                .about("Show the media player's current song")
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("PATH")
                        .help("Playback file to read instead of the player's default"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("now-playing", sub_matches)) => commands::now_playing(sub_matches),
        _ => commands::run(&matches),
    }
}
