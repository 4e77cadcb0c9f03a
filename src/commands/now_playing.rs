use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::config::Config;
use crate::core::media_player::{MediaPlayer, Song};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let path = match matches.get_one::<String>("file") {
        Some(file) => PathBuf::from(file),
        None => Config::default()
            .media_player_file
            .context("Could not determine the config directory")?,
    };

    let mut player = MediaPlayer::new(path);
    match player.now_playing()? {
        Some(song) => println!("{}", describe(&song)),
        None => println!("{}", "inactive".dimmed()),
    }
    Ok(())
}

fn describe(song: &Song<'_>) -> String {
    let state = if song.playing {
        "playing".green().bold()
    } else {
        "paused".yellow().bold()
    };
    let rating = if song.liked {
        " (liked)".green().to_string()
    } else if song.disliked {
        " (disliked)".red().to_string()
    } else {
        String::new()
    };

    let title: &str = &song.title;
    let artist: &str = &song.artist;

    format!(
        "{} {} - {} [{}/{}]{}",
        state,
        title.bold(),
        artist.cyan(),
        clock_time(song.current_seconds),
        clock_time(song.total_seconds),
        rating
    )
}

/// `m:ss` for a position in seconds
fn clock_time(seconds: f64) -> String {
    let whole = seconds.max(0.0) as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
