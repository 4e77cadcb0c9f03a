//! Now-playing state from the Google Play Music Desktop Player.
//!
//! The player keeps its playback state in a small JSON document; only the
//! fields below are deserialized and everything else is ignored.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{BarError, Result};

/// Largest playback file that is read; the remainder is ignored
pub const MAX_SONG_BUFFER: usize = 4096;
/// Size of the document the player writes when nothing is loaded
const EMPTY_PLAYBACK_SIZE: usize = 380;

#[derive(Debug, Deserialize)]
struct Playback<'a> {
    playing: bool,
    #[serde(borrow)]
    song: TrackInfo<'a>,
    rating: Rating,
    time: Position,
}

#[derive(Debug, Deserialize)]
struct TrackInfo<'a> {
    #[serde(borrow)]
    title: Cow<'a, str>,
    #[serde(borrow)]
    artist: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct Rating {
    liked: bool,
    disliked: bool,
}

/// Milliseconds
#[derive(Debug, Deserialize)]
struct Position {
    current: f64,
    total: f64,
}

/// One now-playing snapshot.
///
/// Text fields borrow from the playback buffer unless they had to be
/// unescaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Song<'a> {
    pub playing: bool,
    pub title: Cow<'a, str>,
    pub artist: Cow<'a, str>,
    pub liked: bool,
    pub disliked: bool,
    pub current_seconds: f64,
    pub total_seconds: f64,
}

impl<'a> From<Playback<'a>> for Song<'a> {
    fn from(playback: Playback<'a>) -> Self {
        Self {
            playing: playback.playing,
            title: playback.song.title,
            artist: playback.song.artist,
            liked: playback.rating.liked,
            disliked: playback.rating.disliked,
            current_seconds: playback.time.current / 1000.0,
            total_seconds: playback.time.total / 1000.0,
        }
    }
}

/// Parse a playback document.
///
/// Returns `Ok(None)` for the placeholder document the player writes when
/// idle. A missing field or a value of the wrong type is a parse error.
pub fn parse_song(document: &str) -> Result<Option<Song<'_>>> {
    if document.len() <= EMPTY_PLAYBACK_SIZE {
        return Ok(None);
    }

    let playback: Playback<'_> = serde_json::from_str(document)
        .map_err(|e| BarError::parse(format!("malformed playback file: {}", e)))?;
    Ok(Some(playback.into()))
}

/// Reader for the player's playback file.
///
/// Owns the read buffer so returned [`Song`]s can borrow from it.
pub struct MediaPlayer {
    path: PathBuf,
    buffer: String,
}

impl MediaPlayer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: String::with_capacity(MAX_SONG_BUFFER),
        }
    }

    /// Re-read the playback file and parse it
    pub fn now_playing(&mut self) -> Result<Option<Song<'_>>> {
        let file = File::open(&self.path).map_err(|e| {
            BarError::metric_collection(format!(
                "cannot open playback file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut bytes = Vec::with_capacity(MAX_SONG_BUFFER);
        file.take(MAX_SONG_BUFFER as u64 - 1).read_to_end(&mut bytes)?;

        self.buffer.clear();
        self.buffer.push_str(&String::from_utf8_lossy(&bytes));
        parse_song(&self.buffer)
    }
}
