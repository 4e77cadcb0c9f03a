use barstat::core::media_player::{parse_song, MediaPlayer, MAX_SONG_BUFFER};
use std::fs;
use tempfile::TempDir;

const PLAYBACK: &str = r#"{
  "playing": true,
  "song": {
    "title": "Hey Jude",
    "artist": "The Beatles",
    "album": "Hey Jude",
    "albumArt": "https://lh3.googleusercontent.com/an-album-art-url-long-enough-to-matter"
  },
  "rating": {
    "liked": false,
    "disliked": true
  },
  "time": {
    "current": 0,
    "total": 431333
  },
  "songLyrics": null,
  "shuffle": "NO_SHUFFLE",
  "repeat": "NO_REPEAT",
  "volume": 55
}
"#;

#[test]
fn test_parse_full_document() {
    let song = parse_song(PLAYBACK).unwrap().unwrap();

    assert!(song.playing);
    assert_eq!(song.title, "Hey Jude");
    assert_eq!(song.artist, "The Beatles");
    assert!(!song.liked);
    assert!(song.disliked);
    assert_eq!(song.current_seconds, 0.0);
    assert_eq!(song.total_seconds, 431.333);
}

#[test]
fn test_idle_document_is_inactive() {
    assert!(parse_song("{}").unwrap().is_none());
    assert!(parse_song(&PLAYBACK[..380]).unwrap().is_none());
}

#[test]
fn test_oversized_file_is_cut() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("playback.json");
    let mut document = PLAYBACK.to_string();
    document.push_str(&" ".repeat(MAX_SONG_BUFFER * 2));
    fs::write(&path, document).unwrap();

    let mut player = MediaPlayer::new(&path);
    let song = player.now_playing().unwrap().unwrap();
    assert_eq!(song.artist, "The Beatles");
}
