// Core business logic module

pub mod config;
pub mod fields;
pub mod media_player;
pub mod status;
pub mod system_info;

// Re-export commonly used items
pub use config::Config;
pub use media_player::{MediaPlayer, Song};
pub use status::{Metric, Status};
