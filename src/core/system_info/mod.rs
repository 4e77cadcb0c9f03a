pub mod audio;
pub mod battery;
pub mod clock;
pub mod cpu;
pub mod memory;
pub mod network;
pub mod storage;
pub mod types;

pub use audio::{parse_mixer, query_mixer, MixerReading};
pub use cpu::JiffySample;
pub use memory::MemoryProbe;
pub use network::parse_link_quality;
pub use types::*;
