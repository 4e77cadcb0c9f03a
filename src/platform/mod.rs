// Platform-specific code module

pub mod display;
pub mod fs;

pub use display::{set_root_name, Sink};
pub use fs::{statvfs, FsUsage};
