// UI and formatting module

pub mod formatters;
pub mod status_line;

// Re-export commonly used items for cleaner imports
pub use formatters::{round_percent, truncate_to_boundary, BoundedBuffer};
pub use status_line::{compose, compose_into};
