// Command handlers module
pub mod now_playing;
pub mod run;

// Re-exports for cleaner imports
pub use now_playing::execute as now_playing;
pub use run::execute as run;
