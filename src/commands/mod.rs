//! CLI command handlers.

mod classify;
mod config;
mod normalize;

pub use classify::run_classify_command;
pub use config::run_config_show_command;
pub use normalize::run_normalize_command;
