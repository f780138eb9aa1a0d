pub mod commands;
pub mod config;
pub mod logging;
pub mod screen;
pub mod shell;

pub use config::{AppConfig, ConfigError, ConfigOverrides};
pub use shell::{Shell, quote};
