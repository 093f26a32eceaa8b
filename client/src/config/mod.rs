mod config;
mod log_config;

pub use config::get_config_manager;
pub use log_config::LogConfig;
