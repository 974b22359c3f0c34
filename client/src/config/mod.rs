mod config;
mod first_player_mode;
mod log_config;

pub use config::{get_config_manager, get_config_path, Config};
pub use first_player_mode::FirstPlayerMode;
pub use log_config::LogConfig;
