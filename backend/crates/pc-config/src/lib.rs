mod config;
mod error;
mod log_level;
mod logging_config;
mod random_user_config;
mod server_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use random_user_config::RandomUserConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "PC_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".pc";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_STORAGE_PATH: &str = "data/users.csv";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_RANDOM_USER_BASE_URL: &str = "https://randomuser.me";
const DEFAULT_RANDOM_USER_RESULTS: u32 = 10;
const DEFAULT_RANDOM_USER_MAX_RESULTS: u32 = 100;
const DEFAULT_RANDOM_USER_TIMEOUT_SECS: u64 = 10;
/// Upper bound the upstream service accepts for one request
const MAX_RANDOM_USER_RESULTS: u32 = 5000;
const MIN_RANDOM_USER_TIMEOUT_SECS: u64 = 1;
const MAX_RANDOM_USER_TIMEOUT_SECS: u64 = 120;
