use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub http_addr: String,
}

#[derive(Debug, Deserialize)]
pub struct DatasetConfig {
    /// Pre-converted JSON dataset loaded at startup.
    pub json_path: String,
    /// Raw CSV export consumed by the convertor binary.
    pub csv_path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("SALESCAN_CONFIG").unwrap_or_else(|_| "config".to_string());

    // The config file is optional; built-in defaults keep the binary and the
    // test suite runnable without one.
    let settings: Settings = config::Config::builder()
        .set_default("server.http_addr", "127.0.0.1:4180")?
        .set_default("dataset.json_path", "data/sales.json")?
        .set_default("dataset.csv_path", "data/sales.csv")?
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
