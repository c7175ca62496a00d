//! Configuration storage port

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisting notification settings between runs
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored settings.
    ///
    /// A missing file is not an error; unset keys come back as `None`
    /// and fall through to the built-in defaults at merge time.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write settings back to storage, replacing what was there.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing config file.
    fn path(&self) -> PathBuf;

    /// Whether the backing config file exists.
    fn exists(&self) -> bool;

    /// Create the config file seeded with the stock defaults
    /// (app name "deskpop", notify-rust backend, 5 retries at a
    /// 3-second interval). Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
