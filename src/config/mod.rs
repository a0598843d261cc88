#[cfg(feature = "cli")]
pub mod client;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_IMAGES_DIR: &str = "./images";

/// Fully resolved backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub port: u16,
    pub data_dir: String,
    pub images_dir: String,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: DEFAULT_DATA_DIR.to_string(),
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            json_logs: false,
            verbose: false,
        }
    }
}

impl ServerSettings {
    /// Overlays the values present in a config file.
    pub fn with_file(mut self, file: &TomlConfig) -> Self {
        if let Some(port) = file.port() {
            self.port = port;
        }
        if let Some(data_dir) = file.data_dir() {
            self.data_dir = data_dir.to_string();
        }
        if let Some(images_dir) = file.images_dir() {
            self.images_dir = images_dir.to_string();
        }
        self.json_logs |= file.json_logs();
        self.verbose |= file.verbose();
        self
    }
}

impl ConfigProvider for ServerSettings {
    fn port(&self) -> u16 {
        self.port
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn images_dir(&self) -> &str {
        &self.images_dir
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("server.port", self.port as usize, 1)?;
        validate_path("server.data_dir", &self.data_dir)?;
        validate_path("server.images_dir", &self.images_dir)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "bucket-list")]
#[command(about = "Backend for the travel bucket list")]
pub struct ServerCli {
    #[arg(long, help = "Port to listen on [default: 3000]")]
    pub port: Option<u16>,

    #[arg(long, help = "Directory holding places.json and user-places.json [default: ./data]")]
    pub data_dir: Option<String>,

    #[arg(long, help = "Directory of static images [default: ./images]")]
    pub images_dir: Option<String>,

    #[arg(long, help = "Optional TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ServerCli {
    /// Command line flags win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<ServerSettings> {
        let mut settings = ServerSettings::default();

        if let Some(path) = &self.config {
            settings = settings.with_file(&TomlConfig::from_file(path)?);
        }

        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(data_dir) = &self.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(images_dir) = &self.images_dir {
            settings.images_dir = images_dir.clone();
        }
        settings.json_logs |= self.json_logs;
        settings.verbose |= self.verbose;

        Ok(settings)
    }
}
