use crate::adapters::FixedGeolocation;
use crate::utils::error::{BucketError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "bucket_client")]
#[command(about = "Browse places and manage your travel bucket list")]
pub struct ClientCli {
    #[arg(long, default_value = "http://localhost:3000")]
    pub server_url: String,

    #[arg(long, allow_negative_numbers = true, help = "Your latitude, sorts places by distance")]
    pub lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Your longitude, sorts places by distance")]
    pub lon: Option<f64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ClientCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ClientCommand {
    /// List every place you can pick from
    Places,
    /// Show your bucket list
    List,
    /// Add a place to your bucket list
    Add { id: String },
    /// Remove a place from your bucket list
    Remove { id: String },
}

impl ClientCli {
    pub fn geolocation(&self) -> FixedGeolocation {
        FixedGeolocation::from_parts(self.lat, self.lon)
    }
}

impl Validate for ClientCli {
    fn validate(&self) -> Result<()> {
        validate_url("server_url", &self.server_url)?;

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                validate_range("lat", lat, -90.0, 90.0)?;
                validate_range("lon", lon, -180.0, 180.0)?;
            }
            (None, None) => {}
            _ => {
                return Err(BucketError::ConfigError {
                    message: "--lat and --lon must be given together".to_string(),
                })
            }
        }

        match &self.command {
            ClientCommand::Add { id } | ClientCommand::Remove { id } => {
                validate_non_empty_string("id", id)
            }
            ClientCommand::Places | ClientCommand::List => Ok(()),
        }
    }
}
