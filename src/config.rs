use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::read_to_string;
use std::io;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "aqi-mock.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {source}")]
    IoError {
        #[from]
        source: io::Error,
    },
    #[error("invalid configuration format: {source}")]
    DecodingError {
        #[from]
        source: toml::de::Error,
    },
    #[error("invalid location definition: {0}")]
    InvalidLocation(String),
}

/// A location the generator produces a reading for. `aqi_bias` shifts the
/// drawn base AQI before it is clamped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LocationDefinition {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub aqi_bias: i32,
}

impl LocationDefinition {
    fn new(name: &str, id: &str, aqi_bias: i32) -> LocationDefinition {
        LocationDefinition {
            name: name.to_string(),
            id: id.to_string(),
            aqi_bias,
        }
    }
}

pub fn default_locations() -> Vec<LocationDefinition> {
    vec![
        LocationDefinition::new("Connaught Place", "cp", 0),
        LocationDefinition::new("India Gate", "ig", -30),
        LocationDefinition::new("Dwarka", "dwarka", 50),
        LocationDefinition::new("Gurgaon", "gurgaon", 40),
    ]
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_locations")]
    pub locations: Vec<LocationDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locations: default_locations(),
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for location in &self.locations {
            if location.id.is_empty() {
                return Err(ConfigError::InvalidLocation(format!(
                    "location '{}' has an empty id",
                    location.name
                )));
            }
            if !ids.insert(location.id.as_str()) {
                return Err(ConfigError::InvalidLocation(format!(
                    "duplicate location id '{}'",
                    location.id
                )));
            }
        }
        Ok(())
    }
}

/// Read the configuration from `path`, using the built in locations if the
/// file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = match read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::info!(
                "No configuration at {}, using default locations",
                path.display()
            );
            return Ok(Config::default());
        }
        Err(error) => return Err(error.into()),
    };
    let config = Config::from_toml_str(&contents)?;
    log::info!(
        "Loaded {} locations from {}",
        config.locations.len(),
        path.display()
    );
    Ok(config)
}
