//! Persisted connection settings for the remote player

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use reprise_api::Endpoint;

use crate::error::{Result, SdkError};

/// Where the remote player can be reached
///
/// Loaded once at startup; the facade accepts a new endpoint at runtime via
/// [`Player::set_endpoint`](crate::Player::set_endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub address: String,
    pub port: u16,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        let endpoint = Endpoint::default();
        Self {
            address: endpoint.address,
            port: endpoint.port,
        }
    }
}

impl RemoteConfig {
    /// The endpoint these settings describe
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.address.clone(), self.port)
    }

    /// Default on-disk location of the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("reprise").join("config.json"))
    }

    /// Load the configuration from the default location
    ///
    /// A missing file (or a platform without a config directory) yields the
    /// defaults rather than an error; only an unreadable or malformed file
    /// fails.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| SdkError::Config("no configuration directory available".into()))?;
        self.save_to(&path)
    }

    /// Save the configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
