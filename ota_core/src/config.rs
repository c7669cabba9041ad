use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::transfer::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_HOST, DEFAULT_PORT};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "otapush";
const APP_NAME: &str = "otapush";
const CONFIG_FILE: &str = "config.json";

/// Where the firmware goes and how it is chunked on the way out.
///
/// Loaded once at startup and immutable for the duration of a transfer.
/// Missing fields in the config file fall back to the defaults, which match
/// the historical client's compiled-in constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OtaConfig {
    /// Destination device address
    pub host: String,
    /// Destination TCP port
    pub port: u16,
    /// Bytes per read/write cycle
    pub chunk_size: usize,
    /// When true, a read failure that is not end-of-file aborts the
    /// transfer; when false, it silently ends the stream the way the
    /// historical client did
    pub strict_reads: bool,
}

impl Default for OtaConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            strict_reads: true,
        }
    }
}

impl OtaConfig {
    /// The joined `host:port` form used for connecting and logging
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the config file path
    fn get_config_path() -> Option<PathBuf> {
        if let Ok(test_path) = std::env::var("OTAPUSH_CONFIG_DIR") {
            return Some(PathBuf::from(test_path).join(CONFIG_FILE));
        }

        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load config from disk or return default
    pub fn load() -> Self {
        let path = match Self::get_config_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
