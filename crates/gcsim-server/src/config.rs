use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server settings, loadable from TOML. Missing keys take their defaults.
///
/// ```toml
/// bind_addr = "0.0.0.0:4443"
/// initial_buckets = ["sample-bucket"]
/// max_upload_size = 1048576
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Buckets created before the server starts accepting requests.
    pub initial_buckets: Vec<String>,
    /// Largest accepted upload body, in bytes.
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4443)),
            initial_buckets: Vec::new(),
            max_upload_size: 64 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
