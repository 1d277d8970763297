//! Runtime configuration for the HTTP server.

use std::path::PathBuf;

use crate::data::DEFAULT_QUESTIONS_PATH;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default listen host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "gridiron-iq";

/// Smallest and largest `count` accepted over HTTP.
pub const MIN_QUESTIONS_PER_REQUEST: i64 = 1;
pub const MAX_QUESTIONS_PER_REQUEST: i64 = 10;

/// `count` used when a request does not give one.
pub const DEFAULT_QUESTIONS_PER_REQUEST: i64 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub questions_path: PathBuf,
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
        }
    }
}
