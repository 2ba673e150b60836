// src/config/model.rs

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8080
/// request_timeout_secs = 30
///
/// [service]
/// environment = "staging"
/// region = "eu-west-1"
/// image_name = "jobsort"
/// image_tag = "1.4.2"
/// ```
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub service: ServiceSection,
}

/// Validated configuration. Obtain one through `ConfigFile::try_from`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub server: ServerSection,
    pub service: ServiceSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(server: ServerSection, service: ServiceSection) -> Self {
        Self { server, service }
    }
}

/// `[server]` section: where and how the HTTP transport listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Requests still running after this many seconds are answered with 408.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// `[service]` section: deployment metadata reported in logs and `/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSection {
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_image_name")]
    pub image_name: String,

    #[serde(default = "default_image_tag")]
    pub image_tag: String,
}

fn default_environment() -> String {
    "env".to_string()
}

fn default_region() -> String {
    "region".to_string()
}

fn default_image_name() -> String {
    "image-name".to_string()
}

fn default_image_tag() -> String {
    "tag-release".to_string()
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            region: default_region(),
            image_name: default_image_name(),
            image_tag: default_image_tag(),
        }
    }
}
