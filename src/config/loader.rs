// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{JobsortError, Result};

/// Prefix shared by every environment override, e.g. `JOBSORT_PORT`.
pub const ENV_PREFIX: &str = "JOBSORT_";

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** apply
/// environment overrides or validate. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load, override from the process environment, and validate.
///
/// - An explicit `path` must exist.
/// - Without one, [`default_config_path`] is used if present, otherwise the
///   built-in defaults.
pub fn load_and_validate(path: Option<&Path>) -> Result<ConfigFile> {
    let raw = match path {
        Some(path) => load_from_path(path)?,
        None => {
            let default_path = default_config_path();
            if default_path.is_file() {
                load_from_path(&default_path)?
            } else {
                debug!(path = ?default_path, "no config file found; using defaults");
                RawConfigFile::default()
            }
        }
    };

    let raw = apply_env_overrides(raw, |key| std::env::var(key).ok())?;
    ConfigFile::try_from(raw)
}

/// Apply `JOBSORT_*` overrides, reading variables through `lookup`.
pub fn apply_env_overrides<F>(mut raw: RawConfigFile, lookup: F) -> Result<RawConfigFile>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(host) = var("HOST") {
        raw.server.host = host;
    }
    if let Some(port) = var("PORT") {
        raw.server.port = parse_number("PORT", &port)?;
    }
    if let Some(secs) = var("REQUEST_TIMEOUT_SECS") {
        raw.server.request_timeout_secs = parse_number("REQUEST_TIMEOUT_SECS", &secs)?;
    }
    if let Some(environment) = var("ENVIRONMENT") {
        raw.service.environment = environment;
    }
    if let Some(region) = var("REGION") {
        raw.service.region = region;
    }
    if let Some(name) = var("IMAGE_NAME") {
        raw.service.image_name = name;
    }
    if let Some(tag) = var("IMAGE_TAG") {
        raw.service.image_tag = tag;
    }

    Ok(raw)
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        JobsortError::ConfigError(format!(
            "{ENV_PREFIX}{name} must be a non-negative integer (got {value:?})"
        ))
    })
}

/// Default config location: `Jobsort.toml` in the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Jobsort.toml")
}
