// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{JobsortError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::JobsortError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.server, raw.service))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_server(cfg)?;
    validate_service(cfg)?;
    Ok(())
}

fn validate_server(cfg: &RawConfigFile) -> Result<()> {
    if cfg.server.host.trim().is_empty() {
        return Err(JobsortError::ConfigError(
            "[server].host must not be empty".to_string(),
        ));
    }

    if cfg.server.request_timeout_secs == 0 {
        return Err(JobsortError::ConfigError(
            "[server].request_timeout_secs must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_service(cfg: &RawConfigFile) -> Result<()> {
    let fields = [
        ("environment", &cfg.service.environment),
        ("region", &cfg.service.region),
        ("image_name", &cfg.service.image_name),
        ("image_tag", &cfg.service.image_tag),
    ];

    for (key, value) in fields {
        if value.trim().is_empty() {
            return Err(JobsortError::ConfigError(format!(
                "[service].{key} must not be empty"
            )));
        }
    }

    Ok(())
}
