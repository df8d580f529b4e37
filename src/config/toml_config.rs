use crate::utils::error::{CastError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Optional settings file, e.g.
///
/// ```toml
/// [device]
/// host = "${LIVING_ROOM_TV}"
/// port = 8009
///
/// [session]
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub device: Option<DeviceConfig>,
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub timeout_seconds: Option<u64>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CastError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CastError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CastError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn host(&self) -> Option<&str> {
        self.device.as_ref().and_then(|d| d.host.as_deref())
    }

    pub fn port(&self) -> Option<u16> {
        self.device.as_ref().and_then(|d| d.port)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.session
            .as_ref()
            .and_then(|s| s.timeout_seconds)
            .map(Duration::from_secs)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(host) = self.host() {
            validation::validate_non_empty_string("device.host", host)?;
        }
        if let Some(port) = self.port() {
            validation::validate_port("device.port", port)?;
        }
        if let Some(0) = self.session.as_ref().and_then(|s| s.timeout_seconds) {
            return Err(CastError::invalid_argument(
                "session.timeout_seconds",
                0,
                "Timeout must be at least 1 second",
            ));
        }
        Ok(())
    }
}
