//! Configuration loading via `ortho-config`.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// QingCloud specific configuration derived from environment variables,
/// configuration files, and CLI flags.
#[derive(Clone, Debug, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(prefix = "QINGCLOUD")]
pub struct QingCloudConfig {
    /// Access key ID issued for the QingCloud API. Required; every request
    /// carries it alongside its signature.
    pub access_key_id: String,
    /// Secret access key used to sign requests. Required.
    pub secret_access_key: String,
    /// Zone scoping every request issued by the client. Defaults to `pek3a`.
    #[ortho_config(default = "pek3a".to_owned())]
    pub default_zone: String,
    /// Base URL of the IaaS endpoint.
    #[ortho_config(default = "https://api.qingcloud.com/iaas/".to_owned())]
    pub endpoint: String,
    /// Upper bound in seconds for each asynchronous operation, including its
    /// job and resource-status polling. Defaults to 180.
    #[ortho_config(default = 180)]
    pub op_timeout_secs: u64,
}

/// Metadata for a configuration field, used to generate actionable error messages.
struct FieldMetadata {
    description: &'static str,
    env_var: &'static str,
    toml_key: &'static str,
    section: &'static str,
}

impl FieldMetadata {
    const fn new(
        description: &'static str,
        env_var: &'static str,
        toml_key: &'static str,
        section: &'static str,
    ) -> Self {
        Self {
            description,
            env_var,
            toml_key,
            section,
        }
    }
}

impl QingCloudConfig {
    fn require_field(value: &str, metadata: &FieldMetadata) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::MissingField(format!(
                "missing {}: set {} or add {} to [{}] in qingcloud.toml",
                metadata.description, metadata.env_var, metadata.toml_key, metadata.section
            )));
        }
        Ok(())
    }

    /// Loads configuration using the `ortho-config` derive. Values merge
    /// defaults, configuration files, environment variables, and CLI flags in
    /// that order of precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the loader fails to merge sources.
    pub fn load_from_sources() -> Result<Self, ConfigError> {
        Self::load().map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Loads configuration without attempting to parse CLI arguments. Values
    /// still merge defaults, configuration files, and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the merge fails.
    pub fn load_without_cli_args() -> Result<Self, ConfigError> {
        Self::load_from_iter([std::ffi::OsString::from("qingcloud-compute")])
            .map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Performs semantic validation on required fields. Error messages include
    /// guidance on how to provide missing values via environment variables or
    /// configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when a required field is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_field(
            &self.access_key_id,
            &FieldMetadata::new(
                "QingCloud access key ID",
                "QINGCLOUD_ACCESS_KEY_ID",
                "access_key_id",
                "qingcloud",
            ),
        )?;
        Self::require_field(
            &self.secret_access_key,
            &FieldMetadata::new(
                "QingCloud secret access key",
                "QINGCLOUD_SECRET_ACCESS_KEY",
                "secret_access_key",
                "qingcloud",
            ),
        )?;
        Self::require_field(
            &self.default_zone,
            &FieldMetadata::new("zone", "QINGCLOUD_DEFAULT_ZONE", "default_zone", "qingcloud"),
        )?;
        Self::require_field(
            &self.endpoint,
            &FieldMetadata::new(
                "IaaS endpoint",
                "QINGCLOUD_ENDPOINT",
                "endpoint",
                "qingcloud",
            ),
        )?;
        Ok(())
    }
}

/// Errors raised during configuration loading and validation.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Indicates a required configuration field is empty or missing.
    #[error("missing configuration field: {0}")]
    MissingField(String),
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Parse(String),
}

impl From<ortho_config::OrthoError> for ConfigError {
    fn from(value: ortho_config::OrthoError) -> Self {
        Self::Parse(value.to_string())
    }
}
