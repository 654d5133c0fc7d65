//! Generator configuration.
//!
//! The command-line generator always runs with `GeneratorConfig::default()`. Build
//! scripts embedding the library may load a JSON document instead; missing keys
//! take their defaults.

use serde::Deserialize;

use crate::common::GenError;
use crate::table::emit::BANNER;

/// Options for [`generate`](crate::generate).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// First line of the artifact. Must be a single `//` comment line.
    pub banner: String,
    /// Read the written file back and compare it with the table before it
    /// replaces the destination.
    pub verify_after_write: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            banner: BANNER.to_owned(),
            verify_after_write: true,
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] for malformed JSON and [`GenError::InvalidConfig`]
    /// if a value fails [`GeneratorConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, GenError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the banner is one comment line.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidConfig`] describing the problem.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.banner.contains(['\n', '\r']) {
            return Err(GenError::InvalidConfig("banner must be a single line".to_owned()));
        }
        if !self.banner.starts_with("//") {
            return Err(GenError::InvalidConfig(format!(
                "banner {:?} must start with `//`",
                self.banner
            )));
        }
        Ok(())
    }
}
