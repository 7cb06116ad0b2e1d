use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PREFIX: &str = "torcharrow_";

/// Controls which functions get registered and under which names.
///
/// ```toml
/// prefix = "torcharrow_"
/// floordiv = true
/// floormod = true
/// pow = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettings {
    pub prefix: String,
    pub floordiv: bool,
    pub floormod: bool,
    pub pow: bool,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl RegistrySettings {
    pub fn all_enabled() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            floordiv: true,
            floormod: true,
            pow: true,
        }
    }

    pub fn all_disabled() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            floordiv: false,
            floormod: false,
            pow: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: Self = toml::from_str(source)
            .map_err(|e| Error::invalid_config(e.message().to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// The prefix must keep the registered names usable as unquoted SQL
    /// identifiers, which the engine folds to lower case.
    pub fn validate(&self) -> Result<()> {
        if self
            .prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
        {
            return Err(Error::invalid_config(format!(
                "prefix '{}' must not start with a digit",
                self.prefix
            )));
        }
        if let Some(c) = self
            .prefix
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(Error::invalid_config(format!(
                "prefix '{}' contains invalid character '{}'",
                self.prefix, c
            )));
        }
        Ok(())
    }

    pub fn function_name(&self, base: &str) -> String {
        format!("{}{}", self.prefix, base)
    }

    pub fn is_enabled(&self, base: &str) -> bool {
        match base {
            "floordiv" => self.floordiv,
            "floormod" => self.floormod,
            "pow" => self.pow,
            _ => false,
        }
    }
}
