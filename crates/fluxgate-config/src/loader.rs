use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    ///
    /// The gateway is runnable with nothing but the provider credential in
    /// the environment, so a missing config file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but fails to load
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the provider configuration is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.imagegen.model.is_empty() {
            anyhow::bail!("imagegen.model must not be empty");
        }

        if self.imagegen.timeout_seconds == 0 {
            anyhow::bail!("imagegen.timeout_seconds must be greater than 0");
        }

        Ok(())
    }
}
