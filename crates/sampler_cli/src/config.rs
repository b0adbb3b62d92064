//! CLI configuration.
//!
//! Loaded from a TOML file (default `invcdf.toml`), then overridden by
//! `INVCDF_*` environment variables, then by command-line flags.
//!
//! ```toml
//! steps = 16
//! seed = 42
//! format = "table"
//! log_level = "info"
//! strict_spacing = false
//! ```

use std::path::Path;

use sampler_core::sampling::LoaderConfig;
use serde::Deserialize;

use crate::output::OutputFormat;
use crate::{CliError, Result};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Number of u-steps between 0 and 1 for grid output
    pub steps: usize,
    /// Seed for the sampling RNG
    pub seed: u64,
    /// Output format
    pub format: OutputFormat,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Reject CDF tables with uneven x spacing
    pub strict_spacing: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            steps: 16,
            seed: 42,
            format: OutputFormat::Table,
            log_level: "info".to_string(),
            strict_spacing: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load from `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `INVCDF_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment or test fixture).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(steps) = lookup("INVCDF_STEPS") {
            self.steps = parse_override("INVCDF_STEPS", &steps)?;
        }
        if let Some(seed) = lookup("INVCDF_SEED") {
            self.seed = parse_override("INVCDF_SEED", &seed)?;
        }
        if let Some(format) = lookup("INVCDF_FORMAT") {
            self.format = format.parse()?;
        }
        if let Some(log_level) = lookup("INVCDF_LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Some(strict) = lookup("INVCDF_STRICT_SPACING") {
            self.strict_spacing = parse_override("INVCDF_STRICT_SPACING", &strict)?;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.steps == 0 {
            errors.push("steps must be positive".to_string());
        }
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Config(errors.join("; ")))
        }
    }

    /// Table loading settings derived from this configuration.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            strict_spacing: self.strict_spacing,
            ..LoaderConfig::default()
        }
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("{} has invalid value '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sampler_cli_{}_{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.steps, 16);
        assert_eq!(config.seed, 42);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let path = write_config("partial", "steps = 8\nformat = \"csv\"\n");
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.steps, 8);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.seed, 42);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let path = write_config("unknown", "stepz = 8\n");
        assert!(matches!(CliConfig::load(&path), Err(CliError::Config(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("sampler_cli_no_such_config.toml");
        assert_eq!(CliConfig::load_or_default(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("INVCDF_STEPS", "4"),
            ("INVCDF_SEED", "7"),
            ("INVCDF_FORMAT", "JSON"),
            ("INVCDF_STRICT_SPACING", "true"),
        ]
        .into_iter()
        .collect();
        let config = CliConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.steps, 4);
        assert_eq!(config.seed, 7);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.loader_config().strict_spacing);
    }

    #[test]
    fn test_invalid_override() {
        let result = CliConfig::default().with_overrides(|key| {
            (key == "INVCDF_STEPS").then(|| "many".to_string())
        });
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("INVCDF_STEPS")));
    }

    #[test]
    fn test_validate() {
        let config = CliConfig {
            steps: 0,
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };
        match config.validate() {
            Err(CliError::Config(msg)) => {
                assert!(msg.contains("steps"));
                assert!(msg.contains("loud"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
