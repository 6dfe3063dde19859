//! Configuration builder combining every source.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Builds the effective configuration from files, environment and
/// programmatic overrides.
///
/// # Examples
///
/// ```no_run
/// use vpath::config::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_working_dir(Path::new("/path/to/project"))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files from the current directory and
    /// applies environment overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover project files starting from `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir` instead of `~/.vpath`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `VPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Build and validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The working directory cannot be determined
    /// - A configuration file cannot be read, parsed or validated
    /// - An environment variable holds an invalid value
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir().map_err(|e| Error::InvalidPath {
                    path: PathBuf::from("."),
                    reason: format!("Cannot get current directory: {e}"),
                })?,
            };

            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in &sources {
                ConfigValidator::validate(&source.config)?;
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::TieBreak;
    use crate::wildcard::WildcardEntry;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults_without_sources() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_with_override() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                wildcards: Some(vec![WildcardEntry::new("$DATA", "/abs/data")]),
                tie_break: Some(TieBreak::FirstMatch),
            })
            .build()
            .unwrap();
        assert_eq!(config.registry().get("$DATA"), Some("/abs/data"));
        assert_eq!(config.tie_break, Some(TieBreak::FirstMatch));
    }

    #[test]
    fn test_build_reads_files_in_precedence_order() {
        let config_dir = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(
            config_dir.path().join("config.yaml"),
            "wildcards:\n  - token: $DATA\n    path: /user\n  - token: $HOME\n    path: /home/me\n",
        )
        .unwrap();
        fs::write(
            project.path().join("vpath.yaml"),
            "wildcards:\n  - token: $DATA\n    path: /project\n",
        )
        .unwrap();
        fs::write(project.path().join("vpath.local.yaml"), "tie_break: error-on-ambiguity\n")
            .unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_working_dir(project.path())
            .with_config_dir(config_dir.path())
            .build()
            .unwrap();

        let registry = config.registry();
        assert_eq!(registry.get("$DATA"), Some("/project"));
        assert_eq!(registry.get("$HOME"), Some("/home/me"));
        assert_eq!(config.tie_break, Some(TieBreak::ErrorOnAmbiguity));
    }

    #[test]
    fn test_build_rejects_invalid_file() {
        let project = TempDir::new().unwrap();
        let config_dir = TempDir::new().unwrap();
        fs::write(
            project.path().join("vpath.yaml"),
            "wildcards:\n  - token: \"\"\n    path: /x\n",
        )
        .unwrap();

        let result = ConfigBuilder::new()
            .skip_env()
            .with_working_dir(project.path())
            .with_config_dir(config_dir.path())
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
