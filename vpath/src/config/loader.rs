//! Finding and parsing configuration files.
//!
//! Three files can contribute, in increasing precedence: the user file in
//! the config directory, then `vpath.yaml` and `vpath.local.yaml` from the
//! nearest project directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of a project configuration.
pub const PROJECT_CONFIG_FILE: &str = "vpath.yaml";

/// File name of a private, uncommitted project configuration.
pub const LOCAL_CONFIG_FILE: &str = "vpath.local.yaml";

/// File name of the user configuration inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// A parsed configuration file and where it ranks.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// The file it was read from.
    pub path: PathBuf,
    /// 1 for the user file, 2 for `vpath.yaml`, 3 for `vpath.local.yaml`.
    pub precedence: u8,
    /// Its contents.
    pub config: Config,
}

/// Reads configuration files from disk.
///
/// # Examples
///
/// ```no_run
/// use vpath::config::ConfigLoader;
/// use std::path::Path;
///
/// for source in ConfigLoader::load_all(Path::new("."), None).unwrap() {
///     println!("{} (precedence {})", source.path.display(), source.precedence);
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Every configuration file that applies to `working_dir`, lowest
    /// precedence first.
    ///
    /// The user file is read from `config_dir`, or from `~/.vpath` when
    /// that is `None`. Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let user = Self::load_user_config(config_dir)?;
        let mut sources: Vec<_> = user
            .into_iter()
            .chain(Self::discover_project_configs(working_dir)?)
            .collect();
        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration file, if it exists.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match default_config_dir() {
                Some(dir) => dir.join(USER_CONFIG_FILE),
                None => {
                    log::debug!("Home directory unknown; skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.is_file() {
            log::debug!("No user configuration at {}", config_path.display());
            return Ok(None);
        }

        Self::load_file(&config_path).map(|config| {
            Some(ConfigSource {
                path: config_path,
                precedence: 1,
                config,
            })
        })
    }

    /// Project files from the nearest directory at or above `start_dir`
    /// that holds `vpath.yaml` or `vpath.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        for dir in start_dir.ancestors() {
            let found: Vec<_> = [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)]
                .into_iter()
                .map(|(name, precedence)| (dir.join(name), precedence))
                .filter(|(path, _)| path.is_file())
                .collect();

            if found.is_empty() {
                continue;
            }

            return found
                .into_iter()
                .map(|(path, precedence)| {
                    Self::load_file(&path).map(|config| ConfigSource {
                        path,
                        precedence,
                        config,
                    })
                })
                .collect();
        }

        Ok(Vec::new())
    }

    /// Parse one YAML file. The result is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Configuration`] if it is not a valid configuration.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("cannot read configuration file: {e}"),
        })?;

        let config: Config = serde_yaml::from_str(&contents)
            .inspect_err(|e| log::error!("Failed to parse {}: {e}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// The default user configuration directory, `~/.vpath`.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".vpath"))
}
