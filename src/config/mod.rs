use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".volunteerhub";
const CONFIG_FILE: &str = "volunteerhub.conf";
const DB_FILE: &str = "volunteerhub.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Number of random volunteers created by `seed`.
    #[serde(default = "default_seed_users")]
    pub seed_users: usize,
}

fn default_seed_users() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            seed_users: default_seed_users(),
        }
    }
}

impl Config {
    /// `~/.volunteerhub`, or `./.volunteerhub` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Absolute paths are kept; bare names land in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() || p.parent().is_some_and(|d| !d.as_os_str().is_empty()) {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load the config file, or defaults when it does not exist yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the config file (unless `is_test`) and return the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Self::load()?
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/vh.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/vh.sqlite");
        assert_eq!(cfg.seed_users, 50);
    }

    #[test]
    fn bare_db_names_resolve_into_config_dir() {
        assert_eq!(
            Config::resolve_db_path("other.sqlite"),
            Config::config_dir().join("other.sqlite")
        );
        assert_eq!(
            Config::resolve_db_path("/var/tmp/vh.sqlite"),
            PathBuf::from("/var/tmp/vh.sqlite")
        );
        assert_eq!(
            Config::resolve_db_path("data/vh.sqlite"),
            PathBuf::from("data/vh.sqlite")
        );
    }

    #[test]
    fn unreadable_yaml_is_a_config_error() {
        let dir = std::env::temp_dir().join(format!("vh-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("broken.conf");
        fs::write(&file, "database: [unterminated").unwrap();

        let err = Config::load_from(&file).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Config);

        fs::remove_dir_all(&dir).ok();
    }
}
