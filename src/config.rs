use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{flog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Skip reveal/stagger/counter animations and render everything settled.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Default content file, used when no path is given on the command line.
    pub content: Option<String>,
}

impl Config {
    pub fn folio_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".folio"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::folio_dir()?.join("folio.toml"))
    }

    pub fn content_path(&self) -> Option<PathBuf> {
        self.content.as_deref().map(expand_tilde)
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        flog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            flog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        flog_debug!(
            "Config loaded: reduced_motion={}, content={:?}",
            config.reduced_motion,
            config.content
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let folio_dir = Self::folio_dir()?;
        flog_debug!("Config::save folio_dir={}", folio_dir.display());
        if !folio_dir.exists() {
            fs::create_dir_all(&folio_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        flog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.reduced_motion);
        assert!(config.content.is_none());
        assert!(config.content_path().is_none());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/foo/bar");
        assert!(expanded.ends_with("foo/bar"));
        assert!(!expanded.to_string_lossy().contains('~'));

        let absolute = expand_tilde("/absolute/path");
        assert_eq!(absolute, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            reduced_motion: true,
            content: Some("~/portfolio.toml".to_string()),
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert!(parsed.reduced_motion);
        assert_eq!(parsed.content, Some("~/portfolio.toml".to_string()));
    }
}
