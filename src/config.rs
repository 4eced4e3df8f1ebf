use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub theme: ThemeConfig,
    pub features: FeatureConfig,
}

/// Application identity and environment
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub version: String,
    /// "production" or "development"
    pub environment: String,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"; a stored theme choice takes precedence
    pub mode: String,
}

/// Optional feature switches
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FeatureConfig {
    /// Log page-view analytics events
    pub enable_analytics: bool,
    /// Restore the last visited page on startup when launched at the root route
    pub restore_last_page: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                version: env!("CARGO_PKG_VERSION").to_string(),
                environment: "production".to_string(),
            },
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            features: FeatureConfig {
                enable_analytics: false,
                restore_last_page: true,
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "devteam") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to parse config file, using defaults");
                        }
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read config file, using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.app.environment, "production");
        assert!(!config.features.enable_analytics);
        assert!(config.features.restore_last_page);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(
            config.features.restore_last_page,
            deserialized.features.restore_last_page
        );
    }
}
