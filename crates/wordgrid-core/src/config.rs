use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TODO_MARKER: &str = "💡";
const STORE_FILE_NAME: &str = "store.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the key-value store lives. Defaults to the platform data dir.
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Decorative marker prepended to every to-do entry
    #[serde(default)]
    pub todo_marker: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/wordgrid/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("wordgrid/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("wordgrid\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Read a config file, falling back to defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Could not read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn default_store_path() -> Option<PathBuf> {
        dirs::data_dir().map(|data| data.join("wordgrid").join(STORE_FILE_NAME))
    }

    /// Configured store path, else the platform default, else the working directory
    pub fn effective_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .or_else(Self::default_store_path)
            .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
    }

    pub fn effective_todo_marker(&self) -> &str {
        self.todo_marker.as_deref().unwrap_or(DEFAULT_TODO_MARKER)
    }
}
