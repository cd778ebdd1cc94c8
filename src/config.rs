use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted defaults for a round; CLI flags override these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub number_of_words: usize,
    pub dictionary: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_words: 20,
            dictionary: "english".to_string(),
        }
    }
}

impl Config {
    /// Apply per-run CLI overrides on top of the loaded defaults. The
    /// merged result is what the app runs with and what gets persisted as
    /// the new defaults.
    pub fn with_overrides(self, number_of_words: Option<usize>, dictionary: Option<String>) -> Self {
        Self {
            number_of_words: number_of_words.unwrap_or(self.number_of_words),
            dictionary: dictionary.unwrap_or(self.dictionary),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "keydash") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("keydash_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
