use crate::tree::TreeConfig;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "sfx";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Terminator appended to every input (must be ASCII)
    #[serde(default)]
    pub terminator: Option<char>,

    /// Lowercase ASCII input before building
    #[serde(default)]
    pub case_insensitive: bool,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Maximum number of inputs processed in parallel
    /// If 0, uses the number of CPU cores
    #[serde(default)]
    pub parallel_inputs: usize,
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            terminator: None,
            case_insensitive: false,
            color: default_color(),
            parallel_inputs: 0,
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Tree construction settings derived from this config
    pub fn tree_config(&self) -> Result<TreeConfig> {
        let terminator = match self.terminator {
            Some(c) if c.is_ascii() => Some(c as u8),
            Some(c) => bail!("Terminator {:?} is not an ASCII character", c),
            None => None,
        };

        Ok(TreeConfig {
            terminator,
            case_insensitive: self.case_insensitive,
        })
    }

    /// Get the effective parallel input count (resolves 0 to CPU count)
    pub fn effective_parallel_inputs(&self) -> usize {
        if self.parallel_inputs == 0 {
            num_cpus()
        } else {
            self.parallel_inputs
        }
    }
}

/// Get the number of CPUs available
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
