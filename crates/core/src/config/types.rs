use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::prompts::PromptSettings;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    pub profiles: BTreeMap<String, Profile>,
    #[serde(default)]
    pub prompt: PromptSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folder holding daily notes; relative paths are under `vault_root`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_folder: Option<String>,
    /// chrono strftime pattern for daily note file names (default `%Y-%m-%d`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_format: Option<String>,
    /// Template used when a daily note has to be created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_template: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Daily note location, fully resolved.
#[derive(Debug, Clone)]
pub struct DailyConfig {
    pub folder: PathBuf,
    pub format: String,
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub daily: DailyConfig,
    pub prompt: PromptSettings,
    pub logging: LoggingConfig,
}
