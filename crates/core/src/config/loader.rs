use crate::config::types::{ConfigFile, DailyConfig, LoggingConfig, Profile, ResolvedConfig};
use crate::daily::{DEFAULT_DATE_FORMAT, validate_format};
use crate::markdown::section::target_heading;
use crate::prompts::{DEFAULT_HEADING, PromptSettings};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] toml::ser::Error),

    #[error("failed to write config file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("prompt heading '{0}' is not a markdown heading (e.g. '## Prompts')")]
    InvalidHeading(String),

    #[error("daily note format '{0}' is not a valid date format")]
    InvalidDateFormat(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let cf = Self::load_file(&path)?;

        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        let resolved = Self::resolve_profile(&active, prof, &cf.prompt, &cf.logging)?;
        debug!(path = %path.display(), profile = %active, "config loaded");
        Ok(resolved)
    }

    /// Read and version-check the raw config file.
    pub fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        Ok(cf)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        prompt: &PromptSettings,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let vault_root = expand_path(&prof.vault_root)?;
        let sub = |s: &str| s.replace("{{vault_root}}", &vault_root.to_string_lossy());
        let in_vault = |p: PathBuf| if p.is_absolute() { p } else { vault_root.join(p) };

        let folder = match &prof.daily_folder {
            Some(dir) => in_vault(expand_path(&sub(dir))?),
            None => vault_root.clone(),
        };

        let format = prof.daily_format.clone().unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
        if validate_format(&format).is_err() {
            return Err(ConfigError::InvalidDateFormat(format));
        }

        let template = match &prof.daily_template {
            Some(t) => Some(in_vault(expand_path(&sub(t))?)),
            None => None,
        };

        let prompt = resolve_prompt(prompt)?;

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            vault_root: vault_root.clone(),
            daily: DailyConfig { folder, format, template },
            prompt,
            logging,
        })
    }
}

impl ConfigFile {
    /// Write the config back as TOML.
    ///
    /// Comments and formatting in the original file are not preserved.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let s = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(path.display().to_string(), e))?;
        }
        fs::write(path, s).map_err(|e| ConfigError::WriteError(path.display().to_string(), e))
    }
}

/// An empty heading falls back to the default; anything else must classify.
fn resolve_prompt(prompt: &PromptSettings) -> Result<PromptSettings, ConfigError> {
    let mut prompt = prompt.clone();
    let heading = prompt.heading.trim();
    if heading.is_empty() {
        prompt.heading = DEFAULT_HEADING.to_string();
    } else if target_heading(heading).is_err() {
        return Err(ConfigError::InvalidHeading(prompt.heading));
    } else {
        prompt.heading = heading.to_string();
    }
    Ok(prompt)
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("dailyprompt").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("dailyprompt").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
