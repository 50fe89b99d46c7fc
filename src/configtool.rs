//  ____  ____                ____
// |  _ \|  _ \ __ _ ___ ___ / ___| ___ _ __
// | |_) | |_) / _` / __/ __| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/\____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::io::{self, Write};
use std::path::PathBuf;
use std::{fmt, fs};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::passgen::CharSelection;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Dark => Appearance::Light,
            Appearance::Light => Appearance::Dark,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Dark => write!(f, "Oscuro"),
            Appearance::Light => write!(f, "Claro"),
        }
    }
}

/// UI-layer settings, passed explicitly into whatever front end binds the
/// core. Passwords are never stored here.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    pub appearance: Appearance,
    pub default_length: usize,
    pub default_selection: CharSelection,
    pub clipboard_clear_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            appearance: Appearance::Dark,
            default_length: 16,
            default_selection: CharSelection::default(),
            clipboard_clear_secs: 30,
        }
    }
}

impl UiConfig {
    /// Load the saved config, or defaults when none has been written yet.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(&config_path).map_err(ConfigError::IoError)?;
        serde_json::from_str(&config_data).map_err(ConfigError::JsonError)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = get_config_dir().map_err(ConfigError::ConfigDirError)?;
        fs::create_dir_all(&config_dir).map_err(ConfigError::IoError)?;
        let config_file = fs::File::create(Self::config_path()?).map_err(ConfigError::IoError)?;
        serde_json::to_writer_pretty(config_file, &self).map_err(ConfigError::JsonError)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = get_config_dir().map_err(ConfigError::ConfigDirError)?;
        Ok(config_dir.join("config.json"))
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, String> {
    match config_dir() {
        Some(path) => Ok(path.join("rpassgen")),
        None => Err("Could not determine configuration directory".to_string()),
    }
}

/// 提示用户输入
pub fn prompt_input(prompt: &str) -> Result<String, String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(|e| e.to_string())?;
    Ok(input.trim().to_string())
}
