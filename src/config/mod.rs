use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_spacing")]
    pub spacing: String,
    #[serde(default = "default_header_style")]
    pub header_style: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub show_rule: bool,
}

fn default_spacing() -> String {
    "  ".to_string()
}
fn default_header_style() -> String {
    "bold".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            spacing: default_spacing(),
            header_style: default_header_style(),
            separator_char: default_separator_char(),
            delimiter: default_delimiter(),
            show_rule: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtable`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtable")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtable.conf")
    }

    /// Resolve an optional `--config` override against the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write a default configuration file at `path`, creating parent dirs.
    pub fn init_at(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file '{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(config)
    }

    /// Single character used to draw the horizontal rule.
    pub fn separator(&self) -> AppResult<char> {
        single_char("separator_char", &self.separator_char)
    }

    /// CSV field delimiter as a byte.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        let c = single_char("delimiter", &self.delimiter)?;
        if !c.is_ascii() {
            return Err(AppError::Config(format!(
                "delimiter must be an ASCII character, got '{c}'"
            )));
        }
        Ok(c as u8)
    }

    fn validate(&self) -> AppResult<()> {
        self.separator()?;
        self.delimiter_byte()?;
        crate::utils::colors::parse_style(&self.header_style)?;
        Ok(())
    }
}

fn single_char(field: &str, value: &str) -> AppResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AppError::Config(format!(
            "{field} must be exactly one character, got '{value}'"
        ))),
    }
}
