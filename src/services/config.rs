//! Configuration: CLI flags over environment over config file over defaults

use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::Deserialize;

use super::range::RangeSpec;
use super::terminal;
use crate::render::{ColorMode, Palette, Theme};
use crate::types::{HeatcardError, Result};

/// Optional defaults read from `~/.heatcard/config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub width: Option<usize>,
    pub color: Option<ColorMode>,
    pub range: Option<String>,
}

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new() -> Result<Self> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| HeatcardError::Config("Cannot determine home directory".into()))?;
        Ok(Self {
            path: base_dirs.home_dir().join(".heatcard").join("config.json"),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the config file. A missing file is the default config.
    pub fn load(&self) -> Result<FileConfig> {
        if !self.path.exists() {
            return Ok(FileConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| HeatcardError::Config(format!("{}: {}", self.path.display(), e)))
    }

    /// Like [`load`](Self::load), but a broken file is logged and ignored
    pub fn load_or_default(&self) -> FileConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring config file");
                FileConfig::default()
            }
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub width: Option<usize>,
    pub color: Option<ColorMode>,
    pub range: Option<String>,
}

/// Environment variables that affect rendering
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    pub no_color: Option<String>,
    pub force_color: Option<String>,
    pub width: Option<String>,
}

impl EnvVars {
    pub fn from_env() -> Self {
        Self {
            no_color: std::env::var("NO_COLOR").ok(),
            force_color: std::env::var("FORCE_COLOR").ok(),
            width: std::env::var("HEATCARD_WIDTH").ok(),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub width: usize,
    pub palette: Palette,
    pub range: Option<RangeSpec>,
}

impl Settings {
    pub fn resolve(overrides: &Overrides, env: &EnvVars, file: &FileConfig) -> Result<Self> {
        let forced_width = overrides
            .width
            .or_else(|| env_width(env))
            .or(file.width);
        let width = terminal::resolve_width(forced_width);

        let is_tty = terminal::stdout_is_tty();
        let palette = resolve_palette(overrides, env, file, is_tty);

        // A bad --range is a usage error; a bad config range only falls back
        let range = match overrides.range.as_deref() {
            Some(flag) => Some(flag.parse::<RangeSpec>()?),
            None => file_range(file),
        };

        tracing::debug!(
            width,
            colored = palette.is_colored(),
            theme = ?palette.theme(),
            ?range,
            "resolved settings"
        );
        Ok(Self {
            width,
            palette,
            range,
        })
    }
}

fn env_width(env: &EnvVars) -> Option<usize> {
    let raw = env.width.as_deref()?;
    match raw.trim().parse::<usize>() {
        Ok(width) => Some(width),
        Err(e) => {
            tracing::warn!(value = raw, error = %e, "ignoring HEATCARD_WIDTH");
            None
        }
    }
}

fn file_range(file: &FileConfig) -> Option<RangeSpec> {
    let raw = file.range.as_deref()?;
    match raw.parse::<RangeSpec>() {
        Ok(range) => Some(range),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring range from config file");
            None
        }
    }
}

fn resolve_palette(overrides: &Overrides, env: &EnvVars, file: &FileConfig, is_tty: bool) -> Palette {
    let mode = overrides.color.or(file.color).unwrap_or_default();
    if !mode.enabled(env.no_color.as_deref(), env.force_color.as_deref(), is_tty) {
        return Palette::monochrome();
    }
    // Probing the background only makes sense on a real terminal
    let theme = if is_tty { Theme::detect() } else { Theme::Dark };
    Palette::colored(theme)
}
