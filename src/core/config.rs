//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.toolbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ToolboxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub todo: TodoConfig,
    #[serde(default)]
    pub pomodoro: PomodoroConfig,
    #[serde(default)]
    pub rpg: RpgConfig,
    #[serde(default)]
    pub qr: QrConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PomodoroConfig {
    pub work_minutes: Option<u64>,
    pub short_break_minutes: Option<u64>,
    pub long_break_minutes: Option<u64>,
    pub long_break_every: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RpgConfig {
    pub export_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QrConfig {
    pub image_path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_TODO_FILE_NAME: &str = ".big-dumb-toolbox-todos.json";
pub const DEFAULT_WORK_MINUTES: u64 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u64 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u64 = 15;
pub const DEFAULT_LONG_BREAK_EVERY: u32 = 4;
pub const DEFAULT_QR_FILE_NAME: &str = "qrcode.png";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Phase lengths for the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroDurations {
    pub work: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    /// A long break replaces the short one when the session counter is a
    /// multiple of this.
    pub long_break_every: u32,
}

impl Default for PomodoroDurations {
    fn default() -> Self {
        Self {
            work: minutes(DEFAULT_WORK_MINUTES),
            short_break: minutes(DEFAULT_SHORT_BREAK_MINUTES),
            long_break: minutes(DEFAULT_LONG_BREAK_MINUTES),
            long_break_every: DEFAULT_LONG_BREAK_EVERY,
        }
    }
}

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m.saturating_mul(60))
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_file: Option<PathBuf>,
    pub log_level: log::LevelFilter,
    pub todo_file: PathBuf,
    pub pomodoro: PomodoroDurations,
    pub export_dir: PathBuf,
    pub qr_image_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&ToolboxConfig::default(), |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.toolbox`.
pub fn toolbox_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".toolbox"))
}

/// Returns the path to `~/.toolbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    toolbox_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.toolbox/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ToolboxConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ToolboxConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ToolboxConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ToolboxConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ToolboxConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ToolboxConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Toolbox Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# log_file = "~/.toolbox/toolbox.log"
# log_level = "debug"                 # "error", "warn", "info", "debug", "trace"

# [todo]
# file = "~/.big-dumb-toolbox-todos.json"   # Or set TOOLBOX_TODO_FILE

# [pomodoro]
# work_minutes = 25
# short_break_minutes = 5
# long_break_minutes = 15
# long_break_every = 4                # Sessions between long breaks

# [rpg]
# export_dir = "."                    # Or set TOOLBOX_EXPORT_DIR

# [qr]
# image_path = "/tmp/qrcode.png"      # Defaults to the system temp dir
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &ToolboxConfig) -> ResolvedConfig {
    resolve_with(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an explicit environment lookup.
pub fn resolve_with(config: &ToolboxConfig, env: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    let home = dirs::home_dir();

    // Todo file: env → config → ~/.big-dumb-toolbox-todos.json
    let todo_file = env("TOOLBOX_TODO_FILE")
        .or_else(|| config.todo.file.clone())
        .map(|p| expand_home(&p, home.as_deref()))
        .unwrap_or_else(|| {
            home.clone()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_TODO_FILE_NAME)
        });

    // Export dir: env → config → current directory
    let export_dir = env("TOOLBOX_EXPORT_DIR")
        .or_else(|| config.rpg.export_dir.clone())
        .map(|p| expand_home(&p, home.as_deref()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Log level: env → config → default
    let log_level = env("TOOLBOX_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match level.parse() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
                None
            }
        })
        .unwrap_or(log::LevelFilter::Debug);

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(|p| expand_home(p, home.as_deref()))
        .or_else(|| toolbox_dir().map(|d| d.join("toolbox.log")));

    let qr_image_path = config
        .qr
        .image_path
        .as_deref()
        .map(|p| expand_home(p, home.as_deref()))
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_QR_FILE_NAME));

    let defaults = PomodoroDurations::default();
    let pomodoro = PomodoroDurations {
        work: config.pomodoro.work_minutes.map(minutes).unwrap_or(defaults.work),
        short_break: config
            .pomodoro
            .short_break_minutes
            .map(minutes)
            .unwrap_or(defaults.short_break),
        long_break: config
            .pomodoro
            .long_break_minutes
            .map(minutes)
            .unwrap_or(defaults.long_break),
        long_break_every: config
            .pomodoro
            .long_break_every
            .filter(|n| *n > 0)
            .unwrap_or(defaults.long_break_every),
    };

    ResolvedConfig {
        log_file,
        log_level,
        todo_file,
        pomodoro,
        export_dir,
        qr_image_path,
    }
}

/// Expands a leading `~/` against the home directory.
fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
