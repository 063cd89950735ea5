//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `drumboy.toml` in the working directory, falling back to
//! `~/.drumboy/config.toml`. If neither exists on first run, a commented-out
//! default is generated at the home location so users can discover all
//! options. A config file may replace the entire built-in kit via `[[pads]]`
//! records; a replacement kit must pass the same validation as the built-in
//! one (nine pads, unique keys, unique names).

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::kit::{Kit, KitError, PadDef};
use crate::core::state::DEFAULT_VOLUME;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DrumboyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pads: Vec<PadDef>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding the sample files.
    pub sample_dir: Option<String>,
    /// Gauge value the machine starts at (1..=100).
    pub start_volume: Option<u8>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SAMPLE_DIR: &str = "samples";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub sample_dir: PathBuf,
    pub start_volume: u8,
    /// Skip audio output entirely (CLI `--silent`).
    pub silent: bool,
    pub kit: Kit,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Kit(KitError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Kit(e) => write!(f, "invalid pad kit: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<KitError> for ConfigError {
    fn from(e: KitError) -> Self {
        ConfigError::Kit(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.drumboy/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".drumboy").join("config.toml"))
}

/// Load config from `drumboy.toml` (cwd) or `~/.drumboy/config.toml`.
///
/// If no file exists, generates a commented-out default at the home location
/// and returns `DrumboyConfig::default()`. If a file exists but is
/// malformed, returns `ConfigError::Parse`.
pub fn load_config() -> Result<DrumboyConfig, ConfigError> {
    let local = PathBuf::from("drumboy.toml");
    if local.exists() {
        return load_config_from(&local);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DrumboyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DrumboyConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a specific config file.
pub fn load_config_from(path: &PathBuf) -> Result<DrumboyConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DrumboyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Drumboy Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# sample_dir = "samples"     # Or set DRUMBOY_SAMPLE_DIR env var
# start_volume = 50          # Gauge position at startup, 1..=100

# Supplying any [[pads]] records replaces the entire built-in kit.
# Exactly nine pads are required; keys and names must be unique.
# legacy_code is accepted for kits written against the old numeric
# key-code scheme but is never used for matching.

# [[pads]]
# key = "Q"
# legacy_code = 81
# name = "Open-HH"
# sample = "Dsc_Oh.mp3"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_sample_dir` and `cli_silent` come from CLI flags.
pub fn resolve(
    config: &DrumboyConfig,
    cli_sample_dir: Option<&str>,
    cli_silent: bool,
) -> Result<ResolvedConfig, ConfigError> {
    // Sample dir: CLI → env → config → default
    let sample_dir = cli_sample_dir
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DRUMBOY_SAMPLE_DIR").ok())
        .or_else(|| config.general.sample_dir.clone())
        .unwrap_or_else(|| DEFAULT_SAMPLE_DIR.to_string());

    let start_volume = config
        .general
        .start_volume
        .unwrap_or(DEFAULT_VOLUME)
        .clamp(1, 100);

    // An empty [[pads]] list means "use the built-in kit"; anything else
    // replaces it and must validate.
    let kit = if config.pads.is_empty() {
        Kit::default()
    } else {
        Kit::new(config.pads.clone())?
    };

    Ok(ResolvedConfig {
        sample_dir: PathBuf::from(sample_dir),
        start_volume,
        silent: cli_silent,
        kit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = DrumboyConfig::default();
        assert!(config.pads.is_empty());
        assert!(config.general.sample_dir.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = DrumboyConfig::default();
        let resolved = resolve(&config, None, false).unwrap();
        assert_eq!(resolved.sample_dir, PathBuf::from(DEFAULT_SAMPLE_DIR));
        assert_eq!(resolved.start_volume, DEFAULT_VOLUME);
        assert!(!resolved.silent);
        assert_eq!(resolved.kit, Kit::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DrumboyConfig {
            general: GeneralConfig {
                sample_dir: Some("kits/808".to_string()),
                start_volume: Some(80),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, false).unwrap();
        assert_eq!(resolved.sample_dir, PathBuf::from("kits/808"));
        assert_eq!(resolved.start_volume, 80);
    }

    #[test]
    fn test_resolve_cli_sample_dir_wins() {
        let config = DrumboyConfig {
            general: GeneralConfig {
                sample_dir: Some("from-config".to_string()),
                start_volume: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("from-cli"), true).unwrap();
        assert_eq!(resolved.sample_dir, PathBuf::from("from-cli"));
        assert!(resolved.silent);
    }

    #[test]
    fn test_resolve_clamps_start_volume() {
        let config = DrumboyConfig {
            general: GeneralConfig {
                sample_dir: None,
                start_volume: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, false).unwrap();
        assert_eq!(resolved.start_volume, 1);
    }

    #[test]
    fn test_toml_round_trip_with_full_kit() {
        let mut toml_str = String::from(
            "[general]\nsample_dir = \"kits/acoustic\"\nstart_volume = 65\n",
        );
        for (i, key) in ['Q', 'W', 'E', 'A', 'S', 'D', 'Z', 'X', 'C'].iter().enumerate() {
            toml_str.push_str(&format!(
                "\n[[pads]]\nkey = \"{key}\"\nname = \"Pad-{i}\"\nsample = \"pad{i}.wav\"\n"
            ));
        }
        let config: DrumboyConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.general.sample_dir.as_deref(), Some("kits/acoustic"));
        assert_eq!(config.pads.len(), 9);

        let resolved = resolve(&config, None, false).unwrap();
        assert_eq!(resolved.kit.pad(4).name, "Pad-4");
        assert_eq!(resolved.start_volume, 65);
    }

    #[test]
    fn test_partial_kit_is_rejected() {
        let toml_str = r#"
[[pads]]
key = "Q"
name = "Lonely"
sample = "lonely.wav"
"#;
        let config: DrumboyConfig = toml::from_str(toml_str).unwrap();
        let err = resolve(&config, None, false).unwrap_err();
        assert!(matches!(err, ConfigError::Kit(KitError::WrongPadCount(1))));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
start_volume = 30
"#;
        let config: DrumboyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_volume, Some(30));
        assert!(config.general.sample_dir.is_none());
        assert!(config.pads.is_empty());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drumboy.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[general]\nsample_dir = \"here\"").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.sample_dir.as_deref(), Some("here"));
    }

    #[test]
    fn test_load_config_from_malformed_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drumboy.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "not = [valid").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
