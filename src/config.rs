use clap::{ArgAction, Parser, ValueHint};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Host-side options only. Presentation settings (clock format, birthdays,
/// temperature unit, ...) live in the settings store, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    pub log_level: Option<String>, // e.g., "info" | "debug"
    /// Settings store location; defaults under the user config dir.
    pub store_path: Option<PathBuf>,
    /// Tick period in seconds; the face ticks once a minute.
    pub tick_seconds: Option<u64>,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "festivo", about = "Festivo watch-face engine", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub store_path: Option<PathBuf>,
    #[arg(long)]
    pub tick_seconds: Option<u64>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<HostConfig, ConfigError> {
    let cli = Cli::parse();

    // 1) defaults (from `Default` impl)
    let mut cfg = HostConfig::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            merge(&mut cfg, read_yaml(p)?);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        merge(&mut cfg, read_yaml(&p)?);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    if let Some(home) = dirs_next::home_dir() {
        let p = home.join(".config/festivo/config.yaml");
        if p.exists() {
            return Some(p);
        }
    }
    for candidate in &["festivo.yaml", "config/festivo.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() {
            return Some(p);
        }
    }
    None
}

fn read_yaml(path: &Path) -> Result<HostConfig, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: HostConfig = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut HostConfig, src: HostConfig) {
    if src.log_level.is_some() {
        dst.log_level = src.log_level;
    }
    if src.store_path.is_some() {
        dst.store_path = src.store_path;
    }
    if src.tick_seconds.is_some() {
        dst.tick_seconds = src.tick_seconds;
    }
}

fn apply_cli_overrides(cfg: &mut HostConfig, cli: &Cli) {
    if cli.log_level.is_some() {
        cfg.log_level = cli.log_level.clone();
    }
    if cli.store_path.is_some() {
        cfg.store_path = cli.store_path.clone();
    }
    if cli.tick_seconds.is_some() {
        cfg.tick_seconds = cli.tick_seconds;
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &HostConfig) -> Result<(), ConfigError> {
    if let Some(secs) = cfg.tick_seconds {
        if secs == 0 {
            return Err(ConfigError::Validation("tick_seconds must be > 0".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_takes_present_fields_only() {
        let mut dst = HostConfig {
            log_level: Some("info".into()),
            ..Default::default()
        };
        merge(
            &mut dst,
            HostConfig {
                tick_seconds: Some(5),
                ..Default::default()
            },
        );
        assert_eq!(dst.log_level.as_deref(), Some("info"));
        assert_eq!(dst.tick_seconds, Some(5));
    }

    #[test]
    fn zero_tick_is_rejected() {
        let cfg = HostConfig {
            tick_seconds: Some(0),
            ..Default::default()
        };
        assert!(validate(&cfg).is_err());
    }
}
