//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use corner::{CornerError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for CornerError {
    fn from(err: ConfigError) -> Self {
        CornerError::Io(io::Error::other(err))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (corner/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CornerError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("corner/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "corner", "corner") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CornerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config = parse_config(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(config:?; "Loaded configuration");
    Ok(config)
}

/// Parse TOML text into an [`AppConfig`]
fn parse_config(content: &str) -> Result<AppConfig, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use corner::AnalyzerConfig;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            [parser]
            trace_tokens = true

            [analysis]
            exempt_entry_point = false
            report_unreachable = true
            warnings_as_errors = true
            "#,
        )
        .unwrap();

        assert!(config.parser().trace_tokens());
        assert!(config.analysis().warnings_as_errors());
        assert_eq!(
            *config.analysis().analyzer(),
            AnalyzerConfig {
                exempt_entry_point: false,
                report_unreachable: true,
            }
        );
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = parse_config("[analysis]\nreport_unreachable = false\n").unwrap();

        assert!(config.analysis().analyzer().exempt_entry_point);
        assert!(!config.analysis().analyzer().report_unreachable);
        assert!(!config.analysis().warnings_as_errors());
        assert!(!config.parser().trace_tokens());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(parse_config("[parser]\ntrace_tokens = \"yes\"\n").is_err());
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\nwarnings_as_errors = true").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert!(config.analysis().warnings_as_errors());
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Missing configuration file"));
    }
}
