use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::CipherIdConfig;
use super::scoring::ScoreWeights;
use super::search::SearchConfig;
use super::thresholds::ThresholdsConfig;
use crate::core::errors::{Error, Result, ResultExt};

/// Name of the configuration file searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".cipherid.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, replacing invalid sections with defaults
pub fn parse_and_validate_config(contents: &str) -> Result<CipherIdConfig> {
    let mut config = toml::from_str::<CipherIdConfig>(contents)?;

    if let Err(e) = config.thresholds.validate() {
        warn!("Invalid thresholds: {}. Using defaults.", e);
        config.thresholds = ThresholdsConfig::default();
    }

    if let Err(e) = config.weights.validate() {
        warn!("Invalid scoring weights: {}. Using defaults.", e);
        config.weights = ScoreWeights::default();
    }

    if let Err(e) = config.search.validate() {
        warn!("Invalid search bounds: {}. Using defaults.", e);
        config.search = SearchConfig::default();
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CipherIdConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(anchor_dictionary_path(config, config_path))
        }
        Err(e) => {
            warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "file not found" is the normal case while walking ancestors
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load an explicitly named config file, failing loudly
pub fn load_config_from_path(path: &Path) -> Result<CipherIdConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("failed to read {}: {}", path.display(), e))
    })?;
    parse_and_validate_config(&contents)
        .map(|config| anchor_dictionary_path(config, path))
        .context(format!("Failed to parse {}", path.display()))
}

/// A relative dictionary path names a file next to the config file
fn anchor_dictionary_path(mut config: CipherIdConfig, config_path: &Path) -> CipherIdConfig {
    let base = config_path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let (Some(dictionary), Some(base)) = (config.dictionary.path.as_mut(), base) {
        if dictionary.is_relative() {
            *dictionary = base.join(&*dictionary);
        }
    }
    config
}

/// Search the working directory and its ancestors for a config file
pub fn load_config() -> CipherIdConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return CipherIdConfig::default();
        }
    };

    load_config_from_ancestors(current, MAX_TRAVERSAL_DEPTH)
}

pub(crate) fn load_config_from_ancestors(start: PathBuf, max_depth: usize) -> CipherIdConfig {
    directory_ancestors(start, max_depth)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                max_depth
            );
            CipherIdConfig::default()
        })
}
