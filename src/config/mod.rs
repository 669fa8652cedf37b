// Sub-modules
mod core;
mod loader;
mod scoring;
mod search;
mod thresholds;

pub use self::core::{CipherIdConfig, DictionaryConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use scoring::{
    default_caesar_weight, default_fallback_weight, default_rail_fence_weight,
    default_vigenere_weight, ScoreWeights,
};
pub use search::SearchConfig;
pub use thresholds::{
    default_caesar_threshold, default_global_confidence, default_rail_fence_threshold,
    default_vigenere_threshold, ThresholdsConfig,
};

/// Default configuration file written by `cipherid init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# cipherid configuration

[thresholds]
# Confidence at or above which the cascade stops early
global_confidence = 0.9
# Advisory per-method thresholds (reported, never gating)
caesar = 0.7
rail_fence = 0.65
vigenere = 0.5

[weights]
caesar = 1.2
rail_fence = 0.8
vigenere = 0.7
default = 1.0

[search]
max_rails = 10
max_key_length = 12
key_length_candidates = 3
max_dictionary_key_length = 12

[dictionary]
# path = "words.json"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, CipherIdConfig::default());
    }
}
