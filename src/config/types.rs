// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_ENDPOINT: &str = "/meetup/api/autocomplete/";

/// Lookup service configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Scheme and host of the site serving the autocomplete endpoint
    pub base_url: String,
    /// Path of the autocomplete endpoint on that site
    pub endpoint: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Autocomplete behaviour configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Queries with fewer characters (after trimming) never reach the server
    pub min_query_chars: usize,
    /// Quiet period after the last keystroke before a lookup is sent
    pub debounce_ms: u64,
    /// Delay between losing focus and closing the dropdown
    pub blur_grace_ms: u64,
    /// Rows shown before the dropdown is cut off
    pub max_visible_rows: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            min_query_chars: 3,
            debounce_ms: 300,
            blur_grace_ms: 200,
            max_visible_rows: 8,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.autocomplete.min_query_chars, 3);
        assert_eq!(config.autocomplete.debounce_ms, 300);
        assert_eq!(config.autocomplete.blur_grace_ms, 200);
        assert_eq!(config.lookup.endpoint, "/meetup/api/autocomplete/");
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
[lookup]
base_url = "https://meet.example.org"
endpoint = "/api/places/"

[autocomplete]
min_query_chars = 2
debounce_ms = 150
blur_grace_ms = 100
max_visible_rows = 5
"#,
        )
        .unwrap();

        assert_eq!(config.lookup.base_url, "https://meet.example.org");
        assert_eq!(config.lookup.endpoint, "/api/places/");
        assert_eq!(config.autocomplete.min_query_chars, 2);
        assert_eq!(config.autocomplete.debounce_ms, 150);
        assert_eq!(config.autocomplete.blur_grace_ms, 100);
        assert_eq!(config.autocomplete.max_visible_rows, 5);
    }

    #[test]
    fn test_wrong_type_is_error() {
        let result: Result<Config, _> = toml::from_str("[autocomplete]\ndebounce_ms = \"fast\"\n");
        assert!(result.is_err());
    }

    // Any subset of fields parses, and every missing field takes its default
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_debounce in prop::bool::ANY,
            include_grace in prop::bool::ANY,
            include_base_url in prop::bool::ANY,
            debounce in 0u64..5000,
        ) {
            let mut toml_content = String::from("[autocomplete]\n");
            if include_debounce {
                toml_content.push_str(&format!("debounce_ms = {}\n", debounce));
            }
            if include_grace {
                toml_content.push_str("blur_grace_ms = 250\n");
            }
            toml_content.push_str("[lookup]\n");
            if include_base_url {
                toml_content.push_str("base_url = \"http://localhost:9000\"\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            let defaults = Config::default();
            prop_assert_eq!(
                config.autocomplete.debounce_ms,
                if include_debounce { debounce } else { defaults.autocomplete.debounce_ms }
            );
            prop_assert_eq!(
                config.autocomplete.blur_grace_ms,
                if include_grace { 250 } else { defaults.autocomplete.blur_grace_ms }
            );
            prop_assert_eq!(config.autocomplete.min_query_chars, defaults.autocomplete.min_query_chars);
            prop_assert_eq!(config.lookup.endpoint, defaults.lookup.endpoint);
        }
    }
}
