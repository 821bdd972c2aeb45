//! Command-line arguments

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::LocpickError;

const DEFAULT_FIELD: &str = "location";

/// Pick locations in the terminal with live autocomplete suggestions
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Site serving the autocomplete endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path of the autocomplete endpoint (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub endpoint: Option<String>,

    /// Name of a location field; repeat for several fields
    #[arg(short, long = "field", value_name = "NAME")]
    pub fields: Vec<String>,

    /// Config file to use instead of ~/.config/locpick/config.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print only the selected labels, one per line
    #[arg(long)]
    pub label_only: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.lookup.base_url = base_url.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.lookup.endpoint = endpoint.clone();
        }
    }

    /// Field names to show, defaulting to a single `location` field
    pub fn field_names(&self) -> Result<Vec<String>, LocpickError> {
        if self.fields.is_empty() {
            return Ok(vec![DEFAULT_FIELD.to_string()]);
        }

        let mut seen = HashSet::new();
        for name in &self.fields {
            if name.trim().is_empty() {
                return Err(LocpickError::InvalidField(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(LocpickError::DuplicateField(name.clone()));
            }
        }
        Ok(self.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("locpick").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.field_names().unwrap(), vec!["location"]);
        assert!(!args.label_only);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_repeated_fields_keep_order() {
        let args = parse(&["--field", "origin", "-f", "home"]);
        assert_eq!(args.field_names().unwrap(), vec!["origin", "home"]);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let args = parse(&["--field", "home", "--field", "home"]);
        assert!(matches!(
            args.field_names(),
            Err(LocpickError::DuplicateField(name)) if name == "home"
        ));
    }

    #[test]
    fn test_blank_field_rejected() {
        let args = parse(&["--field", " "]);
        assert!(matches!(args.field_names(), Err(LocpickError::InvalidField(_))));
    }

    #[test]
    fn test_overrides_applied() {
        let args = parse(&["--base-url", "https://meet.example.org", "--endpoint", "/api/ac/"]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.lookup.base_url, "https://meet.example.org");
        assert_eq!(config.lookup.endpoint, "/api/ac/");
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let args = parse(&[]);
        let mut config = Config::default();
        config.lookup.base_url = "http://geo.test".to_string();
        args.apply(&mut config);

        assert_eq!(config.lookup.base_url, "http://geo.test");
    }
}
