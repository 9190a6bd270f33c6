//! Command-line configuration for the showcase binary.

use crate::facade::DEFAULT_PREFS_PATH;
use crate::protection_proxy::DEFAULT_SECRET;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fmt;

/// The patterns the showcase can walk through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    AbstractFactory,
    Decorator,
    Facade,
    FactoryMethod,
    Listener,
    ProtectionProxy,
    Singleton,
    State,
    Strategy,
}

impl Pattern {
    /// Every pattern, in the order the showcase runs them.
    pub const ALL: [Pattern; 9] = [
        Pattern::AbstractFactory,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::FactoryMethod,
        Pattern::Listener,
        Pattern::ProtectionProxy,
        Pattern::Singleton,
        Pattern::State,
        Pattern::Strategy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Listener => "listener",
            Pattern::ProtectionProxy => "protection-proxy",
            Pattern::Singleton => "singleton",
            Pattern::State => "state",
            Pattern::Strategy => "strategy",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "patterns-recipe")]
#[command(about = "Walk through classic design patterns, one log line at a time")]
pub struct ShowcaseConfig {
    /// Patterns to run, comma separated. Runs all of them when omitted.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub patterns: Vec<Pattern>,

    /// Password the protection proxy walkthrough sets before its second read.
    #[arg(long, default_value = DEFAULT_SECRET)]
    #[serde(skip_serializing)]
    pub password: String,

    /// Preferences path reported by the facade walkthrough.
    #[arg(long, default_value = DEFAULT_PREFS_PATH)]
    pub prefs_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            password: DEFAULT_SECRET.to_string(),
            prefs_path: DEFAULT_PREFS_PATH.to_string(),
            verbose: false,
        }
    }
}

impl ShowcaseConfig {
    /// Selected patterns in canonical order, without duplicates.
    pub fn selected(&self) -> Vec<Pattern> {
        if self.patterns.is_empty() {
            return Pattern::ALL.to_vec();
        }
        Pattern::ALL
            .into_iter()
            .filter(|pattern| self.patterns.contains(pattern))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_everything() {
        let config = ShowcaseConfig::try_parse_from(["patterns-recipe"]).unwrap();
        assert_eq!(config.selected(), Pattern::ALL.to_vec());
        assert_eq!(config.password, "secret");
        assert_eq!(config.prefs_path, "/data/default.prefs");
    }

    #[test]
    fn test_selection_is_canonical_order() {
        let config = ShowcaseConfig::try_parse_from([
            "patterns-recipe",
            "--patterns",
            "strategy,state,strategy",
        ])
        .unwrap();
        assert_eq!(config.selected(), vec![Pattern::State, Pattern::Strategy]);
    }

    #[test]
    fn test_value_names_match_pattern_names() {
        for pattern in Pattern::ALL {
            let value = pattern.to_possible_value().unwrap();
            assert_eq!(value.get_name(), pattern.name());
        }
    }

    #[test]
    fn test_config_renders_as_json() {
        let config =
            ShowcaseConfig::try_parse_from(["patterns-recipe", "--patterns", "protection-proxy"])
                .unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["patterns"], serde_json::json!(["protection-proxy"]));
        assert_eq!(json["prefs_path"], "/data/default.prefs");
        assert_eq!(json["verbose"], false);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_unknown_pattern_is_rejected() {
        let result = ShowcaseConfig::try_parse_from(["patterns-recipe", "--patterns", "visitor"]);
        assert!(result.is_err());
    }
}
