//! Environment-driven search settings

use thiserror::Error;
use typecover_search::{CoverageMode, DefenseRule, SearchConfig};

/// Selects offensive or defensive coverage (`offense` | `defense`)
pub const MODE_VAR: &str = "TYPECOVER_MODE";

/// Selects the defensive rule (`members` | `every-attacker`)
pub const DEFENSE_RULE_VAR: &str = "TYPECOVER_DEFENSE_RULE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid value {value:?} for {var}, expected one of: {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub mode: CoverageMode,
    pub defense_rule: DefenseRule,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(MODE_VAR) {
            settings.mode = parse_mode(&value).ok_or(SettingsError::InvalidValue {
                var: MODE_VAR,
                value,
                expected: "offense, defense",
            })?;
        }

        if let Some(value) = lookup(DEFENSE_RULE_VAR) {
            settings.defense_rule =
                parse_defense_rule(&value).ok_or(SettingsError::InvalidValue {
                    var: DEFENSE_RULE_VAR,
                    value,
                    expected: "members, every-attacker",
                })?;
        }

        Ok(settings)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            mode: self.mode,
            defense_rule: self.defense_rule,
            seed: None,
        }
    }
}

fn parse_mode(s: &str) -> Option<CoverageMode> {
    match s.trim().to_lowercase().as_str() {
        "offense" => Some(CoverageMode::Offense),
        "defense" => Some(CoverageMode::Defense),
        _ => None,
    }
}

fn parse_defense_rule(s: &str) -> Option<DefenseRule> {
    match s.trim().to_lowercase().as_str() {
        "members" => Some(DefenseRule::Members),
        "every-attacker" => Some(DefenseRule::EveryAttacker),
        _ => None,
    }
}
