//! Runtime options validation for dynamic configuration paths.
//!
//! Statically-typed configuration is checked by the compiler; this module
//! covers the remaining dynamic paths (JSON-valued option maps) with the
//! same fail-fast contract: a missing required key, an unknown provided
//! key, or an unknown rule name is rejected immediately, by name, instead
//! of being silently defaulted or ignored.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Missing required option '{0}'")]
    MissingKey(String),

    #[error("Unknown option '{0}'")]
    UnknownKey(String),

    #[error("Unsupported rule '{rule}' for option '{key}'")]
    UnsupportedRule { key: String, rule: String },
}

pub type OptionsResult<T> = std::result::Result<T, OptionsError>;

/// A validation rule for one option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
}

/// The rule set an option map is validated against.
#[derive(Debug, Clone, Default)]
pub struct OptionRules {
    rules: Vec<(String, Rule)>,
}

impl OptionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as required.
    pub fn required(mut self, key: impl Into<String>) -> Self {
        self.rules.push((key.into(), Rule::Required));
        self
    }

    /// Build a rule set from dynamic `(key, rule-name)` pairs, rejecting
    /// rule names this module does not know.
    pub fn from_pairs<'a, I>(pairs: I) -> OptionsResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rules = Self::new();
        for (key, rule) in pairs {
            match rule {
                "required" => rules = rules.required(key),
                other => {
                    return Err(OptionsError::UnsupportedRule {
                        key: key.to_string(),
                        rule: other.to_string(),
                    })
                }
            }
        }
        Ok(rules)
    }

    fn covers(&self, key: &str) -> bool {
        self.rules.iter().any(|(name, _)| name == key)
    }
}

/// An option map that passed validation; `get` only answers for keys the
/// rule set covers.
#[derive(Debug, Clone)]
pub struct ValidatedOptions {
    values: Map<String, Value>,
}

impl ValidatedOptions {
    pub fn get(&self, key: &str) -> OptionsResult<&Value> {
        self.values
            .get(key)
            .ok_or_else(|| OptionsError::UnknownKey(key.to_string()))
    }
}

/// Validate `provided` against `rules`: exact key coverage, both ways.
pub fn validate(provided: &Map<String, Value>, rules: &OptionRules) -> OptionsResult<ValidatedOptions> {
    for key in provided.keys() {
        if !rules.covers(key) {
            return Err(OptionsError::UnknownKey(key.clone()));
        }
    }
    for (key, rule) in &rules.rules {
        match rule {
            Rule::Required => {
                if !provided.contains_key(key) {
                    return Err(OptionsError::MissingKey(key.clone()));
                }
            }
        }
    }
    Ok(ValidatedOptions {
        values: provided.clone(),
    })
}
