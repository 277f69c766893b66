// Rust guideline compliant 2026-10-18

//! Field-level validation over heterogeneous rule lists.

use super::rules::{self, RuleFn};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// One entry in a field's rule list.
#[derive(Clone)]
pub enum RuleEntry {
    /// A rule from the built-in library, by name (e.g. `required`).
    Named(String),
    /// An inline rule.
    Predicate(RuleFn),
    /// An inline rule whose failure message is replaced by `message`.
    WithMessage {
        /// The rule to evaluate.
        rule: RuleFn,
        /// Message reported instead of the rule's own.
        message: String,
    },
    /// A library rule referenced by kind, optionally bound to a parameter
    /// (e.g. `maxLength` bound to 100).
    Parameterized {
        /// Library rule name.
        kind: String,
        /// Parameter for rules that take one.
        value: Option<Value>,
    },
}

impl RuleEntry {
    /// References a library rule by name.
    pub fn named(name: impl Into<String>) -> Self {
        RuleEntry::Named(name.into())
    }

    /// Wraps an inline rule.
    pub fn predicate<F>(rule: F) -> Self
    where
        F: Fn(&Value, &str) -> Option<String> + Send + Sync + 'static,
    {
        RuleEntry::Predicate(rules::shared(rule))
    }

    /// Wraps a rule and overrides its failure message.
    pub fn with_message(rule: RuleFn, message: impl Into<String>) -> Self {
        RuleEntry::WithMessage {
            rule,
            message: message.into(),
        }
    }

    /// References a library rule by kind, bound to `value`.
    pub fn param(kind: impl Into<String>, value: impl Into<Value>) -> Self {
        RuleEntry::Parameterized {
            kind: kind.into(),
            value: Some(value.into()),
        }
    }

    /// Resolves the entry into a concrete rule plus an optional override
    /// message.
    ///
    /// # Errors
    ///
    /// Returns the configuration issue if the entry names an unknown rule or
    /// carries an unusable parameter.
    pub fn resolve(&self) -> Result<(RuleFn, Option<&str>), RuleConfigIssue> {
        match self {
            RuleEntry::Named(name) => resolve_named(name).map(|rule| (rule, None)),
            RuleEntry::Predicate(rule) => Ok((rule.clone(), None)),
            RuleEntry::WithMessage { rule, message } => Ok((rule.clone(), Some(message.as_str()))),
            RuleEntry::Parameterized { kind, value: None } => {
                resolve_named(kind).map(|rule| (rule, None))
            }
            RuleEntry::Parameterized {
                kind,
                value: Some(value),
            } => {
                if rules::SIMPLE_RULES.contains(&kind.as_str()) {
                    return Err(RuleConfigIssue::UnexpectedParameter(kind.clone()));
                }
                if !rules::PARAMETERIZED_RULES.contains(&kind.as_str()) {
                    return Err(RuleConfigIssue::UnknownRule(kind.clone()));
                }
                let parameter = value
                    .as_u64()
                    .or_else(|| whole_number(value))
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| RuleConfigIssue::InvalidParameter {
                        kind: kind.clone(),
                        value: value.to_string(),
                    })?;
                rules::bound(kind, parameter)
                    .map(|rule| (rule, None))
                    .ok_or_else(|| RuleConfigIssue::UnknownRule(kind.clone()))
            }
        }
    }
}

fn resolve_named(name: &str) -> Result<RuleFn, RuleConfigIssue> {
    rules::simple(name).ok_or_else(|| {
        if rules::PARAMETERIZED_RULES.contains(&name) {
            RuleConfigIssue::MissingParameter(name.to_string())
        } else {
            RuleConfigIssue::UnknownRule(name.to_string())
        }
    })
}

/// Accepts JSON floats such as `3.0` that carry a non-negative whole number.
fn whole_number(value: &Value) -> Option<u64> {
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64)
}

impl From<&str> for RuleEntry {
    fn from(name: &str) -> Self {
        RuleEntry::named(name)
    }
}

impl fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleEntry::Named(name) => f.debug_tuple("Named").field(name).finish(),
            RuleEntry::Predicate(_) => f.write_str("Predicate(..)"),
            RuleEntry::WithMessage { message, .. } => f
                .debug_struct("WithMessage")
                .field("message", message)
                .finish_non_exhaustive(),
            RuleEntry::Parameterized { kind, value } => f
                .debug_struct("Parameterized")
                .field("kind", kind)
                .field("value", value)
                .finish(),
        }
    }
}

/// A rule list entry that cannot be evaluated.
///
/// These are programmer errors in a rule set, not user errors. Evaluation
/// skips such entries; [`super::FormRules::lint`] reports them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleConfigIssue {
    /// No library rule has this name.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
    /// A parameterized rule was referenced without its parameter.
    #[error("rule '{0}' needs a parameter")]
    MissingParameter(String),
    /// A simple rule was given a parameter it does not take.
    #[error("rule '{0}' does not take a parameter")]
    UnexpectedParameter(String),
    /// The parameter is not a non-negative integer.
    #[error("rule '{kind}' got invalid parameter {value}")]
    InvalidParameter {
        /// Rule name.
        kind: String,
        /// Rejected parameter, rendered as JSON.
        value: String,
    },
}

/// Validates one field value against a rule list.
///
/// Every rule is evaluated in order and every failure message is collected;
/// evaluation does not stop at the first failure. Entries that cannot be
/// resolved are skipped with a warning.
///
/// # Arguments
///
/// * `field` - Field key, used as the label when no display name is given
/// * `value` - Field value; missing fields are `Value::Null`
/// * `rules` - Rule list for the field
/// * `display_name` - Label interpolated into messages
///
/// # Returns
///
/// The failure messages, in rule order. Empty when the value passes.
pub fn validate_field(
    field: &str,
    value: &Value,
    rules: &[RuleEntry],
    display_name: Option<&str>,
) -> Vec<String> {
    let label = display_name.unwrap_or(field);

    rules
        .iter()
        .filter_map(|entry| match entry.resolve() {
            Ok((rule, override_message)) => rule(value, label)
                .map(|message| override_message.map_or(message, str::to_string)),
            Err(issue) => {
                tracing::warn!(field, %issue, "skipping misconfigured validation rule");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_scenario() {
        let errors = validate_field("buildName", &json!(""), &["required".into()], Some("Build navn"));
        assert_eq!(errors, vec!["Build navn er påkrævet".to_string()]);
    }

    #[test]
    fn test_parameterized_scenario() {
        let errors = validate_field(
            "buildName",
            &json!("AB"),
            &[RuleEntry::param("maxLength", 100)],
            Some("Build navn"),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_collects_every_failure_in_order() {
        let rules = vec![
            RuleEntry::param("minLength", 5),
            RuleEntry::named("characterName"),
            RuleEntry::predicate(|_, label| Some(format!("{label} always fails"))),
        ];
        let errors = validate_field("name", &json!("a b"), &rules, None);
        assert_eq!(
            errors,
            vec![
                "name skal være mindst 5 tegn".to_string(),
                "name må kun indeholde bogstaver, tal og underscore".to_string(),
                "name always fails".to_string(),
            ]
        );
    }

    #[test]
    fn test_override_message_only_on_failure() {
        let rules = vec![RuleEntry::with_message(
            rules::min_length(3),
            "Skriv lidt mere",
        )];
        assert_eq!(
            validate_field("notes", &json!("ab"), &rules, None),
            vec!["Skriv lidt mere".to_string()]
        );
        assert!(validate_field("notes", &json!("abc"), &rules, None).is_empty());
    }

    #[test]
    fn test_misconfigured_entries_are_skipped() {
        let rules = vec![
            RuleEntry::named("noSuchRule"),
            RuleEntry::named("minLength"),
            RuleEntry::param("required", 3),
            RuleEntry::param("maxLength", "ten"),
            RuleEntry::named("required"),
        ];
        let errors = validate_field("title", &Value::Null, &rules, Some("Titel"));
        assert_eq!(errors, vec!["Titel er påkrævet".to_string()]);
    }

    #[test]
    fn test_parameterized_without_value_resolves_simple_rule() {
        let entry = RuleEntry::Parameterized {
            kind: "required".to_string(),
            value: None,
        };
        assert!(entry.resolve().is_ok());
    }

    #[test]
    fn test_parameterized_without_value_keeps_issue_and_no_message() {
        let required = RuleEntry::Parameterized {
            kind: "required".to_string(),
            value: None,
        };
        let (rule, message) = required.resolve().expect("required resolves");
        assert!(message.is_none());
        assert_eq!(rule(&json!(""), "Titel"), Some("Titel er påkrævet".to_string()));

        let max = RuleEntry::Parameterized {
            kind: "maxLength".to_string(),
            value: None,
        };
        assert_eq!(
            max.resolve().err(),
            Some(RuleConfigIssue::MissingParameter("maxLength".to_string()))
        );
    }

    #[test]
    fn test_whole_number_float_parameter() {
        let errors = validate_field(
            "buildName",
            &json!("abcd"),
            &[RuleEntry::param("maxLength", 3.0)],
            Some("Build navn"),
        );
        assert_eq!(errors, vec!["Build navn må højst være 3 tegn".to_string()]);

        assert_eq!(
            RuleEntry::param("minLength", 3.5).resolve().err(),
            Some(RuleConfigIssue::InvalidParameter {
                kind: "minLength".to_string(),
                value: "3.5".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_reports_issue_kind() {
        assert_eq!(
            RuleEntry::named("minLength").resolve().err(),
            Some(RuleConfigIssue::MissingParameter("minLength".to_string()))
        );
        assert_eq!(
            RuleEntry::param("maxLength", -1).resolve().err(),
            Some(RuleConfigIssue::InvalidParameter {
                kind: "maxLength".to_string(),
                value: "-1".to_string(),
            })
        );
    }
}
