// Rust guideline compliant 2026-10-18

//! Built-in validation rules.
//!
//! Every rule is a total function `(value, label) -> Option<String>`: `None`
//! means the value passes, `Some` carries the user-facing message. Rules never
//! panic, whatever JSON value they are handed.

use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, LazyLock};

/// A bound validation rule.
pub type RuleFn = Arc<dyn Fn(&Value, &str) -> Option<String> + Send + Sync>;

/// Hosts recognised as Path of Building share links.
static POB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)pobb\.in|pastebin\.com|pathofbuilding|poe\.re").expect("valid regex")
});

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static CHARACTER_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex"));

/// Longest character name the game accepts.
pub const CHARACTER_NAME_MAX: usize = 24;

/// Longest league name considered reasonable.
pub const LEAGUE_MAX: usize = 50;

/// Names of the rules that take no parameter.
pub const SIMPLE_RULES: [&str; 6] = [
    "required",
    "url",
    "pobUrl",
    "email",
    "characterName",
    "league",
];

/// Names of the rules that must be bound to a length parameter.
pub const PARAMETERIZED_RULES: [&str; 2] = ["minLength", "maxLength"];

/// What a rule sees when handed a JSON value.
enum Input<'a> {
    /// Null, `false` or the empty string.
    Empty,
    /// A non-empty string.
    Text(&'a str),
    /// Anything else; string rules reject it.
    Other,
}

fn classify(value: &Value) -> Input<'_> {
    match value {
        Value::Null | Value::Bool(false) => Input::Empty,
        Value::String(s) if s.is_empty() => Input::Empty,
        Value::String(s) => Input::Text(s),
        _ => Input::Other,
    }
}

/// Length of a value for the length rules. Only strings (in characters) and
/// arrays have a length; empty values have none.
fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.chars().count()),
        Value::Array(items) if !items.is_empty() => Some(items.len()),
        _ => None,
    }
}

/// Fails when the value is missing, `false`, zero, or blank text.
pub fn required(value: &Value, label: &str) -> Option<String> {
    let blank = match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    blank.then(|| format!("{label} er påkrævet"))
}

/// Builds a rule that fails when a non-empty value is shorter than `min`.
pub fn min_length(min: usize) -> RuleFn {
    Arc::new(move |value: &Value, label: &str| match length_of(value) {
        Some(len) if len < min => Some(format!("{label} skal være mindst {min} tegn")),
        _ => None,
    })
}

/// Builds a rule that fails when a value is longer than `max`.
pub fn max_length(max: usize) -> RuleFn {
    Arc::new(move |value: &Value, label: &str| match length_of(value) {
        Some(len) if len > max => Some(format!("{label} må højst være {max} tegn")),
        _ => None,
    })
}

/// Fails unless an http or https URL is given. Empty values pass.
pub fn url(value: &Value, label: &str) -> Option<String> {
    let text = match classify(value) {
        Input::Empty => return None,
        Input::Text(text) => text,
        Input::Other => return Some(format!("{label} skal være en gyldig URL")),
    };

    match ::url::Url::parse(text) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => None,
        Ok(_) => Some(format!(
            "{label} skal være en gyldig URL (http eller https)"
        )),
        Err(_) => Some(format!("{label} skal være en gyldig URL")),
    }
}

/// Fails unless the value is a URL pointing at a known build-sharing host.
/// Empty values pass.
pub fn pob_url(value: &Value, label: &str) -> Option<String> {
    if let Some(message) = url(value, label) {
        return Some(message);
    }

    match classify(value) {
        Input::Text(text) if !POB_PATTERN.is_match(text) => Some(format!(
            "{label} skal være et gyldigt Path of Building link (pobb.in, pastebin.com, etc.)"
        )),
        _ => None,
    }
}

/// Fails unless the value looks like an email address. Empty values pass.
pub fn email(value: &Value, label: &str) -> Option<String> {
    let valid = match classify(value) {
        Input::Empty => true,
        Input::Text(text) => EMAIL_PATTERN.is_match(text),
        Input::Other => false,
    };
    (!valid).then(|| format!("{label} skal være en gyldig e-mail adresse"))
}

/// Fails unless the value is 1-24 ASCII letters, digits or underscores.
/// Empty values pass.
pub fn character_name(value: &Value, label: &str) -> Option<String> {
    let text = match classify(value) {
        Input::Empty => return None,
        Input::Text(text) => text,
        Input::Other => {
            return Some(format!(
                "{label} må kun indeholde bogstaver, tal og underscore"
            ))
        }
    };

    if !CHARACTER_NAME_PATTERN.is_match(text) {
        return Some(format!(
            "{label} må kun indeholde bogstaver, tal og underscore"
        ));
    }

    // Pattern is ASCII-only, so bytes equal characters here.
    if text.len() > CHARACTER_NAME_MAX {
        return Some(format!("{label} må højst være {CHARACTER_NAME_MAX} tegn"));
    }

    None
}

/// Fails when a league name is unreasonably long. Empty values pass.
pub fn league(value: &Value, label: &str) -> Option<String> {
    match classify(value) {
        Input::Text(text) if text.chars().count() > LEAGUE_MAX => {
            Some(format!("{label} navn er for langt"))
        }
        _ => None,
    }
}

/// Looks up a rule that takes no parameter by name.
#[must_use]
pub fn simple(name: &str) -> Option<RuleFn> {
    match name {
        "required" => Some(shared(required)),
        "url" => Some(shared(url)),
        "pobUrl" => Some(shared(pob_url)),
        "email" => Some(shared(email)),
        "characterName" => Some(shared(character_name)),
        "league" => Some(shared(league)),
        _ => None,
    }
}

/// Wraps a rule function so it can be stored in a rule list.
pub fn shared<F>(rule: F) -> RuleFn
where
    F: Fn(&Value, &str) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(rule)
}

/// Looks up a parameterized rule builder by name and binds it.
///
/// Returns `None` if the name is unknown.
#[must_use]
pub fn bound(name: &str, parameter: usize) -> Option<RuleFn> {
    match name {
        "minLength" => Some(min_length(parameter)),
        "maxLength" => Some(max_length(parameter)),
        _ => None,
    }
}
