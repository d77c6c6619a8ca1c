//! Self-reported focus profile sent alongside a chat message.
//!
//! The profile is kept as a loose JSON object: the client owns its shape and
//! the personalisation rules only ever look at a handful of keys, treating
//! anything unexpected as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client-supplied profile mapping (`distractions`, `productiveHours`,
/// `currentChallenges`, plus whatever else the client sends).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Map<String, Value>);

impl Profile {
    /// An empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a raw profile value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up a value, treating falsy values the same as missing ones.
    pub fn get_truthy(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| is_truthy(v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one value in the profile is truthy.
    pub fn has_truthy_value(&self) -> bool {
        self.0.values().any(is_truthy)
    }
}

impl From<Map<String, Value>> for Profile {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Profile {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// JSON truthiness: `null`, `false`, zero, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Text used when interpolating a profile value into a response.
///
/// Strings are inserted verbatim; anything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn profile(value: Value) -> Profile {
        serde_json::from_value(value).expect("profile object")
    }

    #[test]
    fn truthiness_follows_json_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([""])));
        assert!(is_truthy(&json!({"a": null})));
    }

    #[test]
    fn display_value_keeps_strings_verbatim() {
        assert_eq!(display_value(&json!("social media")), "social media");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn profile_with_only_falsy_values_has_no_truthy_value() {
        let p = profile(json!({
            "distractions": [],
            "productiveHours": "",
            "currentChallenges": null,
        }));
        assert!(!p.is_empty());
        assert!(!p.has_truthy_value());
        assert!(p.get_truthy("productiveHours").is_none());
        assert!(p.get("productiveHours").is_some());
    }

    #[test]
    fn profile_deserializes_from_object_only() {
        assert!(serde_json::from_value::<Profile>(json!("nope")).is_err());
        assert!(serde_json::from_value::<Profile>(json!({})).expect("empty").is_empty());
    }

    #[test]
    fn profile_collects_from_pairs() {
        let p: Profile = [("productiveHours".to_string(), json!("mornings"))]
            .into_iter()
            .collect();
        assert_eq!(p.get_truthy("productiveHours"), Some(&json!("mornings")));
    }
}
