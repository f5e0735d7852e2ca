//! Rule entries: raw declarations and effective settings
//!
//! A rule is declared either as a bare severity (`"error"`, `2`) or as an
//! array whose first element is the severity and whose remaining elements are
//! rule-specific options (`["error", "windows"]`).

use crate::error::LintrcError;
use crate::result::Result;
use crate::severity::Severity;
use schemars::JsonSchema;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A rule declaration exactly as written in a configuration or preset
///
/// Kept as a raw value so that an invalid severity is reported against the
/// rule that declared it during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RuleEntry(Value);

impl RuleEntry {
    /// Bare severity with no options
    pub fn new(severity: Severity) -> Self {
        Self(Value::String(severity.as_str().to_string()))
    }

    /// Severity followed by rule options
    pub fn with_options(severity: Severity, options: impl IntoIterator<Item = Value>) -> Self {
        let mut items = vec![Value::String(severity.as_str().to_string())];
        items.extend(options);
        Self(Value::Array(items))
    }

    /// Wrap an arbitrary value; validated later by [`RuleEntry::parse`]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Validate the declaration for `rule` and split it into severity and options
    pub fn parse(&self, rule: &str) -> Result<RuleSetting> {
        let invalid = || LintrcError::invalid_severity(rule, self.0.to_string());

        match &self.0 {
            Value::Array(items) => {
                let (first, options) = items.split_first().ok_or_else(invalid)?;
                let severity = Severity::from_value(first).ok_or_else(invalid)?;
                Ok(RuleSetting {
                    severity,
                    options: options.to_vec(),
                })
            }
            other => {
                let severity = Severity::from_value(other).ok_or_else(invalid)?;
                Ok(RuleSetting::new(severity))
            }
        }
    }
}

impl From<Severity> for RuleEntry {
    fn from(severity: Severity) -> Self {
        Self::new(severity)
    }
}

impl From<Value> for RuleEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Effective setting of one rule after resolution
///
/// Serializes back to the declaration form: `"error"` when there are no
/// options, `["error", ...options]` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    severity: Severity,
    options: Vec<Value>,
}

impl RuleSetting {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn with_options(severity: Severity, options: impl IntoIterator<Item = Value>) -> Self {
        Self {
            severity,
            options: options.into_iter().collect(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.severity.is_enabled()
    }

    /// Turn the setting back into a declaration
    pub fn to_entry(&self) -> RuleEntry {
        if self.options.is_empty() {
            RuleEntry::new(self.severity)
        } else {
            RuleEntry::with_options(self.severity, self.options.iter().cloned())
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.severity.serialize(serializer);
        }
        let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
        seq.serialize_element(&self.severity)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

/// Plugin namespace of a rule identifier, if any
///
/// The namespace is everything before the last `/`: `vue/html-indent` belongs
/// to `vue`, `@scope/name/rule` to `@scope/name`. Core rules have no namespace.
pub fn rule_namespace(rule_id: &str) -> Option<&str> {
    rule_id
        .rsplit_once('/')
        .map(|(namespace, _)| namespace)
        .filter(|namespace| !namespace.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_severity() {
        let setting = RuleEntry::from(json!("warn")).parse("no-console").unwrap();
        assert_eq!(setting.severity(), Severity::Warn);
        assert!(setting.options().is_empty());

        let setting = RuleEntry::from(json!(2)).parse("no-console").unwrap();
        assert_eq!(setting.severity(), Severity::Error);
    }

    #[test]
    fn test_parse_with_options() {
        let entry = RuleEntry::from(json!(["error", {"endOfLine": "auto"}]));
        let setting = entry.parse("prettier/prettier").unwrap();
        assert_eq!(setting.severity(), Severity::Error);
        assert_eq!(setting.options(), &[json!({"endOfLine": "auto"})]);
    }

    #[test]
    fn test_parse_single_element_array() {
        let setting = RuleEntry::from(json!(["off"])).parse("semi").unwrap();
        assert_eq!(setting, RuleSetting::new(Severity::Off));
    }

    #[test]
    fn test_parse_invalid() {
        for value in [json!("fatal"), json!(5), json!([]), json!(["loud", 1]), json!(true)] {
            let err = RuleEntry::from(value).parse("semi").unwrap_err();
            assert!(matches!(err, LintrcError::InvalidSeverity { ref rule, .. } if rule == "semi"));
        }
    }

    #[test]
    fn test_setting_serialization() {
        let bare = RuleSetting::new(Severity::Warn);
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!("warn"));

        let with_options = RuleSetting::with_options(Severity::Error, [json!("windows")]);
        assert_eq!(
            serde_json::to_value(&with_options).unwrap(),
            json!(["error", "windows"])
        );
    }

    #[test]
    fn test_setting_to_entry() {
        let setting = RuleSetting::with_options(Severity::Error, [json!("windows")]);
        assert_eq!(setting.to_entry().parse("linebreak-style").unwrap(), setting);
    }

    #[test]
    fn test_rule_namespace() {
        assert_eq!(rule_namespace("no-undef"), None);
        assert_eq!(rule_namespace("vue/html-indent"), Some("vue"));
        assert_eq!(rule_namespace("prettier/prettier"), Some("prettier"));
        assert_eq!(rule_namespace("@scope/rule"), Some("@scope"));
        assert_eq!(rule_namespace("@scope/name/rule"), Some("@scope/name"));
        assert_eq!(rule_namespace("/odd"), None);
    }
}
