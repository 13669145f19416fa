//! Rule definitions and the registry that turns rule tags into rules.
//!
//! A field declares its rules as a comma-separated tag such as
//! `"required,sku"` or `"gt=0"`. [`RuleRegistry::compile`] resolves each
//! segment once, at validator construction, so unknown names and bad
//! parameters never reach request handling.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use strum::{Display, EnumString};

use super::{FieldKind, FieldValue, RegistrationError};

/// Name of the built-in presence rule.
pub const REQUIRED: &str = "required";

/// Name of the built-in numeric lower-bound rule.
pub const GREATER_THAN: &str = "gt";

/// How a pattern rule decides that a value conforms.
///
/// Parsed from configuration as `exactly-once` or `full-match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum MatchPolicy {
    /// The pattern occurs exactly once anywhere in the value.
    /// `"abc-def-ghi-jkl"` passes, `"abc-def-ghi abc-def-ghi"` does not.
    #[default]
    ExactlyOnce,
    /// The whole value is one occurrence of the pattern.
    FullMatch,
}

/// A regex-backed custom rule, compiled once at registration.
#[derive(Clone)]
pub struct PatternRule {
    name: &'static str,
    source: String,
    regex: Regex,
    policy: MatchPolicy,
}

impl PatternRule {
    fn new(name: &'static str, source: &str, policy: MatchPolicy) -> Result<Self, RegistrationError> {
        let compiled = match policy {
            MatchPolicy::ExactlyOnce => Regex::new(source),
            MatchPolicy::FullMatch => Regex::new(&format!("^(?:{source})$")),
        }
        .map_err(|e| RegistrationError::InvalidPattern {
            rule: name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name,
            source: source.to_string(),
            regex: compiled,
            policy,
        })
    }

    /// The pattern as written at registration, without anchoring.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    fn is_satisfied(&self, value: &str) -> bool {
        match self.policy {
            MatchPolicy::ExactlyOnce => self.regex.find_iter(value).take(2).count() == 1,
            MatchPolicy::FullMatch => self.regex.is_match(value),
        }
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("policy", &self.policy)
            .finish()
    }
}

/// A single resolved constraint on one field.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Text must be non-empty; numbers must be non-zero.
    Required,
    /// Number must be strictly greater than the threshold.
    GreaterThan(f64),
    /// Custom regex rule.
    Pattern(PatternRule),
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => REQUIRED,
            Rule::GreaterThan(_) => GREATER_THAN,
            Rule::Pattern(p) => p.name,
        }
    }

    /// The value substituted for `{param}` in messages.
    pub fn param(&self) -> Option<String> {
        match self {
            Rule::Required => None,
            Rule::GreaterThan(threshold) => Some(threshold.to_string()),
            Rule::Pattern(p) => Some(format!("'{}'", p.source)),
        }
    }

    /// Whether the rule can be applied to a field of this kind.
    pub fn applies_to(&self, kind: FieldKind) -> bool {
        match self {
            Rule::Required => true,
            Rule::GreaterThan(_) => kind == FieldKind::Number,
            Rule::Pattern(_) => kind == FieldKind::Text,
        }
    }

    /// Returns `true` when `value` satisfies the rule. A value of a kind
    /// the rule does not apply to never satisfies it.
    pub fn check(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required, FieldValue::Text(s)) => !s.is_empty(),
            (Rule::Required, FieldValue::Number(n)) => *n != 0.0,
            (Rule::GreaterThan(threshold), FieldValue::Number(n)) => n > threshold,
            (Rule::Pattern(p), FieldValue::Text(s)) => p.is_satisfied(s),
            _ => false,
        }
    }
}

type RuleFactory = Arc<dyn Fn(Option<&str>) -> Result<Rule, RegistrationError> + Send + Sync>;

/// Named rule constructors, looked up by the tags fields declare.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    factories: HashMap<&'static str, RuleFactory>,
}

impl RuleRegistry {
    /// An empty registry. Most callers want [`RuleRegistry::with_builtins`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `required` and `gt`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(REQUIRED, Arc::new(required));
        registry.factories.insert(GREATER_THAN, Arc::new(greater_than));
        registry
    }

    /// Registers a custom pattern rule under `name`.
    ///
    /// The regex is compiled here, once; an invalid pattern or a name that
    /// is already taken is an error.
    pub fn register_pattern(
        &mut self,
        name: &'static str,
        pattern: &str,
        policy: MatchPolicy,
    ) -> Result<(), RegistrationError> {
        if self.contains(name) {
            return Err(RegistrationError::DuplicateRule(name.to_string()));
        }

        let rule = PatternRule::new(name, pattern, policy)?;
        self.factories.insert(
            name,
            Arc::new(move |param: Option<&str>| -> Result<Rule, RegistrationError> {
                reject_param(name, param)?;
                Ok(Rule::Pattern(rule.clone()))
            }),
        );
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Resolves one tag segment, e.g. `"gt=0"`.
    pub fn build(&self, tag: &str) -> Result<Rule, RegistrationError> {
        let (name, param) = match tag.split_once('=') {
            Some((name, param)) => (name.trim(), Some(param)),
            None => (tag.trim(), None),
        };

        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistrationError::UnknownRule(name.to_string()))?;
        factory(param)
    }

    /// Resolves a full field tag, e.g. `"required,sku"`. An empty tag
    /// yields no rules; an empty segment inside a tag is an error.
    pub fn compile(&self, field: &str, tags: &str) -> Result<Vec<Rule>, RegistrationError> {
        if tags.trim().is_empty() {
            return Ok(Vec::new());
        }

        tags.split(',')
            .map(|segment| {
                if segment.trim().is_empty() {
                    Err(RegistrationError::EmptyRule(field.to_string()))
                } else {
                    self.build(segment)
                }
            })
            .collect()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}

fn required(param: Option<&str>) -> Result<Rule, RegistrationError> {
    reject_param(REQUIRED, param)?;
    Ok(Rule::Required)
}

fn greater_than(param: Option<&str>) -> Result<Rule, RegistrationError> {
    let raw = param.ok_or_else(|| RegistrationError::MissingParam(GREATER_THAN.to_string()))?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Rule::GreaterThan)
        .ok_or_else(|| RegistrationError::InvalidParam {
            rule: GREATER_THAN.to_string(),
            param: raw.to_string(),
        })
}

fn reject_param(rule: &str, param: Option<&str>) -> Result<(), RegistrationError> {
    match param {
        Some(param) => Err(RegistrationError::UnexpectedParam {
            rule: rule.to_string(),
            param: param.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const SKU: &str = "[a-z]+-[a-z]+-[a-z]+";

    fn sku_rule(policy: MatchPolicy) -> Rule {
        let mut registry = RuleRegistry::with_builtins();
        registry.register_pattern("sku", SKU, policy).unwrap();
        registry.build("sku").unwrap()
    }

    #[test]
    fn test_required_on_text_and_numbers() {
        assert!(Rule::Required.check(&FieldValue::Text("x")));
        assert!(!Rule::Required.check(&FieldValue::Text("")));
        assert!(Rule::Required.check(&FieldValue::Number(-1.0)));
        assert!(!Rule::Required.check(&FieldValue::Number(0.0)));
    }

    #[test]
    fn test_greater_than_is_strict() {
        let rule = RuleRegistry::with_builtins().build("gt=0").unwrap();
        assert!(rule.check(&FieldValue::Number(0.01)));
        assert!(!rule.check(&FieldValue::Number(0.0)));
        assert!(!rule.check(&FieldValue::Number(-1.0)));
        assert!(!rule.check(&FieldValue::Number(f64::NAN)));
        assert_eq!(rule.param().as_deref(), Some("0"));
    }

    #[test]
    fn test_greater_than_requires_numeric_param() {
        let registry = RuleRegistry::with_builtins();
        assert!(matches!(
            registry.build("gt"),
            Err(RegistrationError::MissingParam(_))
        ));
        assert!(matches!(
            registry.build("gt=abc"),
            Err(RegistrationError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_exactly_once_policy() {
        let rule = sku_rule(MatchPolicy::ExactlyOnce);
        assert!(rule.check(&FieldValue::Text("abs-abs-abs")));
        assert!(rule.check(&FieldValue::Text("abc-def-ghi-jkl")));
        assert!(rule.check(&FieldValue::Text("  abc-def-ghi  ")));
        assert!(!rule.check(&FieldValue::Text("abc")));
        assert!(!rule.check(&FieldValue::Text("abc-def-ghi abc-def-ghi")));
        assert!(!rule.check(&FieldValue::Text("ABC-DEF-GHI")));
    }

    #[test]
    fn test_full_match_policy() {
        let rule = sku_rule(MatchPolicy::FullMatch);
        assert!(rule.check(&FieldValue::Text("abs-abs-abs")));
        assert!(!rule.check(&FieldValue::Text("abc-def-ghi-jkl")));
        assert!(!rule.check(&FieldValue::Text(" abc-def-ghi")));
    }

    #[test]
    fn test_embedded_sku_depends_on_policy() {
        let value = FieldValue::Text("xx abc-def-ghi yy");
        assert!(sku_rule(MatchPolicy::ExactlyOnce).check(&value));
        assert!(!sku_rule(MatchPolicy::FullMatch).check(&value));
    }

    #[test]
    fn test_pattern_param_is_quoted_source() {
        let rule = sku_rule(MatchPolicy::ExactlyOnce);
        assert_eq!(rule.param().as_deref(), Some("'[a-z]+-[a-z]+-[a-z]+'"));
    }

    #[test]
    fn test_pattern_rule_rejects_numbers() {
        let rule = sku_rule(MatchPolicy::ExactlyOnce);
        assert!(!rule.applies_to(FieldKind::Number));
        assert!(!rule.check(&FieldValue::Number(1.0)));
    }

    #[test]
    fn test_registration_errors() {
        let mut registry = RuleRegistry::with_builtins();
        assert!(matches!(
            registry.register_pattern("required", SKU, MatchPolicy::ExactlyOnce),
            Err(RegistrationError::DuplicateRule(_))
        ));
        assert!(matches!(
            registry.register_pattern("broken", "[a-z", MatchPolicy::ExactlyOnce),
            Err(RegistrationError::InvalidPattern { .. })
        ));
        assert!(matches!(
            registry.build("unique"),
            Err(RegistrationError::UnknownRule(name)) if name == "unique"
        ));
        assert!(matches!(
            registry.build("required=1"),
            Err(RegistrationError::UnexpectedParam { .. })
        ));
    }

    #[test]
    fn test_compile_tags() {
        let mut registry = RuleRegistry::with_builtins();
        registry
            .register_pattern("sku", SKU, MatchPolicy::ExactlyOnce)
            .unwrap();

        let rules = registry.compile("sku", "required,sku").unwrap();
        let names: Vec<_> = rules.iter().map(Rule::name).collect();
        assert_eq!(names, vec!["required", "sku"]);

        assert!(registry.compile("description", "").unwrap().is_empty());
        assert!(matches!(
            registry.compile("sku", "required,,sku"),
            Err(RegistrationError::EmptyRule(_))
        ));
    }

    #[test]
    fn test_match_policy_from_config_string() {
        assert_eq!(
            MatchPolicy::from_str("full-match").unwrap(),
            MatchPolicy::FullMatch
        );
        assert_eq!(
            MatchPolicy::from_str("exactly-once").unwrap(),
            MatchPolicy::ExactlyOnce
        );
        assert!(MatchPolicy::from_str("fuzzy").is_err());
        assert_eq!(MatchPolicy::default().to_string(), "exactly-once");
    }
}
