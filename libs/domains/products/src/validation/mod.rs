//! Declarative field validation with translated messages.
//!
//! A record type describes its fields through [`Schema`]: a static list of
//! field names with rule tags, plus a way to read the field values in the
//! same order. A [`Validator`] resolves every tag against a
//! [`RuleRegistry`] and checks that a [`Translator`] has a message for each
//! rule. All of that happens in [`Validator::new`]; a validator that was
//! built successfully can only report field violations.
//!
//! ```rust
//! use domain_products::validation::{
//!     FieldSpec, FieldValue, RuleRegistry, Schema, Translator, Validator,
//! };
//!
//! #[derive(Default)]
//! struct Coffee {
//!     name: String,
//!     price: f64,
//! }
//!
//! impl Schema for Coffee {
//!     const FIELDS: &'static [FieldSpec] = &[
//!         FieldSpec::new("name", "required"),
//!         FieldSpec::new("price", "gt=0"),
//!     ];
//!
//!     fn values(&self) -> Vec<FieldValue<'_>> {
//!         vec![FieldValue::Text(&self.name), FieldValue::Number(self.price)]
//!     }
//! }
//!
//! let validator =
//!     Validator::<Coffee>::new(&RuleRegistry::with_builtins(), Translator::english()).unwrap();
//!
//! let errors = validator.validate(&Coffee::default()).unwrap_err();
//! assert_eq!(
//!     errors.errors(),
//!     vec!["name is a required field", "price must be greater than 0"]
//! );
//! ```

mod rules;
mod translator;

pub use rules::{MatchPolicy, PatternRule, Rule, RuleRegistry, GREATER_THAN, REQUIRED};
pub use translator::{Locale, Translator};

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use strum::Display;
use thiserror::Error;

/// The shape of a field value as far as rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
}

/// A borrowed view of one field of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Number(_) => FieldKind::Number,
        }
    }

    fn to_json(self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::from(s),
            FieldValue::Number(n) => serde_json::Value::from(n),
        }
    }
}

/// A field name and its rule tag, e.g. `FieldSpec::new("price", "gt=0")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, rules: &'static str) -> Self {
        Self { name, rules }
    }
}

/// A record that can be validated.
pub trait Schema {
    /// Field declarations, in the order [`Schema::values`] yields them.
    const FIELDS: &'static [FieldSpec];

    /// Current field values, one per entry of [`Schema::FIELDS`].
    fn values(&self) -> Vec<FieldValue<'_>>;
}

/// Raised while building a [`Validator`]. These indicate a programming or
/// configuration mistake and are fatal at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    #[error("unknown validation rule '{0}'")]
    UnknownRule(String),

    #[error("rule '{0}' requires a parameter")]
    MissingParam(String),

    #[error("rule '{rule}' has an invalid parameter '{param}'")]
    InvalidParam { rule: String, param: String },

    #[error("rule '{rule}' does not take a parameter (got '{param}')")]
    UnexpectedParam { rule: String, param: String },

    #[error("field '{0}' has an empty rule in its tag")]
    EmptyRule(String),

    #[error("rule '{0}' is already registered")]
    DuplicateRule(String),

    #[error("rule '{rule}' has an invalid pattern: {reason}")]
    InvalidPattern { rule: String, reason: String },

    #[error("rule '{rule}' cannot be applied to {kind} field '{field}'")]
    KindMismatch {
        field: String,
        rule: String,
        kind: FieldKind,
    },

    #[error("no '{locale}' message registered for rule '{rule}'")]
    MissingTranslation { rule: String, locale: Locale },

    #[error("schema declares {declared} fields but yields {provided} values")]
    FieldCountMismatch { declared: usize, provided: usize },
}

/// One field that failed one rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    pub value: serde_json::Value,
    pub message: String,
}

/// Every violation found in one record, in field declaration order.
/// At most one entry per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// The translated messages, one per violation.
    pub fn errors(&self) -> Vec<String> {
        self.0.iter().map(|e| e.message.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<&ValidationErrors> for validator::ValidationErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = validator::ValidationErrors::new();
        for error in errors {
            let mut entry = validator::ValidationError::new(error.rule);
            entry.message = Some(Cow::Owned(error.message.clone()));
            if let Some(param) = &error.param {
                entry.add_param(Cow::Borrowed("param"), param);
            }
            entry.add_param(Cow::Borrowed("value"), &error.value);
            out.add(error.field, entry);
        }
        out
    }
}

#[derive(Debug, Clone)]
struct CompiledField {
    name: &'static str,
    rules: Vec<Rule>,
}

/// Validates records of type `T` against their declared rules.
pub struct Validator<T> {
    fields: Vec<CompiledField>,
    translator: Translator,
    _record: PhantomData<fn(&T)>,
}

impl<T: Schema> Validator<T> {
    /// Resolves every rule tag in `T::FIELDS`.
    ///
    /// Field kinds are read from `T::default()`, so a rule applied to the
    /// wrong kind of field is rejected here rather than at request time.
    pub fn new(registry: &RuleRegistry, translator: Translator) -> Result<Self, RegistrationError>
    where
        T: Default,
    {
        let probe = T::default();
        let kinds: Vec<FieldKind> = probe.values().iter().map(FieldValue::kind).collect();
        if kinds.len() != T::FIELDS.len() {
            return Err(RegistrationError::FieldCountMismatch {
                declared: T::FIELDS.len(),
                provided: kinds.len(),
            });
        }

        let mut fields = Vec::with_capacity(T::FIELDS.len());
        for (spec, kind) in T::FIELDS.iter().zip(kinds) {
            let rules = registry.compile(spec.name, spec.rules)?;
            for rule in &rules {
                if !rule.applies_to(kind) {
                    return Err(RegistrationError::KindMismatch {
                        field: spec.name.to_string(),
                        rule: rule.name().to_string(),
                        kind,
                    });
                }
                if !translator.supports(rule.name()) {
                    return Err(RegistrationError::MissingTranslation {
                        rule: rule.name().to_string(),
                        locale: translator.locale(),
                    });
                }
            }
            fields.push(CompiledField {
                name: spec.name,
                rules,
            });
        }

        Ok(Self {
            fields,
            translator,
            _record: PhantomData,
        })
    }

    /// Checks every field; a field stops at its first failing rule.
    pub fn validate(&self, record: &T) -> Result<(), ValidationErrors> {
        let values = record.values();
        debug_assert_eq!(values.len(), self.fields.len());

        let mut errors = ValidationErrors::default();
        for (field, value) in self.fields.iter().zip(values) {
            let Some(rule) = field.rules.iter().find(|rule| !rule.check(&value)) else {
                continue;
            };

            let param = rule.param();
            let message = self
                .translator
                .translate(field.name, rule.name(), param.as_deref());
            errors.push(FieldError {
                field: field.name,
                rule: rule.name(),
                param,
                value: value.to_json(),
                message,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("fields", &self.fields)
            .field("locale", &self.translator.locale())
            .finish()
    }
}
