use std::collections::HashMap;

use strum::{Display, EnumString};

use super::rules::{GREATER_THAN, REQUIRED};

/// Locales with a message catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
}

/// Per-rule message templates for one locale.
///
/// Templates use `{field}` and `{param}` placeholders:
///
/// ```rust
/// use domain_products::validation::Translator;
///
/// let translator = Translator::english();
/// assert_eq!(
///     translator.translate("price", "gt", Some("0")),
///     "price must be greater than 0"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    templates: HashMap<String, String>,
}

impl Translator {
    /// An empty catalogue for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            templates: HashMap::new(),
        }
    }

    /// The built-in catalogue for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
        }
    }

    pub fn english() -> Self {
        let mut translator = Self::new(Locale::En);
        translator
            .add(REQUIRED, "{field} is a required field")
            .add(GREATER_THAN, "{field} must be greater than {param}");
        translator
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Adds or replaces the template for `rule`.
    pub fn add(&mut self, rule: &str, template: impl Into<String>) -> &mut Self {
        self.templates.insert(rule.to_string(), template.into());
        self
    }

    pub fn supports(&self, rule: &str) -> bool {
        self.templates.contains_key(rule)
    }

    /// Renders the message for a failed `rule` on `field`.
    pub fn translate(&self, field: &str, rule: &str, param: Option<&str>) -> String {
        match self.templates.get(rule) {
            Some(template) => template
                .replace("{field}", field)
                .replace("{param}", param.unwrap_or_default()),
            None => format!("{field} failed on the '{rule}' rule"),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_english_builtins() {
        let translator = Translator::english();
        assert_eq!(
            translator.translate("name", "required", None),
            "name is a required field"
        );
        assert_eq!(
            translator.translate("price", "gt", Some("0")),
            "price must be greater than 0"
        );
    }

    #[test]
    fn test_added_template_is_used() {
        let mut translator = Translator::english();
        translator.add("sku", "{field} must follow this regex format: {param}.");

        assert!(translator.supports("sku"));
        assert_eq!(
            translator.translate("sku", "sku", Some("'[a-z]+-[a-z]+-[a-z]+'")),
            "sku must follow this regex format: '[a-z]+-[a-z]+-[a-z]+'."
        );
    }

    #[test]
    fn test_unknown_rule_falls_back() {
        let translator = Translator::new(Locale::En);
        assert!(!translator.supports("required"));
        assert_eq!(
            translator.translate("name", "required", None),
            "name failed on the 'required' rule"
        );
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert!(Locale::from_str("xx").is_err());
        assert_eq!(Translator::default().locale(), Locale::En);
    }
}
