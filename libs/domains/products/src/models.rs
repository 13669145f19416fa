use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::validation::{
    FieldSpec, FieldValue, Locale, MatchPolicy, RegistrationError, RuleRegistry, Schema,
    Translator, Validator,
};

/// Name of the custom SKU rule.
pub const SKU_RULE: &str = "sku";

/// Three lowercase words joined by hyphens, e.g. `abc-def-ghi`.
pub const SKU_PATTERN: &str = "[a-z]+-[a-z]+-[a-z]+";

const SKU_MESSAGE_EN: &str = "{field} must follow this regex format: {param}.";

/// Product entity, as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store, unique for the life of the process
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Stock keeping unit, e.g. `abc-def-ghi`
    pub sku: String,
}

impl Product {
    pub fn from_input(id: u64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            sku: input.sku,
        }
    }
}

/// Product payload for create and update requests.
///
/// Missing and `null` fields decode to empty values and are then reported
/// by validation. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductInput {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Latte")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Frothy milky coffee")]
    pub description: String,
    /// Must be greater than zero
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 2.45)]
    pub price: f64,
    /// Must contain one `[a-z]+-[a-z]+-[a-z]+` sequence
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "abc-def-ghi")]
    pub sku: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Schema for ProductInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "required"),
        FieldSpec::new("description", ""),
        FieldSpec::new("price", "gt=0"),
        FieldSpec::new("sku", "required,sku"),
    ];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Text(&self.name),
            FieldValue::Text(&self.description),
            FieldValue::Number(self.price),
            FieldValue::Text(&self.sku),
        ]
    }
}

pub type ProductValidator = Validator<ProductInput>;

/// Builds the product validator: the built-in rules plus the SKU rule under
/// `policy`, with messages for `locale`.
pub fn product_validator(
    policy: MatchPolicy,
    locale: Locale,
) -> Result<ProductValidator, RegistrationError> {
    let mut registry = RuleRegistry::with_builtins();
    registry.register_pattern(SKU_RULE, SKU_PATTERN, policy)?;

    let mut translator = Translator::for_locale(locale);
    match locale {
        Locale::En => translator.add(SKU_RULE, SKU_MESSAGE_EN),
    };

    Validator::new(&registry, translator)
}
