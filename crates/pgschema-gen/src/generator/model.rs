use serde::Deserialize;

/// One model property as supplied by the driving generator.
///
/// `minimum`/`maximum` arrive as strings because upstream schema tooling does
/// not commit to a numeric width; the resolver parses them per type family.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
  pub base_name: String,
  pub data_type: String,
  #[serde(default)]
  pub data_format: Option<String>,
  #[serde(default)]
  pub minimum: Option<String>,
  #[serde(default)]
  pub maximum: Option<String>,
  #[serde(default)]
  pub exclusive_minimum: bool,
  #[serde(default)]
  pub exclusive_maximum: bool,
  #[serde(default)]
  pub min_length: Option<i32>,
  #[serde(default)]
  pub max_length: Option<i32>,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub default_value: Option<String>,
  #[serde(default)]
  pub is_enum: bool,
  /// Raw allowable values, in declaration order. Meaningful only when
  /// `is_enum` is set.
  #[serde(default)]
  pub enum_values: Vec<serde_json::Value>,
  #[serde(default)]
  pub description: Option<String>,
  /// Set when the caller already carries an externally-authored schema for
  /// this property; generation is skipped entirely.
  #[serde(default)]
  pub has_schema_override: bool,
}

/// One model as supplied by the driving generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSpec {
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub has_schema_override: bool,
  #[serde(default)]
  pub properties: Vec<PropertySpec>,
}
