use serde_json::json;

use crate::generator::{
  config::GeneratorConfig,
  metrics::GenerationStats,
  model::{ModelSpec, PropertySpec},
  schema_converter::SchemaConverter,
};

pub(crate) fn property(fields: serde_json::Value) -> PropertySpec {
  serde_json::from_value(fields).expect("property fixture should deserialize")
}

pub(crate) fn model(name: &str, properties: serde_json::Value) -> ModelSpec {
  serde_json::from_value(json!({ "name": name, "properties": properties })).expect("model fixture should deserialize")
}

pub(crate) fn converter() -> SchemaConverter {
  SchemaConverter::new(GeneratorConfig::default())
}

/// Runs a single property through the converter with a default configuration.
pub(crate) fn convert(fields: serde_json::Value) -> (crate::generator::ddl::ColumnDefinition, GenerationStats) {
  let mut stats = GenerationStats::default();
  let column = converter()
    .convert_property("Order", &property(fields), &mut stats)
    .expect("conversion should succeed")
    .expect("property should not be skipped");
  (column, stats)
}
