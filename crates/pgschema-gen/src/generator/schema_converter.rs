use indexmap::IndexMap;
use strum::EnumString;

use super::{
  config::{GeneratorConfig, IdentifierNamingConvention},
  ddl::{ColumnDefinition, GeneratedSchema, SqlType, TableDefinition, TableSchema, TypeArgument},
  defaults::classify_default,
  errors::IdentifierError,
  fitting::{fit_integer_type, fit_string_type},
  metrics::{GenerationStats, GenerationWarning},
  model::{ModelSpec, PropertySpec},
  naming::identifiers::{to_column_name, to_table_name},
};
use crate::utils::sanitize_comment;

/// Hard cap on distinct ENUM elements for a single column.
pub(crate) const ENUM_MAX_ELEMENTS: usize = 65_535;

/// The type categories the resolver dispatches on, parsed case-insensitively
/// from the caller-declared data type. Anything that fails to parse is an
/// unknown type (typically an object reference) and maps to TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum TypeCategory {
  Boolean,
  SmallInt,
  Integer,
  BigInt,
  Decimal,
  Bytea,
  Text,
  Varchar,
  Date,
  Timestamp,
  Json,
}

/// Maps model and property records to table and column definitions.
///
/// The converter is pure with respect to its inputs; warnings are the only
/// side channel and are recorded into the `GenerationStats` handed to each
/// call, so models and properties can be processed in any order.
pub(crate) struct SchemaConverter {
  config: GeneratorConfig,
}

impl SchemaConverter {
  pub(crate) fn new(config: GeneratorConfig) -> Self {
    Self { config }
  }

  fn convention(&self) -> IdentifierNamingConvention {
    self.config.identifier_naming_convention()
  }

  /// Converts every model, skipping entities that carry their own schema and
  /// downgrading per-entity failures to warnings.
  pub(crate) fn convert_models(&self, models: &[ModelSpec], stats: &mut GenerationStats) -> GeneratedSchema {
    let mut tables = IndexMap::new();

    for model in models {
      let table = match self.convert_model(model, stats) {
        Ok(Some(table)) => table,
        Ok(None) => continue,
        Err(error) => {
          stats.record_warning(GenerationWarning::ModelConversionFailed {
            model: model.name.clone(),
            error: error.to_string(),
          });
          continue;
        }
      };

      let mut columns = Vec::with_capacity(model.properties.len());
      for property in &model.properties {
        match self.convert_property(&model.name, property, stats) {
          Ok(Some(column)) => {
            stats.record_column();
            columns.push(column);
          }
          Ok(None) => {}
          Err(error) => stats.record_warning(GenerationWarning::PropertyConversionFailed {
            model: model.name.clone(),
            property: property.base_name.clone(),
            error: error.to_string(),
          }),
        }
      }

      tables.insert(table.table_name.clone(), TableSchema { table, columns });
    }

    let database_name = self.config.default_database_name();
    GeneratedSchema {
      database_name: (!database_name.is_empty()).then(|| database_name.to_string()),
      tables,
    }
  }

  /// Converts one model into its table definition. Returns `None` when the
  /// model already carries an externally-authored schema.
  pub(crate) fn convert_model(
    &self,
    model: &ModelSpec,
    stats: &mut GenerationStats,
  ) -> Result<Option<TableDefinition>, IdentifierError> {
    if model.has_schema_override {
      stats.record_model_skipped();
      return Ok(None);
    }

    let table_name = to_table_name(&model.name, self.convention(), stats)?;
    let comment = self.annotate_renamed(&model.name, &table_name, model.description.as_deref(), "model");
    stats.record_table();

    Ok(Some(TableDefinition { table_name, comment }))
  }

  /// Converts one property into its column definition. Returns `None` when
  /// the property already carries an externally-authored schema.
  pub(crate) fn convert_property(
    &self,
    model_name: &str,
    property: &PropertySpec,
    stats: &mut GenerationStats,
  ) -> Result<Option<ColumnDefinition>, IdentifierError> {
    if property.has_schema_override {
      stats.record_property_skipped();
      return Ok(None);
    }

    let mut column = self.column_scaffold(model_name, property, stats)?;

    match property.data_type.parse::<TypeCategory>() {
      Ok(TypeCategory::Boolean) => column.sql_type = SqlType::Boolean,
      Ok(TypeCategory::SmallInt | TypeCategory::Integer | TypeCategory::BigInt) => {
        self.resolve_integer(&mut column, property, stats);
      }
      Ok(TypeCategory::Decimal) => self.resolve_decimal(&mut column, property, stats),
      Ok(category @ (TypeCategory::Bytea | TypeCategory::Text | TypeCategory::Varchar)) => {
        self.resolve_string(&mut column, property, category, stats);
      }
      Ok(TypeCategory::Date) => column.sql_type = SqlType::Date,
      Ok(TypeCategory::Timestamp) => column.sql_type = SqlType::Timestamp,
      Ok(TypeCategory::Json) => {
        column.sql_type = if self.config.json_data_type_enabled() {
          SqlType::Json
        } else {
          SqlType::Text
        };
      }
      Err(_) => column.sql_type = SqlType::Text,
    }

    self.resolve_nullability(&mut column, model_name, property, stats);

    Ok(Some(column))
  }

  /// Builds the column skeleton shared by every type category: names resolved
  /// through the identifier normalizer and the description annotated when the
  /// naming convention renamed the property.
  fn column_scaffold(
    &self,
    model_name: &str,
    property: &PropertySpec,
    stats: &mut GenerationStats,
  ) -> Result<ColumnDefinition, IdentifierError> {
    let table_name = to_table_name(model_name, self.convention(), stats)?;
    let column_name = to_column_name(&property.base_name, self.convention(), stats)?;
    let comment = self.annotate_renamed(&property.base_name, &column_name, property.description.as_deref(), "param");

    Ok(ColumnDefinition {
      table_name,
      column_name,
      sql_type: SqlType::Text,
      type_arguments: Vec::new(),
      unsigned: None,
      not_null: false,
      default: None,
      comment,
    })
  }

  /// Appends an "Original … name" note to the description when snake_case
  /// renaming changed the identifier, so the source name survives in the
  /// table/column comment.
  fn annotate_renamed(
    &self,
    original: &str,
    renamed: &str,
    description: Option<&str>,
    label: &str,
  ) -> Option<String> {
    if self.convention() == IdentifierNamingConvention::SnakeCase && original != renamed {
      let extra = format!("Original {label} name - {original}.");
      let comment = match description {
        Some(text) if !text.is_empty() => format!("{text}. {extra}"),
        _ => extra,
      };
      return Some(sanitize_comment(&comment));
    }
    description.map(sanitize_comment)
  }

  fn resolve_integer(&self, column: &mut ColumnDefinition, property: &PropertySpec, stats: &mut GenerationStats) {
    if property.is_enum {
      column.sql_type = SqlType::Enum;
      column.type_arguments = self.collect_enum_arguments(&property.enum_values, stats);
      return;
    }

    if property.data_format.as_deref() == Some("int64") {
      column.sql_type = SqlType::BigInt;
      return;
    }

    let mut minimum = parse_integer_bound(property.minimum.as_deref(), &property.base_name, "minimum", stats);
    let mut maximum = parse_integer_bound(property.maximum.as_deref(), &property.base_name, "maximum", stats);
    // Exclusivity applies to the declared values, before any bound swapping.
    if property.exclusive_minimum && let Some(min) = minimum.as_mut() {
      *min = min.saturating_add(1);
    }
    if property.exclusive_maximum && let Some(max) = maximum.as_mut() {
      *max = max.saturating_sub(1);
    }

    let unsigned = matches!(minimum, Some(min) if min >= 0);
    column.unsigned = Some(unsigned);
    column.sql_type = fit_integer_type(minimum, maximum, Some(unsigned), stats);
  }

  fn resolve_decimal(&self, column: &mut ColumnDefinition, property: &PropertySpec, stats: &mut GenerationStats) {
    if property.is_enum {
      column.sql_type = SqlType::Enum;
      column.type_arguments = self.collect_enum_arguments(&property.enum_values, stats);
      return;
    }

    let mut minimum = parse_decimal_bound(property.minimum.as_deref(), &property.base_name, "minimum", stats);
    let mut maximum = parse_decimal_bound(property.maximum.as_deref(), &property.base_name, "maximum", stats);
    if property.exclusive_minimum && let Some(min) = minimum.as_mut() {
      *min += 1.0;
    }
    if property.exclusive_maximum && let Some(max) = maximum.as_mut() {
      *max -= 1.0;
    }

    column.sql_type = SqlType::Decimal;
    column.unsigned = Some(matches!(minimum, Some(min) if min >= 0.0));
    // Precision and scale are fixed; declared bounds only decide the sign.
    column.type_arguments = vec![TypeArgument::Integer(20), TypeArgument::Integer(9)];
  }

  fn resolve_string(
    &self,
    column: &mut ColumnDefinition,
    property: &PropertySpec,
    category: TypeCategory,
    stats: &mut GenerationStats,
  ) {
    if property.is_enum {
      column.sql_type = SqlType::Enum;
      column.type_arguments = self.collect_enum_arguments(&property.enum_values, stats);
      return;
    }

    if category == TypeCategory::Bytea {
      column.sql_type = SqlType::Bytea;
      return;
    }

    column.sql_type = fit_string_type(property.min_length, property.max_length, stats);
    if matches!(column.sql_type, SqlType::Char | SqlType::Varchar) {
      let length = property.max_length.filter(|&len| len >= 0).unwrap_or(255);
      column.type_arguments = vec![TypeArgument::Integer(i64::from(length))];
    }
  }

  /// Shared tail of every category: required properties become NOT NULL with
  /// no default, optional ones get their default classified. A type that
  /// rejects defaults downgrades to no default with a warning.
  fn resolve_nullability(
    &self,
    column: &mut ColumnDefinition,
    model_name: &str,
    property: &PropertySpec,
    stats: &mut GenerationStats,
  ) {
    if property.required {
      column.not_null = true;
      return;
    }

    column.not_null = false;
    match classify_default(property.default_value.as_deref(), &column.sql_type.to_string()) {
      Ok(clause) => column.default = Some(clause),
      Err(_) => {
        stats.record_warning(GenerationWarning::UnsupportedDefault {
          model: model_name.to_string(),
          property: property.base_name.clone(),
        });
        column.default = None;
      }
    }
  }

  /// Collects enum literals in declaration order, stopping at the element
  /// cap with a warning for the first dropped value.
  fn collect_enum_arguments(
    &self,
    enum_values: &[serde_json::Value],
    stats: &mut GenerationStats,
  ) -> Vec<TypeArgument> {
    let mut arguments = Vec::with_capacity(enum_values.len().min(ENUM_MAX_ELEMENTS));
    for (index, value) in enum_values.iter().enumerate() {
      if index > ENUM_MAX_ELEMENTS - 1 {
        stats.record_warning(GenerationWarning::EnumValuesTruncated {
          value: value.to_string(),
        });
        break;
      }
      arguments.push(TypeArgument::from_json(value, stats));
    }
    arguments
  }
}

fn parse_integer_bound(
  bound: Option<&str>,
  property: &str,
  label: &'static str,
  stats: &mut GenerationStats,
) -> Option<i64> {
  let text = bound?;
  match text.trim().parse::<i64>() {
    Ok(value) => Some(value),
    Err(_) => {
      stats.record_warning(GenerationWarning::NonNumericBound {
        property: property.to_string(),
        bound: label,
        value: text.to_string(),
      });
      None
    }
  }
}

fn parse_decimal_bound(
  bound: Option<&str>,
  property: &str,
  label: &'static str,
  stats: &mut GenerationStats,
) -> Option<f64> {
  let text = bound?;
  match text.trim().parse::<f64>() {
    Ok(value) => Some(value),
    Err(_) => {
      stats.record_warning(GenerationWarning::NonNumericBound {
        property: property.to_string(),
        bound: label,
        value: text.to_string(),
      });
      None
    }
  }
}
