use indexmap::IndexMap;
use serde::Serialize;
use strum::Display;

use super::metrics::{GenerationStats, GenerationWarning};

/// Column data types the resolver can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
  SmallInt,
  Integer,
  BigInt,
  SmallSerial,
  Serial,
  BigSerial,
  Decimal,
  Boolean,
  Char,
  Varchar,
  Text,
  Bytea,
  Timestamp,
  Date,
  Json,
  Enum,
}

/// A literal data type argument (CHAR length, enum values, decimal
/// precision/scale), classified by runtime kind so the rendering layer can
/// quote strings and pass numbers through.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeArgument {
  String(String),
  Integer(i64),
  Float(f64),
}

impl TypeArgument {
  /// Classifies a raw JSON value. Non-primitive values are flattened to their
  /// JSON rendering with a warning.
  pub(crate) fn from_json(value: &serde_json::Value, stats: &mut GenerationStats) -> Self {
    match value {
      serde_json::Value::String(text) => Self::String(text.clone()),
      serde_json::Value::Number(number) => {
        if let Some(integer) = number.as_i64() {
          Self::Integer(integer)
        } else {
          Self::Float(number.as_f64().unwrap_or_default())
        }
      }
      other => {
        let rendered = other.to_string();
        stats.record_warning(GenerationWarning::NonPrimitiveArgument {
          value: rendered.clone(),
        });
        Self::String(rendered)
      }
    }
  }

}

/// Kind predicates mirroring the flags the rendering layer branches on when
/// deciding whether to quote an argument.
#[allow(dead_code)]
impl TypeArgument {
  pub fn is_string(&self) -> bool {
    matches!(self, Self::String(_))
  }

  pub fn is_integer(&self) -> bool {
    matches!(self, Self::Integer(_))
  }

  pub fn is_float(&self) -> bool {
    matches!(self, Self::Float(_))
  }

  pub fn is_numeric(&self) -> bool {
    self.is_integer() || self.is_float()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DefaultKind {
  Keyword,
  Numeric,
  String,
}

/// A classified DEFAULT clause value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultClause {
  pub value: String,
  pub kind: DefaultKind,
}

impl DefaultClause {
  pub(crate) fn keyword(value: &str) -> Self {
    Self {
      value: value.to_string(),
      kind: DefaultKind::Keyword,
    }
  }

  pub(crate) fn numeric(value: &str) -> Self {
    Self {
      value: value.to_string(),
      kind: DefaultKind::Numeric,
    }
  }

  pub(crate) fn string(value: &str) -> Self {
    Self {
      value: value.to_string(),
      kind: DefaultKind::String,
    }
  }
}

/// Table-level output record, one per model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
  pub table_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,
}

/// Column-level output record, one per property. Refers to its table by name,
/// never by reference; constructed once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
  pub table_name: String,
  pub column_name: String,
  pub sql_type: SqlType,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub type_arguments: Vec<TypeArgument>,
  /// Present only when the numeric range branch derived it.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub unsigned: Option<bool>,
  pub not_null: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<DefaultClause>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,
}

/// A generated table with its columns, keyed into the run's output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
  #[serde(flatten)]
  pub table: TableDefinition,
  pub columns: Vec<ColumnDefinition>,
}

/// The full output document of one generation run, tables in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSchema {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub database_name: Option<String>,
  pub tables: IndexMap<String, TableSchema>,
}
