use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub tables_generated: usize,
  pub columns_generated: usize,
  pub models_skipped: usize,
  pub properties_skipped: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_table(&mut self) {
    self.tables_generated += 1;
  }

  pub fn record_column(&mut self) {
    self.columns_generated += 1;
  }

  pub fn record_model_skipped(&mut self) {
    self.models_skipped += 1;
  }

  pub fn record_property_skipped(&mut self) {
    self.properties_skipped += 1;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

/// Identifier category, used to label truncation diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IdentifierKind {
  Database,
  Table,
  Column,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Identifier '{name}' contains unsafe characters out of U+0001..U+FFFF range")]
  UnsafeQuotedCharacters { name: String },
  #[strum(to_string = "Identifier '{name}' contains unsafe characters out of [0-9a-zA-Z$_] and U+0080..U+FFFF range")]
  UnsafeUnquotedCharacters { name: String },
  #[strum(to_string = "Database, table and column names cannot end with space characters, check '{name}'")]
  TrailingWhitespace { name: String },
  #[strum(to_string = "Database, table and column names cannot consist solely of digits, check '{name}'")]
  DigitsOnlyIdentifier { name: String },
  #[strum(to_string = "{kind} name cannot exceed 64 chars, '{name}' will be truncated")]
  IdentifierTruncated { kind: IdentifierKind, name: String },
  #[strum(to_string = "'{name}' is a PostgreSQL reserved word, escape it or pick another name")]
  ReservedWord { name: String },
  #[strum(to_string = "Property 'minimum' cannot be greater than 'maximum'")]
  InvertedNumericBounds,
  #[strum(to_string = "Property 'minLength' cannot be greater than 'maxLength'")]
  InvertedLengthBounds,
  #[strum(to_string = "Property '{property}' has non-numeric {bound} '{value}', constraint ignored")]
  NonNumericBound {
    property: String,
    bound: &'static str,
    value: String,
  },
  #[strum(to_string = "ENUM column can have maximum of 65535 distinct elements, following value will be skipped: {value}")]
  EnumValuesTruncated { value: String },
  #[strum(to_string = "Data type argument can be a primitive value only, got '{value}'")]
  NonPrimitiveArgument { value: String },
  #[strum(to_string = "Property '{property}' of model '{model}' mapped to a PostgreSQL data type which doesn't support default values")]
  UnsupportedDefault { model: String, property: String },
  #[strum(to_string = "'{value}' is an invalid identifier naming convention, current '{current}' used instead")]
  InvalidNamingConvention { value: String, current: String },
  #[strum(to_string = "Invalid database name: '{name}' cannot be used as a PostgreSQL identifier, escaped value '{escaped}' will be used instead")]
  DatabaseNameEscaped { name: String, escaped: String },
  #[strum(to_string = "Failed to convert model '{model}': {error}")]
  ModelConversionFailed { model: String, error: String },
  #[strum(to_string = "Failed to convert property '{property}' of model '{model}': {error}")]
  PropertyConversionFailed {
    model: String,
    property: String,
    error: String,
  },
}

impl GenerationWarning {
  /// Warnings that mean an entity was dropped from the output entirely.
  pub fn is_skipped_item(&self) -> bool {
    matches!(
      self,
      Self::ModelConversionFailed { .. } | Self::PropertyConversionFailed { .. }
    )
  }
}
