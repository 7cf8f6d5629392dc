use strum::{Display, EnumString};

use super::{
  errors::IdentifierError,
  metrics::{GenerationStats, GenerationWarning},
  naming::identifiers::to_database_name,
};

/// Naming convention applied to table and column names. Database names are
/// deliberately exempt so a configured database name survives verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum IdentifierNamingConvention {
  #[default]
  #[strum(serialize = "original")]
  Original,
  #[strum(serialize = "snake_case")]
  SnakeCase,
}

/// Immutable-per-run configuration of the schema mapping engine.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
  identifier_naming_convention: IdentifierNamingConvention,
  json_data_type_enabled: bool,
  named_parameters_enabled: bool,
  default_database_name: String,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      identifier_naming_convention: IdentifierNamingConvention::default(),
      json_data_type_enabled: true,
      named_parameters_enabled: false,
      default_database_name: String::new(),
    }
  }
}

impl GeneratorConfig {
  pub fn identifier_naming_convention(&self) -> IdentifierNamingConvention {
    self.identifier_naming_convention
  }

  /// JSON columns need PostgreSQL 11, so the JSON data type can be turned off
  /// to fall back to TEXT.
  pub fn json_data_type_enabled(&self) -> bool {
    self.json_data_type_enabled
  }

  pub fn set_json_data_type_enabled(&mut self, enabled: bool) {
    self.json_data_type_enabled = enabled;
  }

  /// Whether downstream prepared statements should use named parameters.
  /// Carried in the configuration for the template layer, never read here.
  #[allow(dead_code)]
  pub fn named_parameters_enabled(&self) -> bool {
    self.named_parameters_enabled
  }

  pub fn set_named_parameters_enabled(&mut self, enabled: bool) {
    self.named_parameters_enabled = enabled;
  }

  pub fn default_database_name(&self) -> &str {
    &self.default_database_name
  }

  /// Sets the identifier naming convention from its textual form. Unknown
  /// values are rejected with a warning and the previous value is retained.
  pub fn set_identifier_naming_convention(&mut self, raw: &str, stats: &mut GenerationStats) {
    match raw.parse::<IdentifierNamingConvention>() {
      Ok(convention) => self.identifier_naming_convention = convention,
      Err(_) => stats.record_warning(GenerationWarning::InvalidNamingConvention {
        value: raw.to_string(),
        current: self.identifier_naming_convention.to_string(),
      }),
    }
  }

  /// Sets the default database name, escaping it through the identifier
  /// normalizer first. A name that had to be escaped is reported.
  pub fn set_default_database_name(&mut self, name: &str, stats: &mut GenerationStats) -> Result<(), IdentifierError> {
    let escaped = to_database_name(name, stats)?;
    if escaped != name {
      stats.record_warning(GenerationWarning::DatabaseNameEscaped {
        name: name.to_string(),
        escaped: escaped.clone(),
      });
    }
    self.default_database_name = escaped;
    Ok(())
  }
}
