/// Fatal error for a single model or property. The caller decides whether to
/// skip the entity or abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum IdentifierError {
  #[error("empty database/table/column name for source name '{name}' not allowed")]
  Empty { name: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultError {
  #[error("the {sql_type} data type cannot be assigned a default value")]
  Unsupported { sql_type: String },
}
