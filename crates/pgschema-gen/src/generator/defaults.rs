use super::{ddl::DefaultClause, errors::DefaultError};

/// Classifies a property default value against the column's SQL type.
///
/// The type is taken as a free-form, case-insensitive name so the helper also
/// answers for vocabulary the resolver itself never emits. A missing default
/// (or the literal `NULL` in any case) classifies as the NULL keyword for
/// every type, before the per-type rules apply.
///
/// Ref: <https://www.postgresql.org/docs/current/ddl-default.html>
pub(crate) fn classify_default(default_value: Option<&str>, sql_type: &str) -> Result<DefaultClause, DefaultError> {
  let Some(value) = default_value else {
    return Ok(DefaultClause::keyword("NULL"));
  };
  if value.to_uppercase() == "NULL" {
    return Ok(DefaultClause::keyword("NULL"));
  }

  match sql_type.to_uppercase().as_str() {
    // SERIAL DEFAULT VALUE is an alias for NOT NULL AUTO_INCREMENT UNIQUE in
    // an integer column definition.
    "SMALLINT" | "INTEGER" | "BIGINT" => {
      if value == "SERIAL DEFAULT VALUE" {
        Ok(DefaultClause::keyword(value))
      } else {
        Ok(DefaultClause::numeric(value))
      }
    }
    // TIMESTAMP and DATE columns additionally accept CURRENT_TIMESTAMP.
    "TIMESTAMP" | "DATE" => {
      if value == "CURRENT_TIMESTAMP" {
        Ok(DefaultClause::keyword(value))
      } else {
        Ok(DefaultClause::string(value))
      }
    }
    // The BLOB, TEXT, GEOMETRY and JSON families accept no default at all.
    "TINYBLOB" | "BLOB" | "BYTEA" | "LONGBLOB" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "GEOMETRY"
    | "JSON" => Err(DefaultError::Unsupported {
      sql_type: sql_type.to_string(),
    }),
    _ => Ok(DefaultClause::string(value)),
  }
}
