use std::sync::LazyLock;

use regex::Regex;

use crate::{
  generator::{
    config::IdentifierNamingConvention,
    errors::IdentifierError,
    metrics::{GenerationStats, GenerationWarning, IdentifierKind},
  },
  reserved::is_reserved_word,
};

pub(crate) const IDENTIFIER_MAX_LENGTH: usize = 64;

const DATABASE_NAME_PREFIX: &str = "";
const DATABASE_NAME_SUFFIX: &str = "_db";
const TABLE_NAME_PREFIX: &str = "t_";
const TABLE_NAME_SUFFIX: &str = "";
const COLUMN_NAME_PREFIX: &str = "";
const COLUMN_NAME_SUFFIX: &str = "";

// Compile static regexes only once for identifier normalization.
static TRAILING_WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+$").unwrap());
static DIGITS_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static UPPER_BEFORE_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static LOWER_BEFORE_UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Strips characters a quoted identifier cannot carry.
///
/// Quoted identifiers accept anything in U+0001..=U+FFFF; ASCII NUL and
/// supplementary characters (U+10000 and higher) are dropped with a warning.
pub(crate) fn escape_quoted_identifier(identifier: &str, stats: &mut GenerationStats) -> String {
  let escaped: String = identifier
    .chars()
    .filter(|&c| (0x0001..=0xFFFF).contains(&(c as u32)))
    .collect();

  if escaped != identifier {
    stats.record_warning(GenerationWarning::UnsafeQuotedCharacters {
      name: identifier.to_string(),
    });
  }
  escaped
}

/// Strips characters an unquoted identifier cannot carry.
///
/// Unquoted identifiers are restricted to basic Latin letters, digits,
/// dollar, underscore, plus the extended U+0080..=U+FFFF band. The generated
/// definitions always quote their identifiers, so nothing routes through this
/// today; it is the escape hatch for embedding a name bare in a statement.
#[allow(dead_code)]
pub(crate) fn escape_unquoted_identifier(identifier: &str, stats: &mut GenerationStats) -> String {
  fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '$' || c == '_' || (0x0080..=0xFFFF).contains(&(c as u32))
  }

  let escaped: String = identifier.chars().filter(|&c| is_safe(c)).collect();
  if escaped != identifier {
    stats.record_warning(GenerationWarning::UnsafeUnquotedCharacters {
      name: identifier.to_string(),
    });
  }
  escaped
}

/// Normalizes a source name into a valid SQL identifier.
///
/// # Rules:
/// 1. Characters outside the quoted-identifier range are stripped.
/// 2. Trailing whitespace is trimmed (identifiers must not end with space).
/// 3. An empty result is an error; the source name had no usable characters.
/// 4. A digit-only result is wrapped as `prefix + name + suffix`, since
///    identifiers may begin with digits but not consist solely of them.
///    Everything else is left untouched, which keeps the operation
///    idempotent.
pub(crate) fn to_sql_identifier(
  name: &str,
  prefix: &str,
  suffix: &str,
  stats: &mut GenerationStats,
) -> Result<String, IdentifierError> {
  let mut escaped = escape_quoted_identifier(name, stats);

  if TRAILING_WHITESPACE_RE.is_match(&escaped) {
    stats.record_warning(GenerationWarning::TrailingWhitespace { name: name.to_string() });
    escaped = TRAILING_WHITESPACE_RE.replace(&escaped, "").into_owned();
  }

  if escaped.is_empty() {
    return Err(IdentifierError::Empty { name: name.to_string() });
  }

  if DIGITS_ONLY_RE.is_match(&escaped) {
    stats.record_warning(GenerationWarning::DigitsOnlyIdentifier { name: name.to_string() });
    escaped = format!("{prefix}{escaped}{suffix}");
  }

  Ok(escaped)
}

/// Converts a model name into a table name (`t_` wrapping for digit-only
/// names, optional snake_case, 64-char cap).
pub(crate) fn to_table_name(
  name: &str,
  convention: IdentifierNamingConvention,
  stats: &mut GenerationStats,
) -> Result<String, IdentifierError> {
  let mut identifier = to_sql_identifier(name, TABLE_NAME_PREFIX, TABLE_NAME_SUFFIX, stats)?;
  if convention == IdentifierNamingConvention::SnakeCase {
    identifier = underscore(&identifier);
  }
  truncate_identifier(&mut identifier, IdentifierKind::Table, name, stats);
  warn_if_reserved(&identifier, stats);
  Ok(identifier)
}

/// Converts a property name into a column name.
pub(crate) fn to_column_name(
  name: &str,
  convention: IdentifierNamingConvention,
  stats: &mut GenerationStats,
) -> Result<String, IdentifierError> {
  let mut identifier = to_sql_identifier(name, COLUMN_NAME_PREFIX, COLUMN_NAME_SUFFIX, stats)?;
  if convention == IdentifierNamingConvention::SnakeCase {
    identifier = underscore(&identifier);
  }
  truncate_identifier(&mut identifier, IdentifierKind::Column, name, stats);
  warn_if_reserved(&identifier, stats);
  Ok(identifier)
}

/// Converts a name into a database name (`_db` wrapping for digit-only
/// names). The identifier naming convention never applies here.
pub(crate) fn to_database_name(name: &str, stats: &mut GenerationStats) -> Result<String, IdentifierError> {
  let mut identifier = to_sql_identifier(name, DATABASE_NAME_PREFIX, DATABASE_NAME_SUFFIX, stats)?;
  truncate_identifier(&mut identifier, IdentifierKind::Database, name, stats);
  warn_if_reserved(&identifier, stats);
  Ok(identifier)
}

fn truncate_identifier(identifier: &mut String, kind: IdentifierKind, name: &str, stats: &mut GenerationStats) {
  if identifier.chars().count() > IDENTIFIER_MAX_LENGTH {
    stats.record_warning(GenerationWarning::IdentifierTruncated {
      kind,
      name: name.to_string(),
    });
    *identifier = identifier.chars().take(IDENTIFIER_MAX_LENGTH).collect();
  }
}

// Detection only; the name passes through unescaped and the template layer is
// expected to quote it.
fn warn_if_reserved(identifier: &str, stats: &mut GenerationStats) {
  if is_reserved_word(identifier) {
    stats.record_warning(GenerationWarning::ReservedWord {
      name: identifier.to_string(),
    });
  }
}

/// Converts an identifier to snake_case, splitting on case transitions
/// (`HTTPServer` → `http_server`, `fooBar` → `foo_bar`) rather than just
/// lowercasing. Dashes and spaces become underscores.
pub(crate) fn underscore(word: &str) -> String {
  let split = UPPER_BEFORE_WORD_RE.replace_all(word, "${1}_${2}");
  let split = LOWER_BEFORE_UPPER_RE.replace_all(&split, "${1}_${2}");
  split.replace(['-', ' '], "_").to_lowercase()
}
