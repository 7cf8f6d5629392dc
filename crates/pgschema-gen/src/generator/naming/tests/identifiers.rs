use crate::generator::{
  config::IdentifierNamingConvention,
  errors::IdentifierError,
  metrics::{GenerationStats, GenerationWarning, IdentifierKind},
  naming::identifiers::{
    IDENTIFIER_MAX_LENGTH, escape_quoted_identifier, escape_unquoted_identifier, to_column_name, to_database_name,
    to_sql_identifier, to_table_name, underscore,
  },
};

fn identifier(name: &str, prefix: &str, suffix: &str) -> Result<String, IdentifierError> {
  to_sql_identifier(name, prefix, suffix, &mut GenerationStats::default())
}

#[test]
fn test_to_sql_identifier() {
  assert_eq!(identifier("table_name", "tbl_", "").unwrap(), "table_name");
  assert_eq!(identifier("table_name   ", "tbl_", "").unwrap(), "table_name");
  assert_eq!(identifier("12345678", "tbl_", "").unwrap(), "tbl_12345678");
  assert_eq!(identifier("12345678", "", "_db").unwrap(), "12345678_db");
}

#[test]
fn test_to_sql_identifier_rejects_empty_names() {
  assert!(matches!(identifier("   ", "tbl_", ""), Err(IdentifierError::Empty { .. })));
  assert!(matches!(identifier("", "tbl_", ""), Err(IdentifierError::Empty { .. })));
  // Every character stripped by sanitization counts as empty too.
  assert!(matches!(identifier("\u{0}", "tbl_", ""), Err(IdentifierError::Empty { .. })));
}

#[test]
fn test_to_sql_identifier_is_idempotent() {
  for name in ["table_name", "12345678", "columnName", "перевод"] {
    let once = identifier(name, "tbl_", "").unwrap();
    let twice = identifier(&once, "tbl_", "").unwrap();
    assert_eq!(once, twice, "failed for input {name:?}");
  }
}

#[test]
fn test_escape_quoted_identifier() {
  let mut stats = GenerationStats::default();
  assert_eq!(escape_quoted_identifier("table", &mut stats), "table");
  assert_eq!(escape_quoted_identifier("table_name!'()", &mut stats), "table_name!'()");
  assert!(stats.warnings.is_empty());

  // NUL and supplementary-plane characters are dropped.
  assert_eq!(escape_quoted_identifier("table\u{0}name", &mut stats), "tablename");
  assert_eq!(escape_quoted_identifier("table\u{1F600}", &mut stats), "table");
  assert_eq!(stats.warnings.len(), 2);
  assert!(
    stats
      .warnings
      .iter()
      .all(|w| matches!(w, GenerationWarning::UnsafeQuotedCharacters { .. }))
  );
}

#[test]
fn test_escape_unquoted_identifier() {
  let mut stats = GenerationStats::default();
  assert_eq!(escape_unquoted_identifier("table1Z$_", &mut stats), "table1Z$_");
  assert!(stats.warnings.is_empty());

  assert_eq!(
    escape_unquoted_identifier("table1Z$_!#%~&?()*+-./", &mut stats),
    "table1Z$_"
  );
  // The extended band survives unquoted escaping.
  assert_eq!(escape_unquoted_identifier("таблица", &mut stats), "таблица");
}

#[test]
fn test_to_table_name() {
  let mut stats = GenerationStats::default();
  assert_eq!(
    to_table_name("Pet", IdentifierNamingConvention::Original, &mut stats).unwrap(),
    "Pet"
  );
  assert_eq!(
    to_table_name("123", IdentifierNamingConvention::Original, &mut stats).unwrap(),
    "t_123"
  );
  assert_eq!(
    to_table_name("UserProfile", IdentifierNamingConvention::SnakeCase, &mut stats).unwrap(),
    "user_profile"
  );
}

#[test]
fn test_to_column_name() {
  let mut stats = GenerationStats::default();
  assert_eq!(
    to_column_name("petName", IdentifierNamingConvention::Original, &mut stats).unwrap(),
    "petName"
  );
  assert_eq!(
    to_column_name("petName", IdentifierNamingConvention::SnakeCase, &mut stats).unwrap(),
    "pet_name"
  );
  // Column names have no prefix to offer, so a digit-only name survives bare.
  assert_eq!(
    to_column_name("42", IdentifierNamingConvention::Original, &mut stats).unwrap(),
    "42"
  );
}

#[test]
fn test_to_database_name() {
  let mut stats = GenerationStats::default();
  assert_eq!(to_database_name("petstore", &mut stats).unwrap(), "petstore");
  assert_eq!(to_database_name("12345", &mut stats).unwrap(), "12345_db");
  // The naming convention never applies to database names.
  assert_eq!(to_database_name("PetStore", &mut stats).unwrap(), "PetStore");
}

#[test]
fn test_long_identifiers_are_truncated() {
  let mut stats = GenerationStats::default();
  let name = "a".repeat(IDENTIFIER_MAX_LENGTH + 10);
  let table = to_table_name(&name, IdentifierNamingConvention::Original, &mut stats).unwrap();
  assert_eq!(table.chars().count(), IDENTIFIER_MAX_LENGTH);
  assert!(stats.warnings.iter().any(|w| matches!(
    w,
    GenerationWarning::IdentifierTruncated {
      kind: IdentifierKind::Table,
      ..
    }
  )));
}

#[test]
fn test_reserved_words_pass_through_with_a_warning() {
  let mut stats = GenerationStats::default();
  let column = to_column_name("select", IdentifierNamingConvention::Original, &mut stats).unwrap();
  assert_eq!(column, "select");
  assert_eq!(
    stats.warnings,
    vec![GenerationWarning::ReservedWord {
      name: "select".to_string()
    }]
  );
}

#[test]
fn test_underscore() {
  let cases = [
    ("fooBar", "foo_bar"),
    ("PetTag", "pet_tag"),
    ("HTTPServer", "http_server"),
    ("already_snake", "already_snake"),
    ("With Space", "with_space"),
    ("dash-name", "dash_name"),
    ("Name2Type", "name2_type"),
    ("ALLCAPS", "allcaps"),
  ];
  for (input, expected) in cases {
    assert_eq!(underscore(input), expected, "failed for input {input:?}");
  }
}
