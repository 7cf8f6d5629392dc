use super::{
  ddl::SqlType,
  metrics::{GenerationStats, GenerationWarning},
};

/// Finds the narrowest PostgreSQL integer type for the given bounds.
///
/// Unspecified bounds default to the 32-bit signed range. Swapped bounds are
/// tolerated by normalizing, with a warning when the declared minimum exceeds
/// the declared maximum. The serial tiers only apply when the variable is
/// unsigned and its whole range is non-negative; an unsigned range wider than
/// SERIAL falls through to the INTEGER default.
pub(crate) fn fit_integer_type(
  minimum: Option<i64>,
  maximum: Option<i64>,
  unsigned: Option<bool>,
  stats: &mut GenerationStats,
) -> SqlType {
  // https://www.postgresql.org/docs/current/datatype-numeric.html
  let min = i128::from(minimum.unwrap_or(-2_147_483_648));
  let max = i128::from(maximum.unwrap_or(2_147_483_647));
  let actual_min = min.min(max);
  let actual_max = max.max(min);
  if let (Some(declared_min), Some(declared_max)) = (minimum, maximum)
    && declared_min > declared_max
  {
    stats.record_warning(GenerationWarning::InvertedNumericBounds);
  }

  if unsigned.unwrap_or(false) && actual_min >= 0 {
    if actual_max <= 32_767 {
      return SqlType::SmallSerial;
    }
    if actual_max <= 2_147_483_647 {
      return SqlType::Serial;
    }
    // Bounds parse from i64, so this tier is unreachable in practice.
    if actual_max > i128::from(i64::MAX) {
      return SqlType::BigSerial;
    }
  } else {
    if actual_min >= -32_768 && actual_max <= 32_767 {
      return SqlType::SmallInt;
    }
    if actual_min >= -2_147_483_648 && actual_max <= 2_147_483_647 {
      return SqlType::Integer;
    }
    if actual_min >= i128::from(i64::MIN) && actual_max <= i128::from(i64::MAX) {
      return SqlType::BigInt;
    }
  }

  SqlType::Integer
}

/// Finds the narrowest PostgreSQL string type for the given length bounds.
///
/// Unspecified or negative lengths default to 0/255. Fixed-width ranges up to
/// 255 map to CHAR, bounded ranges up to 255 to VARCHAR, everything longer to
/// TEXT.
pub(crate) fn fit_string_type(
  min_length: Option<i32>,
  max_length: Option<i32>,
  stats: &mut GenerationStats,
) -> SqlType {
  let min = min_length.filter(|&len| len >= 0).unwrap_or(0);
  let max = max_length.filter(|&len| len >= 0).unwrap_or(255);
  let actual_min = min.min(max);
  let actual_max = max.max(min);
  if let (Some(declared_min), Some(declared_max)) = (min_length, max_length)
    && declared_min > declared_max
  {
    stats.record_warning(GenerationWarning::InvertedLengthBounds);
  }

  if actual_max == actual_min && actual_max <= 255 {
    SqlType::Char
  } else if actual_max <= 255 {
    SqlType::Varchar
  } else {
    SqlType::Text
  }
}
