/// Removes single quotes so a description cannot break out of the quoted
/// literal the template layer renders comments into.
pub(crate) fn escape_quotation_marks(input: &str) -> String {
  input.replace('\'', "")
}

/// Neutralizes block comment markers inside descriptions.
pub(crate) fn neutralize_comment_markers(input: &str) -> String {
  input.replace("*/", "*_/").replace("/*", "/_*")
}

/// Full comment sanitization applied to every table and column comment.
pub(crate) fn sanitize_comment(input: &str) -> String {
  neutralize_comment_markers(&escape_quotation_marks(input))
}
