/// Splits CSV text into rows of comma-separated fields.
///
/// No quoting or escaping is recognised; every comma separates fields.
/// Both `\n` and `\r\n` line endings are accepted. Fields are returned
/// untrimmed.
pub fn split_rows(text: &str) -> impl Iterator<Item = Vec<&str>> {
    text.lines().map(|line| line.split(',').collect())
}
