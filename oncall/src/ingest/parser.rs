//! Quote-aware line tokenizer

/// Lines that carry data; blank and whitespace-only lines are dropped
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// Split one CSV line into trimmed fields
///
/// A `"` toggles quoted mode and `""` inside quotes is a literal quote.
/// Commas inside quotes are data. Unbalanced quotes never fail, the
/// remaining characters just accumulate into the current field.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Tokenize every non-blank line
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    non_blank_lines(text).map(parse_csv_line).collect()
}
