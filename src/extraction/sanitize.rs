/// Sanitize extracted text before scanning for lab values.
/// Strips control characters, trims lines, drops empties. Keeps the
/// punctuation the matchers rely on: '/' for blood pressure readings,
/// '-' and ':' for labeled values and range annotations.
pub fn sanitize_extracted_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '-'
                        | '/'
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '+'
                        | '='
                        | '%'
                        | '<'
                        | '>'
                        | '*'
                        | '_'
                        | '\''
                        | '"'
                        | 'µ'
                )
        })
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
