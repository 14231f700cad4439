//! Balanced-Brace JSON Scanner
//!
//! Finds the first complete JSON object embedded in free text. The scan
//! tracks brace depth and JSON string literals (including escapes), so
//! braces inside strings never unbalance it. Returns a slice of the
//! input; callers decide what parse failure means.

/// Extract the first balanced `{...}` object from `text`, or None when no
/// opening brace exists or the object never closes (e.g. truncated output).
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
