//! Quote-aware field splitting for energy CSV lines
//!
//! Quoting semantics:
//! - a `"` toggles the in-quotes state, scanning left to right
//! - a `,` separates fields only outside quotes
//! - each field is trimmed, then one surrounding pair of `"` is removed
//!   when the field both starts and ends with one
//! - quotes are not unescaped (`""` stays as-is) and quoted fields cannot
//!   span lines; an unterminated quote runs to the end of the line

/// Split one CSV line into trimmed, unquoted fields
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_field(&line[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(clean_field(&line[start..]));

    fields
}

/// Trim a raw field and strip one enclosing quote pair
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
