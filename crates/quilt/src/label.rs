//! Text helpers for tile labels and tooltip values.

/// Splits a tile label into stacked lines.
///
/// A new line starts at every position `i > 0` where an ASCII uppercase
/// letter is followed by a character that is not an ASCII uppercase letter.
/// Whitespace stays attached to the end of the preceding line. Only the last
/// capital of an uppercase run starts a line, so `"FIFA 16"` becomes
/// `["FIF", "A 16"]`.
///
/// # Examples
///
/// ```
/// # use quilt::label::split_label;
/// assert_eq!(split_label("Wii Sports"), vec!["Wii ", "Sports"]);
/// assert_eq!(split_label("Grand Theft Auto V"), vec!["Grand ", "Theft ", "Auto V"]);
/// assert_eq!(split_label(""), Vec::<&str>::new());
/// ```
pub fn split_label(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut lines = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, ch) = chars[i];
        let starts_word = ch.is_ascii_uppercase()
            && chars
                .get(i + 1)
                .is_some_and(|(_, next)| !next.is_ascii_uppercase());
        if starts_word {
            lines.push(&name[start..offset]);
            start = offset;
        }
    }

    if start < name.len() {
        lines.push(&name[start..]);
    }
    lines
}

/// Formats a value the way it is shown in labels, attributes and tooltips.
///
/// Integral values drop the fractional part (`10` rather than `10.0`).
pub fn format_value(value: f64) -> String {
    value.to_string()
}
