// src/util/text.rs

/// Collapse note content to a single preview line for list rows.
///
/// This function:
/// 1. Takes the first non-empty line
/// 2. Trims surrounding whitespace
/// 3. Truncates to `max_chars` characters, appending an ellipsis
///
/// # Examples
///
/// ```
/// use noteview::util::text::preview_line;
///
/// let content = "First line of the note\nSecond line";
/// assert_eq!(preview_line(content, 40), "First line of the note");
/// ```
pub fn preview_line(content: &str, max_chars: usize) -> String {
    let first_line = content
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if first_line.chars().count() <= max_chars {
        return first_line.to_string();
    }

    let truncated: String = first_line.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", truncated.trim_end())
}
