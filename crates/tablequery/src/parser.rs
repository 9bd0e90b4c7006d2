//! Search expression splitting.
//!
//! A search expression is split into top-level *search groups*, each of which
//! must match for a row to be kept. Groups are delimited by whitespace outside
//! brackets and quotes, and by top-level bracket pairs:
//!
//! ```text
//! apple (pie|tart) "red car"   =>   ["apple", "pie|tart", "\"red car\""]
//! ```
//!
//! Malformed input is never rejected. An unclosed `(` runs to the end of the
//! expression, an unmatched `)` is kept as a literal character, and an
//! unclosed `"` keeps the rest of the expression in one group.

/// Splits an expression into its top-level search groups.
///
/// Groups borrow from `expression`. Empty groups are dropped; if nothing
/// else is produced the trimmed expression itself is the only group.
///
/// # Example
///
/// ```
/// use tablequery::split_groups;
///
/// assert_eq!(split_groups("apple pie"), ["apple", "pie"]);
/// assert_eq!(split_groups("a (b c|d) e"), ["a", "b c|d", "e"]);
/// assert_eq!(split_groups("(x (y z))"), ["x (y z)"]);
/// ```
pub fn split_groups(expression: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, ch) in expression.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => {
                depth += 1;
                if depth == 1 {
                    push_group(&mut groups, &expression[start..i]);
                    start = i + 1;
                }
            }
            ')' if !in_quotes && depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    push_group(&mut groups, &expression[start..i]);
                    start = i + 1;
                }
            }
            c if c.is_whitespace() && depth == 0 && !in_quotes => {
                push_group(&mut groups, &expression[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    push_group(&mut groups, &expression[start..]);

    if groups.is_empty() {
        let trimmed = expression.trim();
        if !trimmed.is_empty() {
            groups.push(trimmed);
        }
    }
    groups
}

fn push_group<'a>(groups: &mut Vec<&'a str>, raw: &'a str) {
    let group = raw.trim();
    if !group.is_empty() {
        groups.push(group);
    }
}

/// Returns the inner text of a fully double-quoted phrase.
///
/// The input must start and end with `"` and hold at least one character
/// between the quotes.
///
/// ```
/// use tablequery::quoted_phrase;
///
/// assert_eq!(quoted_phrase("\"red car\""), Some("red car"));
/// assert_eq!(quoted_phrase("\"\""), None);
/// assert_eq!(quoted_phrase("\"red"), None);
/// ```
pub fn quoted_phrase(text: &str) -> Option<&str> {
    if text.len() > 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
