/// Greedy word wrap by character count.
///
/// A word joins the current line when `line_len + word_len + 1 <= max_chars`; the `+ 1` is the
/// separating space. Words longer than the budget are never split and end up alone on an
/// overflowing line. Widths are character counts, not pixels, so rendered lines only
/// approximate the budget.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 <= max_chars {
            line.push_str(word);
            line.push(' ');
            line_len += word_len + 1;
            continue;
        }
        if !line.is_empty() {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
        line.push_str(word);
        line.push(' ');
        line_len = word_len + 1;
    }
    if !line.is_empty() {
        lines.push(line.trim_end().to_string());
    }

    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
