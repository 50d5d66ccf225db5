use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Greedy line wrap at UAX #14 break opportunities. `measure` returns the pixel
/// width of a line; a run with no break that fits gets a line of its own.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut last_good = 0;

    for (idx, opportunity) in linebreaks(text) {
        if last_good > start && measure(text[start..idx].trim_end()) > max_width {
            push_line(&mut lines, &text[start..last_good]);
            start = last_good;
        }
        last_good = idx;
        if opportunity == BreakOpportunity::Mandatory {
            push_line(&mut lines, &text[start..idx]);
            start = idx;
        }
    }
    lines
}

// Trailing spaces and newlines never reach the screen
fn push_line(lines: &mut Vec<String>, slice: &str) {
    let line = slice.trim_end();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> i32 {
        s.chars().count() as i32
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("Log cabin tucked into a quiet forest", 12, chars);
        assert_eq!(lines, vec!["Log cabin", "tucked into", "a quiet", "forest"]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        let lines = wrap_text("a harmoniously b", 5, chars);
        assert_eq!(lines, vec!["a", "harmoniously", "b"]);
    }

    #[test]
    fn no_break_space_holds_words_together() {
        let lines = wrap_text("10\u{a0}km walk", 4, chars);
        assert_eq!(lines, vec!["10\u{a0}km", "walk"]);
    }

    #[test]
    fn breaks_after_hyphen() {
        let lines = wrap_text("foo-bar baz", 5, chars);
        assert_eq!(lines, vec!["foo-", "bar", "baz"]);
    }

    #[test]
    fn newline_forces_a_break() {
        assert_eq!(wrap_text("a\nb", 100, chars), vec!["a", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("   ", 10, chars).is_empty());
        assert!(wrap_text("", 10, chars).is_empty());
    }
}
