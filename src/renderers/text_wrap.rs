//! Greedy word wrapping against font metrics

use super::surface::TextStyle;

/// Split `text` into lines no wider than `max_width_mm`.
///
/// Words are separated by single spaces, so a run of spaces inside a line
/// is kept as written. The spaces at a line break are dropped. A word that
/// is wider than the limit on its own gets a line to itself; callers that
/// need a hard limit check the result.
pub fn wrap_text(text: &str, max_width_mm: f32, style: &TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if current.is_empty() {
            // Leading spaces and spaces carried over a break
            if !word.is_empty() {
                current.push_str(word);
            }
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if style.width_of(&candidate) <= max_width_mm {
            current = candidate;
        } else {
            let line = current.trim_end_matches(' ').to_string();
            lines.push(line);
            current = word.to_string();
        }
    }

    let last = current.trim_end_matches(' ');
    if !last.is_empty() {
        lines.push(last.to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::surface::{FontFace, Rgb};

    fn body_style() -> TextStyle {
        TextStyle::new(FontFace::Regular, 11.0, Rgb::BLACK)
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("hello world", 170.0, &body_style()), vec!["hello world"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap_text("   ", 170.0, &body_style()).is_empty());
    }

    #[test]
    fn test_lines_fit_and_words_survive() {
        let style = body_style();
        let text = "the quick brown fox jumps over the lazy dog ".repeat(12);
        let lines = wrap_text(&text, 60.0, &style);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(style.width_of(line) <= 60.0, "line too wide: {}", line);
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let style = body_style();
        let lines = wrap_text("a 0xDEADBEEFDEADBEEFDEADBEEFDEADBEEFDEADBEEF b", 20.0, &style);
        assert_eq!(lines, vec!["a", "0xDEADBEEFDEADBEEFDEADBEEFDEADBEEFDEADBEEF", "b"]);
    }

    #[test]
    fn test_space_runs_inside_a_line_are_kept() {
        let lines = wrap_text("confirms that ASHA  RAO, holding PAN", 170.0, &body_style());
        assert_eq!(lines, vec!["confirms that ASHA  RAO, holding PAN"]);
    }

    #[test]
    fn test_spaces_at_a_break_are_dropped() {
        let style = body_style();
        let lines = wrap_text("alpha   beta", style.width_of("alpha") + 0.5, &style);
        assert_eq!(lines, vec!["alpha", "beta"]);
    }
}
