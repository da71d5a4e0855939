//! Character predicates shared by the line parsers.
//!
//! All positions are char indices into a pre-collected `&[char]`, since the
//! bulletin is Unicode text and anchors are looked up by neighbour.

/// True for an empty or all-whitespace line.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// True when a non-empty ASCII digit run starts at `i` and is directly
/// followed by `marker`, e.g. the `01.` of a date or the `2-` of a score.
pub(crate) fn at_number_followed_by(chars: &[char], i: usize, marker: char) -> bool {
    let rest = chars.get(i..).unwrap_or(&[]);
    let run = rest.iter().take_while(|c| c.is_ascii_digit()).count();
    run > 0 && rest.get(run) == Some(&marker)
}

/// True when `i` is the dash of a ` - ` team separator.
pub(crate) fn at_space_padded_dash(chars: &[char], i: usize) -> bool {
    i > 0
        && i + 1 < chars.len()
        && chars[i - 1] == ' '
        && chars[i] == '-'
        && chars[i + 1] == ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_number_anchor() {
        let line = chars("Mainz 05 - Köln 2-1");
        assert!(!at_number_followed_by(&line, 6, '-'));
        assert!(at_number_followed_by(&line, 16, '-'));
        assert!(!at_number_followed_by(&line, 0, '-'));
        assert!(!at_number_followed_by(&line, 100, '-'));
    }

    #[test]
    fn test_dash_anchor() {
        let line = chars("Rot-Weiss - Foo");
        assert!(!at_space_padded_dash(&line, 3));
        assert!(at_space_padded_dash(&line, 10));
        assert!(!at_space_padded_dash(&line, 0));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r"));
        assert!(!is_blank("  x "));
    }
}
