use crate::ir::Score;

/// Extracts the digit runs of a fragment such as `2-1 (1-0)` or `1/2`.
///
/// Non-digit characters only separate tokens. A trailing run is kept, which
/// covers pages that drop the closing parenthesis. A bare `0-0` is widened to
/// `[0, 0, 0, 0]`: goalless matches are printed without a half-time group.
pub fn tokenize_score(fragment: &str) -> Vec<u32> {
    let mut tokens = Vec::new();
    let mut current: Option<u32> = None;

    for c in fragment.chars() {
        match c.to_digit(10) {
            Some(digit) => {
                let value = current.unwrap_or(0);
                current = Some(value.saturating_mul(10).saturating_add(digit));
            }
            None => {
                if let Some(value) = current.take() {
                    tokens.push(value);
                }
            }
        }
    }
    if let Some(value) = current {
        tokens.push(value);
    }

    if tokens == [0, 0] {
        return vec![0, 0, 0, 0];
    }
    tokens
}

/// Splits scoreline tokens into `(ht_score, ft_score)`.
///
/// Four tokens are `ft ft ht ht` (full time first, half time in
/// parentheses); two tokens are a half-time score of a match that has not
/// reached the second half. Anything else carries no score.
pub(crate) fn split_scoreline(tokens: &[u32]) -> (Option<Score>, Option<Score>) {
    match *tokens {
        [ft_host, ft_visitor, ht_host, ht_visitor] => {
            (Some((ht_host, ht_visitor)), Some((ft_host, ft_visitor)))
        }
        [ht_host, ht_visitor] => (Some((ht_host, ht_visitor)), None),
        _ => {
            if !tokens.is_empty() {
                log::debug!("ignoring scoreline with {} tokens: {:?}", tokens.len(), tokens);
            }
            (None, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goalless_idiom() {
        assert_eq!(tokenize_score("0-0"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_full_and_half_time() {
        assert_eq!(tokenize_score("2-1 (1-0)"), vec![2, 1, 1, 0]);
        assert_eq!(tokenize_score("12-9 (10-5)"), vec![12, 9, 10, 5]);
    }

    #[test]
    fn test_trailing_run_kept() {
        assert_eq!(tokenize_score("1-0"), vec![1, 0]);
        assert_eq!(tokenize_score("3-2 (1-1"), vec![3, 2, 1, 1]);
    }

    #[test]
    fn test_no_digits() {
        assert!(tokenize_score("").is_empty());
        assert!(tokenize_score("(-)").is_empty());
    }

    #[test]
    fn test_split_scoreline() {
        assert_eq!(split_scoreline(&[2, 1, 1, 0]), (Some((1, 0)), Some((2, 1))));
        assert_eq!(split_scoreline(&[1, 0]), (Some((1, 0)), None));
        assert_eq!(split_scoreline(&[1, 0, 2]), (None, None));
        assert_eq!(split_scoreline(&[]), (None, None));
    }
}
