use chrono::NaiveDate;

use crate::error::FormatError;
use crate::ir::ReportHead;
use crate::scan::at_number_followed_by;
use crate::score::tokenize_score;

/// Parses the head line of a page: competition name, `DD.MM.` date and the
/// `X/Y` subpage counter, in that order, with free-form spacing.
///
/// The page omits the year, so `year` supplies it.
///
/// ```
/// use ttv_parser::head::parse_report_head;
///
/// let head = parse_report_head("ITALIAN   SERIE  Ä     01.05.    1/2", 2024)?;
/// assert_eq!(head.competition, "ITALIAN SERIE Ä");
/// assert_eq!(head.subpages, (1, 2));
/// # Ok::<(), ttv_parser::FormatError>(())
/// ```
pub fn parse_report_head(line: &str, year: i32) -> Result<ReportHead, FormatError> {
    let chars: Vec<char> = line.chars().collect();

    let mut competition = String::new();
    let mut i = 0;
    while i < chars.len() && !at_number_followed_by(&chars, i, '.') {
        let c = chars[i];
        if !c.is_whitespace() {
            competition.push(c);
        } else if !competition.is_empty() && !competition.ends_with(' ') {
            competition.push(' ');
        }
        i += 1;
    }
    if i == chars.len() {
        return Err(FormatError::MissingDate);
    }
    let competition = competition.trim_end().to_string();

    let (date_token, next) = take_token(&chars, i);
    let date = parse_date(&date_token, year)?;

    i = next;
    while i < chars.len() && !at_number_followed_by(&chars, i, '/') {
        i += 1;
    }
    if i == chars.len() {
        return Err(FormatError::MissingSubpages);
    }

    let (counter, _) = take_token(&chars, i);
    let tokens = tokenize_score(&counter);
    let subpages = match tokens[..] {
        [current, total, ..] => (current, total),
        _ => return Err(FormatError::InvalidSubpages(counter)),
    };

    Ok(ReportHead {
        competition,
        date,
        subpages,
    })
}

/// Reads the run of non-whitespace characters starting at `start`.
fn take_token(chars: &[char], start: usize) -> (String, usize) {
    let len = chars[start..]
        .iter()
        .take_while(|c| !c.is_whitespace())
        .count();
    (chars[start..start + len].iter().collect(), start + len)
}

fn parse_date(token: &str, year: i32) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(&format!("{}{}", token, year), "%d.%m.%Y")
        .map_err(|_| FormatError::InvalidDate(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_token() {
        let chars: Vec<char> = "ab 01.05.  1/2".chars().collect();
        assert_eq!(take_token(&chars, 3), ("01.05.".to_string(), 9));
        assert_eq!(take_token(&chars, 11), ("1/2".to_string(), 14));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("01.05.", 2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(
            parse_date("31.02.", 2024),
            Err(FormatError::InvalidDate("31.02.".into()))
        );
        assert!(parse_date("01.05", 2024).is_err());
    }
}
