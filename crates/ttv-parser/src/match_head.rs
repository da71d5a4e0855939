use chrono::NaiveTime;

use crate::error::FormatError;
use crate::ir::Match;
use crate::scan::{at_number_followed_by, at_space_padded_dash};
use crate::score::{split_scoreline, tokenize_score};

/// Which team-name buffer the scan is filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameSlot {
    Host,
    Visitor,
}

/// Parses the first line of a match block.
///
/// The line holds `host - visitor` followed by either a scoreline
/// (`2-1 (1-0)`, `1-0` or `0-0`), a kickoff time (`18.30`), or nothing.
/// Club names may contain digits and hyphens (`Mainz 05`, `Rot-Weiss`), so:
///
/// - only a space-padded ` - ` separates the two names;
/// - a digit run directly followed by `-` starts the scoreline;
/// - a digit run directly followed by `.` starts the kickoff time.
///
/// The returned match has no events. Kickoff tokens that are not `HH.MM`
/// fail with [`FormatError::InvalidKickoff`] (line number 0).
pub fn parse_match_head(line: &str) -> Result<Match, FormatError> {
    let chars: Vec<char> = line.trim().chars().collect();

    let mut host = String::new();
    let mut visitor = String::new();
    let mut slot = NameSlot::Host;
    let mut last_collected: Option<usize> = None;
    let mut scoreline: Vec<u32> = Vec::new();
    let mut kickoff = None;

    for (i, &c) in chars.iter().enumerate() {
        if slot == NameSlot::Host && at_space_padded_dash(&chars, i) {
            slot = NameSlot::Visitor;
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        if at_number_followed_by(&chars, i, '-') {
            let rest: String = chars[i..].iter().collect();
            scoreline = tokenize_score(&rest);
            break;
        }
        if at_number_followed_by(&chars, i, '.') {
            let rest: String = chars[i..].iter().collect();
            kickoff = Some(parse_kickoff(&rest)?);
            break;
        }

        let name = match slot {
            NameSlot::Host => &mut host,
            NameSlot::Visitor => &mut visitor,
        };
        // Exactly one skipped character since the last collected one is a
        // word break inside the name.
        if last_collected.is_some_and(|j| j + 2 == i) {
            name.push(' ');
        }
        name.push(c);
        last_collected = Some(i);
    }

    let (ht_score, ft_score) = split_scoreline(&scoreline);

    Ok(Match {
        host: non_empty(host),
        visitor: non_empty(visitor),
        kickoff,
        ht_score,
        ft_score,
        events: Vec::new(),
    })
}

fn parse_kickoff(token: &str) -> Result<NaiveTime, FormatError> {
    NaiveTime::parse_from_str(token, "%H.%M").map_err(|_| FormatError::InvalidKickoff {
        line: 0,
        token: token.to_string(),
    })
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() { None } else { Some(name) }
}
