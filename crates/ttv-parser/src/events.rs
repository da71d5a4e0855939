//! Event row parsing.
//!
//! An event row lists zero or more events of one match, host events first,
//! with irregular spacing and no reliable team boundary:
//!
//! ```text
//! Ramero om45+1 Pom 12
//!               Halland 90
//! ```
//!
//! Each event ends in its minute, which is the least ambiguous token on the
//! row. The row is therefore read right to left: a minute is always seen
//! before the name it belongs to, and the next minute to the left closes the
//! event, so digits inside a name can never start a new one.

use crate::error::FormatError;
use crate::ir::{Event, EventTime, GoalType, Team};

/// Letters that may form a type code next to the minute (`om`, `rp`, `erp`).
const CODE_LETTERS: &str = "omerp";

/// Type code marking a missed penalty instead of a goal.
const MISSED_PENALTY_CODE: &str = "erp";

/// Scan phase, in right-to-left reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Trailing whitespace before the rightmost token.
    RightMargin,
    /// Text with no minute to its right. Dropped.
    Orphan,
    /// Reading minute digits and `+`.
    Time,
    /// Reading type-code letters attached to the minute.
    TypeCode,
    /// Minute closed; waiting for the player name.
    AwaitName,
    /// Reading the player name. `pending_space` holds one whitespace that
    /// becomes a name-internal space if more name follows.
    Player { pending_space: bool },
}

/// Right-to-left scanner over a single event row.
///
/// Each token kind has one scratch buffer, filled in reverse.
struct RowScanner {
    phase: Phase,
    time: String,
    code: String,
    player: String,
    minute: Option<EventTime>,
    red_card: bool,
    missed: bool,
    /// Set by a run of two or more spaces inside the name phase: the row's
    /// leftmost event is then on the visitor side, with no host counterpart.
    trailing_visitor: bool,
    /// Closed events, rightmost first.
    events: Vec<Event>,
}

impl RowScanner {
    fn new() -> Self {
        Self {
            phase: Phase::RightMargin,
            time: String::new(),
            code: String::new(),
            player: String::new(),
            minute: None,
            red_card: false,
            missed: false,
            trailing_visitor: false,
            events: Vec::new(),
        }
    }

    fn feed(&mut self, c: char) -> Result<(), FormatError> {
        let minute_char = c.is_ascii_digit() || c == '+';
        let code_letter = CODE_LETTERS.contains(c);

        match self.phase {
            Phase::RightMargin | Phase::Orphan => {
                if minute_char {
                    self.start_time(c);
                } else if !c.is_whitespace() && self.phase == Phase::RightMargin {
                    log::debug!("dropping event text with no minute to its right");
                    self.phase = Phase::Orphan;
                }
            }
            Phase::Time => {
                if minute_char {
                    self.time.push(c);
                } else {
                    self.close_time()?;
                    if c.is_whitespace() {
                        self.phase = Phase::AwaitName;
                    } else if c == '#' {
                        self.red_card = true;
                        self.phase = Phase::AwaitName;
                    } else if code_letter {
                        self.push_code(c);
                    } else {
                        self.push_name(c);
                    }
                }
            }
            Phase::TypeCode => {
                if minute_char {
                    self.start_time(c);
                } else if c.is_whitespace() {
                    self.phase = Phase::AwaitName;
                } else if code_letter {
                    self.push_code(c);
                } else {
                    self.push_name(c);
                }
            }
            Phase::AwaitName => {
                if minute_char {
                    self.start_time(c);
                } else if c == '#' && !self.red_card && self.code.is_empty() {
                    self.red_card = true;
                } else if !c.is_whitespace() {
                    self.push_name(c);
                }
            }
            Phase::Player { pending_space } => {
                if minute_char {
                    self.close_event();
                    self.start_time(c);
                } else if c.is_whitespace() {
                    if pending_space {
                        self.trailing_visitor = true;
                    }
                    self.phase = Phase::Player { pending_space: true };
                } else {
                    self.push_name(c);
                }
            }
        }
        Ok(())
    }

    /// Opens a new minute token, discarding a minute that never got a name.
    fn start_time(&mut self, c: char) {
        if self.minute.is_some() {
            log::debug!("dropping event minute with no player name");
        }
        self.minute = None;
        self.time.clear();
        self.code.clear();
        self.red_card = false;
        self.missed = false;
        self.time.push(c);
        self.phase = Phase::Time;
    }

    fn close_time(&mut self) -> Result<(), FormatError> {
        let token: String = self.time.chars().rev().collect();
        self.time.clear();
        match parse_minute(&token) {
            Some(minute) => {
                self.minute = Some(minute);
                Ok(())
            }
            None => Err(FormatError::InvalidMinute { line: 0, token }),
        }
    }

    fn push_code(&mut self, c: char) {
        self.code.push(c);
        if self.code.chars().rev().eq(MISSED_PENALTY_CODE.chars()) {
            self.missed = true;
        }
        self.phase = Phase::TypeCode;
    }

    fn push_name(&mut self, c: char) {
        if let Phase::Player { pending_space: true } = self.phase {
            self.player.push(' ');
        }
        self.player.push(c);
        self.phase = Phase::Player { pending_space: false };
    }

    fn close_event(&mut self) {
        let Some(time) = self.minute.take() else {
            return;
        };
        let player: String = self.player.chars().rev().collect();
        // Teams are assigned in `finish`, once the whole row is known.
        let event = if self.red_card {
            Event::red_card(time, player, Team::Host)
        } else if self.missed {
            Event::missed_penalty(time, player, Team::Host)
        } else if self.code.is_empty() {
            Event::goal(time, player, Team::Host, GoalType::OpenPlay)
        } else {
            let code: String = self.code.chars().rev().collect();
            Event::goal(time, player, Team::Host, GoalType::from_code(&code))
        };

        self.events.push(event);
        self.player.clear();
        self.code.clear();
        self.red_card = false;
        self.missed = false;
    }

    /// Closes the leftmost event and assigns teams, returning events in
    /// left-to-right row order.
    fn finish(mut self) -> Vec<Event> {
        match self.phase {
            Phase::Player { .. } => self.close_event(),
            Phase::Time | Phase::TypeCode | Phase::AwaitName => {
                log::debug!("dropping event minute with no player name");
            }
            Phase::RightMargin | Phase::Orphan => {}
        }

        let mut events = self.events;
        events.reverse();
        if let Some(last) = events.last_mut() {
            last.team = Team::Visitor;
        }
        if let Some(first) = events.first_mut() {
            first.team = if self.trailing_visitor {
                Team::Visitor
            } else {
                Team::Host
            };
        }
        events
    }
}

/// Parses a `45` or `45+2` minute token.
fn parse_minute(token: &str) -> Option<EventTime> {
    let mut parts = token.split('+');
    let regular = parts.next()?.parse::<u32>().ok()?;
    let added = match parts.next() {
        Some(part) => Some(part.parse::<u32>().ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(EventTime::new(regular, added))
}

/// Parses one raw event row into its events, in left-to-right order.
///
/// Teams are positional: the rightmost event belongs to the visitor and the
/// leftmost to the host, unless the leftmost name is preceded by a run of two
/// or more spaces, which marks a visitor-only row. Events in between are
/// credited to the host.
///
/// This spacing rule depends on the page layout and is only a heuristic.
///
/// A row that yields no event is not an error. A malformed minute such as
/// `45+` fails with [`FormatError::InvalidMinute`] (line number 0).
pub fn parse_event_row(row: &str) -> Result<Vec<Event>, FormatError> {
    let mut scanner = RowScanner::new();
    for c in row.chars().rev() {
        scanner.feed(c)?;
    }
    Ok(scanner.finish())
}
