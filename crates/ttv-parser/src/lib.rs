//! # Teletext Results Parser
//!
//! Parser for teletext football results pages with a typed report output.
//!
//! ## Overview
//!
//! A results page is plain text laid out on a character grid, with loose
//! columns and irregular spacing:
//!
//! ```text
//! ITALIAN SERIE A        01.05.        1/2
//!
//! Foo Utd - Barham            3-2 (1-1)
//! Ramero om45 Pom 10
//! McDominate 78 Pom 48
//! Mainoom 90
//!
//! Null City - Bazpool               0-0
//!
//! ```
//!
//! This crate turns such a page into a [`Report`](ir::Report): the head
//! (competition, date, subpage counter) and a list of
//! [`Match`](ir::Match)es with teams, scores, kickoff time and a time-ordered
//! list of [`Event`](ir::Event)s (goals, own goals, penalties, missed
//! penalties, red cards).
//!
//! ## Architecture
//!
//! ```text
//! page text ──► head line ──► parse_report_head ──► ReportHead
//!           └─► body ──► BodySegmenter (blank-line blocks)
//!                           ├─ first line ──► parse_match_head ──► Match
//!                           └─ other lines ─► parse_event_row ──► Vec<Event>
//! ```
//!
//! The entry point is [`ReportParser`](parser::ReportParser). The line
//! parsers are public for callers that only hold fragments of a page.
//!
//! Several tokens are lexically ambiguous:
//!
//! - `-` separates team names (` - `) or the two sides of a score (`2-1`)
//! - a digit run is part of a name (`Mainz 05`), a kickoff (`18.30`), or an
//!   event minute (`45+2`)
//!
//! The head and match-head parsers resolve these by looking at the character
//! right after a digit run; the event-row parser reads right to left so each
//! minute anchors its event.
//!
//! ## Output
//!
//! The model implements `serde::Serialize` with the canonical projection
//! versioned by [`SCHEMA_VERSION`]:
//!
//! ```
//! use ttv_parser::ReportParser;
//!
//! let page = "SERIE A 01.05. 1/1\n\nNull City - Bazpool 0-0\n\n";
//! let report = ReportParser::with_year(2024).parse(page)?;
//! let json = serde_json::to_value(&report)?;
//!
//! assert_eq!(json["head"]["date"], "2024-05-01");
//! assert_eq!(json["body"][0]["ft_score"], serde_json::json!([0, 0]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Trailing blank line
//!
//! A match block is only emitted once a blank line closes it. Keep the final
//! newline of the page, or the last match is dropped.

/// Error taxonomy.
pub mod error;
/// Per-match event rows.
pub mod events;
/// Head line of the page.
pub mod head;
/// Report model and its projections.
pub mod ir;
/// First line of a match block.
pub mod match_head;
/// Page entry point and body segmentation.
pub mod parser;
/// Character predicates shared by the line parsers.
pub mod scan;
/// Score and counter digit runs.
pub mod score;


pub use error::FormatError;
pub use events::parse_event_row;
pub use head::parse_report_head;
pub use ir::{Event, EventKind, EventTime, GoalType, JsonValue, Match, Report, ReportHead, Team};
pub use match_head::parse_match_head;
pub use parser::{ReportParser, parse_body};
pub use score::tokenize_score;

/// Schema version of the JSON projection.
///
/// MAJOR for removed or renamed fields, MINOR for new optional fields or
/// event types, PATCH for parsing fixes.
pub const SCHEMA_VERSION: &str = "1.0.0";
