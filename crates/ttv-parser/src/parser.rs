use std::mem;

use chrono::{Datelike, Local};

use crate::error::FormatError;
use crate::events::parse_event_row;
use crate::head::parse_report_head;
use crate::ir::{Match, Report};
use crate::match_head::parse_match_head;
use crate::scan::is_blank;

/// Parser for complete teletext results pages.
///
/// `ReportParser` holds only the reference year used to complete the
/// year-less `DD.MM.` date of the head line, so one value can parse any
/// number of pages, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportParser {
    year: i32,
}

impl Default for ReportParser {
    /// Uses the current local year.
    fn default() -> Self {
        Self::new()
    }
}

impl ReportParser {
    /// Creates a parser for pages of the current local year.
    pub fn new() -> Self {
        Self::with_year(Local::now().year())
    }

    /// Creates a parser that dates pages in `year`.
    pub fn with_year(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Parses a whole page.
    ///
    /// Leading blank lines are skipped. The first line is the head, the rest
    /// is the body of blank-line separated match blocks.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when the head has no usable date or subpage
    /// counter, or when a kickoff time or event minute is malformed. Body
    /// errors carry the line number within `input`.
    pub fn parse(&self, input: &str) -> Result<Report, FormatError> {
        // Only the start is trimmed: trailing blank lines close the last match.
        let text = input.trim_start();
        let head_line = input[..input.len() - text.len()].matches('\n').count() + 1;

        let (head, body) = text.split_once('\n').unwrap_or((text, ""));
        let head = parse_report_head(head, self.year)?;

        let mut segmenter = BodySegmenter::new(head_line + 1);
        for line in body.split('\n') {
            segmenter.push_line(line)?;
        }
        let body = segmenter.finish();
        log::trace!("parsed {} ({} matches)", head.competition, body.len());

        Ok(Report { head, body })
    }
}

/// Match block currently being accumulated.
#[derive(Debug)]
enum Block {
    /// Between blocks; the next non-blank line is a match head.
    Idle,
    Open(Match),
}

/// Splits the body into matches on blank lines.
///
/// A block is only emitted when a blank line closes it. A final block with
/// no blank line after it is dropped, so callers that want it must keep the
/// trailing newline of the page.
struct BodySegmenter {
    current: Block,
    matches: Vec<Match>,
    line: usize,
}

impl BodySegmenter {
    fn new(first_line: usize) -> Self {
        Self {
            current: Block::Idle,
            matches: Vec::new(),
            line: first_line,
        }
    }

    fn push_line(&mut self, line: &str) -> Result<(), FormatError> {
        let line_no = self.line;
        self.line += 1;

        if is_blank(line) {
            if let Block::Open(mut finished) = mem::replace(&mut self.current, Block::Idle) {
                finished.sort_events();
                log::trace!(
                    "match closed at line {}: {:?} - {:?} ({} events)",
                    line_no,
                    finished.host,
                    finished.visitor,
                    finished.events.len()
                );
                self.matches.push(finished);
            }
            return Ok(());
        }

        match self.current {
            Block::Idle => {
                let head = parse_match_head(line).map_err(|e| e.at_line(line_no))?;
                self.current = Block::Open(head);
            }
            Block::Open(ref mut open) => {
                let events = parse_event_row(line).map_err(|e| e.at_line(line_no))?;
                open.events.extend(events);
            }
        }
        Ok(())
    }

    fn finish(self) -> Vec<Match> {
        if let Block::Open(unclosed) = &self.current {
            log::debug!(
                "dropping last match {:?} - {:?}: no blank line after it",
                unclosed.host,
                unclosed.visitor
            );
        }
        self.matches
    }
}

/// Parses body lines alone, numbering them from 1.
///
/// Same segmentation as [`ReportParser::parse`], including the trailing
/// blank line rule.
pub fn parse_body(body: &str) -> Result<Vec<Match>, FormatError> {
    let mut segmenter = BodySegmenter::new(1);
    for line in body.split('\n') {
        segmenter.push_line(line)?;
    }
    Ok(segmenter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmenter_idle_blank_lines() {
        let mut segmenter = BodySegmenter::new(1);
        for line in ["", "  ", ""] {
            segmenter.push_line(line).unwrap();
        }
        assert!(matches!(segmenter.current, Block::Idle));
        assert!(segmenter.finish().is_empty());
    }

    #[test]
    fn test_segmenter_counts_lines() {
        let mut segmenter = BodySegmenter::new(3);
        segmenter.push_line("").unwrap();
        segmenter.push_line("Foo Utd - Barham 2-0 (1-0)").unwrap();
        let err = segmenter.push_line("Pom 45+").unwrap_err();
        assert_eq!(err.line(), Some(5));
    }

    #[test]
    fn test_unclosed_block_dropped() {
        let matches = parse_body("\nFoo Utd - Barham 1-0\nPom 12").unwrap();
        assert!(matches.is_empty());

        let matches = parse_body("\nFoo Utd - Barham 1-0\nPom 12\n").unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_year_is_configurable() {
        assert_eq!(ReportParser::with_year(1999).year(), 1999);
        assert_eq!(ReportParser::default().year(), Local::now().year());
    }
}
