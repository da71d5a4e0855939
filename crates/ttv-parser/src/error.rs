use thiserror::Error;

/// Fatal input errors. Any of these aborts the whole parse.
///
/// Line numbers are 1-based positions in the complete input text, or 0 when
/// a row was parsed on its own through one of the fragment parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("report head has no date token (expected `DD.MM.`)")]
    MissingDate,

    #[error("invalid date token `{0}` (expected `DD.MM.`)")]
    InvalidDate(String),

    #[error("report head has no subpage counter (expected `X/Y`)")]
    MissingSubpages,

    #[error("invalid subpage counter `{0}`")]
    InvalidSubpages(String),

    #[error("line {line}: invalid kickoff time `{token}` (expected `HH.MM`)")]
    InvalidKickoff { line: usize, token: String },

    #[error("line {line}: invalid event minute `{token}`")]
    InvalidMinute { line: usize, token: String },
}

impl FormatError {
    /// Whether the error concerns the head line rather than a match block.
    pub fn is_head_error(&self) -> bool {
        matches!(
            self,
            FormatError::MissingDate
                | FormatError::InvalidDate(_)
                | FormatError::MissingSubpages
                | FormatError::InvalidSubpages(_)
        )
    }

    /// Attaches the input line number to a body error.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            FormatError::InvalidKickoff { token, .. } => FormatError::InvalidKickoff { line, token },
            FormatError::InvalidMinute { token, .. } => FormatError::InvalidMinute { line, token },
            other => other,
        }
    }

    /// Line of the offending body row, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::InvalidKickoff { line, .. } | FormatError::InvalidMinute { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
