//! Structured ticket data: candidates with hard range and uniqueness
//! constraints, and the parse result handed back to the caller.
//!
//! Super Lotto tickets carry five front-zone ("red") numbers drawn from
//! 1..=35 and two back-zone ("blue") numbers drawn from 1..=12, each zone
//! mutually unique. A candidate violating any of these constraints is
//! invalid and must never reach the caller.

use serde::{Deserialize, Serialize};

/// Number of front-zone numbers on a ticket.
pub const RED_COUNT: usize = 5;
/// Inclusive front-zone number range.
pub const RED_RANGE: std::ops::RangeInclusive<u8> = 1..=35;
/// Number of back-zone numbers on a ticket.
pub const BLUE_COUNT: usize = 2;
/// Inclusive back-zone number range.
pub const BLUE_RANGE: std::ops::RangeInclusive<u8> = 1..=12;
/// Largest accepted multi-draw count.
pub const MAX_TERM_COUNT: u32 = 30;

/// One extracted ticket: five red numbers, two blue numbers, and a note
/// describing how the candidate was recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCandidate {
    /// Front-zone numbers in extraction order.
    pub reds: [u8; RED_COUNT],
    /// Back-zone numbers in extraction order.
    pub blues: [u8; BLUE_COUNT],
    /// Human-readable provenance note.
    pub note: String,
}

impl TicketCandidate {
    /// Creates a candidate. No validation happens here; the validator
    /// decides what reaches the caller.
    pub fn new(reds: [u8; RED_COUNT], blues: [u8; BLUE_COUNT], note: impl Into<String>) -> Self {
        Self {
            reds,
            blues,
            note: note.into(),
        }
    }

    /// Whether the candidate satisfies the cardinality, range, and
    /// uniqueness constraints.
    pub fn is_valid(&self) -> bool {
        let reds_ok = self.reds.iter().all(|n| RED_RANGE.contains(n)) && all_unique(&self.reds);
        let blues_ok =
            self.blues.iter().all(|n| BLUE_RANGE.contains(n)) && all_unique(&self.blues);
        reds_ok && blues_ok
    }

    /// Order-insensitive identity of the number sets, used for
    /// deduplication.
    pub fn dedup_key(&self) -> ([u8; RED_COUNT], [u8; BLUE_COUNT]) {
        let mut reds = self.reds;
        let mut blues = self.blues;
        reds.sort_unstable();
        blues.sort_unstable();
        (reds, blues)
    }

    /// Renders the numbers the way the surrounding service displays them:
    /// zero-padded, comma-joined zones separated by a plus.
    ///
    /// ```
    /// use lotto_ocr::domain::ticket::TicketCandidate;
    ///
    /// let ticket = TicketCandidate::new([3, 7, 12, 19, 25], [2, 11], "");
    /// assert_eq!(ticket.display_numbers(), "03,07,12,19,25 + 02,11");
    /// ```
    pub fn display_numbers(&self) -> String {
        let reds = self
            .reds
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(",");
        let blues = self
            .blues
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(",");
        format!("{reds} + {blues}")
    }
}

fn all_unique(values: &[u8]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, v)| !values[..i].contains(v))
}

/// The structured outcome of one recognition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Extracted tickets in reading order, deduplicated.
    pub tickets: Vec<TicketCandidate>,
    /// The five-digit draw-term identifier the ticket starts at, when one
    /// was recovered.
    pub start_term: Option<u32>,
    /// How many consecutive draws the ticket covers, `1..=30`.
    pub term_count: u32,
    /// True when extraction leaned on a low-confidence fallback tier or
    /// the draw term is missing; the caller should ask a human before
    /// trusting the result.
    pub need_confirm: bool,
}

impl ParseResult {
    /// Last draw term the ticket covers, derived from the start term and
    /// the multi-draw count.
    pub fn end_term(&self) -> Option<u32> {
        self.start_term.map(|start| start + self.term_count - 1)
    }

    /// Whether the given draw term falls inside the ticket's coverage
    /// window.
    pub fn covers_term(&self, term: u32) -> bool {
        match (self.start_term, self.end_term()) {
            (Some(start), Some(end)) => start <= term && term <= end,
            _ => false,
        }
    }
}
