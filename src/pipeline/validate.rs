//! Final validation of extracted candidates.
//!
//! Enforces the hard cardinality, range, and uniqueness constraints,
//! collapses duplicate number sets, and decides whether the result needs
//! human confirmation before the caller trusts it.

use crate::domain::ticket::{MAX_TERM_COUNT, ParseResult};
use crate::pipeline::extract::Extraction;
use std::collections::HashSet;
use tracing::debug;

/// Builds the final [`ParseResult`] from extracted candidates.
///
/// Invalid candidates are dropped silently; duplicates (identical red and
/// blue sets, regardless of order) keep their first occurrence. The
/// confirmation flag is raised when the draw term is missing or any
/// surviving candidate came from a low-confidence recovery path.
pub fn finalize(extraction: Extraction, start_term: Option<u32>, term_count: u32) -> ParseResult {
    let mut seen = HashSet::new();
    let mut tickets = Vec::new();
    let mut low_confidence = false;

    for (candidate, recovery) in extraction.candidates {
        if !candidate.is_valid() {
            debug!(
                numbers = %candidate.display_numbers(),
                ?recovery,
                "dropping candidate violating number constraints"
            );
            continue;
        }
        if !seen.insert(candidate.dedup_key()) {
            continue;
        }
        low_confidence |= recovery.needs_confirm();
        tickets.push(candidate);
    }

    if !tickets.is_empty() {
        low_confidence |= extraction.used_single_digits;
    }

    ParseResult {
        tickets,
        start_term,
        term_count: term_count.clamp(1, MAX_TERM_COUNT),
        need_confirm: start_term.is_none() || low_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::TicketCandidate;
    use crate::pipeline::extract::Recovery;

    fn extraction_of(candidates: Vec<(TicketCandidate, Recovery)>) -> Extraction {
        Extraction {
            candidates,
            used_single_digits: false,
        }
    }

    fn ticket(reds: [u8; 5], blues: [u8; 2]) -> TicketCandidate {
        TicketCandidate::new(reds, blues, "")
    }

    #[test]
    fn duplicate_number_sets_collapse_to_first() {
        let extraction = extraction_of(vec![
            (ticket([3, 7, 12, 19, 25], [2, 11]), Recovery::Window),
            (ticket([25, 19, 12, 7, 3], [11, 2]), Recovery::Window),
        ]);
        let result = finalize(extraction, Some(25101), 1);
        assert_eq!(result.tickets.len(), 1);
        assert_eq!(result.tickets[0].reds, [3, 7, 12, 19, 25]);
        assert!(!result.need_confirm);
    }

    #[test]
    fn invalid_candidates_are_dropped_silently() {
        let extraction = extraction_of(vec![
            (ticket([3, 3, 12, 19, 25], [2, 11]), Recovery::Relaxed),
            (ticket([3, 7, 12, 19, 25], [2, 11]), Recovery::Window),
        ]);
        let result = finalize(extraction, Some(25101), 1);
        assert_eq!(result.tickets.len(), 1);
        assert!(result.tickets.iter().all(|t| t.is_valid()));
    }

    #[test]
    fn missing_term_forces_confirmation() {
        let extraction = extraction_of(vec![(
            ticket([3, 7, 12, 19, 25], [2, 11]),
            Recovery::Direct,
        )]);
        let result = finalize(extraction, None, 1);
        assert!(result.need_confirm);
    }

    #[test]
    fn low_confidence_recovery_forces_confirmation() {
        let extraction = extraction_of(vec![(
            ticket([3, 7, 12, 19, 25], [2, 11]),
            Recovery::RowMergeAmbiguous,
        )]);
        let result = finalize(extraction, Some(25101), 1);
        assert!(result.need_confirm);
    }

    #[test]
    fn single_digit_tokens_force_confirmation() {
        let mut extraction = extraction_of(vec![(
            ticket([3, 7, 12, 19, 25], [2, 11]),
            Recovery::Window,
        )]);
        extraction.used_single_digits = true;
        let result = finalize(extraction, Some(25101), 1);
        assert!(result.need_confirm);
    }

    #[test]
    fn term_count_is_clamped_into_range() {
        let result = finalize(extraction_of(vec![]), Some(25101), 99);
        assert_eq!(result.term_count, MAX_TERM_COUNT);
        let result = finalize(extraction_of(vec![]), Some(25101), 0);
        assert_eq!(result.term_count, 1);
    }

    #[test]
    fn empty_extraction_with_term_is_a_clean_empty_result() {
        let result = finalize(extraction_of(vec![]), Some(25101), 1);
        assert!(result.tickets.is_empty());
        assert!(!result.need_confirm);
    }
}
