//! Scores recognition output per enhancement strategy and selects the
//! best variant.
//!
//! Each strategy's fragments are merged into one space-joined string and
//! scored on how much ticket-shaped structure it contains. Selection keeps
//! the strictly highest score; ties keep the earliest-evaluated strategy,
//! which together with the fixed strategy order makes the pick
//! deterministic.

use crate::domain::fragment::OcrFragment;
use crate::domain::ticket::RED_RANGE;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Draw-term shape: 第, five digits, 期, optional whitespace between.
static TERM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"第\s*\d{5}\s*期").expect("term pattern"));

/// A full ticket: five two-digit groups, a zone separator, two more
/// two-digit groups.
static FULL_TICKET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}(?:[\s,，]+\d{2}){4}[\s,，+＋]+\d{2}[\s,，]+\d{2}")
        .expect("full ticket pattern")
});

static TWO_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{2}").expect("two digit pattern"));

/// Product keywords printed on Super Lotto tickets.
static PRODUCT_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"大乐透|体彩").expect("product pattern"));

/// Recognition output of one enhancement strategy.
#[derive(Debug, Clone)]
pub struct StrategyResult {
    /// Name of the strategy that produced this output.
    pub strategy: &'static str,
    /// Normalized fragments in recognizer order.
    pub fragments: Vec<OcrFragment>,
    /// All fragment texts joined with single spaces.
    pub merged_text: String,
    /// Structure score; higher means more ticket-shaped.
    pub score: i32,
}

/// Joins fragment texts with single spaces, in recognizer order.
pub fn merge_text(fragments: &[OcrFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scores merged recognition output on ticket structure.
///
/// * +2 per recognized fragment
/// * +20 when the draw-term shape appears
/// * +30 when a full ticket shape appears
/// * +15 when at least 7 two-digit substrings are in the red range,
///   a further +10 at 14 (suggests multiple tickets)
/// * +floor(20 x average confidence) when confidences are available
/// * +5 when a product keyword appears
pub fn score_text(merged: &str, fragments: &[OcrFragment]) -> i32 {
    let mut score = fragments.len() as i32 * 2;

    if TERM_PATTERN.is_match(merged) {
        score += 20;
    }
    if FULL_TICKET_PATTERN.is_match(merged) {
        score += 30;
    }

    let in_range = TWO_DIGIT
        .find_iter(merged)
        .filter(|m| {
            m.as_str()
                .parse::<u8>()
                .is_ok_and(|v| RED_RANGE.contains(&v))
        })
        .count();
    if in_range >= 7 {
        score += 15;
    }
    if in_range >= 14 {
        score += 10;
    }

    let confidences: Vec<f32> = fragments.iter().filter_map(|f| f.confidence).collect();
    if !confidences.is_empty() {
        let average = confidences.iter().sum::<f32>() / confidences.len() as f32;
        score += (20.0 * average).floor() as i32;
    }

    if PRODUCT_KEYWORD.is_match(merged) {
        score += 5;
    }

    score
}

/// Picks the strategy with the strictly highest positive score.
///
/// Results are expected in evaluation order; an equal score never
/// displaces an earlier result. Returns `None` when every strategy scored
/// zero or produced no fragments.
pub fn select_best(results: Vec<StrategyResult>) -> Option<StrategyResult> {
    let mut best: Option<StrategyResult> = None;
    for result in results {
        debug!(
            strategy = result.strategy,
            score = result.score,
            fragments = result.fragments.len(),
            "strategy scored"
        );
        if result.score <= 0 || result.fragments.is_empty() {
            continue;
        }
        match &best {
            Some(current) if result.score <= current.score => {}
            _ => best = Some(result),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::RawFragment;

    fn fragment(text: &str, confidence: Option<f32>) -> OcrFragment {
        OcrFragment::from_raw(&RawFragment::new(vec![(0.0, 0.0)], text, confidence))
    }

    fn result_with_score(strategy: &'static str, score: i32) -> StrategyResult {
        StrategyResult {
            strategy,
            fragments: vec![fragment("x", None)],
            merged_text: "x".into(),
            score,
        }
    }

    #[test]
    fn term_shape_scores_twenty() {
        let empty: &[OcrFragment] = &[];
        assert_eq!(score_text("第25101期", empty), 20);
        assert_eq!(score_text("第 25101 期", empty), 20);
    }

    #[test]
    fn full_ticket_shape_scores() {
        let empty: &[OcrFragment] = &[];
        // Full shape +30, seven in-range two-digit substrings +15.
        assert_eq!(score_text("03 07 12 19 25 + 02 11", empty), 45);
    }

    #[test]
    fn fragment_count_and_confidence_contribute() {
        let fragments = vec![fragment("03", Some(0.5)), fragment("07", Some(1.0))];
        // 2 fragments x2 = 4, avg confidence 0.75 -> +15.
        assert_eq!(score_text("", &fragments), 19);
    }

    #[test]
    fn product_keyword_scores_five() {
        let empty: &[OcrFragment] = &[];
        assert_eq!(score_text("超级大乐透", empty), 5);
    }

    #[test]
    fn many_in_range_pairs_suggest_multiple_tickets() {
        let empty: &[OcrFragment] = &[];
        let two_tickets = "01 02 03 04 05 06 07 08 09 10 11 12 13 14";
        // Full shape +30 (whitespace doubles as the zone separator),
        // 14 in-range pairs +15 +10.
        assert_eq!(score_text(two_tickets, empty), 55);
    }

    #[test]
    fn tie_keeps_earliest_strategy() {
        let results = vec![
            result_with_score("standard", 12),
            result_with_score("high-contrast", 47),
            result_with_score("binarize", 47),
            result_with_score("denoise", 30),
            result_with_score("adaptive-threshold", 5),
        ];
        let best = select_best(results).unwrap();
        assert_eq!(best.strategy, "high-contrast");
    }

    #[test]
    fn all_zero_or_fragmentless_selects_nothing() {
        let mut no_fragments = result_with_score("standard", 10);
        no_fragments.fragments.clear();
        let zero = StrategyResult {
            strategy: "binarize",
            fragments: vec![fragment("x", None)],
            merged_text: "x".into(),
            score: 0,
        };
        assert!(select_best(vec![no_fragments, zero]).is_none());
    }

    #[test]
    fn merge_joins_with_single_spaces() {
        let fragments = vec![fragment("03", None), fragment("07", None)];
        assert_eq!(merge_text(&fragments), "03 07");
    }
}
