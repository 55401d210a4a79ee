//! Tiered number extraction from recognized text.
//!
//! Recognized tickets arrive as noisy text: numbers may be glued together,
//! interleaved with dates, serial numbers, and shop headers, or split
//! across rows. Extraction runs an ordered chain of tiers over each text,
//! first success wins:
//!
//! 1. a direct structured match over the whole run
//! 2. noise stripping, then tokenization with sticky-digit splitting
//! 3. a range-filtered sliding window recovering one or more tickets
//! 4. a relaxed first-seven fallback that checks ranges only
//!
//! The row-oriented path additionally merges a reds-only row with a
//! following back-zone row. Every tier is a pure function; the same input
//! always produces the same candidates.

use crate::domain::ticket::{BLUE_RANGE, RED_RANGE, TicketCandidate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Five two-digit groups, a zone separator, two two-digit groups.
static STRUCTURED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d{2})[\s,，]+(\d{2})[\s,，]+(\d{2})[\s,，]+(\d{2})[\s,，]+(\d{2})[\s,，+＋]+(\d{2})[\s,，]+(\d{2})",
    )
    .expect("structured ticket pattern")
});

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}[-/年.]\d{1,2}[-/月.]\d{1,2}日?").expect("date pattern"));
static TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}(?::\d{2})?").expect("time"));
static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[¥￥]\s*\d+(?:\.\d+)?|\d+(?:\.\d+)?\s*元").expect("currency"));
static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("letters"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit run"));
static PAIR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{2}\b").expect("pair token"));

/// Draw-term shapes, in priority order.
static TERM_MARKED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"第\s*(\d{5})\s*期").expect("marked term"));
static TERM_SUFFIXED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{5})\s*期").expect("suffixed"));
static TERM_LABELED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"期号[:：]?\s*(\d{5})").expect("labeled term"));

/// Multi-draw count shapes, in priority order.
static COUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d{1,2})\s*期(?:\s*\d+\s*倍)?",
        r"连续\s*(\d{1,2})\s*期",
        r"购买?\s*(\d{1,2})\s*期",
        r"(\d{1,2})\s*期\s*投注?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("count pattern"))
    .collect()
});

/// Rows that are shop headers or receipt metadata rather than numbers.
const OPERATIONAL_KEYWORDS: [&str; 6] = ["开奖", "合计", "总计", "流水", "票号", "时间"];

/// Minimum digit characters for a keyword row to still be parsed; genuine
/// ticket rows sometimes share vocabulary with headers.
const KEYWORD_ROW_DIGIT_FLOOR: usize = 10;

/// How a candidate was recovered; decides the low-confidence flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Single-pass structured match over one text run.
    Direct,
    /// Range-filtered sliding window over tokenized digits.
    Window,
    /// Reds row merged with an unambiguous back-zone row.
    RowMerge,
    /// Reds row merged with a back-zone row that offered extra numbers.
    RowMergeAmbiguous,
    /// First-seven fallback with range checks only.
    Relaxed,
}

impl Recovery {
    /// Whether this recovery path requires human confirmation.
    pub fn needs_confirm(self) -> bool {
        matches!(self, Recovery::RowMergeAmbiguous | Recovery::Relaxed)
    }

    /// Note recorded on candidates recovered this way.
    pub fn note(self) -> &'static str {
        match self {
            Recovery::Direct => "整行识别",
            Recovery::Window => "分段识别",
            Recovery::RowMerge => "跨行合并",
            Recovery::RowMergeAmbiguous => "跨行合并(待核对)",
            Recovery::Relaxed => "低置信兜底",
        }
    }
}

/// Candidates recovered from one text or line sequence, with provenance.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Candidates in recovery order, not yet validated or deduplicated.
    pub candidates: Vec<(TicketCandidate, Recovery)>,
    /// True when lone-digit sticky tokens fed an accepted candidate.
    pub used_single_digits: bool,
}

impl Extraction {
    /// Wraps direct-match tickets, the highest-confidence recovery path.
    pub fn from_direct(tickets: Vec<TicketCandidate>) -> Self {
        Self {
            candidates: tickets
                .into_iter()
                .map(|t| (t, Recovery::Direct))
                .collect(),
            used_single_digits: false,
        }
    }
}

/// One tokenized number with its provenance.
#[derive(Debug, Clone, Copy)]
struct Token {
    value: u8,
    /// The token came from a lone digit with no pairing partner.
    single_digit: bool,
}

/// Extracts structurally complete tickets in one pass over the text.
///
/// This is the highest-priority tier: when it matches, later tiers are
/// skipped for the text. Only candidates satisfying the range and
/// uniqueness constraints are returned.
pub fn direct_tickets(text: &str) -> Vec<TicketCandidate> {
    STRUCTURED
        .captures_iter(text)
        .filter_map(|caps| {
            let mut numbers = [0u8; 7];
            for (slot, group) in numbers.iter_mut().zip(1..=7) {
                *slot = caps.get(group)?.as_str().parse().ok()?;
            }
            let reds = [numbers[0], numbers[1], numbers[2], numbers[3], numbers[4]];
            let blues = [numbers[5], numbers[6]];
            let candidate = TicketCandidate::new(reds, blues, Recovery::Direct.note());
            candidate.is_valid().then_some(candidate)
        })
        .collect()
}

/// Extracts tickets from flat text through the tokenizing tiers.
pub fn tokenized_tickets(text: &str) -> Extraction {
    let direct = direct_tickets(text);
    if !direct.is_empty() {
        return Extraction::from_direct(direct);
    }

    let cleaned = strip_noise(text);
    let tokens = tokenize(&cleaned);

    let mut extraction = Extraction::default();
    let windows = window_tickets(&tokens, &mut extraction.used_single_digits);
    if !windows.is_empty() {
        extraction.candidates = windows;
        return extraction;
    }

    if let Some(candidate) = relaxed_ticket(&tokens, &mut extraction.used_single_digits) {
        extraction.candidates.push((candidate, Recovery::Relaxed));
    }
    extraction
}

/// Extracts tickets from clustered rows, assembling reds-only rows with a
/// following back-zone row.
pub fn row_tickets(lines: &[String]) -> Extraction {
    let mut extraction = Extraction::default();
    let mut pending_reds: Option<([u8; 5], bool)> = None;

    for line in lines {
        if is_operational_row(line) {
            continue;
        }

        let direct = direct_tickets(line);
        if !direct.is_empty() {
            extraction
                .candidates
                .extend(direct.into_iter().map(|t| (t, Recovery::Direct)));
            pending_reds = None;
            continue;
        }

        let cleaned = strip_noise(line);
        let tokens = tokenize(&cleaned);

        let windows = window_tickets(&tokens, &mut extraction.used_single_digits);
        if !windows.is_empty() {
            extraction.candidates.extend(windows);
            pending_reds = None;
            continue;
        }

        // A cached reds row consumes this row as its back zone. The cache
        // clears whether or not the merge succeeds.
        if let Some((reds, reds_single)) = pending_reds.take() {
            let blues: Vec<Token> = unique_by_value(
                tokens
                    .iter()
                    .copied()
                    .filter(|t| BLUE_RANGE.contains(&t.value)),
            );
            if blues.len() >= 2 {
                let recovery = if blues.len() == 2 {
                    Recovery::RowMerge
                } else {
                    Recovery::RowMergeAmbiguous
                };
                let pair = [blues[0].value, blues[1].value];
                extraction.candidates.push((
                    TicketCandidate::new(reds, pair, recovery.note()),
                    recovery,
                ));
                extraction.used_single_digits |=
                    reds_single || blues[0].single_digit || blues[1].single_digit;
                continue;
            }
        }

        // Exactly five unique in-range numbers and no trailing pair: cache
        // as the red zone of a ticket continued on the next row.
        let reds: Vec<Token> = tokens
            .iter()
            .copied()
            .filter(|t| RED_RANGE.contains(&t.value))
            .collect();
        if reds.len() == 5 {
            let values = [
                reds[0].value,
                reds[1].value,
                reds[2].value,
                reds[3].value,
                reds[4].value,
            ];
            if all_unique(&values) {
                let any_single = reds.iter().any(|t| t.single_digit);
                pending_reds = Some((values, any_single));
            }
        }
    }

    extraction
}

/// Extracts the draw term, trying marked, suffixed, and labeled shapes in
/// priority order, then a loose five-digit fallback.
///
/// The loose fallback accepts a standalone five-digit run whose first
/// digit is 2..=9, rejecting runs that begin with the current calendar
/// year (date fragments).
pub fn extract_term(text: &str, current_year: i32) -> Option<u32> {
    for pattern in [&*TERM_MARKED, &*TERM_SUFFIXED, &*TERM_LABELED] {
        if let Some(caps) = pattern.captures(text)
            && let Some(term) = caps.get(1).and_then(|m| m.as_str().parse().ok())
        {
            return Some(term);
        }
    }

    let year = current_year.to_string();
    DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|run| {
            run.len() == 5
                && matches!(run.as_bytes()[0], b'2'..=b'9')
                && !run.starts_with(year.as_str())
        })
        .and_then(|run| run.parse().ok())
}

/// Extracts the multi-draw count; values outside 2..=30 are assumed to be
/// misread term fragments and rejected. Defaults to 1.
pub fn extract_term_count(text: &str) -> u32 {
    for pattern in COUNT_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            // A count glued to more digits on the left is a term fragment.
            if m.start() > 0 && text.as_bytes()[m.start() - 1].is_ascii_digit() {
                continue;
            }
            if let Ok(n) = m.as_str().parse::<u32>()
                && (2..=30).contains(&n)
            {
                return n;
            }
        }
    }
    1
}

/// Removes date, time, currency, serial-run, and letter noise, keeping
/// token boundaries intact.
fn strip_noise(text: &str) -> String {
    let cleaned = DATE.replace_all(text, " ");
    let cleaned = TIME.replace_all(&cleaned, " ");
    let cleaned = CURRENCY.replace_all(&cleaned, " ");
    let cleaned = strip_serial_runs(&cleaned);
    LETTERS.replace_all(&cleaned, " ").into_owned()
}

/// Drops long digit runs that read as serial or order numbers.
///
/// Even-length runs short enough to be unseparated number groups survive
/// for sticky splitting; everything else of six digits or more goes.
fn strip_serial_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in DIGIT_RUN.find_iter(text) {
        let len = m.as_str().len();
        if len >= 6 && !(len % 2 == 0 && len <= 14) {
            out.push_str(&text[last..m.start()]);
            out.push(' ');
            last = m.end();
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Tokenizes cleaned text into candidate numbers.
///
/// Whitespace-bounded two-digit tokens are preferred; when fewer than
/// seven exist, every digit run is consumed, splitting sticky runs into
/// pairs.
fn tokenize(text: &str) -> Vec<Token> {
    let preferred: Vec<Token> = PAIR_TOKEN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .map(|value| Token {
            value,
            single_digit: false,
        })
        .collect();
    if preferred.len() >= 7 {
        return preferred;
    }

    let mut tokens = Vec::new();
    for run in DIGIT_RUN.find_iter(text) {
        split_sticky_run(run.as_str(), &mut tokens);
    }
    tokens
}

/// Splits an unseparated digit run into two-digit groups.
///
/// Even-length runs split cleanly; odd runs of three or more drop their
/// trailing digit first; a lone digit is kept as a low-confidence token.
fn split_sticky_run(run: &str, out: &mut Vec<Token>) {
    let bytes = run.as_bytes();
    match bytes.len() {
        0 => {}
        1 => {
            if let Ok(value) = run.parse() {
                out.push(Token {
                    value,
                    single_digit: true,
                });
            }
        }
        len => {
            let usable = if len % 2 == 0 { len } else { len - 1 };
            for pair in run[..usable].as_bytes().chunks(2) {
                let value = (pair[0] - b'0') * 10 + (pair[1] - b'0');
                out.push(Token {
                    value,
                    single_digit: false,
                });
            }
        }
    }
}

/// Slides a seven-wide window over range-filtered tokens, extracting
/// non-overlapping tickets.
///
/// A window is accepted when its first five values are unique reds and
/// its last two unique blues; acceptance advances by seven, rejection by
/// one.
fn window_tickets(
    tokens: &[Token],
    used_single_digits: &mut bool,
) -> Vec<(TicketCandidate, Recovery)> {
    let filtered: Vec<Token> = tokens
        .iter()
        .copied()
        .filter(|t| RED_RANGE.contains(&t.value))
        .collect();

    let mut candidates = Vec::new();
    let mut i = 0;
    while i + 7 <= filtered.len() {
        let window = &filtered[i..i + 7];
        let reds = [
            window[0].value,
            window[1].value,
            window[2].value,
            window[3].value,
            window[4].value,
        ];
        let blues = [window[5].value, window[6].value];

        let accept = all_unique(&reds)
            && blues.iter().all(|v| BLUE_RANGE.contains(v))
            && all_unique(&blues);
        if accept {
            candidates.push((
                TicketCandidate::new(reds, blues, Recovery::Window.note()),
                Recovery::Window,
            ));
            *used_single_digits |= window.iter().any(|t| t.single_digit);
            i += 7;
        } else {
            i += 1;
        }
    }
    candidates
}

/// Last-resort tier: when no window matched but at least seven in-range
/// tokens exist, takes the first five as reds and the next two as blues,
/// checking ranges only. Always low-confidence.
fn relaxed_ticket(tokens: &[Token], used_single_digits: &mut bool) -> Option<TicketCandidate> {
    let filtered: Vec<Token> = tokens
        .iter()
        .copied()
        .filter(|t| RED_RANGE.contains(&t.value))
        .collect();
    if filtered.len() < 7 {
        return None;
    }

    let blues = [filtered[5].value, filtered[6].value];
    if !blues.iter().all(|v| BLUE_RANGE.contains(v)) {
        return None;
    }

    let reds = [
        filtered[0].value,
        filtered[1].value,
        filtered[2].value,
        filtered[3].value,
        filtered[4].value,
    ];
    *used_single_digits |= filtered[..7].iter().any(|t| t.single_digit);
    Some(TicketCandidate::new(reds, blues, Recovery::Relaxed.note()))
}

/// Whether a clustered row is receipt metadata rather than numbers.
///
/// Keyword rows still parse when they carry enough digits; genuine number
/// rows sometimes share vocabulary with headers.
fn is_operational_row(line: &str) -> bool {
    if !OPERATIONAL_KEYWORDS.iter().any(|k| line.contains(k)) {
        return false;
    }
    let digits = line.chars().filter(|c| c.is_ascii_digit()).count();
    digits < KEYWORD_ROW_DIGIT_FLOOR
}

fn all_unique(values: &[u8]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, v)| !values[..i].contains(v))
}

fn unique_by_value(tokens: impl Iterator<Item = Token>) -> Vec<Token> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for token in tokens {
        if !seen.contains(&token.value) {
            seen.push(token.value);
            out.push(token);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_match_extracts_structured_ticket() {
        let tickets = direct_tickets("03 07 12 19 25 + 02 11");
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].reds, [3, 7, 12, 19, 25]);
        assert_eq!(tickets[0].blues, [2, 11]);
        assert!(!Recovery::Direct.needs_confirm());
    }

    #[test]
    fn direct_match_accepts_comma_and_plus_separators() {
        let tickets = direct_tickets("03,07,12,19,25＋02,11");
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].blues, [2, 11]);
    }

    #[test]
    fn direct_match_rejects_invalid_ranges() {
        assert!(direct_tickets("03 07 12 19 77 + 02 11").is_empty());
        assert!(direct_tickets("03 07 12 19 25 + 02 13").is_empty());
    }

    #[test]
    fn sticky_runs_yield_the_same_ticket() {
        let extraction = tokenized_tickets("0307121925 0211");
        assert_eq!(extraction.candidates.len(), 1);
        let (candidate, recovery) = &extraction.candidates[0];
        assert_eq!(candidate.reds, [3, 7, 12, 19, 25]);
        assert_eq!(candidate.blues, [2, 11]);
        assert_eq!(*recovery, Recovery::Window);
        assert!(!extraction.used_single_digits);
    }

    #[test]
    fn odd_sticky_run_drops_trailing_digit() {
        let mut tokens = Vec::new();
        split_sticky_run("03071", &mut tokens);
        let values: Vec<u8> = tokens.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![3, 7]);
    }

    #[test]
    fn lone_digit_is_low_confidence() {
        let mut tokens = Vec::new();
        split_sticky_run("7", &mut tokens);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].single_digit);
    }

    #[test]
    fn noise_is_stripped_before_tokenizing() {
        let cleaned = strip_noise("2025-11-03 12:30:05 票A12345678901234567 10.00元 03 07");
        assert!(!cleaned.contains("2025"));
        assert!(!cleaned.contains(':'));
        assert!(!cleaned.contains('A'));
        assert!(!cleaned.contains("12345678901234567"));
        assert!(cleaned.contains("03"));
    }

    #[test]
    fn even_mid_length_runs_survive_serial_stripping() {
        // Ten digits of glued ticket numbers must reach the tokenizer.
        let cleaned = strip_serial_runs("0307121925");
        assert_eq!(cleaned, "0307121925");
        // A 17-digit order number does not.
        assert_eq!(strip_serial_runs("12345678901234567").trim(), "");
    }

    #[test]
    fn window_slides_past_bad_alignment() {
        // First window has 15 in the blue slot; advancing by one finds a
        // valid alignment.
        let extraction = tokenized_tickets("03 07 12 19 25 15 09 02");
        assert_eq!(extraction.candidates.len(), 1);
        assert_eq!(extraction.candidates[0].0.reds, [7, 12, 19, 25, 15]);
        assert_eq!(extraction.candidates[0].0.blues, [9, 2]);
    }

    #[test]
    fn multiple_tickets_extract_without_overlap() {
        let extraction = tokenized_tickets("01 02 03 04 05 06 07 11 12 13 14 15 08 09");
        assert_eq!(extraction.candidates.len(), 2);
        assert_eq!(extraction.candidates[0].0.reds, [1, 2, 3, 4, 5]);
        assert_eq!(extraction.candidates[0].0.blues, [6, 7]);
        assert_eq!(extraction.candidates[1].0.reds, [11, 12, 13, 14, 15]);
        assert_eq!(extraction.candidates[1].0.blues, [8, 9]);
    }

    #[test]
    fn six_tokens_extract_nothing() {
        let extraction = tokenized_tickets("03 07 12 19 25 02");
        assert!(extraction.candidates.is_empty());
    }

    #[test]
    fn relaxed_tier_flags_duplicates_for_confirmation() {
        // Duplicate red prevents every window; the relaxed tier still
        // hands the shape forward, marked low-confidence.
        let extraction = tokenized_tickets("03 03 12 19 25 02 11");
        assert_eq!(extraction.candidates.len(), 1);
        let (candidate, recovery) = &extraction.candidates[0];
        assert_eq!(*recovery, Recovery::Relaxed);
        assert!(recovery.needs_confirm());
        assert_eq!(candidate.reds, [3, 3, 12, 19, 25]);
    }

    #[test]
    fn rows_merge_pending_reds_with_back_zone() {
        let lines = vec!["03 07 12 19 25".to_string(), "02 11".to_string()];
        let extraction = row_tickets(&lines);
        assert_eq!(extraction.candidates.len(), 1);
        let (candidate, recovery) = &extraction.candidates[0];
        assert_eq!(candidate.reds, [3, 7, 12, 19, 25]);
        assert_eq!(candidate.blues, [2, 11]);
        assert_eq!(*recovery, Recovery::RowMerge);
        assert!(!recovery.needs_confirm());
    }

    #[test]
    fn ambiguous_back_zone_row_needs_confirmation() {
        let lines = vec!["03 07 12 19 25".to_string(), "02 11 05".to_string()];
        let extraction = row_tickets(&lines);
        assert_eq!(extraction.candidates.len(), 1);
        assert_eq!(extraction.candidates[0].1, Recovery::RowMergeAmbiguous);
    }

    #[test]
    fn reds_cache_clears_after_failed_merge() {
        let lines = vec![
            "03 07 12 19 25".to_string(),
            "no numbers here".to_string(),
            "02 11".to_string(),
        ];
        let extraction = row_tickets(&lines);
        assert!(extraction.candidates.is_empty());
    }

    #[test]
    fn operational_rows_are_skipped() {
        let lines = vec![
            "开奖时间 周一".to_string(),
            "03 07 12 19 25 + 02 11".to_string(),
        ];
        let extraction = row_tickets(&lines);
        assert_eq!(extraction.candidates.len(), 1);
    }

    #[test]
    fn digit_heavy_keyword_row_still_parses() {
        let line = "开奖 03 07 12 19 25 02 11".to_string();
        let extraction = row_tickets(&[line]);
        assert_eq!(extraction.candidates.len(), 1);
    }

    #[test]
    fn marked_term_wins() {
        assert_eq!(extract_term("第25101期", 2026), Some(25101));
        assert_eq!(extract_term("第 25102 期", 2026), Some(25102));
    }

    #[test]
    fn suffixed_and_labeled_terms_follow() {
        assert_eq!(extract_term("25103期", 2026), Some(25103));
        assert_eq!(extract_term("期号: 25104", 2026), Some(25104));
    }

    #[test]
    fn loose_term_rejects_current_year_prefix() {
        assert_eq!(extract_term("单号 20261 金额", 2026), None);
        assert_eq!(extract_term("25105 大乐透", 2026), Some(25105));
    }

    #[test]
    fn loose_term_requires_plausible_leading_digit() {
        assert_eq!(extract_term("10001", 2026), None);
        assert_eq!(extract_term("no digits", 2026), None);
    }

    #[test]
    fn term_count_accepts_multi_draw_shapes() {
        assert_eq!(extract_term_count("5期10倍"), 5);
        assert_eq!(extract_term_count("连续10期"), 10);
        assert_eq!(extract_term_count("购买3期"), 3);
        assert_eq!(extract_term_count("15期投注"), 15);
    }

    #[test]
    fn term_count_rejects_term_fragments_and_extremes() {
        // Digits glued on the left mean the 期 belongs to a term string.
        assert_eq!(extract_term_count("第25101期"), 1);
        assert_eq!(extract_term_count("连续45期"), 1);
        assert_eq!(extract_term_count("1期投注"), 1);
        assert_eq!(extract_term_count(""), 1);
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "第25101期 03 07 12 19 25 15 09 02 连续3期";
        let a = tokenized_tickets(text);
        let b = tokenized_tickets(text);
        assert_eq!(a.candidates.len(), b.candidates.len());
        for ((ca, ra), (cb, rb)) in a.candidates.iter().zip(b.candidates.iter()) {
            assert_eq!(ca, cb);
            assert_eq!(ra, rb);
        }
    }
}
