//! Pipeline orchestration: one synchronous recognition request from raw
//! capture bytes to a structured parse result.
//!
//! The scanner owns the injected recognizer and the configuration; it
//! holds no per-request state, so one instance serves concurrent requests.
//! Strategies are evaluated in their fixed order, each recognizer call
//! bounded by a timeout that degrades the affected strategy to a zero
//! score instead of stalling the request.

use crate::core::config::ScanConfig;
use crate::core::errors::{ScanError, ScanResult};
use crate::core::traits::{RawFragment, TextRecognizer};
use crate::domain::fragment::OcrFragment;
use crate::domain::ticket::ParseResult;
use crate::pipeline::cluster::cluster_lines;
use crate::pipeline::extract::{self, Extraction};
use crate::pipeline::scoring::{StrategyResult, merge_text, score_text, select_best};
use crate::pipeline::validate;
use crate::processors::enhance::Strategy;
use crate::processors::scanner;
use crate::utils::image::decode_oriented;
use chrono::Datelike;
use image::RgbImage;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Extracts structured ticket data from photographed tickets.
///
/// Construct one scanner at composition time and share it; it is cheap to
/// clone the `Arc`'d recognizer handle and safe to call from multiple
/// threads.
pub struct TicketScanner {
    recognizer: Arc<dyn TextRecognizer>,
    config: ScanConfig,
}

impl TicketScanner {
    /// Creates a scanner around an initialized recognizer.
    pub fn new(recognizer: Arc<dyn TextRecognizer>, config: ScanConfig) -> Self {
        Self { recognizer, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Runs one recognition request.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The encoded capture.
    /// * `term_hint` - Caller-supplied draw term for its own comparison;
    ///   extraction does not use it.
    ///
    /// # Errors
    ///
    /// * [`ScanError::ImageDecode`] when the bytes are not an image
    /// * [`ScanError::EngineUnavailable`] when the recognizer never
    ///   initialized
    /// * [`ScanError::NoTextDetected`] when every enhancement variant
    ///   produced nothing usable
    pub fn scan(&self, bytes: &[u8], term_hint: Option<u32>) -> ScanResult<ParseResult> {
        let normalized = decode_oriented(bytes)?;
        debug!(
            width = normalized.width(),
            height = normalized.height(),
            "capture decoded"
        );

        let rectified = scanner::rectify(&normalized, &self.config);
        let best = self.best_strategy_result(&rectified)?;
        debug!(
            strategy = best.strategy,
            score = best.score,
            "selected recognition variant"
        );

        let parsed = parse_recognition(&best, &self.config, chrono::Local::now().year());
        if let (Some(hint), Some(term)) = (term_hint, parsed.start_term)
            && hint != term
        {
            debug!(hint, term, "caller term hint differs from extracted term");
        }
        Ok(parsed)
    }

    /// Enhances, recognizes, and scores every strategy in fixed order,
    /// keeping the first strictly-best result.
    fn best_strategy_result(&self, rectified: &RgbImage) -> ScanResult<StrategyResult> {
        let timeout = Duration::from_millis(self.config.recognize_timeout_ms);
        let mut results = Vec::with_capacity(Strategy::ALL.len());

        for strategy in Strategy::ALL {
            let enhanced = strategy.apply(
                rectified,
                self.config.enhance_min_side(),
                self.config.enhance_max_side(),
            );

            let fragments = match self.recognize_bounded(enhanced, timeout) {
                Ok(Some(raw)) => OcrFragment::from_raw_batch(&raw),
                Ok(None) => Vec::new(),
                Err(error @ ScanError::EngineUnavailable { .. }) => return Err(error),
                Err(error) => {
                    warn!(strategy = strategy.name(), %error, "recognizer call failed");
                    Vec::new()
                }
            };

            let merged_text = merge_text(&fragments);
            let score = if fragments.is_empty() {
                0
            } else {
                score_text(&merged_text, &fragments)
            };
            results.push(StrategyResult {
                strategy: strategy.name(),
                fragments,
                merged_text,
                score,
            });
        }

        select_best(results).ok_or(ScanError::NoTextDetected)
    }

    /// Calls the recognizer on a worker thread with a bounded wait.
    ///
    /// A timeout abandons the call and counts as a recognition miss for
    /// the strategy; the worker's late result is discarded.
    fn recognize_bounded(
        &self,
        image: RgbImage,
        timeout: Duration,
    ) -> ScanResult<Option<Vec<RawFragment>>> {
        let (sender, receiver) = mpsc::channel();
        let recognizer = Arc::clone(&self.recognizer);
        thread::spawn(move || {
            let _ = sender.send(recognizer.recognize(&image));
        });

        match receiver.recv_timeout(timeout) {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = timeout.as_millis() as u64, "recognizer call timed out");
                Ok(None)
            }
        }
    }
}

/// Parses the best strategy's recognition output into a structured result.
///
/// Extraction paths in priority order: a direct structured match over the
/// merged text, the row path over clustered lines, and finally the
/// tokenizing path over the merged text. Term and multi-draw count always
/// come from the merged text.
pub fn parse_recognition(
    best: &StrategyResult,
    config: &ScanConfig,
    current_year: i32,
) -> ParseResult {
    let start_term = extract::extract_term(&best.merged_text, current_year);
    let term_count = extract::extract_term_count(&best.merged_text);

    let direct = extract::direct_tickets(&best.merged_text);
    let extraction = if !direct.is_empty() {
        Extraction::from_direct(direct)
    } else {
        let lines = cluster_lines(&best.fragments, config.line_cluster_threshold);
        let from_rows = extract::row_tickets(&lines);
        if from_rows.candidates.is_empty() {
            extract::tokenized_tickets(&best.merged_text)
        } else {
            from_rows
        }
    };

    validate::finalize(extraction, start_term, term_count)
}
