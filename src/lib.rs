//! # Lotto OCR
//!
//! A Rust library that extracts structured Super Lotto ticket data from
//! photographed or screenshotted paper tickets: the five front-zone ("red")
//! numbers, the two back-zone ("blue") numbers, the draw-term identifier,
//! and the multi-draw count.
//!
//! The pipeline reconciles noisy, skewed, variably-lit captures with a text
//! recognizer that returns unordered fragments of uncertain confidence,
//! using layered heuristics and fallback tiers to recover exact structured
//! data with hard range and uniqueness constraints.
//!
//! ## Pipeline
//!
//! 1. Decode the capture and correct its embedded orientation
//! 2. Detect the ticket boundary and rectify perspective skew
//! 3. Enhance the rectified image with five independent strategies
//! 4. Recognize text on each variant through an injected recognizer
//! 5. Score every variant and keep the best recognition output
//! 6. Cluster fragments into rows, extract numbers through tiered
//!    heuristics, and validate the candidates
//!
//! The text recognizer itself is a consumed capability: callers construct
//! an implementation of [`core::traits::TextRecognizer`] (typically backed
//! by a detection + recognition model pair) and hand it to the scanner.
//! Nothing in this crate persists state; every entity lives for exactly one
//! recognition request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lotto_ocr::prelude::*;
//! use std::sync::Arc;
//!
//! # fn recognizer() -> Arc<dyn TextRecognizer> { unimplemented!() }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = TicketScanner::new(recognizer(), ScanConfig::default());
//!
//! let bytes = std::fs::read("ticket.jpg")?;
//! let parsed = scanner.scan(&bytes, None)?;
//!
//! for ticket in &parsed.tickets {
//!     println!("{}", ticket.display_numbers());
//! }
//! if parsed.need_confirm {
//!     println!("low-confidence result, ask the user to verify");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! * [`core`] - Error types, configuration, and the recognizer trait seam
//! * [`domain`] - Ticket candidates, parse results, and text fragments
//! * [`processors`] - Boundary detection, rectification, and enhancement
//! * [`pipeline`] - Scoring, clustering, extraction, and orchestration
//! * [`utils`] - Image decoding and perspective transforms

pub mod core;
pub mod domain;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use lotto_ocr::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::{EngineConfig, ScanConfig};
    pub use crate::core::errors::{ScanError, ScanResult};
    pub use crate::core::traits::{RawFragment, TextRecognizer};
    pub use crate::domain::fragment::OcrFragment;
    pub use crate::domain::ticket::{ParseResult, TicketCandidate};
    pub use crate::pipeline::scan::TicketScanner;
}
