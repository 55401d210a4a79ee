//! The text recognizer seam.
//!
//! The pipeline consumes text recognition as a capability rather than
//! implementing it: any detection + recognition backend can sit behind
//! [`TextRecognizer`], and tests inject deterministic stubs through the
//! same trait. The composition root constructs the recognizer once and
//! shares it read-only across in-flight requests.

use crate::core::errors::ScanResult;
use image::RgbImage;

/// One recognized text item as a backend reports it, before normalization.
///
/// Backends disagree on shape: some report four corner points, some a
/// two-point rectangle, some omit confidence entirely. The pipeline
/// normalizes every record into a fixed
/// [`OcrFragment`](crate::domain::fragment::OcrFragment) on ingestion and
/// never works with this loose shape directly.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFragment {
    /// Boundary points in image coordinates, in whatever count and order
    /// the backend produced them.
    pub points: Vec<(f32, f32)>,
    /// The recognized text.
    pub text: String,
    /// Recognition confidence, if the backend reports one.
    pub confidence: Option<f32>,
}

impl RawFragment {
    /// Creates a raw fragment from backend output.
    pub fn new(points: Vec<(f32, f32)>, text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            points,
            text: text.into(),
            confidence,
        }
    }
}

/// A text recognition backend.
///
/// Implementations must be safe for concurrent use: the scanner holds one
/// instance behind an `Arc` and calls it from multiple in-flight requests
/// without synchronization. Configuration is fixed at construction time.
pub trait TextRecognizer: Send + Sync {
    /// Recognizes text in the given image.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(fragments))` - recognition succeeded, possibly with an
    ///   empty fragment list
    /// * `Ok(None)` - recognition ran but found nothing usable
    /// * `Err(ScanError::EngineUnavailable)` - the backend never
    ///   initialized; fatal for the whole request
    /// * `Err(_)` - a per-call failure; the pipeline degrades the affected
    ///   strategy to score zero
    fn recognize(&self, image: &RgbImage) -> ScanResult<Option<Vec<RawFragment>>>;
}
