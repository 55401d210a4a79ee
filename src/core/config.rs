//! Configuration surface for the recognition pipeline.
//!
//! Two layers: [`EngineConfig`] holds the tunables consumed by the text
//! recognizer implementation, [`ScanConfig`] holds everything the pipeline
//! itself needs. Both deserialize from operator-supplied JSON/TOML with
//! every field defaulted, so a partial config is always valid.

use serde::{Deserialize, Serialize};

/// Tunables for the text recognizer (detection + recognition model pair).
///
/// The pipeline does not interpret these values; they are handed to the
/// recognizer implementation at construction time and must not be mutated
/// afterwards, so one engine instance can serve concurrent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pixel-level detection confidence threshold. Lower values recover
    /// fainter strokes at the cost of more noise regions.
    #[serde(default = "default_det_db_thresh")]
    pub det_db_thresh: f32,

    /// Text-box confidence threshold. Boxes scoring below it are dropped;
    /// lowering it raises recall on degraded prints and lowers precision.
    #[serde(default = "default_det_db_box_thresh")]
    pub det_db_box_thresh: f32,

    /// Expansion ratio applied to detected boxes before recognition.
    /// Larger values capture digits that bleed past their box at the risk
    /// of merging neighbouring numbers into one fragment.
    #[serde(default = "default_det_db_unclip_ratio")]
    pub det_db_unclip_ratio: f32,

    /// Number of text boxes recognized per model invocation.
    #[serde(default = "default_rec_batch_num")]
    pub rec_batch_num: usize,
}

fn default_det_db_thresh() -> f32 {
    0.3
}

fn default_det_db_box_thresh() -> f32 {
    0.5
}

fn default_det_db_unclip_ratio() -> f32 {
    1.6
}

fn default_rec_batch_num() -> usize {
    6
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            det_db_thresh: default_det_db_thresh(),
            det_db_box_thresh: default_det_db_box_thresh(),
            det_db_unclip_ratio: default_det_db_unclip_ratio(),
            rec_batch_num: default_rec_batch_num(),
        }
    }
}

/// Configuration for one [`TicketScanner`](crate::pipeline::scan::TicketScanner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Recognizer tunables, exposed here so operators configure the whole
    /// pipeline through one flat surface.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Working height the boundary detector downscales to before edge
    /// extraction. Detection coordinates are rescaled back afterwards.
    #[serde(default = "default_working_height")]
    pub working_height: u32,

    /// Minimum contour area (in working-scale pixels) for a quadrilateral
    /// to be accepted as the ticket boundary.
    #[serde(default = "default_min_boundary_area")]
    pub min_boundary_area: f32,

    /// Vertical distance (pixels) within which fragments are clustered
    /// into the same text row.
    #[serde(default = "default_line_cluster_threshold")]
    pub line_cluster_threshold: f32,

    /// Bounded timeout for a single recognizer call, in milliseconds.
    /// A timed-out call fails that strategy (score 0) instead of stalling
    /// the request.
    #[serde(default = "default_recognize_timeout_ms")]
    pub recognize_timeout_ms: u64,

    /// Low-power execution hint: lowers the enhancement resolution ceiling
    /// to trade recognition accuracy for speed.
    #[serde(default)]
    pub low_power: bool,
}

fn default_working_height() -> u32 {
    500
}

fn default_min_boundary_area() -> f32 {
    10_000.0
}

fn default_line_cluster_threshold() -> f32 {
    30.0
}

fn default_recognize_timeout_ms() -> u64 {
    10_000
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            working_height: default_working_height(),
            min_boundary_area: default_min_boundary_area(),
            line_cluster_threshold: default_line_cluster_threshold(),
            recognize_timeout_ms: default_recognize_timeout_ms(),
            low_power: false,
        }
    }
}

impl ScanConfig {
    /// Longest side the enhancement strategies resize up to.
    ///
    /// The low-power hint caps the ceiling well below the full-quality
    /// limit; recognition accuracy degrades gracefully with it.
    pub fn enhance_max_side(&self) -> u32 {
        if self.low_power { 1600 } else { 2500 }
    }

    /// Shortest long-side length the enhancement strategies upscale to.
    pub fn enhance_min_side(&self) -> u32 {
        1000
    }
}
