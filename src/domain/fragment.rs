//! Recognized text fragments in their normalized, fixed shape.

use crate::core::traits::RawFragment;
use crate::processors::geometry::Point;

/// One recognized text fragment with a fixed four-point boundary quad and
/// an explicit optional confidence.
///
/// Fragments are immutable once created. All pipeline stages work with this
/// shape; the loosely-shaped backend records are converted through
/// [`OcrFragment::from_raw`] at the recognizer boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrFragment {
    /// Four boundary points in image coordinates. The first point is the
    /// one the backend reported first; row clustering keys off it.
    pub quad: [Point; 4],
    /// The recognized text.
    pub text: String,
    /// Recognition confidence in `[0, 1]`, when the backend reported one.
    pub confidence: Option<f32>,
}

impl OcrFragment {
    /// Normalizes a backend record into the fixed fragment shape.
    ///
    /// Backends report boundary points in inconsistent counts: four corner
    /// points, a two-point rectangle, or occasionally a bare anchor. Any
    /// shape is completed into a four-point quad from the axis-aligned
    /// bounding rectangle of whatever points exist. Confidence is clamped
    /// into `[0, 1]`; a non-finite value counts as absent.
    pub fn from_raw(raw: &RawFragment) -> Self {
        let quad = quad_from_points(&raw.points);
        let confidence = raw
            .confidence
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 1.0));
        Self {
            quad,
            text: raw.text.clone(),
            confidence,
        }
    }

    /// Normalizes a whole batch of backend records, dropping empty-text
    /// entries.
    pub fn from_raw_batch(raw: &[RawFragment]) -> Vec<Self> {
        raw.iter()
            .filter(|r| !r.text.trim().is_empty())
            .map(Self::from_raw)
            .collect()
    }

    /// Y coordinate of the fragment's first boundary point.
    pub fn top(&self) -> f32 {
        self.quad[0].y
    }

    /// X coordinate of the fragment's first boundary point.
    pub fn left(&self) -> f32 {
        self.quad[0].x
    }
}

fn quad_from_points(points: &[(f32, f32)]) -> [Point; 4] {
    if points.len() >= 4 {
        return [
            Point::new(points[0].0, points[0].1),
            Point::new(points[1].0, points[1].1),
            Point::new(points[2].0, points[2].1),
            Point::new(points[3].0, points[3].1),
        ];
    }

    // Complete a partial shape from its bounding rectangle.
    let (min_x, min_y, max_x, max_y) = points.iter().fold(
        (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        |(min_x, min_y, max_x, max_y), &(x, y)| {
            (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
        },
    );
    if points.is_empty() {
        return [Point::new(0.0, 0.0); 4];
    }
    [
        Point::new(min_x, min_y),
        Point::new(max_x, min_y),
        Point::new(max_x, max_y),
        Point::new(min_x, max_y),
    ]
}
