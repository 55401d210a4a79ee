//! Groups recognized fragments into text rows.
//!
//! The recognizer returns fragments in no particular order; row-oriented
//! parsing needs them as reading-order lines. Fragments whose first
//! boundary point sits within a vertical threshold of the current row's
//! reference point share that row.

use crate::domain::fragment::OcrFragment;

/// Clusters fragments into top-to-bottom, left-to-right line strings.
///
/// # Arguments
///
/// * `fragments` - Fragments in any order.
/// * `y_threshold` - Maximum vertical distance from the row's reference
///   point (the first fragment assigned to it) for a fragment to join.
pub fn cluster_lines(fragments: &[OcrFragment], y_threshold: f32) -> Vec<String> {
    let mut sorted: Vec<&OcrFragment> = fragments.iter().collect();
    sorted.sort_by(|a, b| {
        a.top()
            .partial_cmp(&b.top())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut rows: Vec<Vec<&OcrFragment>> = Vec::new();
    let mut reference_y = 0.0f32;
    for fragment in sorted {
        match rows.last_mut() {
            Some(row) if (fragment.top() - reference_y).abs() <= y_threshold => {
                row.push(fragment);
            }
            _ => {
                reference_y = fragment.top();
                rows.push(vec![fragment]);
            }
        }
    }

    rows.into_iter()
        .map(|mut row| {
            row.sort_by(|a, b| {
                a.left()
                    .partial_cmp(&b.left())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            row.iter()
                .map(|f| f.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::RawFragment;

    fn fragment(x: f32, y: f32, text: &str) -> OcrFragment {
        OcrFragment::from_raw(&RawFragment::new(
            vec![(x, y), (x + 40.0, y), (x + 40.0, y + 20.0), (x, y + 20.0)],
            text,
            Some(0.9),
        ))
    }

    #[test]
    fn fragments_cluster_into_reading_order() {
        let fragments = vec![
            fragment(200.0, 12.0, "07"),
            fragment(10.0, 100.0, "02"),
            fragment(10.0, 8.0, "03"),
            fragment(80.0, 104.0, "11"),
        ];
        let lines = cluster_lines(&fragments, 30.0);
        assert_eq!(lines, vec!["03 07", "02 11"]);
    }

    #[test]
    fn distant_rows_do_not_merge() {
        let fragments = vec![fragment(0.0, 0.0, "a"), fragment(0.0, 31.0, "b")];
        let lines = cluster_lines(&fragments, 30.0);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn threshold_is_measured_from_row_reference() {
        // 0 and 25 share a row; 55 is beyond the reference (0) + threshold.
        let fragments = vec![
            fragment(0.0, 0.0, "a"),
            fragment(10.0, 25.0, "b"),
            fragment(20.0, 55.0, "c"),
        ];
        let lines = cluster_lines(&fragments, 30.0);
        assert_eq!(lines, vec!["a b", "c"]);
    }

    #[test]
    fn empty_input_gives_no_lines() {
        assert!(cluster_lines(&[], 30.0).is_empty());
    }
}
