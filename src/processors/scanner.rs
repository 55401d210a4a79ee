//! Ticket boundary detection and perspective rectification.
//!
//! Finds the ticket's quadrilateral outline in a downscaled working copy
//! (grayscale, Gaussian blur, Canny edges, contour extraction), then warps
//! the full-resolution image so the ticket fills an axis-aligned rectangle.
//! Rectification is best-effort: when no acceptable boundary exists the
//! input passes through unchanged and only recognition accuracy degrades.

use crate::core::config::ScanConfig;
use crate::core::errors::ScanResult;
use crate::processors::geometry::{
    Point, approx_polygon, order_quad, polygon_area, polygon_perimeter,
};
use crate::utils::transform::{perspective_transform, target_size, warp_perspective};
use image::RgbImage;
use image::imageops::{self, FilterType};
use imageproc::contours::find_contours;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use tracing::{debug, warn};

/// How many of the largest contours are considered as boundary candidates.
const CANDIDATE_CONTOURS: usize = 5;

/// Polygon approximation tolerance as a fraction of the contour perimeter.
const APPROX_EPSILON_RATIO: f32 = 0.02;

/// Gaussian blur sigma applied before edge detection.
const BLUR_SIGMA: f32 = 1.4;

/// Canny hysteresis thresholds.
const CANNY_LOW: f32 = 50.0;
const CANNY_HIGH: f32 = 150.0;

/// Rectifies the ticket in the image, or returns the image unchanged when
/// no boundary is found.
///
/// The absence of rectification never fails a request; every internal
/// error degrades to pass-through.
pub fn rectify(image: &RgbImage, config: &ScanConfig) -> RgbImage {
    let Some(quad) = find_ticket_quad(image, config) else {
        debug!("no ticket boundary found, passing image through");
        return image.clone();
    };

    match warp_to_quad(image, &quad) {
        Ok(warped) => {
            debug!(
                width = warped.width(),
                height = warped.height(),
                "ticket boundary rectified"
            );
            warped
        }
        Err(error) => {
            warn!(%error, "rectification failed, passing image through");
            image.clone()
        }
    }
}

/// Detects the ticket's four ordered corners in full-resolution
/// coordinates.
///
/// Returns `None` when no contour approximates to a quadrilateral above
/// the configured area threshold.
pub fn find_ticket_quad(image: &RgbImage, config: &ScanConfig) -> Option<[Point; 4]> {
    let (width, height) = image.dimensions();
    if width < 4 || height < 4 {
        return None;
    }

    // Detection runs on a fixed-height working copy; corner coordinates
    // are rescaled to the original resolution afterwards.
    let ratio = if height > config.working_height {
        height as f32 / config.working_height as f32
    } else {
        1.0
    };
    let working = if ratio > 1.0 {
        let w = ((width as f32 / ratio).round() as u32).max(1);
        imageops::resize(image, w, config.working_height, FilterType::Triangle)
    } else {
        image.clone()
    };

    let gray = imageops::grayscale(&working);
    let blurred = gaussian_blur_f32(&gray, BLUR_SIGMA);
    let edges = canny(&blurred, CANNY_LOW, CANNY_HIGH);

    let mut contours: Vec<Vec<Point>> = find_contours::<i32>(&edges)
        .into_iter()
        .map(|c| {
            c.points
                .into_iter()
                .map(Point::from_contour_point)
                .collect()
        })
        .collect();
    contours.sort_by(|a, b| {
        polygon_area(b)
            .partial_cmp(&polygon_area(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for contour in contours.iter().take(CANDIDATE_CONTOURS) {
        let perimeter = polygon_perimeter(contour);
        let approx = approx_polygon(contour, APPROX_EPSILON_RATIO * perimeter);
        if approx.len() != 4 {
            continue;
        }
        if polygon_area(&approx) <= config.min_boundary_area {
            continue;
        }

        let quad = order_quad(&[approx[0], approx[1], approx[2], approx[3]]);
        return Some(quad.map(|p| Point::new(p.x * ratio, p.y * ratio)));
    }
    None
}

fn warp_to_quad(image: &RgbImage, quad: &[Point; 4]) -> ScanResult<RgbImage> {
    let (target_width, target_height) = target_size(quad);
    let destination = [
        Point::new(0.0, 0.0),
        Point::new(target_width as f32, 0.0),
        Point::new(target_width as f32, target_height as f32),
        Point::new(0.0, target_height as f32),
    ];
    let transform = perspective_transform(quad, &destination)?;
    warp_perspective(image, &transform, target_width, target_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use imageproc::drawing::draw_polygon_mut;
    use imageproc::point::Point as DrawPoint;

    fn skewed_ticket_image() -> (RgbImage, [Point; 4]) {
        let mut image = RgbImage::from_pixel(600, 600, Rgb([12, 12, 12]));
        let corners = [
            DrawPoint::new(50, 40),
            DrawPoint::new(530, 60),
            DrawPoint::new(560, 540),
            DrawPoint::new(40, 500),
        ];
        draw_polygon_mut(&mut image, &corners, Rgb([235, 235, 235]));
        let quad = [
            Point::new(50.0, 40.0),
            Point::new(530.0, 60.0),
            Point::new(560.0, 540.0),
            Point::new(40.0, 500.0),
        ];
        (image, quad)
    }

    #[test]
    fn skewed_quad_is_detected_near_drawn_corners() {
        let (image, drawn) = skewed_ticket_image();
        let config = ScanConfig::default();

        let detected = find_ticket_quad(&image, &config).expect("boundary should be found");
        for (found, expected) in detected.iter().zip(drawn.iter()) {
            assert!(
                found.distance(expected) < 12.0,
                "corner {found:?} too far from {expected:?}"
            );
        }
    }

    #[test]
    fn skewed_quad_rectifies_to_target_size() {
        let (image, _) = skewed_ticket_image();
        let config = ScanConfig::default();

        let detected = find_ticket_quad(&image, &config).unwrap();
        let (expected_width, expected_height) = target_size(&detected);

        let rectified = rectify(&image, &config);
        assert_eq!(rectified.dimensions(), (expected_width, expected_height));
    }

    #[test]
    fn featureless_image_passes_through_unchanged() {
        let image = RgbImage::from_pixel(320, 240, Rgb([128, 128, 128]));
        let config = ScanConfig::default();

        let out = rectify(&image, &config);
        assert_eq!(out, image);
    }

    #[test]
    fn tiny_image_passes_through() {
        let image = RgbImage::new(2, 2);
        let out = rectify(&image, &ScanConfig::default());
        assert_eq!(out.dimensions(), (2, 2));
    }
}
