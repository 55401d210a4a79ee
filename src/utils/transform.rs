//! Perspective transformation for ticket rectification.
//!
//! Maps the four ordered corners of a detected ticket boundary onto an
//! axis-aligned target rectangle and resamples the source image through
//! the resulting homography with bilinear interpolation.

use crate::core::errors::{ProcessingStage, ScanError, ScanResult};
use crate::processors::geometry::Point;
use image::{Rgb, RgbImage};
use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;

/// Target rectangle size for an ordered source quad.
///
/// Width is the longer of the top and bottom edges, height the longer of
/// the left and right edges, both floored to integers. The quad must be in
/// top-left, top-right, bottom-right, bottom-left order.
pub fn target_size(quad: &[Point; 4]) -> (u32, u32) {
    let [tl, tr, br, bl] = quad;
    let top = tl.distance(tr);
    let bottom = bl.distance(br);
    let left = tl.distance(bl);
    let right = tr.distance(br);
    (top.max(bottom) as u32, left.max(right) as u32)
}

/// Calculates the perspective matrix mapping four source points to four
/// destination points.
///
/// Solves the standard 8x8 linear system for the homography coefficients.
///
/// # Errors
///
/// Returns a transform-stage error when the system is singular (degenerate
/// quad).
pub fn perspective_transform(
    src_points: &[Point; 4],
    dst_points: &[Point; 4],
) -> ScanResult<Matrix3<f32>> {
    let mut a = nalgebra::DMatrix::<f32>::zeros(8, 8);
    let mut b = nalgebra::DVector::<f32>::zeros(8);

    for i in 0..4 {
        let src = &src_points[i];
        let dst = &dst_points[i];

        a.set_row(
            i * 2,
            &nalgebra::RowDVector::from_row_slice(&[
                src.x,
                src.y,
                1.0,
                0.0,
                0.0,
                0.0,
                -src.x * dst.x,
                -src.y * dst.x,
            ]),
        );
        b[i * 2] = dst.x;

        a.set_row(
            i * 2 + 1,
            &nalgebra::RowDVector::from_row_slice(&[
                0.0,
                0.0,
                0.0,
                src.x,
                src.y,
                1.0,
                -src.x * dst.y,
                -src.y * dst.y,
            ]),
        );
        b[i * 2 + 1] = dst.y;
    }

    let solution = a.lu().solve(&b).ok_or_else(|| {
        ScanError::processing(
            ProcessingStage::Transform,
            "cannot solve perspective transform for degenerate corner points",
        )
    })?;

    Ok(Matrix3::new(
        solution[0],
        solution[1],
        solution[2],
        solution[3],
        solution[4],
        solution[5],
        solution[6],
        solution[7],
        1.0,
    ))
}

/// Resamples an image through a perspective matrix into a
/// `dst_width` x `dst_height` output.
///
/// Uses inverse mapping with bilinear interpolation; destination rows are
/// processed in parallel. Pixels mapping outside the source stay black.
///
/// # Errors
///
/// Returns a transform-stage error when the matrix is not invertible.
pub fn warp_perspective(
    src_image: &RgbImage,
    transform: &Matrix3<f32>,
    dst_width: u32,
    dst_height: u32,
) -> ScanResult<RgbImage> {
    let inverse = transform.try_inverse().ok_or_else(|| {
        ScanError::processing(
            ProcessingStage::Transform,
            "perspective matrix is not invertible",
        )
    })?;

    if dst_width == 0 || dst_height == 0 {
        return Err(ScanError::invalid_input("zero-sized warp target"));
    }

    let mut dst_image = RgbImage::new(dst_width, dst_height);
    let (src_width, src_height) = src_image.dimensions();
    let buffer: &mut [u8] = dst_image.as_mut();

    buffer
        .par_chunks_mut((dst_width * 3) as usize)
        .enumerate()
        .for_each(|(dst_y, row)| {
            for dst_x in 0..dst_width {
                let src_point = inverse * Vector3::new(dst_x as f32, dst_y as f32, 1.0);

                let mut pixel = Rgb([0, 0, 0]);
                if src_point.z.abs() > f32::EPSILON {
                    let src_x = src_point.x / src_point.z;
                    let src_y = src_point.y / src_point.z;

                    if src_x >= 0.0
                        && src_y >= 0.0
                        && src_x < (src_width - 1) as f32
                        && src_y < (src_height - 1) as f32
                    {
                        pixel = bilinear_interpolate(src_image, src_x, src_y);
                    }
                }

                let index = (dst_x * 3) as usize;
                row[index..index + 3].copy_from_slice(&pixel.0);
            }
        });

    Ok(dst_image)
}

/// Pixel value at fractional coordinates, interpolated from the four
/// nearest neighbours.
fn bilinear_interpolate(image: &RgbImage, x: f32, y: f32) -> Rgb<u8> {
    let x1 = x.floor() as u32;
    let y1 = y.floor() as u32;
    let x2 = (x1 + 1).min(image.width() - 1);
    let y2 = (y1 + 1).min(image.height() - 1);

    let dx = x - x1 as f32;
    let dy = y - y1 as f32;

    let p11 = image.get_pixel(x1, y1);
    let p12 = image.get_pixel(x1, y2);
    let p21 = image.get_pixel(x2, y1);
    let p22 = image.get_pixel(x2, y2);

    let mut result = [0u8; 3];
    for (i, channel) in result.iter_mut().enumerate() {
        let val = (1.0 - dx) * (1.0 - dy) * p11.0[i] as f32
            + dx * (1.0 - dy) * p21.0[i] as f32
            + (1.0 - dx) * dy * p12.0[i] as f32
            + dx * dy * p22.0[i] as f32;
        *channel = val.round().clamp(0.0, 255.0) as u8;
    }
    Rgb(result)
}
