//! Image enhancement strategies evaluated before recognition.
//!
//! Five independent, pure transforms. Each first resizes the image into a
//! working resolution range balancing recognition accuracy against speed,
//! then applies its enhancement. A strategy that fails internally returns
//! its (resized) input unchanged; enhancement never aborts a request.

use crate::core::errors::{ProcessingStage, ScanError, ScanResult};
use image::imageops::{self, FilterType};
use image::{GrayImage, Rgb, RgbImage};
use imageproc::contrast::otsu_level;
use imageproc::filter::{gaussian_blur_f32, median_filter};
use tracing::warn;

/// Classic 3x3 sharpen kernel.
const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// Sigma of the Gaussian-weighted local mean for adaptive thresholding.
const ADAPTIVE_SIGMA: f32 = 8.0;

/// Offset subtracted from the local mean before comparing.
const ADAPTIVE_OFFSET: i16 = 10;

/// One image enhancement variant.
///
/// The fixed evaluation order in [`Strategy::ALL`] doubles as the
/// tie-break order when two variants score equally downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Moderate contrast boost plus sharpening.
    Standard,
    /// Aggressive contrast, slight brightening, double sharpening.
    HighContrast,
    /// Global Otsu binarization.
    Binarize,
    /// Color denoise, then contrast and sharpening.
    Denoise,
    /// Local Gaussian-weighted adaptive threshold.
    AdaptiveThreshold,
}

impl Strategy {
    /// All strategies in their fixed, deterministic evaluation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Standard,
        Strategy::HighContrast,
        Strategy::Binarize,
        Strategy::Denoise,
        Strategy::AdaptiveThreshold,
    ];

    /// Stable name used in logs and result reporting.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::HighContrast => "high-contrast",
            Strategy::Binarize => "binarize",
            Strategy::Denoise => "denoise",
            Strategy::AdaptiveThreshold => "adaptive-threshold",
        }
    }

    /// Applies the strategy, recovering from any internal failure by
    /// returning the resized input unchanged.
    ///
    /// # Arguments
    ///
    /// * `image` - The rectified ticket image.
    /// * `min_side` / `max_side` - Working range for the image's long side.
    pub fn apply(self, image: &RgbImage, min_side: u32, max_side: u32) -> RgbImage {
        let resized = resize_into_range(image, min_side, max_side);
        match self.transform(&resized) {
            Ok(enhanced) => enhanced,
            Err(error) => {
                warn!(
                    strategy = self.name(),
                    %error,
                    "enhancement failed, using unenhanced image"
                );
                resized
            }
        }
    }

    fn transform(self, image: &RgbImage) -> ScanResult<RgbImage> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ScanError::processing(
                ProcessingStage::Enhancement,
                "empty image",
            ));
        }
        match self {
            Strategy::Standard => Ok(sharpen(&scale_contrast(image, 1.5))),
            Strategy::HighContrast => {
                let boosted = scale_brightness(&scale_contrast(image, 2.2), 1.1);
                Ok(sharpen(&sharpen(&boosted)))
            }
            Strategy::Binarize => Ok(otsu_binarize(image)),
            Strategy::Denoise => {
                let denoised = median_filter(image, 1, 1);
                Ok(sharpen(&scale_contrast(&denoised, 1.6)))
            }
            Strategy::AdaptiveThreshold => Ok(adaptive_threshold(image)),
        }
    }
}

/// Resizes so the long side lands inside `[min_side, max_side]`,
/// preserving aspect ratio. Images already inside the range pass through.
fn resize_into_range(image: &RgbImage, min_side: u32, max_side: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let long_side = width.max(height);
    if long_side == 0 {
        return image.clone();
    }

    let target = if long_side < min_side {
        min_side
    } else if long_side > max_side {
        max_side
    } else {
        return image.clone();
    };

    let scale = target as f32 / long_side as f32;
    let new_width = ((width as f32 * scale).round() as u32).max(1);
    let new_height = ((height as f32 * scale).round() as u32).max(1);
    imageops::resize(image, new_width, new_height, FilterType::CatmullRom)
}

/// Scales contrast around the image's mean luminance.
fn scale_contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_luma(image);
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = ((*channel as f32 - mean) * factor + mean).clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Scales every channel by a brightness factor.
fn scale_brightness(image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = (*channel as f32 * factor).clamp(0.0, 255.0) as u8;
        }
    }
    out
}

fn sharpen(image: &RgbImage) -> RgbImage {
    imageops::filter3x3(image, &SHARPEN_KERNEL)
}

fn mean_luma(image: &RgbImage) -> f32 {
    let mut sum = 0.0f64;
    for pixel in image.pixels() {
        sum += 0.299 * pixel.0[0] as f64 + 0.587 * pixel.0[1] as f64 + 0.114 * pixel.0[2] as f64;
    }
    let count = (image.width() as u64 * image.height() as u64).max(1);
    (sum / count as f64) as f32
}

/// Grayscale, global Otsu threshold, back to three channels.
fn otsu_binarize(image: &RgbImage) -> RgbImage {
    let gray = imageops::grayscale(image);
    let level = otsu_level(&gray);
    binary_to_rgb(&gray, |value| value > level)
}

/// Grayscale, threshold against a Gaussian-weighted local mean, back to
/// three channels.
fn adaptive_threshold(image: &RgbImage) -> RgbImage {
    let gray = imageops::grayscale(image);
    let local_mean = gaussian_blur_f32(&gray, ADAPTIVE_SIGMA);
    let mut out = RgbImage::new(gray.width(), gray.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let value = gray.get_pixel(x, y).0[0] as i16;
        let mean = local_mean.get_pixel(x, y).0[0] as i16;
        let bit = if value < mean - ADAPTIVE_OFFSET { 0 } else { 255 };
        *pixel = Rgb([bit, bit, bit]);
    }
    out
}

fn binary_to_rgb(gray: &GrayImage, is_white: impl Fn(u8) -> bool) -> RgbImage {
    let mut out = RgbImage::new(gray.width(), gray.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let bit = if is_white(gray.get_pixel(x, y).0[0]) {
            255
        } else {
            0
        };
        *pixel = Rgb([bit, bit, bit]);
    }
    out
}
