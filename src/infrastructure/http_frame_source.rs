// HTTP frame source - fetches, decodes, and crops radar snapshots
use crate::application::frame_source::FrameSource;
use crate::domain::frame::RadarFrame;
use anyhow::{Context, Result};
use async_trait::async_trait;
use image::RgbImage;
use thiserror::Error;

/// Coverage crop, centered in the source image.
pub const CROP_WIDTH: u32 = 320;
pub const CROP_HEIGHT: u32 = 400;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("radar source returned HTTP status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("could not decode radar image: {0}")]
    Decode(#[from] image::ImageError),
}

pub struct HttpFrameSource {
    client: reqwest::Client,
}

impl HttpFrameSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameSource for HttpFrameSource {
    async fn fetch_frame(&self, url: &str) -> Result<RadarFrame> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to request radar snapshot")?;

        if !response.status().is_success() {
            return Err(FrameError::BadStatus(response.status()).into());
        }

        let bytes = response
            .bytes()
            .await
            .context("failed to read radar snapshot body")?;
        let decoded = image::load_from_memory(&bytes).map_err(FrameError::Decode)?;

        // Alpha, if the source carries one, is dropped here.
        Ok(crop_coverage_window(&decoded.to_rgb8()))
    }
}

/// Crop the centered coverage window out of a decoded snapshot. A source
/// smaller than the window in either dimension is clamped to its own bounds
/// in that dimension rather than rejected.
pub fn crop_coverage_window(source: &RgbImage) -> RadarFrame {
    let (width, height) = source.dimensions();
    let crop_width = CROP_WIDTH.min(width);
    let crop_height = CROP_HEIGHT.min(height);
    let left = (width - crop_width) / 2;
    let top = (height - crop_height) / 2;

    let cropped = image::imageops::crop_imm(source, left, top, crop_width, crop_height).to_image();
    let pixels = cropped.pixels().map(|p| [p[0], p[1], p[2]]).collect();
    RadarFrame::new(crop_width, crop_height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_crop_is_centered_in_full_size_source() {
        // 640x800 source: the window must be (160,200)-(480,600). Mark the
        // window's corners in the source and check they land at the frame's
        // corners.
        let mut source = RgbImage::new(640, 800);
        source.put_pixel(160, 200, Rgb([1, 2, 3]));
        source.put_pixel(479, 599, Rgb([4, 5, 6]));
        source.put_pixel(159, 200, Rgb([9, 9, 9]));

        let frame = crop_coverage_window(&source);

        assert_eq!(frame.width(), 320);
        assert_eq!(frame.height(), 400);
        assert_eq!(frame.pixel(0, 0), [1, 2, 3]);
        assert_eq!(frame.pixel(319, 399), [4, 5, 6]);
    }

    #[test]
    fn test_undersized_source_clamps_instead_of_erroring() {
        let source = RgbImage::from_pixel(100, 500, Rgb([7, 7, 7]));

        let frame = crop_coverage_window(&source);

        assert_eq!(frame.width(), 100);
        assert_eq!(frame.height(), 400);
        assert_eq!(frame.pixel(0, 0), [7, 7, 7]);
    }

    #[test]
    fn test_exact_size_source_is_untouched() {
        let source = RgbImage::from_pixel(320, 400, Rgb([8, 8, 8]));

        let frame = crop_coverage_window(&source);

        assert_eq!(frame.width(), 320);
        assert_eq!(frame.height(), 400);
    }
}
