// Pixel classification against the band palette
use crate::domain::band::Band;
use crate::domain::frame::RadarFrame;

/// Default per-channel color tolerance on the 0-255 scale.
pub const DEFAULT_TOLERANCE: u8 = 30;

/// Count, for each band, the pixels whose color sits within `tolerance` of
/// the band's reference color in every channel. Counting is inclusive:
/// bands overlap in color space, and a pixel within tolerance of several
/// bands counts once in each.
pub fn count_band_pixels(frame: &RadarFrame, bands: &[Band], tolerance: u8) -> Vec<u64> {
    bands
        .iter()
        .map(|band| {
            frame
                .pixels()
                .filter(|pixel| matches_reference(pixel, band.rgb, tolerance))
                .count() as u64
        })
        .collect()
}

fn matches_reference(pixel: &[u8; 3], reference: [u8; 3], tolerance: u8) -> bool {
    pixel
        .iter()
        .zip(reference)
        .all(|(&channel, ref_channel)| channel.abs_diff(ref_channel) <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::band::RAIN_BANDS;

    fn band(label: &'static str, rgb: [u8; 3]) -> Band {
        Band { label, rgb }
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let reference = [100, 100, 100];
        assert!(matches_reference(&[130, 100, 70], reference, 30));
        assert!(!matches_reference(&[131, 100, 100], reference, 30));
        assert!(!matches_reference(&[100, 100, 69], reference, 30));
    }

    #[test]
    fn test_pixel_within_two_bands_counts_in_both() {
        // The 7-10 and 5-7 references differ by one in the green channel,
        // so any matching pixel lands in both.
        let bands = [band("a", [1, 249, 8]), band("b", [1, 248, 8])];
        let frame = RadarFrame::filled(4, 4, [1, 249, 8]);

        let counts = count_band_pixels(&frame, &bands, 30);
        assert_eq!(counts, vec![16, 16]);
    }

    #[test]
    fn test_band_order_does_not_change_counts() {
        let a = band("a", [10, 20, 30]);
        let b = band("b", [200, 10, 10]);
        let frame = RadarFrame::filled(3, 2, [12, 22, 28]);

        let forward = count_band_pixels(&frame, &[a, b], 30);
        let reversed = count_band_pixels(&frame, &[b, a], 30);
        assert_eq!(forward, vec![6, 0]);
        assert_eq!(reversed, vec![0, 6]);
    }

    #[test]
    fn test_all_black_frame_matches_no_bright_band() {
        let frame = RadarFrame::filled(8, 8, [0, 0, 0]);
        let counts = count_band_pixels(&frame, &RAIN_BANDS, DEFAULT_TOLERANCE);

        for (band, count) in RAIN_BANDS.iter().zip(&counts) {
            if band.rgb.iter().any(|&c| c > DEFAULT_TOLERANCE) {
                assert_eq!(*count, 0, "band {} should not match black", band.label);
            }
        }
    }

    #[test]
    fn test_counts_are_positional_against_band_table() {
        let frame = RadarFrame::filled(2, 2, [0xf0, 0x00, 0x00]);
        let counts = count_band_pixels(&frame, &RAIN_BANDS, DEFAULT_TOLERANCE);

        assert_eq!(counts.len(), RAIN_BANDS.len());
        // Exact match for "100-150"; "150-200" (#dc0201) is also within
        // tolerance, which is the intended inclusive behavior.
        assert_eq!(counts[3], 4);
        assert_eq!(counts[2], 4);
        assert_eq!(counts[0], 0);
    }
}
