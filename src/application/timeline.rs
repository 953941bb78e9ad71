// Timeline aggregation - samples to per-band area series
use crate::domain::band::RAIN_BANDS;
use crate::domain::sample::Sample;
use crate::domain::series::{BandSeries, TimeSeriesPoint};

/// Pixels per square kilometre at the radar imagery's ground resolution,
/// calibrated for the fixed coverage crop.
pub const PIXELS_PER_KM2: f64 = 1765.293_623_7;

/// Coverage below this is treated as measurement noise and reported as zero.
pub const NOISE_FLOOR_KM2: f64 = 0.45;

/// Convert a raw pixel count to square kilometres, suppressing sub-noise
/// values to exactly zero. The noise floor itself survives.
pub fn area_km2(pixel_count: u64) -> f64 {
    let area = pixel_count as f64 / PIXELS_PER_KM2;
    if area >= NOISE_FLOOR_KM2 { area } else { 0.0 }
}

/// Build one series per band from the collected samples. Failed samples are
/// dropped; the surviving points stay aligned with their timestamps in the
/// order the samples were taken (newest first).
pub fn build_band_series(samples: &[Sample]) -> Vec<BandSeries> {
    let surviving: Vec<(&Sample, &[u64])> = samples
        .iter()
        .filter_map(|sample| sample.counts().map(|counts| (sample, counts)))
        .collect();

    RAIN_BANDS
        .iter()
        .enumerate()
        .map(|(band_idx, band)| {
            let points = surviving
                .iter()
                .map(|(sample, counts)| {
                    TimeSeriesPoint::new(sample.timestamp, area_km2(counts[band_idx]))
                })
                .collect();
            BandSeries::new(band.legend_label(), band.rgb, points)
        })
        .collect()
}
