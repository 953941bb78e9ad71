// Chart series domain models
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<FixedOffset>,
    pub area_km2: f64,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: DateTime<FixedOffset>, area_km2: f64) -> Self {
        Self { timestamp, area_km2 }
    }
}

/// One chart series per rain-rate band: legend label, line color, and the
/// area timeline aligned with the surviving samples, newest first.
#[derive(Debug, Clone)]
pub struct BandSeries {
    pub label: String,
    pub rgb: [u8; 3],
    pub points: Vec<TimeSeriesPoint>,
}

impl BandSeries {
    pub fn new(label: String, rgb: [u8; 3], points: Vec<TimeSeriesPoint>) -> Self {
        Self { label, rgb, points }
    }
}
