// Sampler service - fetch and classify one frame per scheduled timestamp
use crate::application::frame_source::FrameSource;
use crate::domain::band::RAIN_BANDS;
use crate::domain::classification::count_band_pixels;
use crate::domain::sample::{Sample, SampleOutcome};
use crate::domain::schedule::frame_url;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

pub struct SamplerService {
    source: Arc<dyn FrameSource>,
    base_url: String,
    url_suffix: String,
    tolerance: u8,
}

impl SamplerService {
    pub fn new(
        source: Arc<dyn FrameSource>,
        base_url: String,
        url_suffix: String,
        tolerance: u8,
    ) -> Self {
        Self {
            source,
            base_url,
            url_suffix,
            tolerance,
        }
    }

    /// Fetch and classify one sample per timestamp, newest first. A failed
    /// fetch or decode is logged and recorded as a failed sample; it never
    /// aborts the run.
    pub async fn collect_samples(&self, timestamps: &[DateTime<FixedOffset>]) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(timestamps.len());
        for &timestamp in timestamps {
            let url = frame_url(&self.base_url, &self.url_suffix, timestamp);
            let outcome = match self.source.fetch_frame(&url).await {
                Ok(frame) => {
                    let counts = count_band_pixels(&frame, &RAIN_BANDS, self.tolerance);
                    tracing::debug!(
                        "classified frame {} ({}x{})",
                        url,
                        frame.width(),
                        frame.height()
                    );
                    SampleOutcome::Counts(counts)
                }
                Err(e) => {
                    tracing::warn!("error processing radar frame from {}: {:#}", url, e);
                    SampleOutcome::Failed
                }
            };
            samples.push(Sample::new(timestamp, url, outcome));
        }
        samples
    }
}
