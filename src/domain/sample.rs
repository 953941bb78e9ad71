// Per-timestamp sample records
use chrono::{DateTime, FixedOffset};

/// One fetch-and-classify attempt at one snapshot timestamp.
#[derive(Debug, Clone)]
pub struct Sample {
    pub timestamp: DateTime<FixedOffset>,
    pub url: String,
    pub outcome: SampleOutcome,
}

/// The outcome is explicit rather than a nullable vector: a failed fetch is
/// part of the record, and downstream aggregation filters on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Pixel counts per band, positional against the band palette.
    Counts(Vec<u64>),
    Failed,
}

impl Sample {
    pub fn new(timestamp: DateTime<FixedOffset>, url: String, outcome: SampleOutcome) -> Self {
        Self {
            timestamp,
            url,
            outcome,
        }
    }

    /// Band counts for a successful sample, `None` for a failed one.
    pub fn counts(&self) -> Option<&[u64]> {
        match &self.outcome {
            SampleOutcome::Counts(counts) => Some(counts),
            SampleOutcome::Failed => None,
        }
    }
}
