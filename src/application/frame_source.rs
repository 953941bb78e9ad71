// Frame source trait - boundary to the fetch/decode/crop collaborator
use crate::domain::frame::RadarFrame;
use async_trait::async_trait;

/// Supplies decoded radar frames. Implementations fetch the image at `url`,
/// decode it, and crop it to the coverage window; any network, HTTP, or
/// decode problem surfaces as an error and the caller decides what to do
/// with the sample.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn fetch_frame(&self, url: &str) -> anyhow::Result<RadarFrame>;
}
