// Main entry point - wiring for the fetch -> classify -> aggregate -> plot run
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use chrono::Utc;

use crate::application::sampler::SamplerService;
use crate::application::timeline::build_band_series;
use crate::domain::schedule::{capture_times, hong_kong_offset};
use crate::infrastructure::config::load_radar_config;
use crate::infrastructure::http_frame_source::HttpFrameSource;
use crate::presentation::chart::build_timeline_chart;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = load_radar_config()?;

    let timestamps = capture_times(Utc::now().with_timezone(&hong_kong_offset()));
    tracing::info!("sampling {} radar snapshots", timestamps.len());

    let sampler = SamplerService::new(
        Arc::new(HttpFrameSource::new()),
        config.base_url,
        config.url_suffix,
        config.color_tolerance,
    );
    let samples = sampler.collect_samples(&timestamps).await;

    let surviving = samples.iter().filter(|s| s.counts().is_some()).count();
    if surviving == 0 {
        tracing::warn!("every snapshot fetch failed; rendering an empty chart");
    } else {
        tracing::info!("classified {} of {} snapshots", surviving, samples.len());
    }

    let series = build_band_series(&samples);
    let plot = build_timeline_chart(&series);
    plot.write_html(&config.output_path);
    tracing::info!("wrote rain-rate timeline to {}", config.output_path);

    Ok(())
}
