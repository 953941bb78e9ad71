use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RadarConfig {
    /// Snapshot URL prefix; the `%Y%m%d%H%M` timestamp and suffix are
    /// appended per frame.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_url_suffix")]
    pub url_suffix: String,
    /// Per-channel color tolerance for pixel classification (0-255).
    #[serde(default = "default_color_tolerance")]
    pub color_tolerance: u8,
    /// Where the rendered chart HTML lands.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_base_url() -> String {
    "https://www.hko.gov.hk/wxinfo/radars/rad_064_png/2d064nradar_".to_string()
}

fn default_url_suffix() -> String {
    ".jpg".to_string()
}

fn default_color_tolerance() -> u8 {
    crate::domain::classification::DEFAULT_TOLERANCE
}

fn default_output_path() -> String {
    "rain_rate_timeline.html".to_string()
}

/// Load the radar config from `config/radar.toml` if present; every field
/// has a default, so a missing file means a default configuration.
pub fn load_radar_config() -> anyhow::Result<RadarConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/radar").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
