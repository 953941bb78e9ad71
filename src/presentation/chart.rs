// Chart assembly - band series onto a Plotly figure
use crate::domain::series::BandSeries;
use plotly::color::{NamedColor, Rgb};
use plotly::common::{Anchor, Font, Line, Mode, Orientation, Title};
use plotly::layout::{Axis, HoverMode, Layout, Legend, Margin};
use plotly::{Plot, Scatter};

const CHART_TITLE: &str = "Rain Rate (mm/h) Trends Over Time";
const X_AXIS_TITLE: &str = "Time";
const Y_AXIS_TITLE: &str = "Square Kilometre of Raining Area";
const TICK_FORMAT_HOUR_MINUTE: &str = "%H:%M";
const X_VALUE_FORMAT: &str = "%Y-%m-%d %H:%M";
const LEGEND_FONT_SIZE: usize = 10;
const LEGEND_BORDER_WIDTH: usize = 1;
const LEGEND_Y: f64 = -0.3;
const MARGIN: usize = 40;

/// One line trace per band, on the layout the radar timeline uses: time on
/// the x-axis with hour:minute ticks, raining area in km2 on the y-axis,
/// horizontal legend below the plot, white background throughout.
pub fn build_timeline_chart(series: &[BandSeries]) -> Plot {
    let mut plot = Plot::new();
    for band_series in series {
        let (x, y) = series_xy(band_series);
        let [r, g, b] = band_series.rgb;
        plot.add_trace(
            Scatter::new(x, y)
                .mode(Mode::Lines)
                .name(band_series.label.as_str())
                .line(Line::new().color(Rgb::new(r, g, b))),
        );
    }
    plot.set_layout(timeline_layout());
    plot
}

/// Plotly takes datetime x-values as formatted strings.
fn series_xy(series: &BandSeries) -> (Vec<String>, Vec<f64>) {
    series
        .points
        .iter()
        .map(|point| {
            (
                point.timestamp.format(X_VALUE_FORMAT).to_string(),
                point.area_km2,
            )
        })
        .unzip()
}

fn timeline_layout() -> Layout {
    Layout::new()
        .title(Title::with_text(CHART_TITLE))
        .x_axis(
            Axis::new()
                .title(Title::with_text(X_AXIS_TITLE))
                .tick_format(TICK_FORMAT_HOUR_MINUTE),
        )
        .y_axis(Axis::new().title(Title::with_text(Y_AXIS_TITLE)))
        .legend(
            Legend::new()
                .orientation(Orientation::Horizontal)
                .y_anchor(Anchor::Bottom)
                .y(LEGEND_Y)
                .x_anchor(Anchor::Right)
                .x(1.0)
                .background_color(NamedColor::White)
                .border_color(NamedColor::Black)
                .border_width(LEGEND_BORDER_WIDTH)
                .font(Font::new().size(LEGEND_FONT_SIZE)),
        )
        .margin(
            Margin::new()
                .left(MARGIN)
                .right(MARGIN)
                .top(MARGIN)
                .bottom(MARGIN),
        )
        .hover_mode(HoverMode::Closest)
        .plot_background_color(NamedColor::White)
        .paper_background_color(NamedColor::White)
}
