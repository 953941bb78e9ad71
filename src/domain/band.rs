// Rain-rate band palette

/// One rain-rate intensity bucket and the legend color the radar imagery
/// draws it with. The same color is the classification reference and the
/// chart line color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Rate range in mm/hr, e.g. "100-150".
    pub label: &'static str,
    pub rgb: [u8; 3],
}

impl Band {
    /// Legend label as shown on the chart.
    pub fn legend_label(&self) -> String {
        format!("{} mm/hr", self.label)
    }
}

/// The radar legend palette, heaviest rain first. Order matters: pixel-count
/// vectors and the output series are positional against this table.
pub const RAIN_BANDS: [Band; 16] = [
    Band { label: ">300", rgb: [0xed, 0x00, 0xf0] },
    Band { label: "200-300", rgb: [0xc3, 0x00, 0x6a] },
    Band { label: "150-200", rgb: [0xdc, 0x02, 0x01] },
    Band { label: "100-150", rgb: [0xf0, 0x00, 0x00] },
    Band { label: "75-100", rgb: [0xed, 0x82, 0x02] },
    Band { label: "50-75", rgb: [0xee, 0xb0, 0x00] },
    Band { label: "30-50", rgb: [0xfa, 0xda, 0x04] },
    Band { label: "15-30", rgb: [0xe1, 0xcf, 0x00] },
    Band { label: "10-15", rgb: [0x8f, 0xff, 0x00] },
    Band { label: "7-10", rgb: [0x01, 0xf9, 0x08] },
    Band { label: "5-7", rgb: [0x01, 0xf8, 0x08] },
    Band { label: "3-5", rgb: [0x00, 0xd0, 0x02] },
    Band { label: "2-3", rgb: [0x01, 0xa8, 0x35] },
    Band { label: "1-2", rgb: [0x00, 0x84, 0x48] },
    Band { label: "0.50-1", rgb: [0x3b, 0x96, 0xff] },
    Band { label: "0.15-0.50", rgb: [0x00, 0x8f, 0xf5] },
];
