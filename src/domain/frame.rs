// Decoded radar frame

/// A decoded, cropped radar snapshot: row-major RGB pixels. Alpha, if the
/// source had one, is dropped before construction.
#[derive(Debug, Clone)]
pub struct RadarFrame {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl RadarFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A frame filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self::new(width, height, vec![rgb; (width * height) as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8; 3]> {
        self.pixels.iter()
    }

    /// Pixel at (x, y), row-major. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }
}
