// File: crates/graph-core/src/palette.rs
// Summary: Fixed accent color and cyclic palette for multi-color dataset families.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// CSS-style hex string (alpha dropped), e.g. "#40a0ff".
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Accent stroke used by single-series families.
pub const ACCENT: Rgba = Rgba::opaque(64, 160, 255);

/// Palette for independently colored elements (bars, slices). Assignment
/// wraps around once the palette is exhausted.
pub const PALETTE: [Rgba; 8] = [
    Rgba::opaque(64, 160, 255),  // blue
    Rgba::opaque(40, 200, 120),  // green
    Rgba::opaque(220, 80, 80),   // red
    Rgba::opaque(255, 230, 70),  // yellow
    Rgba::opaque(203, 75, 22),   // orange
    Rgba::opaque(42, 161, 152),  // teal
    Rgba::opaque(160, 96, 220),  // purple
    Rgba::opaque(211, 54, 130),  // magenta
];

/// One color per element, cyclic over `PALETTE` and stable by index.
pub fn cycle(n: usize) -> Vec<Rgba> {
    (0..n).map(|i| PALETTE[i % PALETTE.len()]).collect()
}
