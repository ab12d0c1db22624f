// File: crates/arcstrip-core/src/theme.rs
// Summary: Explicit style object (palette, marker and text colors) with light/dark presets.

/// Backend-neutral 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub name: &'static str,
    /// Slice colors, cycled when a chart has more slices than entries.
    pub palette: Vec<Rgba>,
    /// Base color of time-strip markers (alpha is driven by density).
    pub primary: Rgba,
    pub text: Rgba,
    pub background: Rgba,
    /// Hovered slice outline.
    pub outline: Rgba,
    pub axis_line: Rgba,
}

impl Style {
    pub fn light() -> Self {
        Self {
            name: "light",
            palette: default_palette(),
            primary: Rgba::rgb(50, 120, 220),
            text: Rgba::rgb(0, 0, 0),
            background: Rgba::rgb(255, 255, 255),
            outline: Rgba::rgb(0, 0, 0),
            axis_line: Rgba::rgb(60, 60, 70),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            palette: default_palette(),
            primary: Rgba::rgb(64, 160, 255),
            text: Rgba::rgb(235, 235, 245),
            background: Rgba::rgb(18, 18, 20),
            outline: Rgba::rgb(235, 235, 245),
            axis_line: Rgba::rgb(180, 180, 190),
        }
    }

    /// Find a preset by `name`, falling back to light.
    pub fn find(name: &str) -> Self {
        presets()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(Self::light)
    }

    /// Palette entry for slice `i`.
    pub fn palette_color(&self, i: usize) -> Rgba {
        if self.palette.is_empty() {
            return self.primary;
        }
        self.palette[i % self.palette.len()]
    }
}

impl Default for Style {
    fn default() -> Self { Self::light() }
}

// blue, red, green, orange, purple, pink
fn default_palette() -> Vec<Rgba> {
    vec![
        Rgba::rgb(0, 0, 255),
        Rgba::rgb(255, 0, 0),
        Rgba::rgb(0, 128, 0),
        Rgba::rgb(255, 165, 0),
        Rgba::rgb(128, 0, 128),
        Rgba::rgb(255, 192, 203),
    ]
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<Style> {
    vec![Style::light(), Style::dark()]
}
