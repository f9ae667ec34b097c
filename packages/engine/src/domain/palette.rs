use serde::{Deserialize, Serialize};

/// Opaque particle color; opacity is applied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS fill style, e.g. `rgba(174, 203, 235, 0.8)`
    pub fn css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
/// Pale star blue (#AECBEB)
pub const STAR_BLUE: Rgb = Rgb::new(174, 203, 235);
/// Pale star gold (#E8CBA3)
pub const STAR_GOLD: Rgb = Rgb::new(232, 203, 163);

/// White is listed twice so a uniform pick lands on it half the time.
pub const DEFAULT_PALETTE: [Rgb; 4] = [WHITE, WHITE, STAR_BLUE, STAR_GOLD];
