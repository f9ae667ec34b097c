use crate::domain::palette::Rgb;
use crate::error::EngineError;

/// Immediate-mode 2D target.
///
/// The field only ever clears the whole surface and fills circles, so that
/// is all an implementation has to provide.
pub trait DrawSurface {
    /// Clear the region `(0, 0, width, height)`.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), EngineError>;

    /// Fill a circle centered at `(x, y)` with `color` at `alpha` opacity.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) -> Result<(), EngineError>;
}
