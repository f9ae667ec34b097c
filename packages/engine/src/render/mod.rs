//! Drawing seam between the simulation and whatever paints pixels.

mod canvas;
mod recording;
mod surface;

pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::DrawSurface;
