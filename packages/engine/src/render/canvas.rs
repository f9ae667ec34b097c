use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::domain::palette::Rgb;
use crate::error::EngineError;

use super::surface::DrawSurface;

/// `CanvasRenderingContext2d` adapter
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), EngineError> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) -> Result<(), EngineError> {
        self.ctx.begin_path();
        self.ctx
            .arc(x, y, radius, 0.0, PI * 2.0)
            .map_err(|e| EngineError::Surface(format!("{:?}", e)))?;
        self.ctx.set_fill_style_str(&color.css_rgba(alpha));
        self.ctx.fill();
        Ok(())
    }
}
