use crate::domain::palette::Rgb;
use crate::error::EngineError;

use super::surface::DrawSurface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    FillCircle { x: f64, y: f64, radius: f64, color: Rgb, alpha: f64 },
}

/// Surface that records calls instead of painting.
///
/// Used by tests and headless hosts. `fail_after` makes the n-th and later
/// fills return an error.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub fail_after: Option<usize>,
    fills: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(fills: usize) -> Self {
        Self { fail_after: Some(fills), ..Self::default() }
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
        self.fills = 0;
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), EngineError> {
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) -> Result<(), EngineError> {
        self.fills += 1;
        if self.fail_after.is_some_and(|n| self.fills > n) {
            return Err(EngineError::Surface(format!("fill #{} rejected", self.fills)));
        }
        self.commands.push(DrawCommand::FillCircle { x, y, radius, color, alpha });
        Ok(())
    }
}
