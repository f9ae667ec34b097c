use crate::core::geometry::Vec2;

/// Last known pointer position and its influence radius.
///
/// `position` is `None` while the pointer is off the surface. Coordinates
/// are taken from input events as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub position: Option<Vec2>,
    pub radius: f64,
}

impl Pointer {
    pub fn new(radius: f64) -> Self {
        Self { position: None, radius }
    }

    /// Pointer-move
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Pointer-leave
    pub fn clear(&mut self) {
        self.position = None;
    }
}
