//! Geometric primitives: Point

/// A position or translation in the container's coordinate space.
///
/// Gesture translations and nested scroll content offsets are both expressed
/// as points; the sheet only ever reads the `y` component.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Returns a copy with `y` replaced.
    pub const fn with_y(self, y: f32) -> Self {
        Self { x: self.x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(Point::default(), Point::ZERO);
    }

    #[test]
    fn with_y_keeps_x() {
        assert_eq!(Point::new(7.0, 1.0).with_y(-2.0), Point::new(7.0, -2.0));
    }
}
