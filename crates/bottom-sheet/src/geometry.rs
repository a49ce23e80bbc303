//! Conversion between sheet positions and constraint offsets.
//!
//! The sheet is anchored to the bottom of its container and moved by an
//! offset pushing it down: a larger visible fraction means a *smaller*
//! offset, `0` is fully visible and `container_height` fully hidden.

use crate::position::{Position, PositionSet};

/// Container measurements an offset is derived from.
///
/// Built fresh for every computation; container height is never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetGeometry {
    pub container_height: f32,
    /// Constant bias subtracted from every offset (e.g. tab bar height).
    pub additional_offset: f32,
    /// The host sizes the sheet to [`height_multiplier`] of the container.
    pub height_capped: bool,
}

impl SheetGeometry {
    pub fn new(container_height: f32, additional_offset: f32) -> Self {
        Self {
            container_height,
            additional_offset,
            height_capped: false,
        }
    }

    pub fn with_height_capped(mut self, height_capped: bool) -> Self {
        self.height_capped = height_capped;
        self
    }

    /// Offset removed when the sheet's own height is capped to the highest
    /// position, so content above that position is never laid out.
    pub fn height_adjustment(&self, positions: &PositionSet) -> f32 {
        if !self.height_capped {
            return 0.0;
        }
        match positions.max() {
            Some(max) if max.fraction() < 1.0 => self.container_height * (1.0 - max.fraction()),
            _ => 0.0,
        }
    }

    /// Offset that rests the sheet at `position`, clamped to `[0, container_height]`.
    pub fn offset_for(&self, position: Position, positions: &PositionSet) -> f32 {
        let height = self.container_height;
        let offset = height
            - height * position.fraction()
            - self.additional_offset
            - self.height_adjustment(positions);
        offset.min(height).max(0.0)
    }

    /// Drag range between the lowest and highest configured positions.
    ///
    /// `fallback` stands in for both extremes when the set is empty, which
    /// pins the sheet where it is.
    pub fn bounds(&self, positions: &PositionSet, fallback: Position) -> OffsetBounds {
        let min = positions.min().unwrap_or(fallback);
        let max = positions.max().unwrap_or(fallback);
        OffsetBounds {
            top: self.offset_for(max, positions),
            bottom: self.offset_for(min, positions),
        }
    }

    /// Position whose resting offset is closest to `offset`.
    ///
    /// Linear scan keeping the first entry on ties. An empty set yields the
    /// maximum position when known, else `fallback`.
    pub fn nearest_position(
        &self,
        offset: f32,
        positions: &PositionSet,
        fallback: Position,
    ) -> Position {
        let mut closest_distance = f32::MAX;
        let mut nearest = positions.max().unwrap_or(fallback);
        for position in positions {
            let distance = (self.offset_for(*position, positions) - offset).abs();
            if distance < closest_distance {
                closest_distance = distance;
                nearest = *position;
            }
        }
        nearest
    }
}

/// Inclusive offset range the sheet may be dragged within.
///
/// `top` belongs to the highest position and is the numerically smaller
/// offset; `bottom` belongs to the lowest position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetBounds {
    pub top: f32,
    pub bottom: f32,
}

impl OffsetBounds {
    /// Clamp a candidate offset: capped by `bottom` first, then floored by `top`.
    pub fn clamp(&self, candidate: f32) -> f32 {
        candidate.min(self.bottom).max(self.top)
    }

    pub fn contains(&self, offset: f32) -> bool {
        offset >= self.top && offset <= self.bottom
    }
}

/// Height multiplier the host should give the sheet so that everything
/// visible at the highest position is laid out.
pub fn height_multiplier(positions: &PositionSet) -> f32 {
    positions.max().map_or(1.0, |max| max.fraction())
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
