//! Release handling: pick the resting position for a finished drag.

use crate::geometry::SheetGeometry;
use crate::position::{Position, PositionSet};

/// Resolves the position a released drag settles at.
///
/// Snapping is purely distance based; release velocity is not considered.
pub struct SnapResolver<'a> {
    geometry: &'a SheetGeometry,
    positions: &'a PositionSet,
}

impl<'a> SnapResolver<'a> {
    pub fn new(geometry: &'a SheetGeometry, positions: &'a PositionSet) -> Self {
        Self {
            geometry,
            positions,
        }
    }

    /// Adds the final `delta` to `offset` and returns the nearest position.
    ///
    /// `current` is only used when no positions are configured.
    pub fn resolve(&self, offset: f32, delta: f32, current: Position) -> Position {
        self.geometry
            .nearest_position(offset + delta, self.positions, current)
    }
}
