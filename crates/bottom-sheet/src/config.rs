//! Host-configurable surface of the controller.

use bottom_sheet_animation::AnimationSpec;

use crate::position::{Position, PositionSet};

/// Controller configuration.
///
/// ```
/// use bottom_sheet::{Position, PositionSet, SheetConfig};
///
/// let config = SheetConfig::default()
///     .with_available_positions(PositionSet::new([Position::Bottom, Position::Custom(1.0)]))
///     .with_scroll_lock_enabled(true)
///     .with_additional_offset(83.0);
/// assert_eq!(config.initial_position, Position::Bottom);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Needs at least two entries.
    pub available_positions: PositionSet,
    pub initial_position: Position,
    /// Only let drags change the sheet position once nested content is
    /// scrolled to its top.
    pub scroll_lock_enabled: bool,
    /// Bias subtracted from every offset, e.g. tab bar plus navigation bar height.
    pub additional_offset: f32,
    /// The host caps the sheet height to the highest position's fraction.
    pub height_capped: bool,
    /// Transition used whenever a position is committed with animation.
    pub transition: AnimationSpec,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            available_positions: PositionSet::default(),
            initial_position: Position::Bottom,
            scroll_lock_enabled: false,
            additional_offset: 0.0,
            height_capped: false,
            transition: AnimationSpec::default(),
        }
    }
}

impl SheetConfig {
    pub fn with_available_positions(mut self, positions: PositionSet) -> Self {
        self.available_positions = positions;
        self
    }

    pub fn with_initial_position(mut self, position: Position) -> Self {
        self.initial_position = position;
        self
    }

    pub fn with_scroll_lock_enabled(mut self, enabled: bool) -> Self {
        self.scroll_lock_enabled = enabled;
        self
    }

    pub fn with_additional_offset(mut self, offset: f32) -> Self {
        self.additional_offset = offset;
        self
    }

    pub fn with_height_capped(mut self, capped: bool) -> Self {
        self.height_capped = capped;
        self
    }

    pub fn with_transition(mut self, transition: AnimationSpec) -> Self {
        self.transition = transition;
        self
    }

    /// Shorthand for a transition of `millis` keeping the current easing.
    pub fn with_transition_duration(mut self, millis: u64) -> Self {
        self.transition.duration_millis = millis;
        self
    }
}
