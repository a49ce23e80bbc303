//! Sheet positions expressed as the visible fraction of the container.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// How much of the container the sheet covers when resting.
///
/// Presets map to fixed fractions; [`Position::Custom`] carries its own.
/// The fraction is expected to lie in `[0, 1]`: `0` parks the sheet below the
/// container, `1` shows it full height. Values outside that range are not
/// rejected here, they just produce meaningless snaps.
///
/// Equality and ordering compare the effective fraction only, so
/// `Position::Custom(0.5) == Position::Middle`.
#[derive(Clone, Copy, Debug)]
pub enum Position {
    Bottom,
    Middle,
    Top,
    Custom(f32),
}

impl Position {
    pub const BOTTOM_FRACTION: f32 = 0.2;
    pub const MIDDLE_FRACTION: f32 = 0.5;
    pub const TOP_FRACTION: f32 = 0.8;

    /// Effective visible fraction.
    pub fn fraction(&self) -> f32 {
        match self {
            Position::Bottom => Self::BOTTOM_FRACTION,
            Position::Middle => Self::MIDDLE_FRACTION,
            Position::Top => Self::TOP_FRACTION,
            Position::Custom(value) => *value,
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.fraction() == other.fraction()
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fraction().partial_cmp(&other.fraction())
    }
}

/// Rejected position set configurations.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionSetError {
    /// A sheet needs somewhere to move between.
    TooFewPositions { count: usize },
    /// Fraction is NaN, infinite or outside `[0, 1]`.
    FractionOutOfRange { index: usize, fraction: f32 },
}

impl fmt::Display for PositionSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSetError::TooFewPositions { count } => {
                write!(f, "expected at least 2 sheet positions, got {count}")
            }
            PositionSetError::FractionOutOfRange { index, fraction } => {
                write!(
                    f,
                    "sheet position #{index} has fraction {fraction}, expected a value in [0, 1]"
                )
            }
        }
    }
}

impl std::error::Error for PositionSetError {}

/// The positions a sheet may rest at. Order carries no meaning beyond
/// tie-breaking: lookups keep the first entry among equals.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionSet {
    positions: SmallVec<[Position; 4]>,
}

impl PositionSet {
    /// Builds a set without validation.
    pub fn new(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            positions: positions.into_iter().collect(),
        }
    }

    /// Builds a set, rejecting fewer than two entries or fractions outside `[0, 1]`.
    pub fn try_new(
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<Self, PositionSetError> {
        let set = Self::new(positions);
        if set.len() < 2 {
            return Err(PositionSetError::TooFewPositions { count: set.len() });
        }
        if let Some((index, position)) = set
            .iter()
            .enumerate()
            .find(|(_, position)| !(0.0..=1.0).contains(&position.fraction()))
        {
            return Err(PositionSetError::FractionOutOfRange {
                index,
                fraction: position.fraction(),
            });
        }
        Ok(set)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> + '_ {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position with the smallest fraction, first one on ties.
    pub fn min(&self) -> Option<Position> {
        self.scan(|candidate, best| candidate.fraction() < best.fraction())
    }

    /// Position with the largest fraction, first one on ties.
    pub fn max(&self) -> Option<Position> {
        self.scan(|candidate, best| candidate.fraction() > best.fraction())
    }

    fn scan(&self, replaces: impl Fn(&Position, &Position) -> bool) -> Option<Position> {
        let mut iter = self.positions.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(first, |best, candidate| {
            if replaces(&candidate, &best) {
                candidate
            } else {
                best
            }
        }))
    }
}

impl Default for PositionSet {
    fn default() -> Self {
        Self::new([Position::Bottom, Position::Middle, Position::Top])
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
