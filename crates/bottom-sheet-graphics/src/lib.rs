//! Pure geometry data for the bottom sheet crates
//!
//! Points live here so the core, the animation helpers and host
//! adapters agree on one coordinate vocabulary.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::Point;
}
