//! Position controller for a draggable bottom sheet.
//!
//! The sheet rests at one of a few [`Position`]s, follows the finger while a
//! pan is in flight and snaps to the nearest position on release. When the
//! sheet hosts scrollable content, the controller arbitrates every drag
//! delta between moving the sheet and scrolling the content so the two never
//! fight over one gesture.
//!
//! Rendering, gesture recognition and the scroll view itself stay with the
//! host behind [`SheetSurface`] and [`NestedScroll`].

mod arbitration;
mod config;
mod controller;
mod coordination;
mod geometry;
mod gesture;
mod host;
mod position;
mod snap;

pub use arbitration::*;
pub use config::*;
pub use controller::*;
pub use coordination::*;
pub use geometry::*;
pub use gesture::*;
pub use host::*;
pub use position::*;
pub use snap::*;

pub use bottom_sheet_animation::{AnimationSpec, Easing};
pub use bottom_sheet_graphics::Point;

pub mod prelude {
    pub use crate::config::SheetConfig;
    pub use crate::controller::BottomSheetController;
    pub use crate::gesture::{GesturePhase, GestureSample};
    pub use crate::host::{NestedScroll, SheetSurface};
    pub use crate::position::{Position, PositionSet};
}
