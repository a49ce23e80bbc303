//! Transition support for the bottom sheet
//!
//! The core only describes *how* an offset should settle ([`AnimationSpec`]);
//! hosts that do not have a native animation primitive can drive an
//! [`OffsetAnimator`] from their frame clock.

mod animation;

pub use animation::*;
