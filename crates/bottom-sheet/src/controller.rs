//! The bottom sheet controller.
//!
//! Owns the per-sheet session state and routes gesture samples and nested
//! scroll notifications through the drag accumulator, the scroll-lock
//! arbitrator, the snap resolver and the scroll coordinator. All work happens
//! synchronously on the caller's event context.

use std::rc::{Rc, Weak};

use bottom_sheet_animation::AnimationSpec;
use bottom_sheet_graphics::Point;

use crate::arbitration::{arbitrate, Arbitration, ArbitrationInput, NestedScrollSnapshot};
use crate::config::SheetConfig;
use crate::coordination::{ScrollCoordinator, SheetExtent};
use crate::geometry::{height_multiplier, OffsetBounds, SheetGeometry};
use crate::gesture::{DragAccumulator, DragStep, GestureSample};
use crate::host::{NestedScroll, SheetSurface};
use crate::position::{Position, PositionSet};
use crate::snap::SnapResolver;

/// Multiplier changes smaller than this are not reported to the host.
const HEIGHT_MULTIPLIER_EPSILON: f32 = 0.000_001;

/// Mutable session state of one sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetState {
    current_position: Position,
    raw_offset: f32,
    drag: DragAccumulator,
    scroll: ScrollCoordinator,
    additional_offset: f32,
    scroll_lock_enabled: bool,
}

impl SheetState {
    fn new(config: &SheetConfig) -> Self {
        Self {
            current_position: config.initial_position,
            raw_offset: 0.0,
            drag: DragAccumulator::new(),
            scroll: ScrollCoordinator::new(),
            additional_offset: config.additional_offset,
            scroll_lock_enabled: config.scroll_lock_enabled,
        }
    }

    /// Authoritative resting position.
    pub fn current_position(&self) -> Position {
        self.current_position
    }

    /// Offset last applied to the sheet.
    pub fn raw_offset(&self) -> f32 {
        self.raw_offset
    }

    pub fn last_gesture_sample(&self) -> Point {
        self.drag.last_sample()
    }

    pub fn last_nested_scroll_offset(&self) -> Point {
        self.scroll.last_offset()
    }

    pub fn additional_offset(&self) -> f32 {
        self.additional_offset
    }

    pub fn scroll_lock_enabled(&self) -> bool {
        self.scroll_lock_enabled
    }
}

/// Drives one sheet bound to one [`SheetSurface`] and at most one
/// [`NestedScroll`].
///
/// Collaborators are held weakly. Until a surface is bound (or after it is
/// dropped) every geometry-dependent operation is a logged no-op.
pub struct BottomSheetController {
    state: SheetState,
    positions: PositionSet,
    height_capped: bool,
    transition: AnimationSpec,
    surface: Option<Weak<dyn SheetSurface>>,
    nested_scroll: Option<Weak<dyn NestedScroll>>,
}

impl BottomSheetController {
    pub fn new(config: SheetConfig) -> Self {
        if config.available_positions.len() < 2 {
            log::warn!(
                "bottom sheet configured with {} position(s); at least 2 are expected",
                config.available_positions.len()
            );
        }
        Self {
            state: SheetState::new(&config),
            positions: config.available_positions,
            height_capped: config.height_capped,
            transition: config.transition,
            surface: None,
            nested_scroll: None,
        }
    }

    /// Binds the constrained view and rests the sheet at the current position.
    pub fn bind_surface<S: SheetSurface + 'static>(&mut self, surface: &Rc<S>) {
        let surface: Rc<dyn SheetSurface> = surface.clone();
        self.surface = Some(Rc::downgrade(&surface));
        self.relayout();
    }

    pub fn bind_nested_scroll<N: NestedScroll + 'static>(&mut self, scroll: &Rc<N>) {
        let scroll: Rc<dyn NestedScroll> = scroll.clone();
        self.nested_scroll = Some(Rc::downgrade(&scroll));
    }

    pub fn unbind_nested_scroll(&mut self) {
        self.nested_scroll = None;
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    pub fn current_position(&self) -> Position {
        self.state.current_position
    }

    pub fn available_positions(&self) -> &PositionSet {
        &self.positions
    }

    /// Replaces the configured positions.
    ///
    /// Returns the new [`height_multiplier`] when it changed, so the host can
    /// resize a height-capped sheet.
    pub fn set_available_positions(&mut self, positions: PositionSet) -> Option<f32> {
        if positions.len() < 2 {
            log::warn!(
                "bottom sheet given {} position(s); at least 2 are expected",
                positions.len()
            );
        }
        let previous = self.height_multiplier();
        self.positions = positions;
        let multiplier = self.height_multiplier();
        ((multiplier - previous).abs() > HEIGHT_MULTIPLIER_EPSILON).then_some(multiplier)
    }

    /// Fraction of the container the sheet should be sized to when height-capped.
    pub fn height_multiplier(&self) -> f32 {
        height_multiplier(&self.positions)
    }

    pub fn set_scroll_lock_enabled(&mut self, enabled: bool) {
        self.state.scroll_lock_enabled = enabled;
    }

    pub fn set_additional_offset(&mut self, offset: f32) {
        self.state.additional_offset = offset;
    }

    pub fn transition(&self) -> AnimationSpec {
        self.transition
    }

    pub fn set_transition(&mut self, transition: AnimationSpec) {
        self.transition = transition;
    }

    /// Commits `position` and applies its offset, animated or immediate.
    ///
    /// Re-applying the current position re-applies the same offset.
    pub fn set_position(&mut self, position: Position, animate: bool) {
        self.state.current_position = position;
        let Some(surface) = self.surface() else {
            log::warn!("bottom sheet has no surface bound; position {position:?} not applied");
            return;
        };
        let offset = self
            .geometry(surface.as_ref())
            .offset_for(position, &self.positions);
        log::debug!("bottom sheet committed {position:?} at offset {offset}");
        self.apply_offset(surface.as_ref(), offset, animate);
    }

    /// Re-applies the current position after the host changed layout.
    pub fn relayout(&mut self) {
        self.set_position(self.state.current_position, false);
    }

    /// Feeds one gesture sample.
    pub fn on_gesture(&mut self, sample: GestureSample) {
        match self.state.drag.feed(sample) {
            DragStep::Started => {}
            DragStep::Moved { delta } => self.drag_by(delta),
            DragStep::Released { delta } => self.finish_drag(delta),
        }
    }

    /// Call after every content-offset change of the nested scroll view.
    pub fn on_nested_scroll(&mut self) {
        let Some(scroll) = self.nested_scroll() else {
            return;
        };
        let Some(extent) = self.extent() else {
            log::warn!("bottom sheet has no surface bound; nested scroll left uncoordinated");
            return;
        };
        if let Some(corrected) = self.state.scroll.on_scroll(scroll.offset(), extent) {
            log::trace!("bottom sheet pinned nested content to {corrected:?}");
            scroll.set_offset(corrected);
        }
    }

    /// Drag range for the current container, if a surface is bound.
    pub fn offset_bounds(&self) -> Option<OffsetBounds> {
        let surface = self.surface()?;
        Some(self.bounds(&self.geometry(surface.as_ref())))
    }

    /// Whether the sheet is at (or above) its highest position.
    pub fn reached_max_position(&self) -> bool {
        self.extent().is_some_and(|extent| extent.reached_max)
    }

    /// Whether the sheet rests exactly at its lowest position.
    pub fn is_at_min_position(&self) -> bool {
        self.extent().is_some_and(|extent| extent.at_min)
    }

    fn drag_by(&mut self, delta: f32) {
        let Some(surface) = self.surface() else {
            log::warn!("bottom sheet has no surface bound; drag delta {delta} dropped");
            return;
        };
        let bounds = self.bounds(&self.geometry(surface.as_ref()));
        let scroll = self.nested_scroll();
        let input = ArbitrationInput {
            delta,
            sheet_offset: self.state.raw_offset,
            bounds,
            scroll_lock_enabled: self.state.scroll_lock_enabled,
            nested: scroll.as_ref().map(|scroll| NestedScrollSnapshot {
                offset_y: scroll.offset().y,
                user_driven: scroll.is_user_driven(),
            }),
        };

        let decision = arbitrate(&input);
        log::trace!("bottom sheet delta {delta}: {decision:?}");
        match (decision, scroll) {
            (Arbitration::ForwardToScroll { offset_y }, Some(scroll)) => {
                scroll.set_offset_y(offset_y)
            }
            (Arbitration::MoveSheet { offset }, _) => {
                self.apply_offset(surface.as_ref(), offset, false)
            }
            _ => {}
        }
    }

    fn finish_drag(&mut self, delta: f32) {
        let Some(surface) = self.surface() else {
            log::warn!("bottom sheet has no surface bound; release ignored");
            return;
        };
        let geometry = self.geometry(surface.as_ref());
        let position = SnapResolver::new(&geometry, &self.positions).resolve(
            self.state.raw_offset,
            delta,
            self.state.current_position,
        );
        log::debug!(
            "bottom sheet released at {} snapping to {position:?}",
            self.state.raw_offset + delta
        );
        self.set_position(position, true);
    }

    fn apply_offset(&mut self, surface: &dyn SheetSurface, offset: f32, animate: bool) {
        self.state.raw_offset = offset;
        surface.apply_offset(offset, animate.then_some(self.transition));
    }

    fn extent(&self) -> Option<SheetExtent> {
        let bounds = self.offset_bounds()?;
        Some(SheetExtent {
            reached_max: self.state.raw_offset <= bounds.top,
            at_min: self.state.raw_offset == bounds.bottom,
        })
    }

    fn geometry(&self, surface: &dyn SheetSurface) -> SheetGeometry {
        SheetGeometry::new(surface.container_height(), self.state.additional_offset)
            .with_height_capped(self.height_capped)
    }

    fn bounds(&self, geometry: &SheetGeometry) -> OffsetBounds {
        if self.positions.is_empty() {
            log::warn!("bottom sheet has no positions; pinning at {:?}", self.state.current_position);
        }
        geometry.bounds(&self.positions, self.state.current_position)
    }

    fn surface(&self) -> Option<Rc<dyn SheetSurface>> {
        self.surface.as_ref()?.upgrade()
    }

    fn nested_scroll(&self) -> Option<Rc<dyn NestedScroll>> {
        self.nested_scroll.as_ref()?.upgrade()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
