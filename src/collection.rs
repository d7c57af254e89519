use egui::Context;
use log::debug;

use crate::animate::{BackwardAnimator, Direction, ForwardAnimator};
use crate::decor::{Overlay, Slot};
use crate::event::{EventCause, ObserverSet, ShapeEvent};
use crate::geometry::Point;
use crate::shape::{Shape, ShapeId, ShapeKind};

/// The ordered collection of (possibly decorated) shapes.
///
/// Order is creation order; later entries paint on top and win overlapping
/// hit-tests. The collection owns its shapes exclusively, tracks at most one
/// selected shape and at most one shape mid-creation, and notifies its
/// observers synchronously after every mutation.
///
/// All mutators treat absent or stale targets as silent no-ops. That is the
/// intended contract: routine editing never fails, it just does nothing.
#[derive(Debug, Default)]
pub struct ShapeCollection {
    slots: Vec<Slot>,
    selected: Option<ShapeId>,
    current: Option<ShapeId>,
    observers: ObserverSet,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered read-only view for rendering and list display.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id() == id)
    }

    /// Id of the shape marked by the selection overlay, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Id of the shape mid-creation/mid-resize, if any.
    pub fn current(&self) -> Option<ShapeId> {
        self.current
    }

    pub fn observers_mut(&mut self) -> &mut ObserverSet {
        &mut self.observers
    }

    /// Appends a shape, which becomes the current one and is immediately
    /// topmost.
    pub fn add(&mut self, shape: ShapeKind) {
        let id = shape.id();
        debug!("add {shape}");
        self.slots.push(Slot::new(shape));
        self.current = Some(id);
        self.fire(Some(id), EventCause::Added);
    }

    /// Removes a shape by identity. Clears the selection if the removed
    /// shape was selected; the deletion notification carries no shape since
    /// the removed content is no longer valid to expose.
    pub fn delete(&mut self, id: ShapeId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        debug!("delete {}", self.slots[index].content());
        self.slots.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.fire(None, EventCause::Deleted);
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected {
            self.delete(id);
        }
    }

    /// Ends the creation gesture. With `use_defaults` the shape snaps to
    /// its per-variant default size first; an invisible result is deleted
    /// outright. The current reference is cleared unconditionally.
    pub fn finish(&mut self, use_defaults: bool) {
        let Some(id) = self.current.take() else {
            return;
        };
        let Some(slot) = self.slot_mut(id) else {
            return;
        };
        if use_defaults {
            slot.set_to_defaults();
            self.fire(Some(id), EventCause::Changed);
        }
        if self.get(id).is_some_and(|slot| slot.is_invisible()) {
            self.delete(id);
        }
    }

    /// Selects the topmost shape containing `p`, or clears the selection if
    /// nothing is hit. Hitting the shape that is already selected changes
    /// nothing and fires nothing.
    pub fn select_at(&mut self, p: Point) {
        let hit = self
            .slots
            .iter()
            .rev()
            .find(|slot| slot.contains(p))
            .map(|slot| slot.id());
        if hit == self.selected {
            return;
        }
        self.swap_selection(hit);
    }

    /// Programmatic selection, used by the list view. A shape that is not
    /// in the collection cannot be selected.
    pub fn set_selected(&mut self, id: Option<ShapeId>) {
        if id == self.selected {
            return;
        }
        if let Some(id) = id {
            if self.index_of(id).is_none() {
                return;
            }
        }
        self.swap_selection(id);
    }

    /// Resizes the current shape so it spans from its anchor to `p`.
    pub fn resize(&mut self, p: Point) {
        self.resize_target(self.current, p);
    }

    /// Resizes the selected shape so it spans from its anchor to `p`.
    pub fn resize_selected(&mut self, p: Point) {
        self.resize_target(self.selected, p);
    }

    /// Moves the current shape's anchor to `p`.
    pub fn move_to(&mut self, p: Point) {
        self.move_target(self.current, p);
    }

    /// Moves the selected shape's anchor to `p`.
    pub fn move_selected(&mut self, p: Point) {
        self.move_target(self.selected, p);
    }

    /// Attaches the numbering overlay to every shape in one pass. Entries
    /// already numbered are skipped, so the operation is idempotent.
    pub fn add_number_overlays(&mut self) {
        for slot in &mut self.slots {
            if !slot.has(Overlay::Number) {
                slot.attach(Overlay::Number);
            }
        }
        self.fire(None, EventCause::Changed);
    }

    /// Removes the numbering overlay from every shape in one pass.
    pub fn remove_number_overlays(&mut self) {
        for slot in &mut self.slots {
            if slot.has(Overlay::Number) {
                slot.detach(Overlay::Number);
            }
        }
        self.fire(None, EventCause::Changed);
    }

    /// Runs one animation pass over the whole collection in storage order,
    /// dispatching per shape variant underneath any decoration. Order and
    /// selection are untouched; one aggregate change notification fires
    /// after the full pass.
    pub fn animate(&mut self, direction: Direction, step: i32) {
        match direction {
            Direction::Forward => {
                let mut animator = ForwardAnimator::new(step);
                for slot in &mut self.slots {
                    slot.content_mut().accept(&mut animator);
                }
            }
            Direction::Backward => {
                let mut animator = BackwardAnimator::new(step);
                for slot in &mut self.slots {
                    slot.content_mut().accept(&mut animator);
                }
            }
        }
        self.fire(None, EventCause::Changed);
    }

    /// Uploads pending image textures. Paint-side plumbing; fires nothing.
    pub fn ensure_textures(&mut self, ctx: &Context) {
        for slot in &mut self.slots {
            if let ShapeKind::Image(image) = slot.content_mut() {
                image.ensure_texture(ctx);
            }
        }
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id() == id)
    }

    fn slot_mut(&mut self, id: ShapeId) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.id() == id)
    }

    /// Detach-then-attach selection swap, then notify: first the change,
    /// then the selection, in that order.
    fn swap_selection(&mut self, id: Option<ShapeId>) {
        if let Some(old) = self.selected.take() {
            // Guards against a stale id left by an earlier deletion.
            if let Some(slot) = self.slot_mut(old) {
                slot.detach(Overlay::Selection);
            }
        }
        if let Some(new) = id {
            if let Some(slot) = self.slot_mut(new) {
                slot.attach(Overlay::Selection);
                self.selected = Some(new);
            }
        }
        self.fire(self.selected, EventCause::Changed);
        self.fire(self.selected, EventCause::Selected);
    }

    fn resize_target(&mut self, target: Option<ShapeId>, p: Point) {
        let Some(id) = target else {
            return;
        };
        let Some(slot) = self.slot_mut(id) else {
            return;
        };
        let (width, height) = (p.x - slot.x(), p.y - slot.y());
        slot.set_size(width, height);
        self.fire(Some(id), EventCause::Changed);
    }

    fn move_target(&mut self, target: Option<ShapeId>, p: Point) {
        let Some(id) = target else {
            return;
        };
        let Some(slot) = self.slot_mut(id) else {
            return;
        };
        slot.set_position(p);
        self.fire(Some(id), EventCause::Changed);
    }

    fn fire(&self, shape: Option<ShapeId>, cause: EventCause) {
        self.observers.notify(ShapeEvent { shape, cause });
    }
}
