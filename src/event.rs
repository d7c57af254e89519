use std::cell::RefCell;
use std::rc::Rc;

use crate::shape::ShapeId;

/// Why a notification fired.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventCause {
    Added,
    Deleted,
    Changed,
    Selected,
}

/// A change notification from the collection.
///
/// `shape` is `None` for deletions (the removed content is gone), for
/// deselection, and for aggregate changes that touched the whole
/// collection.
#[derive(Clone, Copy, Debug)]
pub struct ShapeEvent {
    pub shape: Option<ShapeId>,
    pub cause: EventCause,
}

/// Implemented by every view of the collection. Handlers run synchronously
/// on the mutating call stack and must not mutate the collection.
pub trait ShapeObserver {
    fn shape_added(&mut self, _event: &ShapeEvent) {}
    fn shape_deleted(&mut self, _event: &ShapeEvent) {}
    fn shape_changed(&mut self, _event: &ShapeEvent) {}
    fn shape_selected(&mut self, _event: &ShapeEvent) {}
}

/// The collection's registered observers, deduplicated by identity.
/// Delivery order is unspecified.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<Rc<RefCell<dyn ShapeObserver>>>,
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer. Registering the same observer twice is a
    /// no-op; it will still be notified exactly once per event.
    pub fn subscribe(&mut self, observer: Rc<RefCell<dyn ShapeObserver>>) {
        if !self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            self.observers.push(observer);
        }
    }

    pub fn unsubscribe(&mut self, observer: &Rc<RefCell<dyn ShapeObserver>>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn notify(&self, event: ShapeEvent) {
        for observer in &self.observers {
            let mut observer = observer.borrow_mut();
            match event.cause {
                EventCause::Added => observer.shape_added(&event),
                EventCause::Deleted => observer.shape_deleted(&event),
                EventCause::Changed => observer.shape_changed(&event),
                EventCause::Selected => observer.shape_selected(&event),
            }
        }
    }
}
