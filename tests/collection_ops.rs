use std::cell::RefCell;
use std::rc::Rc;

use egui::Color32;
use gfx_editor::shape::{Circle, Rectangle};
use gfx_editor::{
    EventCause, Overlay, Point, Shape, ShapeCollection, ShapeCounters, ShapeEvent, ShapeId,
    ShapeKind, ShapeObserver,
};

const RED: Color32 = Color32::from_rgb(255, 0, 0);

/// Records every notification in delivery order.
#[derive(Default)]
struct Recorder {
    events: Vec<(EventCause, Option<ShapeId>)>,
}

impl Recorder {
    fn push(&mut self, event: &ShapeEvent) {
        self.events.push((event.cause, event.shape));
    }
}

impl ShapeObserver for Recorder {
    fn shape_added(&mut self, event: &ShapeEvent) {
        self.push(event);
    }
    fn shape_deleted(&mut self, event: &ShapeEvent) {
        self.push(event);
    }
    fn shape_changed(&mut self, event: &ShapeEvent) {
        self.push(event);
    }
    fn shape_selected(&mut self, event: &ShapeEvent) {
        self.push(event);
    }
}

fn recorded(collection: &mut ShapeCollection) -> Rc<RefCell<Recorder>> {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    collection.observers_mut().subscribe(recorder.clone());
    recorder
}

fn events(recorder: &Rc<RefCell<Recorder>>) -> Vec<(EventCause, Option<ShapeId>)> {
    recorder.borrow().events.clone()
}

fn rect(x: i32, y: i32, counters: &mut ShapeCounters) -> ShapeKind {
    ShapeKind::Rectangle(Rectangle::new(x, y, Some(RED), counters))
}

fn circle(x: i32, y: i32, counters: &mut ShapeCounters) -> ShapeKind {
    ShapeKind::Circle(Circle::new(x, y, Some(RED), counters))
}

#[test]
fn add_makes_the_shape_current_and_notifies() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();
    let recorder = recorded(&mut collection);

    let shape = rect(10, 10, &mut counters);
    let id = shape.id();
    collection.add(shape);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.current(), Some(id));
    assert_eq!(collection.selected(), None);
    assert_eq!(events(&recorder), vec![(EventCause::Added, Some(id))]);
}

#[test]
fn creation_gesture_produces_one_unselected_shape() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    collection.add(rect(10, 10, &mut counters));
    collection.resize(Point::new(50, 40));
    collection.finish(false);

    assert_eq!(collection.len(), 1);
    let slot = &collection.slots()[0];
    assert_eq!((slot.width(), slot.height()), (40, 30));
    assert_eq!(collection.selected(), None);
    assert_eq!(collection.current(), None);
}

#[test]
fn finish_with_defaults_snaps_to_the_variant_size() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();
    let recorder = recorded(&mut collection);

    let shape = rect(10, 10, &mut counters);
    let id = shape.id();
    collection.add(shape);
    collection.finish(true);

    assert_eq!(collection.len(), 1);
    let slot = collection.get(id).unwrap();
    assert_eq!((slot.width(), slot.height()), (40, 20));
    assert_eq!(
        events(&recorder),
        vec![
            (EventCause::Added, Some(id)),
            (EventCause::Changed, Some(id)),
        ]
    );
}

#[test]
fn finish_deletes_a_shape_that_ended_up_invisible() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    collection.add(circle(10, 10, &mut counters));
    // Dragging left of the anchor leaves a negative diameter.
    collection.resize(Point::new(5, 40));
    collection.finish(false);

    assert!(collection.is_empty());
    assert_eq!(collection.current(), None);
}

#[test]
fn finish_without_a_current_shape_is_silent() {
    let mut collection = ShapeCollection::new();
    let recorder = recorded(&mut collection);

    collection.finish(true);

    assert!(events(&recorder).is_empty());
}

#[test]
fn select_at_picks_the_topmost_hit() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let mut below = circle(0, 0, &mut counters);
    below.set_size(30, 30);
    let mut above = circle(5, 5, &mut counters);
    above.set_size(30, 30);
    let above_id = above.id();
    collection.add(below);
    collection.add(above);

    // Both circles contain the probe; the later one wins.
    collection.select_at(Point::new(10, 10));
    assert_eq!(collection.selected(), Some(above_id));
}

#[test]
fn selecting_the_already_selected_shape_fires_nothing() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let mut shape = circle(0, 0, &mut counters);
    shape.set_size(30, 30);
    collection.add(shape);
    collection.select_at(Point::new(10, 10));

    let recorder = recorded(&mut collection);
    collection.select_at(Point::new(12, 12));

    assert!(events(&recorder).is_empty());
}

#[test]
fn selection_is_exclusive_across_the_collection() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let first = rect(0, 0, &mut counters);
    let second = rect(100, 0, &mut counters);
    let (first_id, second_id) = (first.id(), second.id());
    collection.add(first);
    collection.add(second);

    collection.set_selected(Some(first_id));
    collection.set_selected(Some(second_id));

    let marked: Vec<_> = collection
        .slots()
        .iter()
        .filter(|slot| slot.has(Overlay::Selection))
        .map(|slot| slot.id())
        .collect();
    assert_eq!(marked, vec![second_id]);
}

#[test]
fn missing_everything_clears_the_selection() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let mut shape = circle(0, 0, &mut counters);
    shape.set_size(30, 30);
    collection.add(shape);
    collection.select_at(Point::new(10, 10));
    assert!(collection.selected().is_some());

    collection.select_at(Point::new(500, 500));
    assert_eq!(collection.selected(), None);
    assert!(collection.slots().iter().all(|s| !s.has(Overlay::Selection)));
}

#[test]
fn change_notification_precedes_the_selection_notification() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let shape = rect(0, 0, &mut counters);
    let id = shape.id();
    collection.add(shape);

    let recorder = recorded(&mut collection);
    collection.set_selected(Some(id));

    assert_eq!(
        events(&recorder),
        vec![
            (EventCause::Changed, Some(id)),
            (EventCause::Selected, Some(id)),
        ]
    );
}

#[test]
fn selecting_a_shape_not_in_the_collection_is_a_no_op() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();
    collection.add(rect(0, 0, &mut counters));

    let stranger = rect(50, 50, &mut counters);
    let recorder = recorded(&mut collection);
    collection.set_selected(Some(stranger.id()));

    assert_eq!(collection.selected(), None);
    assert!(events(&recorder).is_empty());
}

#[test]
fn delete_clears_selection_and_reports_no_shape() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let first = rect(0, 0, &mut counters);
    let second = rect(100, 0, &mut counters);
    let first_id = first.id();
    collection.add(first);
    collection.add(second);
    collection.set_selected(Some(first_id));

    let recorder = recorded(&mut collection);
    collection.delete(first_id);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.selected(), None);
    assert_eq!(events(&recorder), vec![(EventCause::Deleted, None)]);
}

#[test]
fn delete_selected_without_selection_is_silent() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();
    collection.add(rect(0, 0, &mut counters));

    let recorder = recorded(&mut collection);
    collection.delete_selected();

    assert_eq!(collection.len(), 1);
    assert!(events(&recorder).is_empty());
}

#[test]
fn deleting_an_unknown_id_is_silent() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();
    collection.add(rect(0, 0, &mut counters));

    let stranger = rect(50, 50, &mut counters);
    let recorder = recorded(&mut collection);
    collection.delete(stranger.id());

    assert_eq!(collection.len(), 1);
    assert!(events(&recorder).is_empty());
}

#[test]
fn move_selected_repositions_and_notifies() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let mut shape = rect(0, 0, &mut counters);
    shape.set_size(40, 20);
    let id = shape.id();
    collection.add(shape);
    collection.finish(false);
    collection.set_selected(Some(id));

    let recorder = recorded(&mut collection);
    collection.move_selected(Point::new(30, 40));

    let slot = collection.get(id).unwrap();
    assert_eq!((slot.x(), slot.y()), (30, 40));
    assert_eq!((slot.width(), slot.height()), (40, 20));
    assert_eq!(events(&recorder), vec![(EventCause::Changed, Some(id))]);
}

#[test]
fn resize_without_a_current_shape_is_silent() {
    let mut collection = ShapeCollection::new();
    let recorder = recorded(&mut collection);

    collection.resize(Point::new(50, 50));
    collection.move_to(Point::new(50, 50));

    assert!(events(&recorder).is_empty());
}

#[test]
fn observers_are_deduplicated_by_identity() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    collection.observers_mut().subscribe(recorder.clone());
    collection.observers_mut().subscribe(recorder.clone());
    assert_eq!(collection.observers_mut().len(), 1);

    collection.add(rect(0, 0, &mut counters));
    assert_eq!(recorder.borrow().events.len(), 1);
}

#[test]
fn unsubscribed_observers_stop_receiving() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let erased: Rc<RefCell<dyn ShapeObserver>> = recorder.clone();
    collection.observers_mut().subscribe(erased.clone());

    collection.add(rect(0, 0, &mut counters));
    collection.observers_mut().unsubscribe(&erased);
    collection.add(rect(100, 0, &mut counters));

    assert_eq!(recorder.borrow().events.len(), 1);
}
