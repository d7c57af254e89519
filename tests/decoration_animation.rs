use std::cell::RefCell;
use std::rc::Rc;

use egui::Color32;
use gfx_editor::animate::{Direction, brighten, darken};
use gfx_editor::shape::{Circle, Line, Oval, Rectangle, Square, Triangle};
use gfx_editor::{
    EventCause, Overlay, Point, Shape, ShapeCollection, ShapeCounters, ShapeEvent, ShapeId,
    ShapeKind, ShapeObserver,
};

const RED: Color32 = Color32::from_rgb(255, 0, 0);

#[derive(Default)]
struct Recorder {
    events: Vec<(EventCause, Option<ShapeId>)>,
}

impl ShapeObserver for Recorder {
    fn shape_changed(&mut self, event: &ShapeEvent) {
        self.events.push((event.cause, event.shape));
    }
}

fn sized<S: Shape>(mut shape: S, width: i32, height: i32) -> S {
    shape.set_size(width, height);
    shape
}

/// The observable facts decoration must not disturb.
fn observables(slot: &gfx_editor::Slot, probe: Point) -> (i32, i32, i32, i32, Option<Color32>, bool) {
    (
        slot.x(),
        slot.y(),
        slot.width(),
        slot.height(),
        slot.fill(),
        slot.contains(probe),
    )
}

#[test]
fn selection_overlay_is_observationally_transparent() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let shape = sized(Rectangle::new(10, 10, Some(RED), &mut counters), 40, 20);
    let id = shape.id();
    collection.add(ShapeKind::Rectangle(shape));

    let probe = Point::new(20, 20);
    let plain = observables(collection.get(id).unwrap(), probe);

    collection.set_selected(Some(id));
    assert!(collection.get(id).unwrap().has(Overlay::Selection));
    assert_eq!(observables(collection.get(id).unwrap(), probe), plain);

    collection.set_selected(None);
    assert!(!collection.get(id).unwrap().has(Overlay::Selection));
    assert_eq!(observables(collection.get(id).unwrap(), probe), plain);
}

#[test]
fn numbering_covers_the_whole_collection_and_is_idempotent() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();
    collection.add(ShapeKind::Rectangle(Rectangle::new(0, 0, Some(RED), &mut counters)));
    collection.add(ShapeKind::Circle(Circle::new(50, 0, Some(RED), &mut counters)));

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    collection.observers_mut().subscribe(recorder.clone());

    collection.add_number_overlays();
    collection.add_number_overlays();
    assert!(collection.slots().iter().all(|s| s.has(Overlay::Number)));

    collection.remove_number_overlays();
    assert!(collection.slots().iter().all(|s| !s.has(Overlay::Number)));

    // One aggregate change per call, shape-less.
    assert_eq!(
        recorder.borrow().events,
        vec![
            (EventCause::Changed, None),
            (EventCause::Changed, None),
            (EventCause::Changed, None),
        ]
    );
}

#[test]
fn numbering_leaves_the_selection_alone() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let shape = sized(Rectangle::new(0, 0, Some(RED), &mut counters), 40, 20);
    let id = shape.id();
    collection.add(ShapeKind::Rectangle(shape));
    collection.set_selected(Some(id));

    collection.add_number_overlays();
    collection.remove_number_overlays();

    assert_eq!(collection.selected(), Some(id));
    assert!(collection.get(id).unwrap().has(Overlay::Selection));
}

#[test]
fn forward_then_backward_restores_rectangle_geometry() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let shape = sized(Rectangle::new(10, 10, Some(RED), &mut counters), 40, 20);
    let id = shape.id();
    collection.add(ShapeKind::Rectangle(shape));

    collection.animate(Direction::Forward, 3);
    {
        let slot = collection.get(id).unwrap();
        assert_eq!((slot.width(), slot.height()), (43, 23));
    }

    collection.animate(Direction::Backward, 3);
    let slot = collection.get(id).unwrap();
    assert_eq!((slot.width(), slot.height()), (40, 20));
}

#[test]
fn forward_darkens_circles_and_backward_brightens_them() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let fill = Color32::from_rgb(200, 100, 50);
    let mut circle = Circle::new(0, 0, Some(fill), &mut counters);
    circle.set_size(30, 30);
    let id = circle.id();
    collection.add(ShapeKind::Circle(circle));

    collection.animate(Direction::Forward, 2);
    {
        let slot = collection.get(id).unwrap();
        assert_eq!(slot.fill(), Some(Color32::from_rgb(140, 70, 35)));
        // Geometry stays put; the forward step only shades.
        assert_eq!((slot.width(), slot.height()), (30, 30));
    }

    collection.animate(Direction::Backward, 2);
    let slot = collection.get(id).unwrap();
    assert_eq!(slot.fill(), Some(fill));
}

#[test]
fn shading_helpers_follow_awt_color_semantics() {
    assert_eq!(darken(Color32::from_rgb(100, 100, 100)), Color32::from_rgb(70, 70, 70));
    assert_eq!(brighten(Color32::from_rgb(70, 70, 70)), Color32::from_rgb(100, 100, 100));
    // Pure black escapes zero through the dark-gray floor.
    assert_eq!(brighten(Color32::BLACK), Color32::from_rgb(3, 3, 3));
    assert_eq!(brighten(Color32::from_rgb(1, 0, 0)), Color32::from_rgb(4, 0, 0));
    assert_eq!(darken(Color32::from_rgb(3, 3, 3)), Color32::from_rgb(2, 2, 2));
}

#[test]
fn forward_moves_triangles_up_and_images_right() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let triangle = sized(Triangle::new(10, 50, Some(RED), &mut counters), 30, 30);
    let triangle_id = triangle.id();
    collection.add(ShapeKind::Triangle(triangle));

    let frame = ShapeKind::Square(sized(Square::new(20, 20, Some(RED), &mut counters), 30, 30));
    let pixels = Rc::new(egui::ColorImage::new([2, 2], RED));
    let image = gfx_editor::shape::ImageShape::new(frame, Some(pixels), &mut counters);
    let image_id = image.id();
    collection.add(ShapeKind::Image(image));

    collection.animate(Direction::Forward, 2);

    let triangle = collection.get(triangle_id).unwrap();
    assert_eq!((triangle.x(), triangle.y()), (10, 48));
    let image = collection.get(image_id).unwrap();
    assert_eq!((image.x(), image.y()), (22, 20));
}

#[test]
fn animation_skips_line_oval_and_square() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let line = sized(Line::new(0, 0, Some(RED), &mut counters), 20, 10);
    let oval = sized(Oval::new(40, 0, Some(RED), &mut counters), 40, 25);
    let square = sized(Square::new(90, 0, Some(RED), &mut counters), 30, 30);
    let ids = [line.id(), oval.id(), square.id()];
    collection.add(ShapeKind::Line(line));
    collection.add(ShapeKind::Oval(oval));
    collection.add(ShapeKind::Square(square));

    let before: Vec<_> = ids
        .iter()
        .map(|&id| {
            let slot = collection.get(id).unwrap();
            (slot.x(), slot.y(), slot.width(), slot.height(), slot.fill())
        })
        .collect();

    collection.animate(Direction::Forward, 5);

    let after: Vec<_> = ids
        .iter()
        .map(|&id| {
            let slot = collection.get(id).unwrap();
            (slot.x(), slot.y(), slot.width(), slot.height(), slot.fill())
        })
        .collect();
    assert_eq!(before, after);
}

#[test]
fn animation_keeps_order_and_selection_and_fires_once() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let first = sized(Rectangle::new(0, 0, Some(RED), &mut counters), 40, 20);
    let second = sized(Triangle::new(60, 60, Some(RED), &mut counters), 30, 30);
    let (first_id, second_id) = (first.id(), second.id());
    collection.add(ShapeKind::Rectangle(first));
    collection.add(ShapeKind::Triangle(second));
    collection.set_selected(Some(second_id));

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    collection.observers_mut().subscribe(recorder.clone());

    collection.animate(Direction::Forward, 2);

    let order: Vec<_> = collection.slots().iter().map(|s| s.id()).collect();
    assert_eq!(order, vec![first_id, second_id]);
    assert_eq!(collection.selected(), Some(second_id));
    assert_eq!(recorder.borrow().events, vec![(EventCause::Changed, None)]);
}

#[test]
fn animation_reaches_shapes_underneath_their_overlays() {
    let mut counters = ShapeCounters::new();
    let mut collection = ShapeCollection::new();

    let shape = sized(Rectangle::new(0, 0, Some(RED), &mut counters), 40, 20);
    let id = shape.id();
    collection.add(ShapeKind::Rectangle(shape));
    collection.set_selected(Some(id));
    collection.add_number_overlays();

    collection.animate(Direction::Forward, 4);

    let slot = collection.get(id).unwrap();
    assert_eq!((slot.width(), slot.height()), (44, 24));
    assert!(slot.has(Overlay::Selection));
    assert!(slot.has(Overlay::Number));
}
