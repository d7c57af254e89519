#![warn(clippy::all, rust_2018_idioms)]

pub mod animate;
pub mod app;
pub mod collection;
pub mod counters;
pub mod decor;
pub mod error;
pub mod event;
pub mod geometry;
pub mod panels;
pub mod shape;
pub mod tool;

pub use app::EditorApp;
pub use collection::ShapeCollection;
pub use counters::{ShapeClass, ShapeCounters};
pub use decor::{Overlay, Slot};
pub use error::EditorError;
pub use event::{EventCause, ObserverSet, ShapeEvent, ShapeObserver};
pub use geometry::Point;
pub use shape::{Shape, ShapeId, ShapeKind};
pub use tool::ShapeTool;
