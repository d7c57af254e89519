use crate::shape::ShapeId;

/// The closed set of shape variant families. Sequence numbers run
/// independently per family.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeClass {
    Rectangle,
    Square,
    Circle,
    Oval,
    Triangle,
    Line,
    Image,
}

const CLASS_COUNT: usize = 7;

/// Issues shape identities and per-family sequence numbers.
///
/// Owned by whoever creates shapes (the app wires one instance through the
/// tools; tests create their own), so numbering is deterministic instead of
/// living in process-wide statics.
#[derive(Debug, Default)]
pub struct ShapeCounters {
    next_id: u64,
    numbers: [u32; CLASS_COUNT],
}

impl ShapeCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a fresh unique id plus the next sequence number of the
    /// given family. Numbers start at 1 and never repeat.
    pub fn issue(&mut self, class: ShapeClass) -> (ShapeId, u32) {
        self.next_id += 1;
        let number = &mut self.numbers[class as usize];
        *number += 1;
        (ShapeId(self.next_id), *number)
    }
}
