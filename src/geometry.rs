use egui::Pos2;

/// Integer canvas coordinates. Shapes anchor at a `Point` and all pointer
/// input is snapped to one before it reaches the collection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }

    pub fn from_pos2(pos: Pos2) -> Self {
        Self {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
        }
    }
}

/// Half-open rectangle containment. Degenerate rectangles contain nothing.
pub fn rect_contains(x: i32, y: i32, w: i32, h: i32, p: Point) -> bool {
    w > 0 && h > 0 && p.x >= x && p.y >= y && p.x < x + w && p.y < y + h
}

/// Containment for the ellipse inscribed in the given bounding box.
pub fn ellipse_contains(x: i32, y: i32, w: i32, h: i32, p: Point) -> bool {
    if w <= 0 || h <= 0 {
        return false;
    }
    let norm_x = (p.x - x) as f64 / w as f64 - 0.5;
    let norm_y = (p.y - y) as f64 / h as f64 - 0.5;
    norm_x * norm_x + norm_y * norm_y < 0.25
}

/// Even-odd containment test for a closed polygon.
pub fn polygon_contains(xs: &[i32], ys: &[i32], p: Point) -> bool {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 3 {
        return false;
    }
    let (px, py) = (p.x as f64, p.y as f64);
    let mut inside = false;
    let mut j = xs.len() - 1;
    for i in 0..xs.len() {
        let (xi, yi) = (xs[i] as f64, ys[i] as f64);
        let (xj, yj) = (xs[j] as f64, ys[j] as f64);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Distance from a point to a line segment.
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (p.x as f64, p.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);

    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let (proj_x, proj_y) = (ax + t * dx, ay + t * dy);
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}
