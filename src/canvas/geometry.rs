use eframe::egui::{Pos2, Rect, Vec2, pos2};

/// Angle step between consecutive star tips, in degrees.
pub const STAR_STEP_DEG: f32 = 144.0;

/// Segments used when an ellipse has to be treated as a polygon.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Five tips of a star inscribed in the box spanned by two corners.
///
/// Tips are emitted at `i * 144°` for `i in 0..5`, so walking them in order
/// traces a pentagram. Screen y grows downwards, hence the subtraction.
pub fn star_points(p1: Pos2, p2: Pos2) -> [Pos2; 5] {
    let center = p1.lerp(p2, 0.5);
    let radius = star_radius(p1, p2);

    let mut points = [Pos2::ZERO; 5];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = (i as f32 * STAR_STEP_DEG).to_radians();
        *point = pos2(
            center.x + radius * angle.cos(),
            center.y - radius * angle.sin(),
        );
    }
    points
}

/// Radius of the star drawn inside the box: half of the shorter side.
pub fn star_radius(p1: Pos2, p2: Pos2) -> f32 {
    (p2.x - p1.x).abs().min((p2.y - p1.y).abs()) / 2.0
}

/// Edge midpoints of the box, clockwise from the top.
pub fn diamond_points(p1: Pos2, p2: Pos2) -> [Pos2; 4] {
    let mid_x = (p1.x + p2.x) / 2.0;
    let mid_y = (p1.y + p2.y) / 2.0;
    [
        pos2(mid_x, p1.y),
        pos2(p2.x, mid_y),
        pos2(mid_x, p2.y),
        pos2(p1.x, mid_y),
    ]
}

/// Normalize min/max coordinates from arbitrary start/end points
#[inline]
pub fn normalize_rect(p1: Pos2, p2: Pos2) -> Rect {
    Rect::from_two_pos(p1, p2)
}

/// Closed outline of the ellipse inscribed in the box.
pub fn ellipse_outline(p1: Pos2, p2: Pos2, segments: usize) -> Vec<Pos2> {
    let rect = normalize_rect(p1, p2);
    let center = rect.center();
    let radius = rect.size() * 0.5;
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * std::f32::consts::TAU;
            pos2(center.x + radius.x * t.cos(), center.y + radius.y * t.sin())
        })
        .collect()
}

/// Four corners of the box, clockwise from the top-left.
pub fn rect_corners(p1: Pos2, p2: Pos2) -> [Pos2; 4] {
    let rect = normalize_rect(p1, p2);
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}

/// Shortest distance from `p` to the segment `a..b`.
pub fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Shortest distance from `p` to the edges of a closed polygon.
pub fn distance_to_outline(p: Pos2, points: &[Pos2]) -> f32 {
    match points.len() {
        0 => f32::INFINITY,
        1 => p.distance(points[0]),
        n => (0..n)
            .map(|i| distance_to_segment(p, points[i], points[(i + 1) % n]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Even-odd test, so the pentagon at the heart of a star is outside.
pub fn point_in_polygon(p: Pos2, points: &[Pos2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether `p` lies inside the ellipse inscribed in the box.
pub fn point_in_ellipse(p: Pos2, p1: Pos2, p2: Pos2) -> bool {
    let rect = normalize_rect(p1, p2);
    let radius = rect.size() * 0.5;
    if radius.x <= 0.0 || radius.y <= 0.0 {
        return false;
    }
    let d = p - rect.center();
    let nx = d.x / radius.x;
    let ny = d.y / radius.y;
    nx * nx + ny * ny <= 1.0
}

/// Offset that carries `from` onto `to`.
#[inline]
pub fn delta_between(from: Pos2, to: Pos2) -> Vec2 {
    to - from
}
