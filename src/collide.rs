//! Axis-aligned collision tests shared by the minigames.

use macroquad::prelude::{Rect, Vec2};

/// Rectangle overlap with inclusive edges: rectangles that merely touch
/// count as colliding.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.x + a.w >= b.x && a.x <= b.x + b.w && a.y + a.h >= b.y && a.y <= b.y + b.h
}

/// Circle overlap: center distance strictly below the radius sum.
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    c1.distance(c2) < r1 + r2
}

/// Pointer hit-test with strict inequalities, so a click exactly on a
/// button border falls through as a miss.
pub fn point_in_rect(p: Vec2, r: Rect) -> bool {
    p.x > r.x && p.x < r.x + r.w && p.y > r.y && p.y < r.y + r.h
}
