//! Shared drawing helpers: HSB color, aligned text, menu-style buttons.

use macroquad::prelude::*;

/// Build a color from cylindrical HSB coordinates: hue in degrees (0..360),
/// saturation and brightness in percent (0..100).
pub fn hsb(h: f32, s: f32, b: f32) -> Color {
    let s = s / 100.0;
    let v = b / 100.0;
    let c = v * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let (r, g, bl) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    Color::new(r + m, g + m, bl + m, 1.0)
}

pub fn draw_text_centered(text: &str, cx: f32, cy: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(
        text,
        cx - dims.width / 2.0,
        cy + dims.offset_y / 2.0,
        size as f32,
        color,
    );
}

/// Text anchored at its top-right corner.
pub fn draw_text_right(text: &str, right_x: f32, top_y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(
        text,
        right_x - dims.width,
        top_y + dims.offset_y,
        size as f32,
        color,
    );
}

/// Text anchored at its top-left corner.
pub fn draw_text_top_left(text: &str, x: f32, top_y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, x, top_y + dims.offset_y, size as f32, color);
}

/// Centered text with a soft drop shadow, used for the color-name display.
pub fn draw_shadowed_text_centered(text: &str, cx: f32, cy: f32, size: u16, color: Color) {
    let shadow = Color::new(0.0, 0.0, 0.0, 0.5);
    draw_text_centered(text, cx + 5.0, cy + 5.0, size, shadow);
    draw_text_centered(text, cx, cy, size, color);
}

/// Bounds of a 300x80 menu button centered on `center`.
pub fn button_rect(center: Vec2) -> Rect {
    Rect::new(center.x - 150.0, center.y - 40.0, 300.0, 80.0)
}

pub fn draw_button(center: Vec2, label: &str, fill: Color) {
    let r = button_rect(center);
    draw_rectangle(r.x, r.y, r.w, r.h, fill);
    draw_rectangle_lines(r.x, r.y, r.w, r.h, 3.0, BLACK);
    draw_text_centered(label, center.x, center.y, 32, BLACK);
}
