//! Color-naming reaction game: a color word is shown in a possibly
//! mismatched color; click the swatch whose *value* the word names.

use macroquad::prelude::{draw_rectangle, draw_rectangle_lines, Color, Rect, Vec2, BLACK, WHITE};
use rand::Rng;

use crate::app::{ClickOutcome, SCREEN_H, SCREEN_W};
use crate::collide::point_in_rect;
use crate::ui::{draw_shadowed_text_centered, draw_text_top_left, hsb};

pub const COLOR_NAMES: [&str; 4] = ["BLUE", "GREEN", "YELLOW", "PINK"];

/// The fixed answer palette, in the same order as `COLOR_NAMES`.
pub fn palette() -> [Color; 4] {
    [
        hsb(220.0, 80.0, 90.0), // BLUE
        hsb(120.0, 80.0, 90.0), // GREEN
        hsb(60.0, 80.0, 90.0),  // YELLOW
        hsb(320.0, 80.0, 90.0), // PINK
    ]
}

/// Channel-exact equality, not perceptual similarity.
pub fn color_match(a: Color, b: Color) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b
}

const SWATCH_SIZE: f32 = 160.0;
const SWATCH_SPACING: f32 = 40.0;
const SWATCH_BOTTOM_MARGIN: f32 = 70.0;

/// Bounds of swatch `i` in the four-across row near the bottom of the screen.
pub fn swatch_rect(i: usize) -> Rect {
    let total = 4.0 * SWATCH_SIZE + 3.0 * SWATCH_SPACING;
    let start_x = (SCREEN_W - total) / 2.0;
    Rect::new(
        start_x + i as f32 * (SWATCH_SIZE + SWATCH_SPACING),
        SCREEN_H - SWATCH_SIZE - SWATCH_BOTTOM_MARGIN,
        SWATCH_SIZE,
        SWATCH_SIZE,
    )
}

pub struct ColorGame {
    pub target_color: Color,
    pub target_name: &'static str,
    /// Color the target name is rendered in; deliberately independent of the
    /// target itself.
    pub text_color: Color,
}

impl ColorGame {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut game = Self {
            target_color: WHITE,
            target_name: "",
            text_color: WHITE,
        };
        game.next_round(rng);
        game
    }

    pub fn next_round(&mut self, rng: &mut impl Rng) {
        let colors = palette();
        let target = rng.random_range(0..colors.len());
        self.target_color = colors[target];
        self.target_name = COLOR_NAMES[target];
        self.text_color = colors[rng.random_range(0..colors.len())];
    }

    /// Linear scan over the swatches; clicks on empty space are ignored.
    pub fn handle_click(&self, pos: Vec2) -> ClickOutcome {
        for (i, color) in palette().iter().enumerate() {
            if point_in_rect(pos, swatch_rect(i)) {
                return if color_match(*color, self.target_color) {
                    ClickOutcome::Correct
                } else {
                    ClickOutcome::Wrong
                };
            }
        }
        ClickOutcome::Ignored
    }

    pub fn draw(&self, score: u32) {
        for (i, color) in palette().iter().enumerate() {
            let r = swatch_rect(i);
            draw_rectangle(r.x, r.y, r.w, r.h, *color);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 3.0, BLACK);
        }

        draw_shadowed_text_centered(
            self.target_name,
            SCREEN_W / 2.0,
            SCREEN_H / 2.0 - 50.0,
            84,
            self.text_color,
        );

        draw_text_top_left(&format!("Score: {}", score), 30.0, 30.0, 32, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn forced(target: usize, display: usize) -> ColorGame {
        ColorGame {
            target_color: palette()[target],
            target_name: COLOR_NAMES[target],
            text_color: palette()[display],
        }
    }

    #[test]
    fn exactly_one_swatch_matches_the_target() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut game = ColorGame::new(&mut rng);
        for _ in 0..500 {
            let matching = palette()
                .iter()
                .filter(|c| color_match(**c, game.target_color))
                .count();
            assert_eq!(matching, 1);
            game.next_round(&mut rng);
        }
    }

    #[test]
    fn target_name_always_names_the_target_value() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut game = ColorGame::new(&mut rng);
        for _ in 0..200 {
            let idx = COLOR_NAMES
                .iter()
                .position(|n| *n == game.target_name)
                .unwrap();
            assert!(color_match(palette()[idx], game.target_color));
            game.next_round(&mut rng);
        }
    }

    #[test]
    fn clicking_the_green_swatch_when_green_is_the_target_is_correct() {
        let game = forced(1, 3);
        let hit = swatch_rect(1).center();
        assert!(matches!(game.handle_click(hit), ClickOutcome::Correct));
    }

    #[test]
    fn clicking_any_other_swatch_is_wrong() {
        let game = forced(1, 3);
        for i in [0usize, 2, 3] {
            let hit = swatch_rect(i).center();
            assert!(matches!(game.handle_click(hit), ClickOutcome::Wrong));
        }
    }

    #[test]
    fn clicking_empty_space_is_ignored() {
        let game = forced(0, 0);
        assert!(matches!(
            game.handle_click(vec2(SCREEN_W / 2.0, 10.0)),
            ClickOutcome::Ignored
        ));
    }

    #[test]
    fn display_color_may_differ_from_target() {
        // The mismatch is the whole point of the game; just check the forced
        // construction used above actually produces one.
        let game = forced(1, 3);
        assert!(!color_match(game.text_color, game.target_color));
    }
}
