//! Top-level screen dispatcher: owns the score, the round timer, the RNG
//! and the three per-game states, and routes ticks and clicks to whichever
//! screen is active.

use macroquad::logging::info;
use macroquad::prelude::{clear_background, Color, Vec2, BLACK, RED};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::collide::point_in_rect;
use crate::color_game::ColorGame;
use crate::dragon::DragonGame;
use crate::math_game::MathGame;
use crate::round::RoundTimer;
use crate::ui::{
    button_rect, draw_button, draw_text_centered, draw_text_right, hsb,
};

/// Logical canvas size; the window is created at this size and not
/// resizable.
pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 600.0;

const COLOR_BUTTON: Vec2 = Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0 - 70.0);
const MATH_BUTTON: Vec2 = Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0 + 30.0);
const DRAGON_BUTTON: Vec2 = Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0 + 130.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    ColorGame,
    MathGame,
    DragonGame,
    GameOver,
}

/// What a click on a quiz screen amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Correct,
    Wrong,
    /// Click landed outside every target; no penalty, no feedback.
    Ignored,
}

pub struct App {
    pub screen: Screen,
    pub score: u32,
    pub timer: RoundTimer,
    pub rng: Pcg32,
    pub color: ColorGame,
    pub math: MathGame,
    pub dragon: DragonGame,
}

impl App {
    pub fn new(seed: u64, now: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let color = ColorGame::new(&mut rng);
        let math = MathGame::new(&mut rng);
        Self {
            screen: Screen::Menu,
            score: 0,
            timer: RoundTimer::start(now),
            rng,
            color,
            math,
            dragon: DragonGame::new(now),
        }
    }

    fn start_game(&mut self, screen: Screen, now: f64) {
        self.score = 0;
        self.timer = RoundTimer::start(now);
        match screen {
            Screen::ColorGame => self.color = ColorGame::new(&mut self.rng),
            Screen::MathGame => self.math = MathGame::new(&mut self.rng),
            Screen::DragonGame => self.dragon = DragonGame::new(now),
            _ => {}
        }
        self.screen = screen;
        info!("starting {:?}", screen);
    }

    fn game_over(&mut self) {
        info!("game over, final score {}", self.score);
        self.screen = Screen::GameOver;
    }

    /// Per-tick logic: round expiry on the quiz screens, the full world
    /// tick on the scroller. The menu and game-over screens have none.
    pub fn update(&mut self, now: f64) {
        match self.screen {
            Screen::ColorGame | Screen::MathGame => {
                if self.timer.is_expired(now) {
                    self.game_over();
                }
            }
            Screen::DragonGame => {
                let outcome = self.dragon.tick(now, &mut self.rng);
                self.score += outcome.passed;
                if outcome.died {
                    self.game_over();
                }
            }
            Screen::Menu | Screen::GameOver => {}
        }
    }

    pub fn handle_click(&mut self, pos: Vec2, now: f64) {
        match self.screen {
            Screen::Menu => {
                if point_in_rect(pos, button_rect(COLOR_BUTTON)) {
                    self.start_game(Screen::ColorGame, now);
                } else if point_in_rect(pos, button_rect(MATH_BUTTON)) {
                    self.start_game(Screen::MathGame, now);
                } else if point_in_rect(pos, button_rect(DRAGON_BUTTON)) {
                    self.start_game(Screen::DragonGame, now);
                }
            }
            Screen::ColorGame => match self.color.handle_click(pos) {
                ClickOutcome::Correct => {
                    self.score += 1;
                    self.color.next_round(&mut self.rng);
                    self.timer.advance(now, self.score);
                }
                ClickOutcome::Wrong => self.game_over(),
                ClickOutcome::Ignored => {}
            },
            Screen::MathGame => match self.math.handle_click(pos) {
                ClickOutcome::Correct => {
                    self.score += 1;
                    self.math.next_round(&mut self.rng);
                    self.timer.advance(now, self.score);
                }
                ClickOutcome::Wrong => self.game_over(),
                ClickOutcome::Ignored => {}
            },
            Screen::DragonGame => self.dragon.jump(),
            Screen::GameOver => self.screen = Screen::Menu,
        }
    }

    pub fn draw(&self, now: f64) {
        clear_background(Color::new(0.86, 0.86, 0.86, 1.0));
        match self.screen {
            Screen::Menu => self.draw_menu(),
            Screen::ColorGame => {
                self.color.draw(self.score);
                self.draw_timer(now);
            }
            Screen::MathGame => {
                self.math.draw(self.score);
                self.draw_timer(now);
            }
            Screen::DragonGame => self.dragon.draw(self.score),
            Screen::GameOver => self.draw_game_over(),
        }
    }

    fn draw_menu(&self) {
        draw_text_centered(
            "Color & Math & Dragon Frenzy!",
            SCREEN_W / 2.0,
            SCREEN_H / 2.0 - 200.0,
            58,
            BLACK,
        );
        draw_button(COLOR_BUTTON, "Play Color Game", hsb(220.0, 80.0, 90.0));
        draw_button(MATH_BUTTON, "Play Math Game", hsb(60.0, 80.0, 90.0));
        draw_button(DRAGON_BUTTON, "Play Dragonheart", hsb(0.0, 80.0, 90.0));
    }

    fn draw_game_over(&self) {
        draw_text_centered(
            "GAME OVER!",
            SCREEN_W / 2.0,
            SCREEN_H / 2.0 - 80.0,
            64,
            RED,
        );
        draw_text_centered(
            &format!("Your Score: {}", self.score),
            SCREEN_W / 2.0,
            SCREEN_H / 2.0,
            42,
            BLACK,
        );
        draw_text_centered(
            "Click to Return to Menu",
            SCREEN_W / 2.0,
            SCREEN_H / 2.0 + 70.0,
            28,
            BLACK,
        );
    }

    fn draw_timer(&self, now: f64) {
        let remaining = self.timer.remaining(now).max(0.0);
        draw_text_right(
            &format!("Time: {:.1}s", remaining / 1000.0),
            SCREEN_W - 30.0,
            30.0,
            28,
            BLACK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_game::{color_match, palette, swatch_rect, COLOR_NAMES};
    use macroquad::prelude::vec2;
    use crate::math_game::choice_rect;
    use crate::round::{INITIAL_TIME_LIMIT_MS, MIN_TIME_LIMIT_MS};

    fn app() -> App {
        App::new(12345, 0.0)
    }

    #[test]
    fn menu_routes_to_each_game_and_zeroes_the_score() {
        let mut a = app();
        a.score = 9;
        a.handle_click(COLOR_BUTTON, 0.0);
        assert_eq!(a.screen, Screen::ColorGame);
        assert_eq!(a.score, 0);

        let mut a = app();
        a.handle_click(MATH_BUTTON, 0.0);
        assert_eq!(a.screen, Screen::MathGame);

        let mut a = app();
        a.handle_click(DRAGON_BUTTON, 0.0);
        assert_eq!(a.screen, Screen::DragonGame);
    }

    #[test]
    fn menu_click_outside_all_buttons_is_a_no_op() {
        let mut a = app();
        a.handle_click(vec2(10.0, 10.0), 0.0);
        assert_eq!(a.screen, Screen::Menu);
    }

    #[test]
    fn color_game_green_target_scores_only_on_the_green_swatch() {
        let mut a = app();
        a.handle_click(COLOR_BUTTON, 0.0);
        a.color.target_color = palette()[1];
        a.color.target_name = COLOR_NAMES[1];

        a.handle_click(swatch_rect(1).center(), 100.0);
        assert_eq!(a.score, 1);
        assert_eq!(a.screen, Screen::ColorGame);

        // A fresh round was generated; force GREEN again and miss on purpose.
        a.color.target_color = palette()[1];
        a.color.target_name = COLOR_NAMES[1];
        a.handle_click(swatch_rect(0).center(), 200.0);
        assert_eq!(a.screen, Screen::GameOver);
        assert_eq!(a.score, 1);
    }

    #[test]
    fn correct_answers_shrink_the_round_limit_down_to_the_floor() {
        let mut a = app();
        a.handle_click(COLOR_BUTTON, 0.0);
        let mut last_limit = INITIAL_TIME_LIMIT_MS;
        for i in 0..40 {
            let idx = COLOR_NAMES
                .iter()
                .position(|n| *n == a.color.target_name)
                .unwrap();
            assert!(color_match(palette()[idx], a.color.target_color));
            a.handle_click(swatch_rect(idx).center(), i as f64);
            assert!(a.timer.limit() <= last_limit);
            assert!(a.timer.limit() >= MIN_TIME_LIMIT_MS);
            last_limit = a.timer.limit();
        }
        assert_eq!(a.score, 40);
        assert_eq!(a.timer.limit(), MIN_TIME_LIMIT_MS);
    }

    #[test]
    fn math_game_scores_on_the_correct_button_only() {
        let mut a = app();
        a.handle_click(MATH_BUTTON, 0.0);
        let correct = a
            .math
            .choices
            .iter()
            .position(|v| *v == a.math.answer)
            .unwrap();
        a.handle_click(choice_rect(correct).center(), 50.0);
        assert_eq!(a.score, 1);
        assert_eq!(a.screen, Screen::MathGame);

        let wrong = a
            .math
            .choices
            .iter()
            .position(|v| *v != a.math.answer)
            .unwrap();
        a.handle_click(choice_rect(wrong).center(), 60.0);
        assert_eq!(a.screen, Screen::GameOver);
    }

    #[test]
    fn quiz_round_expiry_forces_game_over() {
        let mut a = app();
        a.handle_click(MATH_BUTTON, 0.0);
        a.update(INITIAL_TIME_LIMIT_MS - 1.0);
        assert_eq!(a.screen, Screen::MathGame);
        a.update(INITIAL_TIME_LIMIT_MS);
        assert_eq!(a.screen, Screen::GameOver);
    }

    #[test]
    fn dragon_clicks_jump_instead_of_hit_testing() {
        let mut a = app();
        a.handle_click(DRAGON_BUTTON, 0.0);
        let vy_before = a.dragon.dragon.vy;
        a.handle_click(vec2(5.0, 5.0), 1.0);
        assert!(a.dragon.dragon.vy < vy_before);
    }

    #[test]
    fn dragon_death_ends_the_game_and_avoided_obstacles_score() {
        let mut a = app();
        a.handle_click(DRAGON_BUTTON, 0.0);
        a.dragon.dragon.lives = 1;
        let d = &a.dragon.dragon;
        a.dragon.obstacles.push(crate::dragon::Obstacle {
            x: d.x,
            y: d.y,
            w: 80.0,
            h: 80.0,
        });
        a.update(1.0);
        assert_eq!(a.screen, Screen::GameOver);
        assert_eq!(a.score, 0);
    }

    #[test]
    fn game_over_click_returns_to_menu_and_keeps_the_score_display() {
        let mut a = app();
        a.handle_click(MATH_BUTTON, 0.0);
        a.score = 7;
        a.update(INITIAL_TIME_LIMIT_MS + 1.0);
        assert_eq!(a.screen, Screen::GameOver);
        assert_eq!(a.score, 7);

        a.handle_click(vec2(1.0, 1.0), 0.0);
        assert_eq!(a.screen, Screen::Menu);
        // Score survives until a game is started again.
        assert_eq!(a.score, 7);
    }
}
