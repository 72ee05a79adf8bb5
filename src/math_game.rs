//! Mental-math quiz: one arithmetic problem, four candidate answers, one
//! of them correct.

use macroquad::prelude::{draw_rectangle, draw_rectangle_lines, Rect, Vec2, BLACK};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::app::{ClickOutcome, SCREEN_H, SCREEN_W};
use crate::collide::point_in_rect;
use crate::ui::{draw_text_centered, draw_text_top_left, hsb};

pub const MAX_OPERAND: i32 = 12;
pub const NUM_CHOICES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
        }
    }
}

const BUTTON_W: f32 = 150.0;
const BUTTON_H: f32 = 70.0;
const BUTTON_SPACING: f32 = 20.0;

/// Bounds of answer button `i` in the four-across row below the problem.
pub fn choice_rect(i: usize) -> Rect {
    let n = NUM_CHOICES as f32;
    let start_x = (SCREEN_W - (n * BUTTON_W + (n - 1.0) * BUTTON_SPACING)) / 2.0;
    Rect::new(
        start_x + i as f32 * (BUTTON_W + BUTTON_SPACING),
        SCREEN_H / 2.0 + 50.0,
        BUTTON_W,
        BUTTON_H,
    )
}

pub struct MathGame {
    pub a: i32,
    pub b: i32,
    pub op: Op,
    pub answer: i32,
    pub choices: Vec<i32>,
}

impl MathGame {
    pub fn new(rng: &mut impl Rng) -> Self {
        let a = rng.random_range(1..=MAX_OPERAND);
        let b = rng.random_range(1..=MAX_OPERAND);
        let op = match rng.random_range(0..3) {
            0 => Op::Add,
            1 => Op::Sub,
            _ => Op::Mul,
        };
        Self::with_problem(a, b, op, rng)
    }

    /// Build a game from fixed operands; subtraction operands are reordered
    /// so the result is never negative.
    pub fn with_problem(a: i32, b: i32, op: Op, rng: &mut impl Rng) -> Self {
        let (a, b) = if op == Op::Sub && a < b { (b, a) } else { (a, b) };
        let answer = match op {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
        };
        let choices = build_choices(answer, rng);
        Self {
            a,
            b,
            op,
            answer,
            choices,
        }
    }

    pub fn next_round(&mut self, rng: &mut impl Rng) {
        *self = Self::new(rng);
    }

    /// Linear scan over the answer buttons; clicks on empty space are
    /// ignored.
    pub fn handle_click(&self, pos: Vec2) -> ClickOutcome {
        for (i, value) in self.choices.iter().enumerate() {
            if point_in_rect(pos, choice_rect(i)) {
                return if *value == self.answer {
                    ClickOutcome::Correct
                } else {
                    ClickOutcome::Wrong
                };
            }
        }
        ClickOutcome::Ignored
    }

    pub fn draw(&self, score: u32) {
        draw_text_centered(
            &format!("{} {} {} = ?", self.a, self.op.symbol(), self.b),
            SCREEN_W / 2.0,
            SCREEN_H / 2.0 - 100.0,
            64,
            BLACK,
        );

        let fill = hsb(100.0, 70.0, 90.0);
        for (i, value) in self.choices.iter().enumerate() {
            let r = choice_rect(i);
            draw_rectangle(r.x, r.y, r.w, r.h, fill);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, BLACK);
            draw_text_centered(
                &value.to_string(),
                r.x + r.w / 2.0,
                r.y + r.h / 2.0,
                32,
                BLACK,
            );
        }

        draw_text_top_left(&format!("Score: {}", score), 30.0, 30.0, 32, BLACK);
    }
}

/// Four unique non-negative candidates containing `answer`. Decoys perturb
/// the answer by a small offset; when that collides or goes negative, fall
/// back to a uniform draw over the full answer range.
fn build_choices(answer: i32, rng: &mut impl Rng) -> Vec<i32> {
    let mut choices = vec![answer];
    while choices.len() < NUM_CHOICES {
        let offset = rng.random_range(-5..=5);
        let candidate = answer + offset;
        if candidate >= 0 && !choices.contains(&candidate) {
            choices.push(candidate);
        } else {
            let fallback = rng.random_range(0..=MAX_OPERAND * MAX_OPERAND);
            if !choices.contains(&fallback) {
                choices.push(fallback);
            }
        }
    }
    choices.shuffle(rng);
    choices
}
