//! Dragonheart: side-scrolling dodge-and-collect. Gravity pulls the dragon
//! down, clicks flap it up, obstacles hurt, hearts heal, and every obstacle
//! that scrolls past uneventfully is a point.

use macroquad::prelude::{
    draw_circle, draw_rectangle, draw_triangle, vec2, Color, Rect, Vec2, BLACK,
};
use rand::Rng;

use crate::app::{SCREEN_H, SCREEN_W};
use crate::collide::{circles_overlap, rects_overlap};
use crate::ui::{draw_text_top_left, hsb};

pub const INITIAL_LIVES: i32 = 3;
pub const MAX_LIVES: i32 = 3;

const GRAVITY: f32 = 0.6;
const JUMP_IMPULSE: f32 = -10.0;
const DRAGON_SIZE: f32 = 60.0;
const HEART_SIZE: f32 = 30.0;
const GAME_SPEED: f32 = 4.0;

const MIN_OBSTACLE_INTERVAL_MS: f64 = 1000.0;
const MAX_OBSTACLE_INTERVAL_MS: f64 = 2000.0;
const MIN_HEART_INTERVAL_MS: f64 = 5000.0;
const MAX_HEART_INTERVAL_MS: f64 = 10_000.0;

/// The vertical clamp does not kill velocity in the original game, which
/// gives gliding along the ground its floaty feel. Flip to true for a hard
/// stop at the bounds instead.
const KILL_VELOCITY_AT_BOUNDS: bool = false;

#[derive(Debug, Clone)]
pub struct Dragon {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub size: f32,
    pub lives: i32,
}

impl Dragon {
    fn new() -> Self {
        Self {
            x: SCREEN_W / 4.0,
            y: SCREEN_H / 2.0,
            vy: 0.0,
            size: DRAGON_SIZE,
            lives: INITIAL_LIVES,
        }
    }

    pub fn jump(&mut self) {
        // Impulse replaces the current velocity rather than adding to it.
        self.vy = JUMP_IMPULSE;
    }

    fn apply_physics(&mut self) {
        self.vy += GRAVITY;
        self.y += self.vy;
        let clamped = self.y.clamp(0.0, SCREEN_H - self.size);
        if KILL_VELOCITY_AT_BOUNDS && clamped != self.y {
            self.vy = 0.0;
        }
        self.y = clamped;
    }

    /// Bounding square for obstacle collisions.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - self.size / 2.0,
            self.y - self.size / 2.0,
            self.size,
            self.size,
        )
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    fn heal(&mut self) {
        if self.lives < MAX_LIVES {
            self.lives += 1;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Obstacle {
    fn spawn(rng: &mut impl Rng) -> Self {
        let w = rng.random_range(40.0..80.0);
        let h = rng.random_range(50.0..SCREEN_H / 2.0 - 50.0);
        let y = rng.random_range(0.0..SCREEN_H - h);
        Self {
            x: SCREEN_W,
            y,
            w,
            h,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[derive(Debug, Clone)]
pub struct Heart {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Heart {
    fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            x: SCREEN_W,
            y: rng.random_range(50.0..SCREEN_H - 50.0),
            size: HEART_SIZE,
        }
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// What one tick of the scroller produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickOutcome {
    /// Obstacles that left the screen without touching the dragon.
    pub passed: u32,
    /// Lives hit zero during this tick.
    pub died: bool,
}

pub struct DragonGame {
    pub dragon: Dragon,
    pub obstacles: Vec<Obstacle>,
    pub hearts: Vec<Heart>,
    /// Scroll speed shared by every obstacle and heart in the run.
    pub speed: f32,
    pub last_obstacle_at: f64,
    pub last_heart_at: f64,
}

impl DragonGame {
    pub fn new(now: f64) -> Self {
        Self {
            dragon: Dragon::new(),
            obstacles: Vec::new(),
            hearts: Vec::new(),
            speed: GAME_SPEED,
            last_obstacle_at: now,
            last_heart_at: now,
        }
    }

    pub fn jump(&mut self) {
        self.dragon.jump();
    }

    /// Advance the world one tick: physics, spawns, scrolling, collisions,
    /// removals. Collision is checked before the off-screen test so the two
    /// removal causes stay mutually exclusive.
    pub fn tick(&mut self, now: f64, rng: &mut impl Rng) -> TickOutcome {
        self.dragon.apply_physics();

        // The threshold is re-sampled every tick until it triggers; spawn
        // gaps are therefore biased toward the short end of the interval.
        if now - self.last_obstacle_at
            > rng.random_range(MIN_OBSTACLE_INTERVAL_MS..MAX_OBSTACLE_INTERVAL_MS)
        {
            self.obstacles.push(Obstacle::spawn(rng));
            self.last_obstacle_at = now;
        }
        if now - self.last_heart_at > rng.random_range(MIN_HEART_INTERVAL_MS..MAX_HEART_INTERVAL_MS)
        {
            self.hearts.push(Heart::spawn(rng));
            self.last_heart_at = now;
        }

        let mut outcome = TickOutcome::default();
        let dragon = &mut self.dragon;
        let speed = self.speed;

        self.obstacles.retain_mut(|o| {
            o.x -= speed;
            if rects_overlap(dragon.bounds(), o.rect()) {
                dragon.lives -= 1;
                // Death latches inside the damage step; a heart collected
                // later in the same tick cannot revive.
                if dragon.lives <= 0 {
                    outcome.died = true;
                }
                false
            } else if o.x < -o.w {
                outcome.passed += 1;
                false
            } else {
                true
            }
        });

        self.hearts.retain_mut(|h| {
            h.x -= speed;
            if circles_overlap(
                dragon.center(),
                dragon.size / 2.0,
                h.center(),
                h.size / 2.0,
            ) {
                dragon.heal();
                false
            } else {
                h.x >= -h.size
            }
        });

        outcome
    }

    pub fn draw(&self, score: u32) {
        // Sky and ground strip.
        draw_rectangle(0.0, 0.0, SCREEN_W, SCREEN_H, Color::new(0.98, 0.98, 0.98, 1.0));
        draw_rectangle(0.0, SCREEN_H - 50.0, SCREEN_W, 50.0, hsb(80.0, 50.0, 60.0));

        for o in &self.obstacles {
            draw_rectangle(o.x, o.y, o.w, o.h, hsb(20.0, 80.0, 90.0));
        }

        for h in &self.hearts {
            let red = hsb(0.0, 100.0, 100.0);
            draw_circle(h.x + h.size * 0.25, h.y, h.size * 0.25, red);
            draw_circle(h.x + h.size * 0.75, h.y, h.size * 0.25, red);
            draw_triangle(
                vec2(h.x, h.y + h.size * 0.2),
                vec2(h.x + h.size, h.y + h.size * 0.2),
                vec2(h.x + h.size * 0.5, h.y + h.size),
                red,
            );
        }

        let d = &self.dragon;
        draw_circle(d.x, d.y, d.size / 2.0, hsb(50.0, 100.0, 80.0));
        draw_circle(d.x + d.size / 4.0, d.y - d.size / 4.0, d.size / 16.0, BLACK);
        draw_circle(d.x + d.size / 4.0, d.y - d.size / 8.0, d.size / 16.0, BLACK);

        draw_text_top_left(&format!("Score: {}", score), 30.0, 30.0, 28, BLACK);
        draw_text_top_left(&format!("Lives: {}", d.lives), 30.0, 60.0, 28, BLACK);
    }
}
