mod app;
mod collide;
mod color_game;
mod dragon;
mod math_game;
mod round;
mod ui;

use macroquad::miniquad::date;
use macroquad::prelude::*;

use app::App;

fn window_conf() -> Conf {
    Conf {
        window_title: "Color & Math & Dragon Frenzy!".to_owned(),
        window_width: app::SCREEN_W as i32,
        window_height: app::SCREEN_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let seed = (date::now() * 1000.0) as u64;
    let mut game = App::new(seed, get_time() * 1000.0);

    loop {
        // Monotonic milliseconds since start, shared by every screen.
        let now = get_time() * 1000.0;

        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            game.handle_click(vec2(mx, my), now);
        }

        game.update(now);
        game.draw(now);

        next_frame().await
    }
}
