use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};

mod assets;
mod camera;
mod collision;
mod config;
mod enemy;
mod entity;
mod game;
mod game_loop;
mod game_state;
mod npc;
mod object;
mod player;
mod render;
mod slots;
mod sound;
mod text;
mod tile_manager;
mod ui;

use config::GameConfig;
use game::Game;
use game_loop::GameLoop;
use game_state::GameMode;
use player::InputState;

const CONFIG_PATH: &str = "config/game.json";

/// Map the live keyboard state to directional input for this tick.
fn read_input(keyboard: &sdl2::keyboard::KeyboardState) -> InputState {
    InputState {
        up: keyboard.is_scancode_pressed(Scancode::W)
            || keyboard.is_scancode_pressed(Scancode::Up),
        down: keyboard.is_scancode_pressed(Scancode::S)
            || keyboard.is_scancode_pressed(Scancode::Down),
        left: keyboard.is_scancode_pressed(Scancode::A)
            || keyboard.is_scancode_pressed(Scancode::Left),
        right: keyboard.is_scancode_pressed(Scancode::D)
            || keyboard.is_scancode_pressed(Scancode::Right),
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = match GameConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("could not load {}: {}; using defaults", CONFIG_PATH, e);
            GameConfig::default()
        }
    };
    config.validate()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Empire", config.screen_width(), config.screen_height())
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let mut game = Game::new(config.clone());
    game.setup();

    let mut game_loop = GameLoop::new(config.fps)?;
    let stop = game_loop.stop_handle();

    game_loop.run(|| {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    stop.stop();
                    return Ok(false);
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    repeat: false,
                    ..
                } => {
                    game.mode.toggle_pause();
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    repeat: false,
                    ..
                } => match game.mode.current() {
                    GameMode::Playing => game.mode.open_menu(),
                    GameMode::Menu => game.mode.close_menu(),
                    _ => {}
                },
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } if game.mode.current() == GameMode::Menu => {
                    game.mode.close_menu();
                }
                _ => {}
            }
        }

        let input = read_input(&event_pump.keyboard_state());
        game.update(&input);
        game.render(&mut canvas)?;
        canvas.present();
        Ok(true)
    })
}
