//! UI overlay
//!
//! Drawn last every frame, on top of the scene. Content stays minimal in
//! the core: mode banners and a small HUD line; richer menus belong to the
//! overlay service this stands in for.

use crate::config::GameConfig;
use crate::game_state::GameMode;
use crate::text::{draw_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

const BANNER_SCALE: u32 = 8;
const HUD_SCALE: u32 = 3;

pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Ui
    }

    /// Draw the overlay for the current mode. Called once per frame, after
    /// entity rendering.
    pub fn draw(
        &self,
        canvas: &mut WindowCanvas,
        mode: GameMode,
        config: &GameConfig,
    ) -> Result<(), String> {
        match mode {
            GameMode::Downloading => {
                self.banner(canvas, "LOADING", config)?;
            }
            GameMode::Menu => {
                self.dim_scene(canvas, config)?;
                self.banner(canvas, "EMPIRE", config)?;
                self.subtitle(canvas, "PRESS ENTER", config)?;
            }
            GameMode::Paused => {
                self.dim_scene(canvas, config)?;
                self.banner(canvas, "PAUSED", config)?;
            }
            GameMode::Playing => {}
        }
        Ok(())
    }

    fn banner(
        &self,
        canvas: &mut WindowCanvas,
        text: &str,
        config: &GameConfig,
    ) -> Result<(), String> {
        let x = (config.screen_width() as i32 - text_width(text, BANNER_SCALE) as i32) / 2;
        let y = config.screen_height() as i32 / 2 - (7 * BANNER_SCALE) as i32 / 2;
        draw_text(canvas, text, x, y, Color::RGB(255, 255, 255), BANNER_SCALE)
    }

    fn subtitle(
        &self,
        canvas: &mut WindowCanvas,
        text: &str,
        config: &GameConfig,
    ) -> Result<(), String> {
        let x = (config.screen_width() as i32 - text_width(text, HUD_SCALE) as i32) / 2;
        let y = config.screen_height() as i32 / 2 + (7 * BANNER_SCALE) as i32;
        draw_text(canvas, text, x, y, Color::RGB(200, 200, 200), HUD_SCALE)
    }

    fn dim_scene(&self, canvas: &mut WindowCanvas, config: &GameConfig) -> Result<(), String> {
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, 160));
        canvas
            .fill_rect(Rect::new(
                0,
                0,
                config.screen_width(),
                config.screen_height(),
            ))
            .map_err(|e| e.to_string())?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);
        Ok(())
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
