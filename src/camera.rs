//! World-to-screen coordinate mapping
//!
//! The camera keeps its focus entity (the player) at the center of the
//! screen and everything else is drawn relative to it. Rebuilt each frame
//! from the player's world position.

use crate::config::GameConfig;

pub struct Camera {
    /// World position of the focus point.
    pub world_x: i32,
    pub world_y: i32,
    /// Screen position the focus point maps to (screen center, tile-aligned).
    pub screen_x: i32,
    pub screen_y: i32,
    screen_w: i32,
    screen_h: i32,
}

impl Camera {
    pub fn centered_on(world_x: i32, world_y: i32, config: &GameConfig) -> Self {
        let tile = config.tile_size() as i32;
        Camera {
            world_x,
            world_y,
            screen_x: (config.screen_width() as i32 - tile) / 2,
            screen_y: (config.screen_height() as i32 - tile) / 2,
            screen_w: config.screen_width() as i32,
            screen_h: config.screen_height() as i32,
        }
    }

    pub fn to_screen(&self, world_x: i32, world_y: i32) -> (i32, i32) {
        (
            world_x - self.world_x + self.screen_x,
            world_y - self.world_y + self.screen_y,
        )
    }

    /// Whether a square of `size` pixels at a world position touches the
    /// screen. Used to cull tiles and entities before drawing.
    pub fn in_view(&self, world_x: i32, world_y: i32, size: u32) -> bool {
        let (sx, sy) = self.to_screen(world_x, world_y);
        let size = size as i32;
        sx + size > 0 && sx < self.screen_w && sy + size > 0 && sy < self.screen_h
    }
}
