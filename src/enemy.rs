//! Enemies
//!
//! Enemies wander like NPCs but move faster, and switch to a crude pursuit
//! when the player comes close: they head along the dominant axis toward
//! the player's position. Tile collision still applies.

use crate::camera::Camera;
use crate::collision::{Collidable, CollisionProbe};
use crate::entity::{Direction, SpriteCycle, WanderBrain};
use crate::npc::draw_facing_marker;
use crate::render::DepthSortable;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

const SPEED: i32 = 2;
const SPRITE_INTERVAL: u32 = 10;
const WANDER_INTERVAL: u32 = 90;
const SOLID_INSET: i32 = 24;
const SOLID_SIZE: u32 = 48;
/// Pursuit kicks in inside this many pixels (manhattan distance).
const AGGRO_RANGE: i32 = 5 * 96;

pub struct Enemy {
    pub world_x: i32,
    pub world_y: i32,
    pub direction: Direction,
    pub collision_on: bool,
    size: u32,
    sprite: SpriteCycle,
    brain: WanderBrain,
    age_ticks: u64,
}

impl Enemy {
    pub fn new(world_x: i32, world_y: i32, size: u32, seed: u64) -> Self {
        Enemy {
            world_x,
            world_y,
            direction: Direction::Down,
            collision_on: false,
            size,
            sprite: SpriteCycle::new(SPRITE_INTERVAL),
            brain: WanderBrain::new(seed, WANDER_INTERVAL),
            age_ticks: 0,
        }
    }

    /// Advance one tick: pursue a nearby player, otherwise wander.
    pub fn update(&mut self, probe: &CollisionProbe, player_pos: (i32, i32)) {
        self.age_ticks += 1;

        if let Some(chase) = self.pursuit_direction(player_pos) {
            self.direction = chase;
        } else if let Some(direction) = self.brain.tick() {
            self.direction = direction;
        }

        self.collision_on = probe.blocked(self.solid_bounds(), self.direction, SPEED);
        if !self.collision_on {
            let (dx, dy) = self.direction.delta();
            self.world_x += dx * SPEED;
            self.world_y += dy * SPEED;
        }
        self.sprite.advance();
    }

    fn pursuit_direction(&self, (px, py): (i32, i32)) -> Option<Direction> {
        let dx = px - self.world_x;
        let dy = py - self.world_y;
        if dx.abs() + dy.abs() > AGGRO_RANGE {
            return None;
        }
        let direction = if dx.abs() > dy.abs() {
            if dx < 0 { Direction::Left } else { Direction::Right }
        } else if dy < 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Some(direction)
    }

    /// Ticks this enemy has been updated since placement.
    pub fn ticks(&self) -> u64 {
        self.age_ticks
    }
}

impl Collidable for Enemy {
    fn solid_bounds(&self) -> Rect {
        Rect::new(
            self.world_x + SOLID_INSET,
            self.world_y + SOLID_INSET,
            SOLID_SIZE,
            SOLID_SIZE,
        )
    }

    fn is_solid(&self) -> bool {
        true
    }
}

impl DepthSortable for Enemy {
    fn depth_y(&self) -> i32 {
        self.world_y
    }

    fn draw(&self, canvas: &mut WindowCanvas, camera: &Camera) -> Result<(), String> {
        if !camera.in_view(self.world_x, self.world_y, self.size) {
            return Ok(());
        }
        let (sx, sy) = camera.to_screen(self.world_x, self.world_y);
        canvas.set_draw_color(Color::RGB(0xa8, 0x3a, 0x3a));
        canvas
            .fill_rect(Rect::new(sx, sy, self.size, self.size))
            .map_err(|e| e.to_string())?;
        draw_facing_marker(canvas, sx, sy, self.size, self.direction, self.sprite.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile_manager::{TileKind, TileMap};

    #[test]
    fn enemy_pursues_nearby_player() {
        let map = TileMap::filled(20, 20, TileKind::Grass);
        let probe = CollisionProbe {
            map: &map,
            tile_size: 96,
        };
        let mut enemy = Enemy::new(500, 500, 96, 3);
        let start_x = enemy.world_x;
        // Player two tiles to the right, inside aggro range.
        for _ in 0..10 {
            enemy.update(&probe, (500 + 192, 500));
        }
        assert_eq!(enemy.direction, Direction::Right);
        assert!(enemy.world_x > start_x);
    }

    #[test]
    fn distant_player_is_ignored() {
        let map = TileMap::filled(100, 100, TileKind::Grass);
        let probe = CollisionProbe {
            map: &map,
            tile_size: 96,
        };
        let mut enemy = Enemy::new(500, 500, 96, 3);
        // Far outside aggro range; no pursuit, and the wander cadence has
        // not fired yet, so the spawn direction is held.
        for _ in 0..10 {
            enemy.update(&probe, (9000, 9000));
        }
        assert_eq!(enemy.direction, Direction::Down);
        assert_eq!(enemy.ticks(), 10);
    }
}
