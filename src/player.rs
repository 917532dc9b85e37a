//! The player
//!
//! Input arrives as an already-mapped `InputState` (key-to-action mapping
//! happens outside the core). The player moves four-way at a fixed speed,
//! blocked by solid tiles and solid entities, and animates only while
//! moving.

use crate::camera::Camera;
use crate::collision::{self, Collidable, CollisionProbe};
use crate::config::GameConfig;
use crate::entity::{Direction, SpriteCycle};
use crate::npc::{draw_facing_marker, Npc};
use crate::object::GameObject;
use crate::render::DepthSortable;
use crate::slots::SlotArray;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

const SPEED: i32 = 4;
const SPRITE_INTERVAL: u32 = 12;
const SOLID_INSET: i32 = 24;
const SOLID_SIZE: u32 = 48;
const SPAWN_TILE: (i32, i32) = (23, 21);

/// Directional input for one tick, produced by the platform input mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

pub struct Player {
    pub world_x: i32,
    pub world_y: i32,
    pub direction: Direction,
    pub collision_on: bool,
    size: u32,
    sprite: SpriteCycle,
    age_ticks: u64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let tile = config.tile_size() as i32;
        Player {
            world_x: SPAWN_TILE.0 * tile,
            world_y: SPAWN_TILE.1 * tile,
            direction: Direction::Down,
            collision_on: false,
            size: config.tile_size(),
            sprite: SpriteCycle::new(SPRITE_INTERVAL),
            age_ticks: 0,
        }
    }

    /// Advance one tick. Without input the player stands still and the walk
    /// cycle holds its frame.
    pub fn update(
        &mut self,
        input: &InputState,
        probe: &CollisionProbe,
        objects: &SlotArray<GameObject>,
        npcs: &SlotArray<Npc>,
    ) {
        self.age_ticks += 1;

        if !input.any() {
            return;
        }

        // Same priority order as the input handling this replaces.
        self.direction = if input.up {
            Direction::Up
        } else if input.down {
            Direction::Down
        } else if input.left {
            Direction::Left
        } else {
            Direction::Right
        };

        let moved = collision::moved_bounds(self.solid_bounds(), self.direction, SPEED);
        self.collision_on = probe.blocked(self.solid_bounds(), self.direction, SPEED)
            || collision::first_entity_hit(&moved, objects).is_some()
            || collision::first_entity_hit(&moved, npcs).is_some();

        if !self.collision_on {
            let (dx, dy) = self.direction.delta();
            self.world_x += dx * SPEED;
            self.world_y += dy * SPEED;
        }
        self.sprite.advance();
    }

    pub fn position(&self) -> (i32, i32) {
        (self.world_x, self.world_y)
    }

    /// Ticks the player has been updated since spawn.
    pub fn ticks(&self) -> u64 {
        self.age_ticks
    }
}

impl Collidable for Player {
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

impl DepthSortable for Player {
    fn depth_y(&self) -> i32 {
        self.world_y
    }

    fn draw(&self, canvas: &mut WindowCanvas, camera: &Camera) -> Result<(), String> {
        // The camera is centered on the player, so this lands mid-screen.
        let (sx, sy) = camera.to_screen(self.world_x, self.world_y);
        canvas.set_draw_color(Color::RGB(0x5a, 0x8a, 0xc8));
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

    fn empty_slots() -> (SlotArray<GameObject>, SlotArray<Npc>) {
        (SlotArray::with_capacity(10), SlotArray::with_capacity(10))
    }

    #[test]
    fn spawns_at_reference_tile() {
        let player = Player::new(&GameConfig::default());
        assert_eq!(player.position(), (23 * 96, 21 * 96));
    }

    #[test]
    fn no_input_means_no_motion() {
        let config = GameConfig::default();
        let map = TileMap::filled(50, 50, TileKind::Grass);
        let probe = CollisionProbe {
            map: &map,
            tile_size: 96,
        };
        let (objects, npcs) = empty_slots();
        let mut player = Player::new(&config);
        let start = player.position();
        for _ in 0..5 {
            player.update(&InputState::default(), &probe, &objects, &npcs);
        }
        assert_eq!(player.position(), start);
        assert_eq!(player.ticks(), 5);
    }

    #[test]
    fn moves_by_speed_per_tick() {
        let config = GameConfig::default();
        let map = TileMap::filled(50, 50, TileKind::Grass);
        let probe = CollisionProbe {
            map: &map,
            tile_size: 96,
        };
        let (objects, npcs) = empty_slots();
        let mut player = Player::new(&config);
        let (x, y) = player.position();

        let input = InputState {
            right: true,
            ..Default::default()
        };
        player.update(&input, &probe, &objects, &npcs);
        assert_eq!(player.position(), (x + SPEED, y));
        assert_eq!(player.direction, Direction::Right);
    }

    #[test]
    fn solid_object_blocks_movement() {
        let config = GameConfig::default();
        let map = TileMap::filled(50, 50, TileKind::Grass);
        let probe = CollisionProbe {
            map: &map,
            tile_size: 96,
        };
        let (mut objects, npcs) = empty_slots();
        let mut player = Player::new(&config);

        // A door flush against the player's solid area on the right.
        let bounds = player.solid_bounds();
        objects.insert(GameObject::new(
            crate::object::ObjectKind::Door,
            bounds.x() + bounds.width() as i32,
            bounds.y(),
            96,
        ));

        let (x, y) = player.position();
        let input = InputState {
            right: true,
            ..Default::default()
        };
        player.update(&input, &probe, &objects, &npcs);
        assert_eq!(player.position(), (x, y));
        assert!(player.collision_on);
    }
}
