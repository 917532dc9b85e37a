//! Wandering NPCs
//!
//! NPCs pick a random direction on a fixed cadence and walk until a tile
//! blocks them. Movement and animation advance one step per tick.

use crate::camera::Camera;
use crate::collision::{Collidable, CollisionProbe};
use crate::entity::{Direction, SpriteCycle, WanderBrain};
use crate::render::DepthSortable;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

const SPEED: i32 = 1;
const SPRITE_INTERVAL: u32 = 12;
const WANDER_INTERVAL: u32 = 120;
const SOLID_INSET: i32 = 24;
const SOLID_SIZE: u32 = 48;

pub struct Npc {
    pub world_x: i32,
    pub world_y: i32,
    pub direction: Direction,
    pub collision_on: bool,
    size: u32,
    sprite: SpriteCycle,
    brain: WanderBrain,
    age_ticks: u64,
}

impl Npc {
    pub fn new(world_x: i32, world_y: i32, size: u32, seed: u64) -> Self {
        Npc {
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

    /// Advance one tick: maybe turn, then walk unless blocked.
    pub fn update(&mut self, probe: &CollisionProbe) {
        self.age_ticks += 1;

        if let Some(direction) = self.brain.tick() {
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

    /// Ticks this NPC has been updated since placement.
    pub fn ticks(&self) -> u64 {
        self.age_ticks
    }
}

impl Collidable for Npc {
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

impl DepthSortable for Npc {
    fn depth_y(&self) -> i32 {
        self.world_y
    }

    fn draw(&self, canvas: &mut WindowCanvas, camera: &Camera) -> Result<(), String> {
        if !camera.in_view(self.world_x, self.world_y, self.size) {
            return Ok(());
        }
        let (sx, sy) = camera.to_screen(self.world_x, self.world_y);
        canvas.set_draw_color(Color::RGB(0x4d, 0xa6, 0x5a));
        canvas
            .fill_rect(Rect::new(sx, sy, self.size, self.size))
            .map_err(|e| e.to_string())?;
        draw_facing_marker(canvas, sx, sy, self.size, self.direction, self.sprite.frame())
    }
}

/// Small darker strip on the leading edge of an entity square, nudged by
/// the walk frame so movement reads on screen.
pub fn draw_facing_marker(
    canvas: &mut WindowCanvas,
    sx: i32,
    sy: i32,
    size: u32,
    direction: Direction,
    frame: u8,
) -> Result<(), String> {
    let s = size as i32;
    let thickness = size / 6;
    let span = size / 2;
    let wobble = if frame == 0 { 0 } else { (size / 12) as i32 };
    let offset = (s - span as i32) / 2 + wobble;

    let rect = match direction {
        Direction::Up => Rect::new(sx + offset, sy, span, thickness),
        Direction::Down => Rect::new(sx + offset, sy + s - thickness as i32, span, thickness),
        Direction::Left => Rect::new(sx, sy + offset, thickness, span),
        Direction::Right => Rect::new(sx + s - thickness as i32, sy + offset, thickness, span),
    };
    canvas.set_draw_color(Color::RGB(0x20, 0x20, 0x20));
    canvas.fill_rect(rect).map_err(|e| e.to_string())
}
