//! Collision checks
//!
//! AABB intersection plus the two checks entities run before applying a
//! move: leading-edge tile solidity and overlap with solid entities in a
//! slot array. Pure queries; movement response stays with the entity.

use crate::entity::Direction;
use crate::slots::{SlotArray, SlotId};
use crate::tile_manager::TileMap;
use sdl2::rect::Rect;

/// Entities that occupy space in the world.
pub trait Collidable {
    /// The entity's solid area in world pixels.
    fn solid_bounds(&self) -> Rect;

    /// Non-solid entities (decorative objects) never block movement.
    fn is_solid(&self) -> bool;
}

/// Axis-aligned rectangle intersection. Touching edges do not count.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();
    x_overlap && y_overlap
}

/// Where `bounds` would sit after one step of `speed` pixels.
pub fn moved_bounds(bounds: Rect, direction: Direction, speed: i32) -> Rect {
    let (dx, dy) = direction.delta();
    Rect::new(
        bounds.x() + dx * speed,
        bounds.y() + dy * speed,
        bounds.width(),
        bounds.height(),
    )
}

/// Tile-grid collision queries against the world map.
pub struct CollisionProbe<'a> {
    pub map: &'a TileMap,
    pub tile_size: u32,
}

impl<'a> CollisionProbe<'a> {
    /// Whether moving `bounds` one step in `direction` would push its
    /// leading edge into a solid tile. Checks the two leading corners.
    pub fn blocked(&self, bounds: Rect, direction: Direction, speed: i32) -> bool {
        let tile = self.tile_size as i32;
        let moved = moved_bounds(bounds, direction, speed);

        let left_col = moved.x().div_euclid(tile);
        let right_col = (moved.x() + moved.width() as i32 - 1).div_euclid(tile);
        let top_row = moved.y().div_euclid(tile);
        let bottom_row = (moved.y() + moved.height() as i32 - 1).div_euclid(tile);

        let (a, b) = match direction {
            Direction::Up => ((left_col, top_row), (right_col, top_row)),
            Direction::Down => ((left_col, bottom_row), (right_col, bottom_row)),
            Direction::Left => ((left_col, top_row), (left_col, bottom_row)),
            Direction::Right => ((right_col, top_row), (right_col, bottom_row)),
        };

        self.map.is_solid_at(a.0, a.1) || self.map.is_solid_at(b.0, b.1)
    }
}

/// First solid entity in the array that `moved` would overlap, in slot
/// order. Empty slots are skipped as a matter of course.
pub fn first_entity_hit<T: Collidable>(moved: &Rect, entities: &SlotArray<T>) -> Option<SlotId> {
    entities
        .iter_live()
        .find(|(_, entity)| entity.is_solid() && aabb_intersect(moved, &entity.solid_bounds()))
        .map(|(id, _)| id)
}
