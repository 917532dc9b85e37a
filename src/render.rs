//! Depth-sorted entity rendering (painter's algorithm)
//!
//! Every render frame, all live entities are gathered into one transient
//! list, stable-sorted ascending by world Y, and drawn in that order:
//! entities further up the map draw first, so nearer entities occlude them.
//! The list is rebuilt from scratch each frame and dropped afterwards.

use crate::camera::Camera;
use crate::enemy::Enemy;
use crate::npc::Npc;
use crate::object::GameObject;
use crate::player::Player;
use crate::slots::SlotArray;
use sdl2::render::WindowCanvas;

/// Entities that participate in depth-sorted rendering.
///
/// The depth is the entity's world Y; smaller values draw first (further
/// back in the scene).
pub trait DepthSortable {
    fn depth_y(&self) -> i32;

    fn draw(&self, canvas: &mut WindowCanvas, camera: &Camera) -> Result<(), String>;
}

/// Borrowed view of one entity for the duration of a frame.
///
/// An enum rather than trait objects: all variants are known, matching is
/// exhaustive, and no vtable is involved.
pub enum Renderable<'a> {
    Player(&'a Player),
    Npc(&'a Npc),
    Object(&'a GameObject),
    Enemy(&'a Enemy),
}

impl<'a> Renderable<'a> {
    pub fn depth_y(&self) -> i32 {
        match self {
            Renderable::Player(p) => p.depth_y(),
            Renderable::Npc(n) => n.depth_y(),
            Renderable::Object(o) => o.depth_y(),
            Renderable::Enemy(e) => e.depth_y(),
        }
    }

    fn draw(&self, canvas: &mut WindowCanvas, camera: &Camera) -> Result<(), String> {
        match self {
            Renderable::Player(p) => p.draw(canvas, camera),
            Renderable::Npc(n) => n.draw(canvas, camera),
            Renderable::Object(o) => o.draw(canvas, camera),
            Renderable::Enemy(e) => e.draw(canvas, camera),
        }
    }
}

/// Gather every live entity into draw order for this frame.
///
/// Insertion order is player, NPC slots, object slots, enemy slots (each in
/// ascending slot order); the sort is stable, so entities at equal Y keep
/// that order between frames instead of flickering.
pub fn build_draw_list<'a>(
    player: &'a Player,
    npcs: &'a SlotArray<Npc>,
    objects: &'a SlotArray<GameObject>,
    enemies: &'a SlotArray<Enemy>,
) -> Vec<Renderable<'a>> {
    let mut list: Vec<Renderable> =
        Vec::with_capacity(1 + npcs.live_count() + objects.live_count() + enemies.live_count());

    list.push(Renderable::Player(player));
    for (_, npc) in npcs.iter_live() {
        list.push(Renderable::Npc(npc));
    }
    for (_, object) in objects.iter_live() {
        list.push(Renderable::Object(object));
    }
    for (_, enemy) in enemies.iter_live() {
        list.push(Renderable::Enemy(enemy));
    }

    // sort_by_key is stable; equal-Y entities keep insertion order.
    list.sort_by_key(|renderable| renderable.depth_y());
    list
}

/// Draw a frame's list back to front. The caller drops the list afterwards;
/// nothing carries over to the next frame.
pub fn draw_sorted(
    canvas: &mut WindowCanvas,
    camera: &Camera,
    list: &[Renderable],
) -> Result<(), String> {
    for renderable in list {
        renderable.draw(canvas, camera)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::object::ObjectKind;

    fn world() -> (Player, SlotArray<Npc>, SlotArray<GameObject>, SlotArray<Enemy>) {
        (
            Player::new(&GameConfig::default()),
            SlotArray::with_capacity(10),
            SlotArray::with_capacity(10),
            SlotArray::with_capacity(20),
        )
    }

    #[test]
    fn empty_world_draws_exactly_the_player() {
        let (player, npcs, objects, enemies) = world();
        let list = build_draw_list(&player, &npcs, &objects, &enemies);
        assert_eq!(list.len(), 1);
        assert!(matches!(list[0], Renderable::Player(_)));
    }

    #[test]
    fn list_size_matches_live_entities() {
        let (player, mut npcs, mut objects, mut enemies) = world();
        npcs.insert(Npc::new(0, 0, 96, 1));
        npcs.insert(Npc::new(96, 0, 96, 2));
        objects.insert(GameObject::new(ObjectKind::Key, 0, 96, 96));
        let dead = enemies.insert(Enemy::new(0, 200, 96, 3)).unwrap();
        enemies.insert(Enemy::new(96, 200, 96, 4));
        enemies.remove(dead);

        let list = build_draw_list(&player, &npcs, &objects, &enemies);
        assert_eq!(list.len(), 1 + 2 + 1 + 1);
    }

    #[test]
    fn sorted_ascending_by_world_y() {
        let (mut player, mut npcs, _objects, mut enemies) = world();
        player.world_y = 400;
        npcs.insert(Npc::new(0, 900, 96, 1));
        enemies.insert(Enemy::new(0, 100, 96, 2));

        let objects = SlotArray::with_capacity(10);
        let list = build_draw_list(&player, &npcs, &objects, &enemies);
        let depths: Vec<i32> = list.iter().map(|r| r.depth_y()).collect();
        assert_eq!(depths, vec![100, 400, 900]);
    }

    #[test]
    fn equal_depth_keeps_insertion_order() {
        // Three entities at Y = {50, 50, 10}, inserted in that order: the
        // Y=10 entity must come first, then the two Y=50 entities in their
        // original relative order.
        let (mut player, mut npcs, _objects, mut enemies) = world();
        player.world_y = 50;
        player.world_x = 0;
        npcs.insert(Npc::new(777, 50, 96, 1));
        enemies.insert(Enemy::new(0, 10, 96, 2));

        let objects = SlotArray::with_capacity(10);
        let list = build_draw_list(&player, &npcs, &objects, &enemies);
        assert!(matches!(list[0], Renderable::Enemy(_)));
        assert!(matches!(list[1], Renderable::Player(_)));
        match list[2] {
            Renderable::Npc(npc) => assert_eq!(npc.world_x, 777),
            _ => panic!("expected the NPC inserted after the player"),
        }
    }

    #[test]
    fn list_is_rebuilt_fresh_each_frame() {
        let (player, mut npcs, objects, enemies) = world();
        let id = npcs.insert(Npc::new(0, 0, 96, 1)).unwrap();

        let first = build_draw_list(&player, &npcs, &objects, &enemies);
        assert_eq!(first.len(), 2);
        drop(first);

        npcs.remove(id);
        let second = build_draw_list(&player, &npcs, &objects, &enemies);
        assert_eq!(second.len(), 1);
    }
}
