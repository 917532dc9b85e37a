//! Initial entity placement
//!
//! Fills the object, NPC and enemy slot arrays once during setup. Stands in
//! for the asset/level-data service; placements are fixed tile coordinates
//! on the starter map.

use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::npc::Npc;
use crate::object::{GameObject, ObjectKind};
use crate::slots::SlotArray;

pub fn set_objects(objects: &mut SlotArray<GameObject>, config: &GameConfig) {
    let tile = config.tile_size() as i32;
    let size = config.tile_size();
    let placements = [
        (ObjectKind::Key, 21, 21),
        (ObjectKind::Door, 26, 21),
        (ObjectKind::Chest, 23, 25),
    ];
    for (kind, col, row) in placements {
        if objects
            .insert(GameObject::new(kind, col * tile, row * tile, size))
            .is_none()
        {
            log::warn!("object slots full, dropping {:?}", kind);
        }
    }
}

pub fn set_npcs(npcs: &mut SlotArray<Npc>, config: &GameConfig) {
    let tile = config.tile_size() as i32;
    let size = config.tile_size();
    let placements = [(10, 10), (30, 30), (25, 18), (18, 25)];
    for (index, (col, row)) in placements.iter().enumerate() {
        if npcs
            .insert(Npc::new(col * tile, row * tile, size, index as u64))
            .is_none()
        {
            log::warn!("npc slots full, dropping placement {}", index);
        }
    }
}

pub fn set_enemies(enemies: &mut SlotArray<Enemy>, config: &GameConfig) {
    let tile = config.tile_size() as i32;
    let size = config.tile_size();
    let placements = [(12, 40), (40, 12), (35, 35), (8, 20), (42, 30), (15, 15)];
    for (index, (col, row)) in placements.iter().enumerate() {
        if enemies
            .insert(Enemy::new(col * tile, row * tile, size, 100 + index as u64))
            .is_none()
        {
            log::warn!("enemy slots full, dropping placement {}", index);
        }
    }
}
