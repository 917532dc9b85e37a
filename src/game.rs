//! Game world and per-tick pipeline
//!
//! `Game` owns the player, the three entity slot arrays, the tile manager,
//! the mode controller and the sound channels. The loop calls `update` then
//! `render` once per tick; both phases run on the loop's thread, strictly
//! in sequence.

use crate::assets;
use crate::camera::Camera;
use crate::collision::CollisionProbe;
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::game_state::ModeController;
use crate::npc::Npc;
use crate::object::GameObject;
use crate::player::{InputState, Player};
use crate::render;
use crate::slots::SlotArray;
use crate::sound::Sound;
use crate::tile_manager::TileManager;
use crate::ui::Ui;
use sdl2::pixels::Color;
use sdl2::render::WindowCanvas;

const OBJECT_SLOTS: usize = 10;
const NPC_SLOTS: usize = 10;
const ENEMY_SLOTS: usize = 20;

pub struct Game {
    pub config: GameConfig,
    pub mode: ModeController,
    pub player: Player,
    pub objects: SlotArray<GameObject>,
    pub npcs: SlotArray<Npc>,
    pub enemies: SlotArray<Enemy>,
    pub tiles: TileManager,
    music: Sound,
    effects: Sound,
    ui: Ui,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Game {
            player: Player::new(&config),
            objects: SlotArray::with_capacity(OBJECT_SLOTS),
            npcs: SlotArray::with_capacity(NPC_SLOTS),
            enemies: SlotArray::with_capacity(ENEMY_SLOTS),
            tiles: TileManager::new(&config),
            mode: ModeController::new(),
            music: Sound::new("music"),
            effects: Sound::new("effects"),
            ui: Ui::new(),
            config,
        }
    }

    /// One-time setup: place entities, start the theme, enter gameplay.
    pub fn setup(&mut self) {
        assets::set_objects(&mut self.objects, &self.config);
        assets::set_npcs(&mut self.npcs, &self.config);
        assets::set_enemies(&mut self.enemies, &self.config);
        self.play_music(0);
        self.mode.finish_setup();
    }

    /// Update phase: advance every live entity by one tick.
    ///
    /// Gated on gameplay mode; menu and pause suppress entity updates while
    /// rendering continues. Order is fixed for reproducibility: player
    /// first, then NPC slots ascending, then enemy slots ascending. Object
    /// slots are static and deliberately never updated.
    pub fn update(&mut self, input: &InputState) {
        if !self.mode.updates_enabled() {
            return;
        }

        let probe = CollisionProbe {
            map: &self.tiles.map,
            tile_size: self.config.tile_size(),
        };

        self.player.update(input, &probe, &self.objects, &self.npcs);

        for (_, npc) in self.npcs.iter_live_mut() {
            npc.update(&probe);
        }

        let player_pos = self.player.position();
        for (_, enemy) in self.enemies.iter_live_mut() {
            enemy.update(&probe, player_pos);
        }
    }

    /// Render phase: background tiles, depth-sorted entities, UI overlay,
    /// in that order.
    pub fn render(&self, canvas: &mut WindowCanvas) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        let camera = Camera::centered_on(self.player.world_x, self.player.world_y, &self.config);

        self.tiles.draw(canvas, &camera)?;

        // Transient frame list, rebuilt from the live slots and dropped at
        // the end of the frame.
        let draw_list = render::build_draw_list(
            &self.player,
            &self.npcs,
            &self.objects,
            &self.enemies,
        );
        render::draw_sorted(canvas, &camera, &draw_list)?;

        self.ui.draw(canvas, self.mode.current(), &self.config)
    }

    pub fn play_music(&mut self, index: usize) {
        self.music.set_file(index);
        self.music.play();
        self.music.loop_playback();
    }

    pub fn stop_music(&mut self) {
        self.music.stop();
    }

    pub fn play_sound_effect(&mut self, index: usize) {
        self.effects.set_file(index);
        self.effects.play();
    }

    pub fn music_playing(&self) -> bool {
        self.music.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_game() -> Game {
        let mut game = Game::new(GameConfig::default());
        game.setup();
        game
    }

    #[test]
    fn setup_populates_world_and_enters_playing() {
        let game = ready_game();
        assert_eq!(game.objects.live_count(), 3);
        assert_eq!(game.npcs.live_count(), 4);
        assert_eq!(game.enemies.live_count(), 6);
        assert!(game.mode.updates_enabled());
        assert!(game.music_playing());
    }

    #[test]
    fn n_ticks_update_every_live_entity_n_times() {
        let mut game = ready_game();
        let input = InputState::default();
        for _ in 0..25 {
            game.update(&input);
        }

        assert_eq!(game.player.ticks(), 25);
        for (_, npc) in game.npcs.iter_live() {
            assert_eq!(npc.ticks(), 25);
        }
        for (_, enemy) in game.enemies.iter_live() {
            assert_eq!(enemy.ticks(), 25);
        }
    }

    #[test]
    fn paused_game_suppresses_entity_updates() {
        let mut game = ready_game();
        game.mode.toggle_pause();

        let input = InputState {
            right: true,
            ..Default::default()
        };
        let start = game.player.position();
        for _ in 0..10 {
            game.update(&input);
        }
        assert_eq!(game.player.position(), start);
        assert_eq!(game.player.ticks(), 0);
        for (_, npc) in game.npcs.iter_live() {
            assert_eq!(npc.ticks(), 0);
        }

        game.mode.toggle_pause();
        game.update(&input);
        assert_eq!(game.player.ticks(), 1);
    }

    #[test]
    fn menu_also_suppresses_updates() {
        let mut game = ready_game();
        game.mode.open_menu();
        game.update(&InputState::default());
        assert_eq!(game.player.ticks(), 0);
    }

    #[test]
    fn frame_list_tracks_live_slots() {
        let mut game = ready_game();
        let expected = 1 + game.npcs.live_count() + game.objects.live_count() + game.enemies.live_count();
        let list = render::build_draw_list(&game.player, &game.npcs, &game.objects, &game.enemies);
        assert_eq!(list.len(), expected);

        // Removing an enemy shrinks the next frame's list by one.
        let first_enemy = game.enemies.iter_live().next().map(|(id, _)| id).unwrap();
        game.enemies.remove(first_enemy);
        let list = render::build_draw_list(&game.player, &game.npcs, &game.objects, &game.enemies);
        assert_eq!(list.len(), expected - 1);
    }

    #[test]
    fn sound_effect_entry_point_is_a_pass_through() {
        let mut game = ready_game();
        game.play_sound_effect(2);
        game.stop_music();
        assert!(!game.music_playing());
    }
}
