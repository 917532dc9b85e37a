//! Startup configuration
//!
//! All sizing and timing constants are fixed at startup: base tile size,
//! scale factor, screen and world dimensions in tiles, and the target FPS.
//! Values can be overridden from a JSON file; anything missing falls back
//! to the defaults below.

use serde::Deserialize;

/// Immutable game configuration, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Source size of a tile in pixels before scaling (32).
    pub original_tile_size: u32,
    /// Uniform scale factor applied to tiles and sprites (3).
    pub scale: u32,
    /// Visible columns on screen (16 -> 1536 px wide at defaults).
    pub max_screen_col: u32,
    /// Visible rows on screen (9 -> 864 px tall at defaults).
    pub max_screen_row: u32,
    /// World width in tiles.
    pub max_world_col: u32,
    /// World height in tiles.
    pub max_world_row: u32,
    /// Target frames (ticks) per second for the game loop.
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            original_tile_size: 32,
            scale: 3,
            max_screen_col: 16,
            max_screen_row: 9,
            max_world_col: 50,
            max_world_row: 50,
            fps: 60,
        }
    }
}

impl GameConfig {
    /// Rendered tile size in pixels (32 * 3 = 96 at defaults).
    pub fn tile_size(&self) -> u32 {
        self.original_tile_size * self.scale
    }

    pub fn screen_width(&self) -> u32 {
        self.tile_size() * self.max_screen_col
    }

    pub fn screen_height(&self) -> u32 {
        self.tile_size() * self.max_screen_row
    }

    /// World width in pixels.
    pub fn world_width(&self) -> u32 {
        self.tile_size() * self.max_world_col
    }

    /// World height in pixels.
    pub fn world_height(&self) -> u32 {
        self.tile_size() * self.max_world_row
    }

    /// Load configuration from a JSON file and validate it.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject misconfigurations that would break the loop or the world grid.
    ///
    /// A zero FPS would mean a division by zero when deriving the frame
    /// interval, so it is refused here, before the loop can start.
    pub fn validate(&self) -> Result<(), String> {
        if self.fps == 0 {
            return Err("target FPS must be greater than zero".to_string());
        }
        if self.original_tile_size == 0 || self.scale == 0 {
            return Err("tile size and scale must be greater than zero".to_string());
        }
        if self.max_screen_col == 0 || self.max_screen_row == 0 {
            return Err("screen dimensions must be at least one tile".to_string());
        }
        if self.max_world_col == 0 || self.max_world_row == 0 {
            return Err("world dimensions must be at least one tile".to_string());
        }
        Ok(())
    }
}
