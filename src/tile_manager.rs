//! Background tile grid
//!
//! Owns the world tile map and draws the visible portion of it each frame,
//! before any entity rendering. Tiles are flat colored squares; decoding
//! tile art from asset files is outside this core.

use crate::camera::Camera;
use crate::config::GameConfig;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

/// Tile types present in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Grass,
    Water,
    Earth,
    Tree,
    Sand,
}

impl TileKind {
    /// Solid tiles block entity movement.
    pub fn is_solid(self) -> bool {
        matches!(self, TileKind::Water | TileKind::Tree)
    }

    fn color(self) -> Color {
        match self {
            TileKind::Grass => Color::RGB(0x93, 0xaf, 0x66),
            TileKind::Water => Color::RGB(0x2d, 0x69, 0xa8),
            TileKind::Earth => Color::RGB(0x8a, 0x6a, 0x45),
            TileKind::Tree => Color::RGB(0x2f, 0x5e, 0x30),
            TileKind::Sand => Color::RGB(0xd8, 0xc8, 0x8a),
        }
    }
}

/// World grid of tile kinds, row-major.
pub struct TileMap {
    tiles: Vec<Vec<TileKind>>,
    pub cols: usize,
    pub rows: usize,
}

impl TileMap {
    pub fn filled(cols: usize, rows: usize, kind: TileKind) -> Self {
        TileMap {
            tiles: vec![vec![kind; cols]; rows],
            cols,
            rows,
        }
    }

    pub fn get(&self, col: i32, row: i32) -> Option<TileKind> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(self.tiles[row as usize][col as usize])
    }

    pub fn set(&mut self, col: i32, row: i32, kind: TileKind) -> bool {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return false;
        }
        self.tiles[row as usize][col as usize] = kind;
        true
    }

    /// Out-of-bounds counts as solid so nothing walks off the map.
    pub fn is_solid_at(&self, col: i32, row: i32) -> bool {
        self.get(col, row).map(TileKind::is_solid).unwrap_or(true)
    }
}

/// Renders the background grid for the current camera offset.
pub struct TileManager {
    pub map: TileMap,
    tile_size: u32,
}

impl TileManager {
    pub fn new(config: &GameConfig) -> Self {
        TileManager {
            map: default_world(config.max_world_col as usize, config.max_world_row as usize),
            tile_size: config.tile_size(),
        }
    }

    /// Draw every tile that touches the screen. Called once per frame,
    /// before entity rendering.
    pub fn draw(&self, canvas: &mut WindowCanvas, camera: &Camera) -> Result<(), String> {
        let tile = self.tile_size as i32;
        for row in 0..self.map.rows as i32 {
            let world_y = row * tile;
            for col in 0..self.map.cols as i32 {
                let world_x = col * tile;
                if !camera.in_view(world_x, world_y, self.tile_size) {
                    continue;
                }
                let kind = match self.map.get(col, row) {
                    Some(kind) => kind,
                    None => continue,
                };
                let (sx, sy) = camera.to_screen(world_x, world_y);
                canvas.set_draw_color(kind.color());
                canvas
                    .fill_rect(Rect::new(sx, sy, self.tile_size, self.tile_size))
                    .map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }
}

/// Deterministic starter map: water ring around the border, tree clusters
/// scattered inland, a sand road across the middle, grass everywhere else.
/// Stands in for map-file parsing, which is a black-box service.
fn default_world(cols: usize, rows: usize) -> TileMap {
    let mut map = TileMap::filled(cols, rows, TileKind::Grass);

    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            let border = row == 0 || col == 0 || row == rows as i32 - 1 || col == cols as i32 - 1;
            if border {
                map.set(col, row, TileKind::Water);
            } else if row == rows as i32 / 2 {
                map.set(col, row, TileKind::Sand);
            } else if (col * 7 + row * 13) % 29 == 0 {
                map.set(col, row, TileKind::Tree);
            } else if (col * 11 + row * 3) % 31 == 0 {
                map.set(col, row, TileKind::Earth);
            }
        }
    }
    map
}
