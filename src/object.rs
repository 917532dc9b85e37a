//! Static world objects
//!
//! Objects occupy slots like NPCs and enemies but have no per-frame logic;
//! the update phase never touches them. They still participate in collision
//! (when solid) and in depth-sorted rendering.

use crate::camera::Camera;
use crate::collision::Collidable;
use crate::render::DepthSortable;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Key,
    Door,
    Chest,
}

impl ObjectKind {
    /// Keys lie flat on the ground and never block movement.
    fn is_solid(self) -> bool {
        !matches!(self, ObjectKind::Key)
    }

    fn color(self) -> Color {
        match self {
            ObjectKind::Key => Color::RGB(0xe8, 0xd4, 0x4d),
            ObjectKind::Door => Color::RGB(0x6b, 0x4a, 0x2b),
            ObjectKind::Chest => Color::RGB(0xb0, 0x72, 0x2a),
        }
    }
}

pub struct GameObject {
    pub kind: ObjectKind,
    pub world_x: i32,
    pub world_y: i32,
    size: u32,
}

impl GameObject {
    pub fn new(kind: ObjectKind, world_x: i32, world_y: i32, size: u32) -> Self {
        GameObject {
            kind,
            world_x,
            world_y,
            size,
        }
    }
}

impl Collidable for GameObject {
    fn solid_bounds(&self) -> Rect {
        Rect::new(self.world_x, self.world_y, self.size, self.size)
    }

    fn is_solid(&self) -> bool {
        self.kind.is_solid()
    }
}

impl DepthSortable for GameObject {
    fn depth_y(&self) -> i32 {
        self.world_y
    }

    fn draw(&self, canvas: &mut WindowCanvas, camera: &Camera) -> Result<(), String> {
        if !camera.in_view(self.world_x, self.world_y, self.size) {
            return Ok(());
        }
        let (sx, sy) = camera.to_screen(self.world_x, self.world_y);
        // Keys draw smaller, centered in their tile.
        let (rect, color) = match self.kind {
            ObjectKind::Key => {
                let inset = (self.size / 3) as i32;
                (
                    Rect::new(sx + inset, sy + inset, self.size / 3, self.size / 3),
                    self.kind.color(),
                )
            }
            _ => (Rect::new(sx, sy, self.size, self.size), self.kind.color()),
        };
        canvas.set_draw_color(color);
        canvas.fill_rect(rect).map_err(|e| e.to_string())
    }
}
