//! Shared entity building blocks
//!
//! Facing direction, the two-frame walk cycle, and the wander brain used by
//! NPCs and enemies. Entity variants themselves live in their own modules
//! (`player`, `npc`, `enemy`, `object`).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Four-way facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit movement delta for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Two-frame walk animation driven by the tick counter.
///
/// Advances one frame every `interval` ticks while the entity is moving;
/// standing entities simply stop calling `advance`.
#[derive(Debug, Clone)]
pub struct SpriteCycle {
    counter: u32,
    frame: u8,
    interval: u32,
}

impl SpriteCycle {
    pub fn new(interval: u32) -> Self {
        SpriteCycle {
            counter: 0,
            frame: 0,
            interval: interval.max(1),
        }
    }

    pub fn advance(&mut self) {
        self.counter += 1;
        if self.counter >= self.interval {
            self.frame = 1 - self.frame;
            self.counter = 0;
        }
    }

    /// Current frame, 0 or 1.
    pub fn frame(&self) -> u8 {
        self.frame
    }
}

/// Periodic random direction picker for wandering entities.
///
/// Seeded per entity so wander behavior is reproducible in tests.
pub struct WanderBrain {
    rng: Pcg32,
    counter: u32,
    interval: u32,
}

impl WanderBrain {
    pub fn new(seed: u64, interval: u32) -> Self {
        WanderBrain {
            rng: Pcg32::seed_from_u64(seed),
            counter: 0,
            interval: interval.max(1),
        }
    }

    /// Tick the brain; returns a new direction every `interval` ticks.
    pub fn tick(&mut self) -> Option<Direction> {
        self.counter += 1;
        if self.counter < self.interval {
            return None;
        }
        self.counter = 0;
        let direction = match self.rng.random_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        };
        Some(direction)
    }
}
