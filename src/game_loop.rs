//! Fixed-FPS game loop
//!
//! Drives Update then Render at a constant rate. The schedule is absolute:
//! each tick's deadline is the previous deadline plus the frame interval,
//! never `now + interval`, so a slow frame eats into the following sleep
//! instead of shifting the whole schedule. The loop runs until its running
//! flag is cleared or the tick callback asks to finish.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Absolute-deadline frame scheduler. Pure arithmetic over a monotonic
/// nanosecond clock supplied by the caller, so the timing discipline is
/// testable without sleeping.
pub struct TickScheduler {
    interval_ns: u64,
    next_deadline_ns: u64,
}

impl TickScheduler {
    /// `now_ns` is the clock reading at loop start; the first deadline is
    /// one interval later. A zero FPS cannot produce an interval and is
    /// refused.
    pub fn new(fps: u32, now_ns: u64) -> Result<Self, String> {
        if fps == 0 {
            return Err("target FPS must be greater than zero".to_string());
        }
        let interval_ns = NANOS_PER_SECOND / fps as u64;
        Ok(TickScheduler {
            interval_ns,
            next_deadline_ns: now_ns + interval_ns,
        })
    }

    pub fn interval_ns(&self) -> u64 {
        self.interval_ns
    }

    pub fn next_deadline_ns(&self) -> u64 {
        self.next_deadline_ns
    }

    /// Time to sleep before the next tick, clamped at zero, and advance the
    /// schedule by one interval. An overrun is logged and absorbed; it is
    /// never an error.
    pub fn sleep_duration(&mut self, now_ns: u64) -> Duration {
        let remaining_ns = self.next_deadline_ns.saturating_sub(now_ns);
        if remaining_ns == 0 && now_ns > self.next_deadline_ns {
            log::debug!(
                "frame overran its deadline by {} us",
                (now_ns - self.next_deadline_ns) / 1_000
            );
        }
        self.next_deadline_ns += self.interval_ns;
        Duration::from_nanos(remaining_ns)
    }
}

/// Clearable running flag, shared between the loop and whoever stops it.
#[derive(Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Long-running fixed-rate driver for the Update + Render tick.
pub struct GameLoop {
    fps: u32,
    running: Arc<AtomicBool>,
}

impl GameLoop {
    pub fn new(fps: u32) -> Result<Self, String> {
        // Validate up front; the scheduler itself is built when run starts.
        TickScheduler::new(fps, 0)?;
        Ok(GameLoop {
            fps,
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Run ticks until the running flag is cleared, the callback returns
    /// `Ok(false)`, or the callback fails. Each iteration runs one full
    /// tick (Update + Render inside `tick`), then sleeps out the remainder
    /// of the frame interval.
    pub fn run<F>(&mut self, mut tick: F) -> Result<(), String>
    where
        F: FnMut() -> Result<bool, String>,
    {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(self.fps, 0)?;
        log::info!(
            "game loop started: {} fps, {} ns interval",
            self.fps,
            scheduler.interval_ns()
        );

        while self.running.load(Ordering::SeqCst) {
            if !tick()? {
                self.running.store(false, Ordering::SeqCst);
                break;
            }
            let now_ns = start.elapsed().as_nanos() as u64;
            std::thread::sleep(scheduler.sleep_duration(now_ns));
        }

        log::info!("game loop stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_for_sixty_fps() {
        let scheduler = TickScheduler::new(60, 0).unwrap();
        assert_eq!(scheduler.interval_ns(), 16_666_666);
    }

    #[test]
    fn zero_fps_is_refused() {
        assert!(TickScheduler::new(0, 0).is_err());
        assert!(GameLoop::new(0).is_err());
    }

    #[test]
    fn five_ms_of_work_sleeps_the_remainder() {
        let mut scheduler = TickScheduler::new(60, 0).unwrap();
        let sleep = scheduler.sleep_duration(5_000_000);
        assert_eq!(sleep, Duration::from_nanos(16_666_666 - 5_000_000));
    }

    #[test]
    fn overrun_clamps_to_zero_and_keeps_schedule() {
        let mut scheduler = TickScheduler::new(50, 0).unwrap();
        // Deadline is 20ms; the frame took 33ms.
        assert_eq!(scheduler.sleep_duration(33_000_000), Duration::ZERO);
        // The next deadline is 40ms from start, not 33ms + 20ms: the
        // schedule advances from the prior deadline.
        assert_eq!(scheduler.next_deadline_ns(), 40_000_000);
        // So the following frame only gets the short remainder.
        assert_eq!(
            scheduler.sleep_duration(35_000_000),
            Duration::from_nanos(5_000_000)
        );
    }

    #[test]
    fn tick_count_tracks_wall_time() {
        // Simulate one second of 60 fps with 2ms of work per frame; the
        // self-correcting schedule should land on 60 ticks.
        let mut scheduler = TickScheduler::new(60, 0).unwrap();
        let work_ns = 2_000_000u64;
        let mut now_ns = 0u64;
        let mut ticks = 0u32;
        while now_ns + work_ns < NANOS_PER_SECOND {
            now_ns += work_ns;
            now_ns += scheduler.sleep_duration(now_ns).as_nanos() as u64;
            ticks += 1;
        }
        assert!((59..=61).contains(&ticks), "got {ticks} ticks");
    }

    #[test]
    fn stop_handle_ends_the_loop() {
        let mut game_loop = GameLoop::new(1000).unwrap();
        let handle = game_loop.stop_handle();
        assert!(handle.is_running());

        let mut count = 0;
        game_loop
            .run(|| {
                count += 1;
                if count == 3 {
                    handle.stop();
                }
                Ok(true)
            })
            .unwrap();
        assert_eq!(count, 3);
        assert!(!handle.is_running());
    }

    #[test]
    fn tick_returning_false_ends_the_loop() {
        let mut game_loop = GameLoop::new(1000).unwrap();
        let mut count = 0;
        game_loop
            .run(|| {
                count += 1;
                Ok(count < 2)
            })
            .unwrap();
        assert_eq!(count, 2);
        assert!(!game_loop.stop_handle().is_running());
    }

    #[test]
    fn tick_error_propagates() {
        let mut game_loop = GameLoop::new(1000).unwrap();
        let result = game_loop.run(|| Err("render failed".to_string()));
        assert!(result.is_err());
    }
}
