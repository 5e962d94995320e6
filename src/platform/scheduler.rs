//! Repeating tick timer
//!
//! The game registers exactly one repeating callback. In the browser that is
//! `setInterval`; natively the calling thread sleeps between ticks. Neither
//! can be cancelled: the web loop lives as long as the page, the native loop
//! until its tick limit.

use std::time::Duration;

use crate::error::SetupError;

/// Platform timer service
pub trait TickScheduler {
    /// Call `on_tick` every `interval`, one call at a time
    fn start<F>(&mut self, interval: Duration, on_tick: F) -> Result<(), SetupError>
    where
        F: FnMut() + 'static;
}

/// Converts elapsed wall time into a whole number of fixed ticks
///
/// Late wake-ups are caught up with back-to-back ticks, but at most
/// `max_catchup` per call; anything beyond that is dropped so a long stall
/// cannot snowball.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f64,
    accumulator: f64,
    max_catchup: u32,
    dropped: u64,
}

impl FixedStep {
    pub fn new(step: Duration, max_catchup: u32) -> Self {
        Self {
            step: step.as_secs_f64(),
            accumulator: 0.0,
            max_catchup: max_catchup.max(1),
            dropped: 0,
        }
    }

    /// Add elapsed time and return how many ticks to run now
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.as_secs_f64();

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_catchup {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            let behind = (self.accumulator / self.step).floor();
            self.accumulator -= behind * self.step;
            self.dropped += behind as u64;
            log::warn!("Tick loop fell behind, dropped {} ticks", behind);
        }

        ticks
    }

    /// Ticks skipped so far because the loop fell too far behind
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// Blocking timer for native builds: sleeps on the calling thread
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct ThreadScheduler {
    max_ticks: Option<u64>,
    ticks_run: u64,
}

#[cfg(not(target_arch = "wasm32"))]
impl ThreadScheduler {
    /// Runs forever
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns from `start` after `max_ticks` ticks
    pub fn with_limit(max_ticks: u64) -> Self {
        Self {
            max_ticks: Some(max_ticks),
            ticks_run: 0,
        }
    }

    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TickScheduler for ThreadScheduler {
    fn start<F>(&mut self, interval: Duration, mut on_tick: F) -> Result<(), SetupError>
    where
        F: FnMut() + 'static,
    {
        use crate::consts::MAX_CATCHUP_TICKS;
        use std::time::Instant;

        if interval.is_zero() {
            return Err(SetupError::Timer("tick interval must be non-zero".into()));
        }
        if self.max_ticks == Some(self.ticks_run) {
            return Ok(());
        }

        let mut clock = FixedStep::new(interval, MAX_CATCHUP_TICKS);
        let mut last = Instant::now();
        loop {
            std::thread::sleep(interval.saturating_sub(last.elapsed()));

            let now = Instant::now();
            let due = clock.advance(now - last);
            last = now;

            for _ in 0..due {
                on_tick();
                self.ticks_run += 1;
                if self.max_ticks == Some(self.ticks_run) {
                    return Ok(());
                }
            }
        }
    }
}

/// `window.setInterval` timer (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct IntervalScheduler {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl IntervalScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(target_arch = "wasm32")]
impl TickScheduler for IntervalScheduler {
    fn start<F>(&mut self, interval: Duration, on_tick: F) -> Result<(), SetupError>
    where
        F: FnMut() + 'static,
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let millis = interval.as_millis().min(i32::MAX as u128) as i32;
        let closure = Closure::<dyn FnMut()>::new(on_tick);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| SetupError::Timer(format!("{:?}", e)))?;
        // The callback must outlive this call; the page owns it from here
        closure.forget();

        log::info!("Tick timer {} registered every {} ms", handle, millis);
        Ok(())
    }
}
