//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Tick timing (`setInterval` on web, a sleeping loop natively)
//! - Keyboard input mapping
//! - DOM lookups (web only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod input;
pub mod scheduler;

pub use input::{KeyState, key_binding};
#[cfg(target_arch = "wasm32")]
pub use scheduler::IntervalScheduler;
#[cfg(not(target_arch = "wasm32"))]
pub use scheduler::ThreadScheduler;
pub use scheduler::{FixedStep, TickScheduler};
