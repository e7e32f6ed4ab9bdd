//! Delays and repeating ticks for countdowns, AI "thinking" pauses and
//! memory-sequence playback.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser both helpers run on `spawn_local` with `gloo_timers`
//! sleeps. A [`Ticker`] carries a shared alive flag; owners stop it from
//! `on_cleanup` so a loop never outlives its page. Under SSR nothing is
//! scheduled: [`after`] runs its callback immediately and [`Ticker::start`]
//! returns a handle that never fires.
//!
//! Staged sequences (memory playback, AI replies) are cancelled with a
//! [`Generation`] counter instead of a handle: a reset bumps the counter and
//! stale callbacks see a mismatch and return.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        f();
    }
}

/// Handle to a repeating timer.
#[derive(Clone, Debug)]
pub struct Ticker {
    alive: Arc<AtomicBool>,
}

impl Ticker {
    /// Call `on_tick` every `period_ms` until [`Ticker::stop`].
    pub fn start(period_ms: u32, on_tick: impl Fn() + 'static) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        #[cfg(feature = "hydrate")]
        {
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(period_ms))).await;
                    if !alive_task.load(Ordering::Relaxed) {
                        break;
                    }
                    on_tick();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period_ms, on_tick);
        }
        Self { alive }
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Monotonic counter used to invalidate scheduled callbacks.
#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value to capture when scheduling.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Invalidate everything scheduled so far; returns the new value.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether a callback scheduled at `captured` is still wanted.
    #[must_use]
    pub fn is_current(&self, captured: u64) -> bool {
        self.current() == captured
    }
}
