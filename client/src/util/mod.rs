//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, theme, clocks, timers,
//! entropy) from page and component logic. Each helper has a native fallback
//! so SSR and unit tests run without a browser.

pub mod clock;
pub mod dark_mode;
pub mod rng;
pub mod storage;
pub mod timer;
