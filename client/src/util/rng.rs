//! Random number generator for UI-driven game and quiz moves.
//!
//! DESIGN
//! ======
//! The engine takes `&mut impl Rng` everywhere. The client builds a `StdRng`
//! seeded from `Math.random()` in the browser (no `getrandom` backend in the
//! WASM bundle) and from the operating system elsewhere.

use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

/// A freshly seeded generator.
#[cfg(feature = "hydrate")]
pub fn seeded() -> StdRng {
    StdRng::seed_from_u64(browser_seed())
}

/// A freshly seeded generator.
#[cfg(not(feature = "hydrate"))]
pub fn seeded() -> StdRng {
    StdRng::from_os_rng()
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn browser_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}
