//! Client-side state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by `App` or by the page
//! that owns them. All rule logic lives in the `engine` crate; these types
//! sequence engine calls and hold presentation flags.

pub mod games;
pub mod quiz;
pub mod ui;
