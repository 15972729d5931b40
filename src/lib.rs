//! Single-page developer portfolio rendered with Yew.
//!
//! Everything except [`frontend`] is plain Rust and is unit tested on the host.

pub mod config;
pub mod content;
pub mod count_up;
pub mod expandable;
pub mod media;
pub mod period;
pub mod scroll;
pub mod telemetry;
pub mod theme;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use frontend::run;
