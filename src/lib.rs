//! Client-side explorer for randomly generated user profiles.
//!
//! The crate is a CSR (client-side rendered) Leptos application. The pure
//! core — view-state transitions, serde models, formatting helpers, and
//! configuration — compiles on every target so it can be tested natively
//! with `cargo test`. Everything that talks to the browser (network calls,
//! components, routes) is gated behind `target_arch = "wasm32"`.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod routes;
