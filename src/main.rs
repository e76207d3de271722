//! Score Ambiental Frontend Entry Point
//!
//! Behavior layer for the server-rendered pages: widgets, form validation,
//! password reveal, activity logging, score chart and theme preference.

mod activity;
mod chart;
mod config;
mod error;
mod form_guard;
mod models;
mod password;
mod theme;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod commands;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod dom;

fn main() {
    #[cfg(target_arch = "wasm32")]
    components::boot();
}
