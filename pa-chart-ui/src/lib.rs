//! Shared Dioxus components and Google Charts bridge for presence dashboards.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the timeline chart via `js_sys::eval()`
//! - `fetch`: `window.fetch` wrappers for the presence API
//! - `state`: reactive AppState with Dioxus Signals
//! - `controller`: selector loading, detail fetching and chart redraw hooks
//! - `components`: reusable RSX components (selector, containers, avatars)

pub mod components;
pub mod controller;
pub mod fetch;
pub mod js_bridge;
pub mod state;
