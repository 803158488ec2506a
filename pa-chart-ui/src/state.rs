//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use pa_core::dashboard::DashboardState;
use dioxus::prelude::*;

/// Shared application state for the presence dashboards.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selector, detail and avatar state of the page
    pub dashboard: Signal<DashboardState>,
    /// Last request failure, kept for the "no data" panel tooltip
    pub last_error: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(DashboardState::new()),
            last_error: Signal::new(None),
        }
    }
}
