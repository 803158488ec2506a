//! "Data not found" message.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shown after a failed detail request until the next selection change.
#[component]
pub fn NoDataDisplay() -> Element {
    let state = use_context::<AppState>();
    let visible = state.dashboard.read().visibility().no_data;
    let detail = (state.last_error)().unwrap_or_default();

    rsx! {
        if visible {
            div {
                id: "no_data",
                title: "{detail}",
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                b { "Data not found" }
            }
        }
    }
}
