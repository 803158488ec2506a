//! Loading indicator component.

use crate::state::AppState;
use dioxus::prelude::*;

/// Loading indicator, shown while the entity list or a detail request is pending.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let visible = state.dashboard.read().visibility().loading;

    rsx! {
        if visible {
            div {
                id: "loading",
                style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
                "Loading data..."
            }
        }
    }
}
