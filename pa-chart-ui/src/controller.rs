//! Hooks wiring the dropdown, the presence API and the timeline together.
//!
//! Both dashboards follow the same flow: load the entity list once on mount,
//! start a ticketed detail request on every selection change, and redraw the
//! timeline whenever a fresh set of rows has been loaded.

use crate::fetch;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use log::{info, warn};
use pa_core::avatar::AvatarStyle;
use pa_core::chart::{ChartRow, TimelineKind};
use pa_core::dashboard::{DetailPhase, RequestTicket};
use pa_core::entity::EntityKind;
use pa_utils::error::FetchError;

/// Locale passed to Google Charts.
pub const CHART_LANGUAGE: &str = "pl";

/// Load the dropdown entities once on mount.
///
/// A failed load leaves the dropdown hidden and the loading indicator up.
pub fn use_selector_loader(kind: EntityKind) {
    let mut state = use_context::<AppState>();
    use_future(move || async move {
        match fetch::load_entities(kind).await {
            Ok(entities) => {
                info!("Loaded {} {:?} entities", entities.len(), kind);
                state.dashboard.write().entities_loaded(entities);
            }
            Err(e) => {
                warn!("Failed to load {:?} entities: {}", kind, e);
                state.last_error.set(Some(e.to_string()));
            }
        }
    });
}

/// Register a dropdown change. Returns the ticket for the detail request,
/// or `None` when the empty option was chosen.
pub fn begin_selection(mut state: AppState, value: &str) -> Option<RequestTicket> {
    state.last_error.set(None);
    let ticket = state.dashboard.write().select(value);
    if ticket.is_some() {
        info!("Selected {}", value);
    }
    ticket
}

/// Apply the outcome of a detail request issued under `ticket`.
pub fn finish_detail(
    mut state: AppState,
    ticket: RequestTicket,
    outcome: Result<Vec<ChartRow>, FetchError>,
) {
    match outcome {
        Ok(rows) => {
            let count = rows.len();
            if state.dashboard.write().detail_loaded(ticket, rows) {
                info!("Loaded {} chart rows", count);
            }
        }
        Err(e) => {
            warn!("Detail request failed: {}", e);
            if state.dashboard.write().detail_failed(ticket) {
                state.last_error.set(Some(e.to_string()));
            }
        }
    }
}

/// Show avatars fetched under `ticket`. Failures are logged only.
pub fn finish_avatars(
    mut state: AppState,
    ticket: RequestTicket,
    outcome: Result<Vec<String>, FetchError>,
    style: AvatarStyle,
) {
    match outcome {
        Ok(urls) => {
            state.dashboard.write().avatars_loaded(ticket, urls, style);
        }
        Err(e) => warn!("Avatar request failed: {}", e),
    }
}

/// Fetch the selected user's avatar into the avatar panel.
pub fn spawn_user_avatar(state: AppState, ticket: RequestTicket, user_id: String) {
    spawn(async move {
        let outcome = fetch::fetch_user_avatar(&user_id).await.map(|url| vec![url]);
        finish_avatars(state, ticket, outcome, AvatarStyle::SINGLE_USER);
    });
}

/// Hand chart rows to the charting library. No rows clears the container.
pub fn draw_timeline(container_id: &str, kind: TimelineKind, rows: &[ChartRow]) {
    if rows.is_empty() {
        js_bridge::destroy_chart(container_id);
        return;
    }
    let rows_json = serde_json::to_string(rows).unwrap_or_default();
    let config_json = serde_json::to_string(&kind.config()).unwrap_or_default();
    js_bridge::render_timeline(container_id, &rows_json, &config_json);
}

/// Load the charting library on mount and redraw `container_id` every time
/// a detail request completes successfully.
pub fn use_timeline_renderer(container_id: &'static str, kind: TimelineKind) {
    let state = use_context::<AppState>();
    use_hook(|| js_bridge::init_charts(CHART_LANGUAGE));

    let loaded_rows = use_memo(move || {
        let dashboard = state.dashboard.read();
        (dashboard.detail_phase() == DetailPhase::Loaded).then(|| dashboard.rows().to_vec())
    });

    use_effect(move || {
        if let Some(rows) = loaded_rows() {
            draw_timeline(container_id, kind, &rows);
        }
    });
}
