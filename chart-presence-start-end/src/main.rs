//! Presence Start and End by Weekday
//!
//! The user picks an employee from a dropdown; the app shows the employee's
//! avatar and a timeline with one bar per weekday spanning the mean start
//! and mean end of presence.
//!
//! Data flow:
//! 1. On mount, `/api/v1/users` fills the dropdown.
//! 2. On selection, `/api/v1/user_image/{id}` and
//!    `/api/v1/presence_start_end/{id}` are requested under one ticket.
//! 3. The weekday intervals become chart rows and are drawn as a
//!    Google Charts timeline. Responses for earlier selections are dropped.

use dioxus::prelude::*;
use pa_chart_ui::components::{
    AvatarPanel, ChartContainer, ChartHeader, EntitySelector, LoadingSpinner, NoDataDisplay,
};
use pa_chart_ui::controller;
use pa_chart_ui::fetch;
use pa_chart_ui::state::AppState;
use pa_core::avatar::AvatarStyle;
use pa_core::chart::{to_chart_rows, TimelineKind};
use pa_core::entity::EntityKind;

/// Chart container DOM element ID used by Google Charts to render into.
const CHART_ID: &str = "chart_div";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("presence-start-end-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    controller::use_selector_loader(EntityKind::User);
    controller::use_timeline_renderer(CHART_ID, TimelineKind::WeekdayStartEnd);

    let on_select = move |user_id: String| {
        let Some(ticket) = controller::begin_selection(state, &user_id) else {
            return;
        };
        log::info!("Fetching presence start/end for user {}", user_id);
        controller::spawn_user_avatar(state, ticket, user_id.clone());
        spawn(async move {
            let outcome = fetch::fetch_weekday_intervals(&user_id)
                .await
                .map(|records| to_chart_rows(&records));
            controller::finish_detail(state, ticket, outcome);
        });
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Presence start-end weekday".to_string(),
                bar_legend: "Mean hour of arrival and departure for each weekday".to_string(),
            }

            EntitySelector {
                id: "user_id".to_string(),
                label: "User:".to_string(),
                on_select: on_select,
            }

            AvatarPanel { style: AvatarStyle::SINGLE_USER }
            LoadingSpinner {}
            NoDataDisplay {}

            ChartContainer {
                id: CHART_ID.to_string(),
                min_height: 320,
            }
        }
    }
}
