//! Top 5 Workers of the Month
//!
//! The user picks a month; the app shows the avatars of the five employees
//! with the highest mean daily presence in that month and a timeline where
//! each bar starts at 09:00 and lasts the employee's mean presence.
//!
//! Data flow:
//! 1. On mount, `/api/v1/months` fills the dropdown.
//! 2. On selection, `/api/v1/top5monthly/{month}` is requested; each record
//!    carries its own avatar URL.
//! 3. Records become chart rows and are drawn as a Google Charts timeline.

use dioxus::prelude::*;
use pa_chart_ui::components::{
    AvatarPanel, ChartContainer, ChartHeader, EntitySelector, LoadingSpinner, NoDataDisplay,
};
use pa_chart_ui::controller;
use pa_chart_ui::fetch;
use pa_chart_ui::state::AppState;
use pa_core::avatar::{monthly_avatars, AvatarStyle};
use pa_core::chart::{to_chart_rows, TimelineKind};
use pa_core::entity::EntityKind;

/// Chart container DOM element ID used by Google Charts to render into.
const CHART_ID: &str = "chart_div";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("top5-monthly-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    controller::use_selector_loader(EntityKind::Month);
    controller::use_timeline_renderer(CHART_ID, TimelineKind::MonthlyTop);

    let on_select = move |month: String| {
        let Some(ticket) = controller::begin_selection(state, &month) else {
            return;
        };
        log::info!("Fetching top 5 workers for {}", month);
        spawn(async move {
            match fetch::fetch_monthly_means(&month).await {
                Ok(records) => {
                    controller::finish_avatars(
                        state,
                        ticket,
                        Ok(monthly_avatars(&records)),
                        AvatarStyle::RANKING,
                    );
                    controller::finish_detail(state, ticket, Ok(to_chart_rows(&records)));
                }
                Err(e) => controller::finish_detail(state, ticket, Err(e)),
            }
        });
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Top 5 workers of the month".to_string(),
                bar_legend: "Mean daily presence, counted from a 09:00 start".to_string(),
            }

            EntitySelector {
                id: "month".to_string(),
                label: "Month:".to_string(),
                on_select: on_select,
            }

            AvatarPanel { style: AvatarStyle::RANKING }
            LoadingSpinner {}
            NoDataDisplay {}

            ChartContainer {
                id: CHART_ID.to_string(),
                min_height: 320,
            }
        }
    }
}
