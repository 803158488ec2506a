//! Chart container component.

use crate::state::AppState;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (Google Charts renders into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A container div for the timeline chart.
///
/// The element stays mounted so the chart survives re-renders; it is only
/// hidden while no freshly loaded rows are available.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let visible = state.dashboard.read().visibility().chart;
    let display = if visible { "block" } else { "none" };
    let style = format!(
        "min-height: {}px; width: 100%; display: {};",
        props.min_height, display
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
