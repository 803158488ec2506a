//! Dashboard heading naming the entity whose presence is charted.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// What one bar stands for
    #[props(default = String::new())]
    pub bar_legend: String,
}

/// Title, the label of the selected user or month once one is picked, and
/// a one-line legend for the timeline bars.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let subject = state.dashboard.read().selected_label().map(str::to_string);

    let heading = match subject {
        Some(label) => format!("{}: {}", props.title, label),
        None => props.title.clone(),
    };

    rsx! {
        header {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{heading}"
            }
            if !props.bar_legend.is_empty() {
                small {
                    style: "color: #666;",
                    "{props.bar_legend}"
                }
            }
        }
    }
}
