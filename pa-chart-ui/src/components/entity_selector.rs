//! Dropdown selector for the dashboard entity (user or month).

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EntitySelectorProps {
    /// DOM id of the `<select>`
    pub id: String,
    /// Label text in front of the dropdown
    pub label: String,
    /// Called with the new value on every change, including the empty option
    pub on_select: EventHandler<String>,
}

/// Entity dropdown, hidden until the entity list has loaded.
/// Starts with an empty option so that every real choice is a change.
#[component]
pub fn EntitySelector(props: EntitySelectorProps) -> Element {
    let state = use_context::<AppState>();
    let dashboard = state.dashboard.read();
    let visible = dashboard.visibility().dropdown;
    let entities = dashboard.entities().to_vec();
    let selected = dashboard.selected().unwrap_or_default().to_string();
    drop(dashboard);

    if !visible {
        return rsx! {};
    }

    let on_change = move |evt: Event<FormData>| {
        props.on_select.call(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                onchange: on_change,
                option { value: "", "--" }
                for entity in entities.iter() {
                    option {
                        value: "{entity.id}",
                        selected: entity.id == selected,
                        "{entity.label}"
                    }
                }
            }
        }
    }
}
