//! Avatar images of the selected user or of a ranking.

use crate::state::AppState;
use dioxus::prelude::*;
use pa_core::avatar::AvatarStyle;

#[derive(Props, Clone, PartialEq)]
pub struct AvatarPanelProps {
    /// Image sizing; how avatars combine is decided when they are stored
    pub style: AvatarStyle,
}

/// Avatar container, hidden while there is nothing to show.
#[component]
pub fn AvatarPanel(props: AvatarPanelProps) -> Element {
    let state = use_context::<AppState>();
    let avatars = state.dashboard.read().avatars().to_vec();
    let img_style = props.style.img_style();

    rsx! {
        if !avatars.is_empty() {
            div {
                id: "avatar",
                style: "display: flex; align-items: center; margin: 8px 0;",
                for url in avatars.iter() {
                    img { src: "{url}", style: "{img_style}" }
                }
            }
        }
    }
}
