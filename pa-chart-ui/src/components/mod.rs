//! Reusable Dioxus RSX components for presence dashboards.

mod avatar_panel;
mod chart_container;
mod chart_header;
mod entity_selector;
mod loading_spinner;
mod no_data_display;

pub use avatar_panel::AvatarPanel;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use entity_selector::EntitySelector;
pub use loading_spinner::LoadingSpinner;
pub use no_data_display::NoDataDisplay;
