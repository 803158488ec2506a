//! Page state for a dropdown-driven timeline dashboard.
//!
//! Every selection change hands out a fresh [`RequestTicket`]. Responses are
//! applied only while their ticket is still the latest one, so a slow answer
//! for an earlier selection can never overwrite the chart of a later one.
//! What the page shows is a pure projection of this state, see
//! [`DashboardState::visibility`].

use crate::avatar::AvatarStyle;
use crate::chart::ChartRow;
use crate::entity::SelectableEntity;
use log::debug;

/// Identifies one detail request; only the latest ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPhase {
    /// Entity list not loaded (yet); also where a failed load leaves it
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Idle,
    Loading,
    Loaded,
    NoData,
}

/// Which page elements are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub loading: bool,
    pub dropdown: bool,
    pub chart: bool,
    pub no_data: bool,
    pub avatars: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    selector: SelectorPhase,
    entities: Vec<SelectableEntity>,
    selected: Option<String>,
    detail: DetailPhase,
    rows: Vec<ChartRow>,
    avatars: Vec<String>,
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Initial page: loading indicator up, dropdown hidden.
    pub fn new() -> Self {
        Self {
            selector: SelectorPhase::Loading,
            entities: Vec::new(),
            selected: None,
            detail: DetailPhase::Idle,
            rows: Vec::new(),
            avatars: Vec::new(),
            generation: 0,
        }
    }

    pub fn selector_phase(&self) -> SelectorPhase {
        self.selector
    }

    pub fn detail_phase(&self) -> DetailPhase {
        self.detail
    }

    pub fn entities(&self) -> &[SelectableEntity] {
        &self.entities
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Dropdown label of the current selection.
    pub fn selected_label(&self) -> Option<&str> {
        let id = self.selected.as_deref()?;
        self.entities
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.label.as_str())
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn avatars(&self) -> &[String] {
        &self.avatars
    }

    /// Fill the dropdown and reveal it.
    pub fn entities_loaded(&mut self, entities: Vec<SelectableEntity>) {
        self.entities = entities;
        self.selector = SelectorPhase::Ready;
    }

    /// React to a dropdown change.
    ///
    /// Any "no data" message is dismissed and pending requests are
    /// superseded. An empty value stops there and returns `None`; otherwise
    /// the page switches to loading and the returned ticket must accompany
    /// the detail (and avatar) responses.
    pub fn select(&mut self, value: &str) -> Option<RequestTicket> {
        self.generation += 1;
        if value.is_empty() {
            self.selected = None;
            if matches!(self.detail, DetailPhase::Loading | DetailPhase::NoData) {
                self.detail = DetailPhase::Idle;
            }
            return None;
        }
        self.selected = Some(value.to_string());
        self.detail = DetailPhase::Loading;
        self.rows.clear();
        self.avatars.clear();
        Some(RequestTicket(self.generation))
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a successful detail response. Returns false for stale tickets.
    pub fn detail_loaded(&mut self, ticket: RequestTicket, rows: Vec<ChartRow>) -> bool {
        if !self.is_current(ticket) {
            debug!("Ignoring stale detail response {:?}", ticket);
            return false;
        }
        self.rows = rows;
        self.detail = DetailPhase::Loaded;
        true
    }

    /// Apply a failed detail request. Returns false for stale tickets.
    pub fn detail_failed(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            debug!("Ignoring stale detail failure {:?}", ticket);
            return false;
        }
        self.rows.clear();
        self.detail = DetailPhase::NoData;
        true
    }

    /// Show avatars fetched for `ticket`, combined according to `style`.
    pub fn avatars_loaded(
        &mut self,
        ticket: RequestTicket,
        urls: Vec<String>,
        style: AvatarStyle,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!("Ignoring stale avatars {:?}", ticket);
            return false;
        }
        style.apply(&mut self.avatars, urls);
        true
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            loading: self.selector == SelectorPhase::Loading
                || self.detail == DetailPhase::Loading,
            dropdown: self.selector == SelectorPhase::Ready,
            chart: self.detail == DetailPhase::Loaded,
            no_data: self.detail == DetailPhase::NoData,
            avatars: !self.avatars.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pa_utils::intervals::parse_interval;

    fn ready_state() -> DashboardState {
        let mut state = DashboardState::new();
        state.entities_loaded(vec![
            SelectableEntity {
                id: "10".to_string(),
                label: "User 10".to_string(),
            },
            SelectableEntity {
                id: "11".to_string(),
                label: "User 11".to_string(),
            },
        ]);
        state
    }

    fn row(label: &str) -> ChartRow {
        ChartRow {
            label: label.to_string(),
            start: parse_interval(3600),
            end: parse_interval(7200),
        }
    }

    #[test]
    fn test_initial_visibility() {
        let vis = DashboardState::new().visibility();
        assert!(vis.loading);
        assert!(!vis.dropdown);
        assert!(!vis.chart);
        assert!(!vis.no_data);
    }

    #[test]
    fn test_entities_loaded_reveals_dropdown() {
        let state = ready_state();
        let vis = state.visibility();
        assert!(vis.dropdown);
        assert!(!vis.loading);
        assert_eq!(state.entities().len(), 2);
    }

    #[test]
    fn test_selected_label() {
        let mut state = ready_state();
        assert_eq!(state.selected_label(), None);
        state.select("11");
        assert_eq!(state.selected_label(), Some("User 11"));
        state.select("99");
        assert_eq!(state.selected_label(), None);
        state.select("");
        assert_eq!(state.selected_label(), None);
    }

    #[test]
    fn test_select_then_success() {
        let mut state = ready_state();
        let ticket = state.select("10").unwrap();
        let vis = state.visibility();
        assert!(vis.loading);
        assert!(!vis.chart);

        assert!(state.detail_loaded(ticket, vec![row("Mon"), row("Tue")]));
        let vis = state.visibility();
        assert!(vis.chart);
        assert!(!vis.loading);
        assert_eq!(state.rows().len(), 2);
        assert_eq!(state.selected(), Some("10"));
    }

    #[test]
    fn test_failure_shows_no_data_from_any_state() {
        let mut state = ready_state();
        let first = state.select("10").unwrap();
        state.detail_loaded(first, vec![row("Mon")]);

        let second = state.select("11").unwrap();
        assert!(state.detail_failed(second));
        let vis = state.visibility();
        assert!(vis.no_data);
        assert!(!vis.loading);
        assert!(!vis.chart);
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_new_selection_hides_no_data() {
        let mut state = ready_state();
        let ticket = state.select("10").unwrap();
        state.detail_failed(ticket);
        state.select("11");
        assert!(!state.visibility().no_data);
    }

    #[test]
    fn test_same_selection_twice_issues_two_tickets() {
        let mut state = ready_state();
        let first = state.select("10").unwrap();
        let second = state.select("10").unwrap();
        assert_ne!(first, second);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = ready_state();
        let slow = state.select("10").unwrap();
        let fast = state.select("11").unwrap();

        assert!(state.detail_loaded(fast, vec![row("Wed")]));
        assert!(!state.detail_loaded(slow, vec![row("Mon"), row("Tue")]));
        assert!(!state.detail_failed(slow));
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.rows()[0].label, "Wed");
        assert!(state.visibility().chart);
    }

    #[test]
    fn test_empty_selection_cancels_pending() {
        let mut state = ready_state();
        let ticket = state.select("10").unwrap();
        assert!(state.select("").is_none());
        assert!(!state.visibility().loading);
        assert!(!state.detail_loaded(ticket, vec![row("Mon")]));
        assert_eq!(state.detail_phase(), DetailPhase::Idle);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_empty_selection_keeps_drawn_chart() {
        let mut state = ready_state();
        let ticket = state.select("10").unwrap();
        state.detail_loaded(ticket, vec![row("Mon")]);
        state.select("");
        assert!(state.visibility().chart);
    }

    #[test]
    fn test_avatars_follow_style() {
        let mut state = ready_state();
        let ticket = state.select("10").unwrap();
        state.avatars_loaded(ticket, vec!["a".to_string()], AvatarStyle::RANKING);
        state.avatars_loaded(ticket, vec!["b".to_string()], AvatarStyle::RANKING);
        assert_eq!(state.avatars(), ["a".to_string(), "b".to_string()]);
        assert!(state.visibility().avatars);

        let next = state.select("11").unwrap();
        assert!(state.avatars().is_empty());
        assert!(!state.avatars_loaded(ticket, vec!["c".to_string()], AvatarStyle::SINGLE_USER));
        state.avatars_loaded(next, vec!["d".to_string()], AvatarStyle::SINGLE_USER);
        assert_eq!(state.avatars(), ["d".to_string()]);
    }
}
