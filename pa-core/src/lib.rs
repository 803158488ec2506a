//! Core types for the presence analyzer dashboard.
//!
//! - `entity`: dropdown entities (users, months)
//! - `presence`: presence records as returned by the API
//! - `chart`: normalized timeline rows
//! - `avatar`: avatar URL decoding and display style
//! - `endpoint`: the REST endpoint catalogue
//! - `dashboard`: page state machine shared by the chart apps
//! - `api`: native HTTP client (feature `api`)

pub mod avatar;
pub mod chart;
pub mod dashboard;
pub mod endpoint;
pub mod entity;
pub mod presence;

#[cfg(feature = "api")]
pub mod api;
