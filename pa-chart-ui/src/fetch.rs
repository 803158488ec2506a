//! `window.fetch` wrappers for the presence API.
//!
//! Paths are relative to the page origin, so the apps talk to whichever
//! server delivered them.

use pa_core::avatar::parse_avatar_url;
use pa_core::endpoint::Endpoint;
use pa_core::entity::{EntityKind, SelectableEntity};
use pa_core::presence::{decode_monthly_means, decode_weekday_intervals, MonthlyMean, WeekdayInterval};
use pa_utils::error::FetchError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `GET` an endpoint and return the body of a 2xx response.
pub async fn get_text(endpoint: &Endpoint) -> Result<String, FetchError> {
    let path = endpoint.path_with(encode_segment);
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(&path))
        .await
        .map_err(|e| FetchError::Network(js_error(&e)))?
        .dyn_into()
        .map_err(|_| FetchError::Decode(format!("{} did not return a Response", path)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Decode(js_error(&e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Network(js_error(&e)))?
        .as_string()
        .ok_or_else(|| FetchError::Decode(format!("{} body is not text", path)))
}

/// Entities for the dropdown, from `/api/v1/users` or `/api/v1/months`.
pub async fn load_entities(kind: EntityKind) -> Result<Vec<SelectableEntity>, FetchError> {
    let endpoint = match kind {
        EntityKind::User => Endpoint::Users,
        EntityKind::Month => Endpoint::Months,
    };
    let body = get_text(&endpoint).await?;
    kind.decode_entities(&body)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_weekday_intervals(user_id: &str) -> Result<Vec<WeekdayInterval>, FetchError> {
    let body = get_text(&Endpoint::PresenceStartEnd(user_id.to_string())).await?;
    decode_weekday_intervals(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_monthly_means(month: &str) -> Result<Vec<MonthlyMean>, FetchError> {
    let body = get_text(&Endpoint::Top5Monthly(month.to_string())).await?;
    decode_monthly_means(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_user_avatar(user_id: &str) -> Result<String, FetchError> {
    let body = get_text(&Endpoint::UserImage(user_id.to_string())).await?;
    parse_avatar_url(&body)
        .ok_or_else(|| FetchError::Decode(format!("no image url for user {}", user_id)))
}
