//! Native HTTP client for the presence API.

use crate::avatar::parse_avatar_url;
use crate::endpoint::Endpoint;
use crate::entity::{EntityKind, SelectableEntity};
use crate::presence::{
    decode_monthly_means, decode_weekday_intervals, decode_weekday_totals, MonthlyMean,
    WeekdayInterval, WeekdayTotal,
};
use log::{info, warn};
use pa_utils::error::FetchError;
use reqwest::{Client, Url};
use std::time::Duration;

/// Read-only client for one presence analyzer server.
#[derive(Debug, Clone)]
pub struct PresenceClient {
    client: Client,
    base_url: Url,
}

impl PresenceClient {
    /// Build a client for `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::Network(format!("invalid base url {}: {}", base_url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Full URL of an endpoint, parameter percent-encoded.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("cannot be a base url: {}", self.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    /// `GET` an endpoint and return the body of a 2xx response.
    pub async fn get_text(&self, endpoint: &Endpoint) -> Result<String, FetchError> {
        let url = self.url_for(endpoint)?;
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("Request failed for {}: {}", url, e);
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for {}: {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        info!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }

    pub async fn users(&self) -> Result<Vec<SelectableEntity>, FetchError> {
        let body = self.get_text(&Endpoint::Users).await?;
        EntityKind::User
            .decode_entities(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn months(&self) -> Result<Vec<SelectableEntity>, FetchError> {
        let body = self.get_text(&Endpoint::Months).await?;
        EntityKind::Month
            .decode_entities(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn presence_start_end(&self, user_id: &str) -> Result<Vec<WeekdayInterval>, FetchError> {
        let body = self
            .get_text(&Endpoint::PresenceStartEnd(user_id.to_string()))
            .await?;
        decode_weekday_intervals(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn top5_monthly(&self, month: &str) -> Result<Vec<MonthlyMean>, FetchError> {
        let body = self
            .get_text(&Endpoint::Top5Monthly(month.to_string()))
            .await?;
        decode_monthly_means(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn user_image(&self, user_id: &str) -> Result<String, FetchError> {
        let body = self
            .get_text(&Endpoint::UserImage(user_id.to_string()))
            .await?;
        parse_avatar_url(&body)
            .ok_or_else(|| FetchError::Decode(format!("no image url for user {}", user_id)))
    }

    pub async fn mean_time_weekday(&self, user_id: &str) -> Result<Vec<WeekdayTotal>, FetchError> {
        let body = self
            .get_text(&Endpoint::MeanTimeWeekday(user_id.to_string()))
            .await?;
        decode_weekday_totals(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn presence_weekday(&self, user_id: &str) -> Result<Vec<WeekdayTotal>, FetchError> {
        let body = self
            .get_text(&Endpoint::PresenceWeekday(user_id.to_string()))
            .await?;
        decode_weekday_totals(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PresenceClient {
        PresenceClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_url_for() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.url_for(&Endpoint::Users).unwrap().as_str(),
            "http://localhost:5000/api/v1/users"
        );
        assert_eq!(
            c.url_for(&Endpoint::Top5Monthly("2013 September".to_string()))
                .unwrap()
                .as_str(),
            "http://localhost:5000/api/v1/top5monthly/2013%20September"
        );
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let c = client("http://intranet.example/presence/");
        assert_eq!(
            c.url_for(&Endpoint::UserImage("10".to_string()))
                .unwrap()
                .as_str(),
            "http://intranet.example/presence/api/v1/user_image/10"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(PresenceClient::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let c = client("http://127.0.0.1:9");
        match c.users().await {
            Err(FetchError::Network(_)) => {}
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
