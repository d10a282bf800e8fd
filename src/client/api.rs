use serde::de::DeserializeOwned;

use super::ClientError;
use crate::models::itinerary::base::{Itinerary, ItinerarySummary};
use crate::models::itinerary::transforms::CreateItinerary;
use crate::models::recommendation::RecommendedItinerary;

/// Thin HTTP client for the itinerary API. Every method maps one endpoint;
/// non-2xx responses become `ClientError::Status` carrying the body's
/// `detail` when the server sent one.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_itineraries(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<ItinerarySummary>, ClientError> {
        let url = match limit {
            Some(limit) => format!("{}/api/itineraries?limit={}", self.base_url, limit),
            None => format!("{}/api/itineraries", self.base_url),
        };

        let response = self.http.get(&url).send().await?;
        parse_response(response).await
    }

    pub async fn fetch_itinerary(&self, id: i64) -> Result<Itinerary, ClientError> {
        let url = format!("{}/api/itineraries/{}", self.base_url, id);

        let response = self.http.get(&url).send().await?;
        parse_response(response).await
    }

    pub async fn create_itinerary(
        &self,
        payload: &CreateItinerary,
    ) -> Result<Itinerary, ClientError> {
        let url = format!("{}/api/itineraries", self.base_url);

        let response = self.http.post(&url).json(payload).send().await?;
        parse_response(response).await
    }

    pub async fn recommendations(
        &self,
        nights: u32,
    ) -> Result<Vec<RecommendedItinerary>, ClientError> {
        let url = format!("{}/api/recommendations/{}", self.base_url, nights);

        let response = self.http.get(&url).send().await?;
        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(|detail| detail.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| status.to_string());

    Err(ClientError::Status {
        status: status.as_u16(),
        detail,
    })
}
