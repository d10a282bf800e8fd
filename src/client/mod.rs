pub mod api;
pub mod fixtures;

use thiserror::Error;

use crate::models::itinerary::base::{Itinerary, ItinerarySummary};
use crate::models::itinerary::transforms::CreateItinerary;
use crate::models::recommendation::RecommendedItinerary;

use api::ApiClient;

/// The one itinerary a failed detail fetch may be substituted with.
pub const PLACEHOLDER_ITINERARY_ID: i64 = 1;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Where itinerary data comes from. `Live` talks to a running API and
/// degrades to the fixture datasets on read failures; `Fixture` serves the
/// static datasets directly (previews, offline demos, tests).
pub enum DataSource {
    Live(ApiClient),
    Fixture,
}

impl DataSource {
    /// Live when `ITINERA_API_URL` is set, fixture otherwise.
    pub fn from_env() -> Self {
        match std::env::var("ITINERA_API_URL") {
            Ok(base_url) if !base_url.is_empty() => DataSource::Live(ApiClient::new(base_url)),
            _ => DataSource::Fixture,
        }
    }

    /// List itinerary summaries. Read failures never surface: the sample
    /// list stands in.
    pub async fn list_itineraries(&self, limit: Option<usize>) -> Vec<ItinerarySummary> {
        match self {
            DataSource::Live(client) => match client.list_itineraries(limit).await {
                Ok(items) => items,
                Err(err) => {
                    eprintln!("Itinerary list unavailable, serving samples: {}", err);
                    fixtures::sample_itineraries(limit)
                }
            },
            DataSource::Fixture => fixtures::sample_itineraries(limit),
        }
    }

    /// Fetch one itinerary with its nested records. On failure the fixed
    /// placeholder stands in, but only for the known placeholder id; any
    /// other id propagates the error.
    pub async fn fetch_itinerary(&self, id: i64) -> Result<Itinerary, ClientError> {
        match self {
            DataSource::Live(client) => match client.fetch_itinerary(id).await {
                Ok(itinerary) => Ok(itinerary),
                Err(err) if id == PLACEHOLDER_ITINERARY_ID => {
                    eprintln!("Itinerary {} unavailable, serving placeholder: {}", id, err);
                    Ok(fixtures::placeholder_itinerary())
                }
                Err(err) => Err(err),
            },
            DataSource::Fixture if id == PLACEHOLDER_ITINERARY_ID => {
                Ok(fixtures::placeholder_itinerary())
            }
            DataSource::Fixture => Err(ClientError::Status {
                status: 404,
                detail: "Itinerary not found".to_string(),
            }),
        }
    }

    /// Submit a new itinerary. Unlike reads, a failed write surfaces to the
    /// caller; nothing pretends the creation happened.
    pub async fn create_itinerary(
        &self,
        payload: &CreateItinerary,
    ) -> Result<Itinerary, ClientError> {
        match self {
            DataSource::Live(client) => client.create_itinerary(payload).await,
            DataSource::Fixture => Ok(fixtures::created_itinerary(payload)),
        }
    }

    /// Duration-based recommendations, degrading to the two-item sample.
    pub async fn recommendations(&self, nights: u32) -> Vec<RecommendedItinerary> {
        match self {
            DataSource::Live(client) => match client.recommendations(nights).await {
                Ok(items) => items,
                Err(err) => {
                    eprintln!("Recommendations unavailable, serving samples: {}", err);
                    fixtures::sample_recommendations(nights)
                }
            },
            DataSource::Fixture => fixtures::sample_recommendations(nights),
        }
    }
}
