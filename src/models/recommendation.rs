use serde::{Deserialize, Serialize};

/// A scored itinerary suggestion for `GET /api/recommendations/{nights}`.
/// Score and highlights come from the recommendation service, never from
/// the client-side filter.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecommendedItinerary {
    pub id: i64,
    pub title: String,
    pub duration_nights: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub recommendation_score: f64,
    pub highlights: Vec<String>,
}
