use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Accommodation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Transfer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub from_location: String,
    pub to_location: String,
    pub transport_type: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub duration_hours: f64,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub duration_nights: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub accommodations: Vec<Accommodation>,
    pub transfers: Vec<Transfer>,
    pub activities: Vec<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Listing/filtering shape returned by `GET /api/itineraries`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItinerarySummary {
    pub id: i64,
    pub title: String,
    pub duration_nights: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Itinerary> for ItinerarySummary {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id.unwrap_or_default(),
            title: itinerary.title.clone(),
            duration_nights: itinerary.duration_nights,
            description: itinerary.description.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Boat,
    Air,
}

impl TransportMode {
    /// Classify a free-text transport label. The match is case-sensitive
    /// substring matching; anything unrecognized is treated as a flight.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Car") {
            TransportMode::Car
        } else if label.contains("Boat") || label.contains("Ferry") {
            TransportMode::Boat
        } else {
            TransportMode::Air
        }
    }
}

impl Transfer {
    pub fn transport_mode(&self) -> TransportMode {
        TransportMode::from_label(&self.transport_type)
    }
}
