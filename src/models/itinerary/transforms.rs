use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::draft::ItineraryDraft;

/// Wire payload for `POST /api/itineraries`. Dates serialize as
/// `YYYY-MM-DD`; `duration_nights` is derived at assembly time and is not
/// user input.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateItinerary {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_nights: u32,
    pub accommodations: Vec<NewAccommodation>,
    pub transfers: Vec<NewTransfer>,
    pub activities: Vec<NewActivity>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewAccommodation {
    pub name: String,
    pub location: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewTransfer {
    pub from_location: String,
    pub to_location: String,
    pub transport_type: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewActivity {
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub duration_hours: f64,
    pub description: String,
}

impl ItineraryDraft {
    /// Assemble the creation payload from a draft that already passed
    /// `FormService::validate_for_submit`. Total nights is recomputed here
    /// as the sum over accommodations.
    pub fn to_create_payload(&self) -> CreateItinerary {
        let duration_nights = self.accommodations.iter().map(|acc| acc.nights()).sum();

        CreateItinerary {
            title: self.title.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            duration_nights,
            accommodations: self
                .accommodations
                .iter()
                .map(|acc| NewAccommodation {
                    name: acc.name.clone(),
                    location: acc.location.clone(),
                    check_in_date: acc.check_in_date(),
                    check_out_date: acc.check_out_date(),
                    nights: acc.nights(),
                })
                .collect(),
            transfers: self
                .transfers
                .iter()
                .map(|transfer| NewTransfer {
                    from_location: transfer.from_location.clone(),
                    to_location: transfer.to_location.clone(),
                    transport_type: transfer.transport_type.clone(),
                    date: transfer.date,
                })
                .collect(),
            activities: self
                .activities
                .iter()
                .map(|activity| NewActivity {
                    name: activity.name.clone(),
                    location: activity.location.clone(),
                    date: activity.date,
                    duration_hours: activity.duration_hours(),
                    description: activity.description.clone(),
                })
                .collect(),
        }
    }
}
