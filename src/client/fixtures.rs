use chrono::NaiveDate;

use crate::models::itinerary::base::{
    Accommodation, Activity, Itinerary, ItinerarySummary, Transfer,
};
use crate::models::itinerary::transforms::CreateItinerary;
use crate::models::recommendation::RecommendedItinerary;

// Id handed to locally "created" itineraries, one past the sample list.
const CREATED_ID: i64 = 5;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

/// The four-item sample list shown when the live list is unreachable.
pub fn sample_itineraries(limit: Option<usize>) -> Vec<ItinerarySummary> {
    let samples = vec![
        ItinerarySummary {
            id: 1,
            title: "Phuket Adventure".to_string(),
            duration_nights: 4,
            description: Some("Explore the beautiful beaches and culture of Phuket".to_string()),
        },
        ItinerarySummary {
            id: 2,
            title: "Krabi Relaxation".to_string(),
            duration_nights: 5,
            description: Some(
                "Relaxing beach vacation in the stunning Krabi province".to_string(),
            ),
        },
        ItinerarySummary {
            id: 3,
            title: "Thailand Explorer".to_string(),
            duration_nights: 7,
            description: Some(
                "Comprehensive exploration of Phuket, Krabi and Phi Phi Islands".to_string(),
            ),
        },
        ItinerarySummary {
            id: 4,
            title: "Phuket & Krabi Combo".to_string(),
            duration_nights: 6,
            description: Some("Experience the best of both Phuket and Krabi".to_string()),
        },
    ];

    match limit {
        Some(limit) => samples.into_iter().take(limit).collect(),
        None => samples,
    }
}

/// The fixed itinerary substituted when the detail fetch fails for the
/// known placeholder id.
pub fn placeholder_itinerary() -> Itinerary {
    Itinerary {
        id: Some(super::PLACEHOLDER_ITINERARY_ID),
        title: "Phuket Adventure".to_string(),
        duration_nights: 4,
        description: Some("Explore the beautiful beaches and culture of Phuket".to_string()),
        accommodations: vec![Accommodation {
            id: Some(1),
            name: "Beachfront Resort".to_string(),
            location: "Patong Beach".to_string(),
            check_in_date: date(2023, 6, 1),
            check_out_date: date(2023, 6, 5),
            nights: 4,
        }],
        transfers: vec![
            Transfer {
                id: Some(1),
                from_location: "Phuket Airport".to_string(),
                to_location: "Patong Beach".to_string(),
                transport_type: "Private Car".to_string(),
                date: date(2023, 6, 1),
            },
            Transfer {
                id: Some(2),
                from_location: "Patong Beach".to_string(),
                to_location: "Phuket Airport".to_string(),
                transport_type: "Private Car".to_string(),
                date: date(2023, 6, 5),
            },
        ],
        activities: vec![
            Activity {
                id: Some(1),
                name: "Phi Phi Islands Tour".to_string(),
                location: "Phi Phi Islands".to_string(),
                date: date(2023, 6, 2),
                duration_hours: 8.0,
                description: "Full day tour of the stunning Phi Phi Islands".to_string(),
            },
            Activity {
                id: Some(2),
                name: "Old Town Walking Tour".to_string(),
                location: "Phuket Old Town".to_string(),
                date: date(2023, 6, 3),
                duration_hours: 4.0,
                description: "Explore the charming streets and architecture of Phuket Old Town"
                    .to_string(),
            },
            Activity {
                id: Some(3),
                name: "Phang Nga Bay Tour".to_string(),
                location: "Phang Nga Bay".to_string(),
                date: date(2023, 6, 4),
                duration_hours: 8.0,
                description:
                    "Visit the famous James Bond Island and explore the stunning limestone karsts"
                        .to_string(),
            },
        ],
        created_at: None,
    }
}

/// Local stand-in for a successful creation: echoes the payload back under
/// a fixed id so navigation to the detail view has somewhere to go.
pub fn created_itinerary(payload: &CreateItinerary) -> Itinerary {
    Itinerary {
        id: Some(CREATED_ID),
        title: payload.title.clone(),
        duration_nights: payload.duration_nights,
        description: payload.description.clone(),
        accommodations: payload
            .accommodations
            .iter()
            .map(|acc| Accommodation {
                id: None,
                name: acc.name.clone(),
                location: acc.location.clone(),
                check_in_date: acc.check_in_date,
                check_out_date: acc.check_out_date,
                nights: acc.nights,
            })
            .collect(),
        transfers: payload
            .transfers
            .iter()
            .map(|transfer| Transfer {
                id: None,
                from_location: transfer.from_location.clone(),
                to_location: transfer.to_location.clone(),
                transport_type: transfer.transport_type.clone(),
                date: transfer.date,
            })
            .collect(),
        activities: payload
            .activities
            .iter()
            .map(|activity| Activity {
                id: None,
                name: activity.name.clone(),
                location: activity.location.clone(),
                date: activity.date,
                duration_hours: activity.duration_hours,
                description: activity.description.clone(),
            })
            .collect(),
        created_at: None,
    }
}

/// The two-item sample served when recommendations are unreachable. Both
/// entries take the requested duration.
pub fn sample_recommendations(nights: u32) -> Vec<RecommendedItinerary> {
    vec![
        RecommendedItinerary {
            id: 1,
            title: "Phuket Adventure".to_string(),
            duration_nights: nights,
            description: Some("Explore the beautiful beaches and culture of Phuket".to_string()),
            recommendation_score: 0.95,
            highlights: vec![
                "Phi Phi Islands Tour".to_string(),
                "Patong Beach".to_string(),
                "Old Town Exploration".to_string(),
            ],
        },
        RecommendedItinerary {
            id: 2,
            title: "Krabi Relaxation".to_string(),
            duration_nights: nights,
            description: Some(
                "Relaxing beach vacation in the stunning Krabi province".to_string(),
            ),
            recommendation_score: 0.88,
            highlights: vec![
                "Railay Beach".to_string(),
                "Four Islands Tour".to_string(),
                "Hot Springs Visit".to_string(),
            ],
        },
    ]
}
