use chrono::NaiveDate;

use super::memory::MemoryStore;
use crate::models::itinerary::transforms::{
    CreateItinerary, NewAccommodation, NewActivity, NewTransfer,
};

/// Load the curated Thailand itineraries the service ships with. Idempotent
/// only in the sense that it is called once at startup on an empty store.
pub fn seed_store(store: &MemoryStore) {
    for itinerary in curated_itineraries() {
        store.insert(itinerary);
    }

    println!("Store seeded with {} itineraries", store.count());
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn accommodation(
    name: &str,
    location: &str,
    check_in: NaiveDate,
    nights: u32,
) -> NewAccommodation {
    NewAccommodation {
        name: name.to_string(),
        location: location.to_string(),
        check_in_date: check_in,
        check_out_date: check_in + chrono::Duration::days(nights as i64),
        nights,
    }
}

fn transfer(from: &str, to: &str, transport_type: &str, on: NaiveDate) -> NewTransfer {
    NewTransfer {
        from_location: from.to_string(),
        to_location: to.to_string(),
        transport_type: transport_type.to_string(),
        date: on,
    }
}

fn activity(name: &str, location: &str, on: NaiveDate, hours: f64, description: &str) -> NewActivity {
    NewActivity {
        name: name.to_string(),
        location: location.to_string(),
        date: on,
        duration_hours: hours,
        description: description.to_string(),
    }
}

fn curated_itineraries() -> Vec<CreateItinerary> {
    vec![
        CreateItinerary {
            title: "Phuket Beach Getaway".to_string(),
            description: Some("A short relaxing beach vacation in Phuket".to_string()),
            duration_nights: 3,
            accommodations: vec![accommodation(
                "Patong Beach Hotel",
                "Patong Beach, Phuket",
                date(2023, 6, 1),
                3,
            )],
            transfers: vec![
                transfer(
                    "Phuket International Airport",
                    "Patong Beach Hotel",
                    "Private Car",
                    date(2023, 6, 1),
                ),
                transfer(
                    "Patong Beach Hotel",
                    "Phuket International Airport",
                    "Private Car",
                    date(2023, 6, 4),
                ),
            ],
            activities: vec![
                activity(
                    "Phi Phi Islands Tour",
                    "Phi Phi Islands",
                    date(2023, 6, 2),
                    8.0,
                    "Full day tour of the stunning Phi Phi Islands with snorkeling and beach time",
                ),
                activity(
                    "Phuket Old Town Walking Tour",
                    "Phuket Old Town",
                    date(2023, 6, 3),
                    4.0,
                    "Explore the charming streets and Sino-Portuguese architecture of Phuket Old Town",
                ),
            ],
        },
        CreateItinerary {
            title: "Phuket Explorer".to_string(),
            description: Some(
                "Comprehensive exploration of Phuket and surrounding islands".to_string(),
            ),
            duration_nights: 5,
            accommodations: vec![accommodation(
                "Kata Beach Resort",
                "Kata Beach, Phuket",
                date(2023, 7, 10),
                5,
            )],
            transfers: vec![
                transfer(
                    "Phuket International Airport",
                    "Kata Beach Resort",
                    "Private Car",
                    date(2023, 7, 10),
                ),
                transfer(
                    "Kata Beach Resort",
                    "Phuket International Airport",
                    "Private Car",
                    date(2023, 7, 15),
                ),
            ],
            activities: vec![
                activity(
                    "Phi Phi Islands Tour",
                    "Phi Phi Islands",
                    date(2023, 7, 11),
                    8.0,
                    "Full day tour of the stunning Phi Phi Islands with snorkeling and beach time",
                ),
                activity(
                    "Phang Nga Bay Tour",
                    "Phang Nga Bay",
                    date(2023, 7, 12),
                    8.0,
                    "Explore the limestone karsts and caves of Phang Nga Bay, including James Bond Island",
                ),
                activity(
                    "Phuket Old Town Walking Tour",
                    "Phuket Old Town",
                    date(2023, 7, 13),
                    4.0,
                    "Explore the charming streets and Sino-Portuguese architecture of Phuket Old Town",
                ),
                activity(
                    "Thai Cooking Class",
                    "Kata Beach",
                    date(2023, 7, 14),
                    4.0,
                    "Learn to cook authentic Thai dishes with local ingredients",
                ),
            ],
        },
        CreateItinerary {
            title: "Krabi Beach Retreat".to_string(),
            description: Some(
                "Relaxing beach vacation in the stunning Krabi province".to_string(),
            ),
            duration_nights: 4,
            accommodations: vec![accommodation(
                "Railay Beach Resort",
                "Railay Beach, Krabi",
                date(2023, 8, 5),
                4,
            )],
            transfers: vec![
                transfer(
                    "Krabi Airport",
                    "Ao Nang Pier",
                    "Private Car",
                    date(2023, 8, 5),
                ),
                transfer(
                    "Ao Nang Pier",
                    "Railay Beach",
                    "Longtail Boat",
                    date(2023, 8, 5),
                ),
                transfer(
                    "Railay Beach",
                    "Ao Nang Pier",
                    "Longtail Boat",
                    date(2023, 8, 9),
                ),
                transfer(
                    "Ao Nang Pier",
                    "Krabi Airport",
                    "Private Car",
                    date(2023, 8, 9),
                ),
            ],
            activities: vec![
                activity(
                    "Four Islands Tour",
                    "Krabi",
                    date(2023, 8, 6),
                    8.0,
                    "Visit four beautiful islands around Krabi with snorkeling opportunities",
                ),
                activity(
                    "Rock Climbing",
                    "Railay Beach",
                    date(2023, 8, 7),
                    4.0,
                    "Try rock climbing on Railay's world-famous limestone cliffs",
                ),
                activity(
                    "Hong Island Tour",
                    "Hong Island",
                    date(2023, 8, 8),
                    6.0,
                    "Visit the beautiful Hong Island with its lagoon and pristine beaches",
                ),
            ],
        },
        CreateItinerary {
            title: "Phuket & Krabi Combo".to_string(),
            description: Some(
                "Experience the best of both Phuket and Krabi in one trip".to_string(),
            ),
            duration_nights: 7,
            accommodations: vec![
                accommodation(
                    "Patong Beach Resort",
                    "Patong Beach, Phuket",
                    date(2023, 9, 1),
                    3,
                ),
                accommodation(
                    "Railay Bay Resort",
                    "Railay Beach, Krabi",
                    date(2023, 9, 4),
                    4,
                ),
            ],
            transfers: vec![
                transfer(
                    "Phuket International Airport",
                    "Patong Beach Resort",
                    "Private Car",
                    date(2023, 9, 1),
                ),
                transfer(
                    "Patong Beach Resort",
                    "Railay Bay Resort",
                    "Private Car + Longtail Boat",
                    date(2023, 9, 4),
                ),
                transfer(
                    "Railay Bay Resort",
                    "Krabi Airport",
                    "Longtail Boat + Private Car",
                    date(2023, 9, 8),
                ),
            ],
            activities: vec![
                activity(
                    "Phi Phi Islands Tour",
                    "Phi Phi Islands",
                    date(2023, 9, 2),
                    8.0,
                    "Full day tour of the stunning Phi Phi Islands with snorkeling and beach time",
                ),
                activity(
                    "Phuket Old Town Walking Tour",
                    "Phuket Old Town",
                    date(2023, 9, 3),
                    4.0,
                    "Explore the charming streets and Sino-Portuguese architecture of Phuket Old Town",
                ),
                activity(
                    "Four Islands Tour",
                    "Krabi",
                    date(2023, 9, 5),
                    8.0,
                    "Visit four beautiful islands around Krabi with snorkeling opportunities",
                ),
                activity(
                    "Rock Climbing",
                    "Railay Beach",
                    date(2023, 9, 6),
                    4.0,
                    "Try rock climbing on Railay's world-famous limestone cliffs",
                ),
                activity(
                    "Hong Island Tour",
                    "Hong Island",
                    date(2023, 9, 7),
                    6.0,
                    "Visit the beautiful Hong Island with its lagoon and pristine beaches",
                ),
            ],
        },
        CreateItinerary {
            title: "Phuket Quick Escape".to_string(),
            description: Some("A quick weekend getaway to Phuket".to_string()),
            duration_nights: 2,
            accommodations: vec![accommodation(
                "Karon Beach Hotel",
                "Karon Beach, Phuket",
                date(2023, 10, 1),
                2,
            )],
            transfers: vec![
                transfer(
                    "Phuket International Airport",
                    "Karon Beach Hotel",
                    "Private Car",
                    date(2023, 10, 1),
                ),
                transfer(
                    "Karon Beach Hotel",
                    "Phuket International Airport",
                    "Private Car",
                    date(2023, 10, 3),
                ),
            ],
            activities: vec![activity(
                "Phuket City Tour",
                "Phuket",
                date(2023, 10, 2),
                6.0,
                "Explore the highlights of Phuket including Big Buddha, Chalong Temple, and Old Town",
            )],
        },
        CreateItinerary {
            title: "Thailand Explorer".to_string(),
            description: Some(
                "Comprehensive exploration of Phuket, Krabi and Phi Phi Islands".to_string(),
            ),
            duration_nights: 8,
            accommodations: vec![
                accommodation(
                    "Patong Beach Resort",
                    "Patong Beach, Phuket",
                    date(2023, 11, 1),
                    3,
                ),
                accommodation(
                    "Phi Phi Island Village",
                    "Phi Phi Island",
                    date(2023, 11, 4),
                    2,
                ),
                accommodation(
                    "Railay Bay Resort",
                    "Railay Beach, Krabi",
                    date(2023, 11, 6),
                    3,
                ),
            ],
            transfers: vec![
                transfer(
                    "Phuket International Airport",
                    "Patong Beach Resort",
                    "Private Car",
                    date(2023, 11, 1),
                ),
                transfer(
                    "Patong Beach Resort",
                    "Phi Phi Island Village",
                    "Ferry",
                    date(2023, 11, 4),
                ),
                transfer(
                    "Phi Phi Island Village",
                    "Railay Bay Resort",
                    "Ferry + Longtail Boat",
                    date(2023, 11, 6),
                ),
                transfer(
                    "Railay Bay Resort",
                    "Krabi Airport",
                    "Longtail Boat + Private Car",
                    date(2023, 11, 9),
                ),
            ],
            activities: vec![
                activity(
                    "Phang Nga Bay Tour",
                    "Phang Nga Bay",
                    date(2023, 11, 2),
                    8.0,
                    "Explore the limestone karsts and caves of Phang Nga Bay, including James Bond Island",
                ),
                activity(
                    "Phuket Old Town Walking Tour",
                    "Phuket Old Town",
                    date(2023, 11, 3),
                    4.0,
                    "Explore the charming streets and Sino-Portuguese architecture of Phuket Old Town",
                ),
                activity(
                    "Phi Phi Islands Snorkeling",
                    "Phi Phi Islands",
                    date(2023, 11, 5),
                    6.0,
                    "Snorkeling tour around the beautiful Phi Phi Islands",
                ),
                activity(
                    "Four Islands Tour",
                    "Krabi",
                    date(2023, 11, 7),
                    8.0,
                    "Visit four beautiful islands around Krabi with snorkeling opportunities",
                ),
                activity(
                    "Rock Climbing",
                    "Railay Beach",
                    date(2023, 11, 8),
                    4.0,
                    "Try rock climbing on Railay's world-famous limestone cliffs",
                ),
            ],
        },
    ]
}
