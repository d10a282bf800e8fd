use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use crate::models::itinerary::base::{Accommodation, Activity, Itinerary, Transfer};
use crate::models::itinerary::transforms::CreateItinerary;

/// Process-local itinerary store. Ids are assigned per entity kind the way
/// the original autoincrement columns did; locks are held only for the
/// duration of a copy in or out.
pub struct MemoryStore {
    itineraries: RwLock<Vec<Itinerary>>,
    next_itinerary_id: AtomicI64,
    next_accommodation_id: AtomicI64,
    next_transfer_id: AtomicI64,
    next_activity_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            itineraries: RwLock::new(Vec::new()),
            next_itinerary_id: AtomicI64::new(1),
            next_accommodation_id: AtomicI64::new(1),
            next_transfer_id: AtomicI64::new(1),
            next_activity_id: AtomicI64::new(1),
        }
    }

    /// Persist a creation payload, assigning ids to the itinerary and every
    /// nested record and stamping `created_at`.
    pub fn insert(&self, payload: CreateItinerary) -> Itinerary {
        let itinerary = Itinerary {
            id: Some(self.next_itinerary_id.fetch_add(1, Ordering::SeqCst)),
            title: payload.title,
            duration_nights: payload.duration_nights,
            description: payload.description,
            accommodations: payload
                .accommodations
                .into_iter()
                .map(|acc| Accommodation {
                    id: Some(self.next_accommodation_id.fetch_add(1, Ordering::SeqCst)),
                    name: acc.name,
                    location: acc.location,
                    check_in_date: acc.check_in_date,
                    check_out_date: acc.check_out_date,
                    nights: acc.nights,
                })
                .collect(),
            transfers: payload
                .transfers
                .into_iter()
                .map(|transfer| Transfer {
                    id: Some(self.next_transfer_id.fetch_add(1, Ordering::SeqCst)),
                    from_location: transfer.from_location,
                    to_location: transfer.to_location,
                    transport_type: transfer.transport_type,
                    date: transfer.date,
                })
                .collect(),
            activities: payload
                .activities
                .into_iter()
                .map(|activity| Activity {
                    id: Some(self.next_activity_id.fetch_add(1, Ordering::SeqCst)),
                    name: activity.name,
                    location: activity.location,
                    date: activity.date,
                    duration_hours: activity.duration_hours,
                    description: activity.description,
                })
                .collect(),
            created_at: Some(Utc::now()),
        };

        let mut itineraries = self.itineraries.write().expect("itinerary store poisoned");
        itineraries.push(itinerary.clone());

        itinerary
    }

    pub fn list(&self, skip: usize, limit: usize) -> Vec<Itinerary> {
        let itineraries = self.itineraries.read().expect("itinerary store poisoned");
        itineraries.iter().skip(skip).take(limit).cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Itinerary> {
        let itineraries = self.itineraries.read().expect("itinerary store poisoned");
        itineraries
            .iter()
            .find(|itinerary| itinerary.id == Some(id))
            .cloned()
    }

    pub fn with_duration(&self, nights: u32) -> Vec<Itinerary> {
        let itineraries = self.itineraries.read().expect("itinerary store poisoned");
        itineraries
            .iter()
            .filter(|itinerary| itinerary.duration_nights == nights)
            .cloned()
            .collect()
    }

    pub fn with_duration_between(&self, min: u32, max: u32) -> Vec<Itinerary> {
        let itineraries = self.itineraries.read().expect("itinerary store poisoned");
        itineraries
            .iter()
            .filter(|itinerary| (min..=max).contains(&itinerary.duration_nights))
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.itineraries.read().expect("itinerary store poisoned").len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
