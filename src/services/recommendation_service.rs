use rand::Rng;

use crate::models::itinerary::base::Itinerary;
use crate::models::recommendation::RecommendedItinerary;
use crate::store::memory::MemoryStore;

pub const MIN_NIGHTS: u32 = 2;
pub const MAX_NIGHTS: u32 = 8;
const MAX_HIGHLIGHTS: usize = 3;

/// Recommend itineraries for a stay of `nights`. Exact duration matches are
/// preferred; when there are none the search widens to one night either
/// side. Results are sorted by score, best first.
pub fn recommend(store: &MemoryStore, nights: u32) -> Vec<RecommendedItinerary> {
    let mut matches = store.with_duration(nights);
    if matches.is_empty() {
        matches = store.with_duration_between(nights.saturating_sub(1), nights + 1);
    }

    let mut recommended: Vec<RecommendedItinerary> =
        matches.iter().map(score_itinerary).collect();

    recommended.sort_by(|a, b| {
        b.recommendation_score
            .partial_cmp(&a.recommendation_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    recommended
}

fn score_itinerary(itinerary: &Itinerary) -> RecommendedItinerary {
    // Placeholder scoring until real signals exist, like the original
    // service: uniform in [0.70, 0.98), two decimals.
    let score = rand::thread_rng().gen_range(0.70..0.98);
    let score = (score * 100.0_f64).round() / 100.0;

    let highlights = itinerary
        .activities
        .iter()
        .take(MAX_HIGHLIGHTS)
        .map(|activity| activity.name.clone())
        .collect();

    RecommendedItinerary {
        id: itinerary.id.unwrap_or_default(),
        title: itinerary.title.clone(),
        duration_nights: itinerary.duration_nights,
        description: itinerary.description.clone(),
        recommendation_score: score,
        highlights,
    }
}
