use crate::models::itinerary::base::ItinerarySummary;

/// Predicate filter over itinerary summaries: case-insensitive substring
/// match on title or description, exact match on duration. Both conditions
/// apply when both are given. Input order is preserved; there is no ranking.
pub fn filter_summaries(
    items: &[ItinerarySummary],
    search: Option<&str>,
    nights: Option<u32>,
) -> Vec<ItinerarySummary> {
    items
        .iter()
        .filter(|item| {
            let text_matches = match search {
                Some(term) if !term.is_empty() => {
                    let needle = term.to_lowercase();
                    item.title.to_lowercase().contains(&needle)
                        || item
                            .description
                            .as_deref()
                            .map(|desc| desc.to_lowercase().contains(&needle))
                            .unwrap_or(false)
                }
                _ => true,
            };

            let duration_matches = match nights {
                Some(n) => item.duration_nights == n,
                None => true,
            };

            text_matches && duration_matches
        })
        .cloned()
        .collect()
}
