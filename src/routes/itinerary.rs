use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::models::itinerary::base::ItinerarySummary;
use crate::models::itinerary::transforms::CreateItinerary;
use crate::services::{filter_service, schedule_service};
use crate::store::memory::MemoryStore;

const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub nights: Option<u32>,
}

/*
    /api/itineraries?limit=N&skip=M&search=S&nights=K
*/
pub async fn get_all(
    query: web::Query<ListQuery>,
    data: web::Data<Arc<MemoryStore>>,
) -> impl Responder {
    let store = data.into_inner();

    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let summaries: Vec<ItinerarySummary> = store
        .list(skip, limit)
        .iter()
        .map(ItinerarySummary::from)
        .collect();

    let filtered =
        filter_service::filter_summaries(&summaries, query.search.as_deref(), query.nights);

    HttpResponse::Ok().json(filtered)
}

/*
    /api/itineraries/{id}
*/
pub async fn get_by_id(path: web::Path<i64>, data: web::Data<Arc<MemoryStore>>) -> impl Responder {
    let store = data.into_inner();

    match store.get(path.into_inner()) {
        Some(itinerary) => HttpResponse::Ok().json(itinerary),
        None => HttpResponse::NotFound().json(json!({ "detail": "Itinerary not found" })),
    }
}

/*
    /api/itineraries/{id}/schedule (day-by-day view of one itinerary)
*/
pub async fn get_schedule(
    path: web::Path<i64>,
    data: web::Data<Arc<MemoryStore>>,
) -> impl Responder {
    let store = data.into_inner();

    match store.get(path.into_inner()) {
        Some(itinerary) => {
            let days = schedule_service::build_schedule(&itinerary);
            HttpResponse::Ok().json(days)
        }
        None => HttpResponse::NotFound().json(json!({ "detail": "Itinerary not found" })),
    }
}

/*
    POST /api/itineraries (create from an assembled payload)
*/
pub async fn create(
    input: web::Json<CreateItinerary>,
    data: web::Data<Arc<MemoryStore>>,
) -> impl Responder {
    let store = data.into_inner();

    let created = store.insert(input.into_inner());
    println!(
        "Created itinerary {:?} ({} nights)",
        created.id, created.duration_nights
    );

    HttpResponse::Created().json(created)
}
