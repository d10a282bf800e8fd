use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

use crate::services::recommendation_service::{self, MAX_NIGHTS, MIN_NIGHTS};
use crate::store::memory::MemoryStore;

/*
    /api/recommendations/{nights}
*/
pub async fn get_by_duration(
    path: web::Path<u32>,
    data: web::Data<Arc<MemoryStore>>,
) -> impl Responder {
    let store = data.into_inner();
    let nights = path.into_inner();

    if !(MIN_NIGHTS..=MAX_NIGHTS).contains(&nights) {
        return HttpResponse::BadRequest()
            .json(json!({ "detail": "Duration must be between 2 and 8 nights" }));
    }

    let recommended = recommendation_service::recommend(&store, nights);
    HttpResponse::Ok().json(recommended)
}
