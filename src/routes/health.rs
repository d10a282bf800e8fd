use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::store::memory::MemoryStore;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(data: web::Data<Arc<MemoryStore>>) -> impl Responder {
    let store = data.into_inner();

    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let store_result = check_store(&store);
    health
        .services
        .insert("store".to_string(), store_result.clone());

    if store_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_store(store: &MemoryStore) -> ServiceStatus {
    let count = store.count();

    if count == 0 {
        // An empty store means seeding never ran; reads will all 404
        ServiceStatus {
            status: "degraded".to_string(),
            details: Some("itinerary store is empty".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} itineraries loaded", count)),
        }
    }
}
