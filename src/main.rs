use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{error, middleware::Logger, web, App, HttpResponse, HttpServer};
use env_logger::Env;

use itinera_api::routes;
use itinera_api::store::{memory::MemoryStore, seed};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let store = Arc::new(MemoryStore::new());
    seed::seed_store(&store);

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(store.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let detail = err.to_string();
                error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(serde_json::json!({ "detail": detail })),
                )
                .into()
            }))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/itineraries")
                            .service(
                                web::resource("")
                                    .route(web::get().to(routes::itinerary::get_all))
                                    .route(web::post().to(routes::itinerary::create)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(routes::itinerary::get_by_id)),
                            )
                            .service(
                                web::resource("/{id}/schedule")
                                    .route(web::get().to(routes::itinerary::get_schedule)),
                            ),
                    )
                    .route(
                        "/recommendations/{nights}",
                        web::get().to(routes::recommendation::get_by_duration),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
