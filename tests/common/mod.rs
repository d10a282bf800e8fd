use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{error, middleware::Logger, web, App, HttpResponse};

use itinera_api::routes;
use itinera_api::store::{memory::MemoryStore, seed};

pub struct TestApp {
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        seed::seed_store(&store);

        Self { store }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.store.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let detail = err.to_string();
                error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(serde_json::json!({ "detail": detail })),
                )
                .into()
            }))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
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
    }
}
