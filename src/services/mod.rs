pub mod filter_service;
pub mod form_service;
pub mod recommendation_service;
pub mod schedule_service;
