pub mod base;
pub mod draft;
pub mod transforms;

pub use base::{Accommodation, Activity, Itinerary, ItinerarySummary, Transfer, TransportMode};
pub use draft::{AccommodationDraft, ActivityDraft, ItineraryDraft, TransferDraft};
pub use transforms::{CreateItinerary, NewAccommodation, NewActivity, NewTransfer};
