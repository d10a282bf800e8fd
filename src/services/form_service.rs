use thiserror::Error;

use crate::models::itinerary::draft::{
    AccommodationDraft, ActivityDraft, ItineraryDraft, TransferDraft,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("itinerary title is required")]
    MissingTitle,
    #[error("at least one accommodation is required")]
    NoAccommodations,
}

/// Pure transitions over an `ItineraryDraft`. Each add validates the entry
/// and returns the next draft state; on error the previous state is
/// untouched in the caller's hands. There is no edit-in-place: entries are
/// removed by index and re-added.
pub struct FormService;

impl FormService {
    pub fn add_accommodation(
        mut draft: ItineraryDraft,
        accommodation: AccommodationDraft,
    ) -> Result<ItineraryDraft, ValidationError> {
        if accommodation.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if accommodation.location.trim().is_empty() {
            return Err(ValidationError::MissingField("location"));
        }

        draft.accommodations.push(accommodation);
        Ok(draft)
    }

    pub fn add_transfer(
        mut draft: ItineraryDraft,
        transfer: TransferDraft,
    ) -> Result<ItineraryDraft, ValidationError> {
        if transfer.from_location.trim().is_empty() {
            return Err(ValidationError::MissingField("from_location"));
        }
        if transfer.to_location.trim().is_empty() {
            return Err(ValidationError::MissingField("to_location"));
        }
        if transfer.transport_type.trim().is_empty() {
            return Err(ValidationError::MissingField("transport_type"));
        }

        draft.transfers.push(transfer);
        Ok(draft)
    }

    pub fn add_activity(
        mut draft: ItineraryDraft,
        activity: ActivityDraft,
    ) -> Result<ItineraryDraft, ValidationError> {
        if activity.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if activity.location.trim().is_empty() {
            return Err(ValidationError::MissingField("location"));
        }
        if activity.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }

        draft.activities.push(activity);
        Ok(draft)
    }

    // Callers only remove from rendered rows, so the index is always valid.
    pub fn remove_accommodation(mut draft: ItineraryDraft, index: usize) -> ItineraryDraft {
        draft.accommodations.remove(index);
        draft
    }

    pub fn remove_transfer(mut draft: ItineraryDraft, index: usize) -> ItineraryDraft {
        draft.transfers.remove(index);
        draft
    }

    pub fn remove_activity(mut draft: ItineraryDraft, index: usize) -> ItineraryDraft {
        draft.activities.remove(index);
        draft
    }

    /// Submission gate. Success yields the aggregate `duration_nights`,
    /// always recomputed as the sum of accommodation nights.
    pub fn validate_for_submit(draft: &ItineraryDraft) -> Result<u32, ValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if draft.accommodations.is_empty() {
            return Err(ValidationError::NoAccommodations);
        }

        Ok(draft.accommodations.iter().map(|acc| acc.nights()).sum())
    }
}
