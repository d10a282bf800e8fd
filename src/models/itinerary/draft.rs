use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_NIGHTS: u32 = 3;
const DEFAULT_ACTIVITY_HOURS: f64 = 4.0;
const MIN_ACTIVITY_HOURS: f64 = 0.5;

/// In-progress accommodation entry. Check-out is always derived from
/// check-in plus nights and cannot be set directly.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AccommodationDraft {
    pub name: String,
    pub location: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    nights: u32,
}

impl AccommodationDraft {
    pub fn starting(check_in_date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            check_in_date,
            check_out_date: check_in_date + Duration::days(DEFAULT_NIGHTS as i64),
            nights: DEFAULT_NIGHTS,
        }
    }

    pub fn check_in_date(&self) -> NaiveDate {
        self.check_in_date
    }

    pub fn check_out_date(&self) -> NaiveDate {
        self.check_out_date
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// Moving check-in keeps the stay length and shifts check-out with it.
    pub fn set_check_in_date(&mut self, date: NaiveDate) {
        self.check_in_date = date;
        self.check_out_date = date + Duration::days(self.nights as i64);
    }

    /// Changing the stay length recomputes check-out from the current
    /// check-in. Zero nights is floored to one, matching the form input.
    pub fn set_nights(&mut self, nights: u32) {
        self.nights = nights.max(1);
        self.check_out_date = self.check_in_date + Duration::days(self.nights as i64);
    }
}

impl Default for AccommodationDraft {
    fn default() -> Self {
        Self::starting(Utc::now().date_naive())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransferDraft {
    pub from_location: String,
    pub to_location: String,
    pub transport_type: String,
    pub date: NaiveDate,
}

impl TransferDraft {
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            from_location: String::new(),
            to_location: String::new(),
            transport_type: String::new(),
            date,
        }
    }
}

impl Default for TransferDraft {
    fn default() -> Self {
        Self::starting(Utc::now().date_naive())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ActivityDraft {
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    duration_hours: f64,
    pub description: String,
}

impl ActivityDraft {
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            date,
            duration_hours: DEFAULT_ACTIVITY_HOURS,
            description: String::new(),
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Floors to the half-hour minimum the form enforces.
    pub fn set_duration_hours(&mut self, hours: f64) {
        self.duration_hours = hours.max(MIN_ACTIVITY_HOURS);
    }
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self::starting(Utc::now().date_naive())
    }
}

/// The whole in-progress itinerary: basic info plus the three entity lists.
/// Entries are immutable once added; removal by index is the only mutation
/// path. Transitions live in `services::form_service`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ItineraryDraft {
    pub title: String,
    pub description: String,
    pub accommodations: Vec<AccommodationDraft>,
    pub transfers: Vec<TransferDraft>,
    pub activities: Vec<ActivityDraft>,
}
