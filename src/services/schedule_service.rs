use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::itinerary::base::{Accommodation, Activity, Itinerary, Transfer, TransportMode};

/// One rendered day of the plan. Items appear in display order: check-in
/// first, then transfers, then activities.
#[derive(Debug, Serialize, Clone)]
pub struct ScheduleDay {
    pub day_number: u32,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<Accommodation>,
    pub transfers: Vec<ScheduledTransfer>,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ScheduledTransfer {
    #[serde(flatten)]
    pub transfer: Transfer,
    pub mode: TransportMode,
}

/// Derive the day-by-day plan from a canonical itinerary.
///
/// Days are keyed off activity dates only: a date carrying just a check-in
/// or just a transfer gets no entry. Activities keep their original order
/// within a day, transfers likewise; when several accommodations check in
/// on the same date only the first is surfaced.
pub fn build_schedule(itinerary: &Itinerary) -> Vec<ScheduleDay> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Activity>> = BTreeMap::new();
    for activity in &itinerary.activities {
        by_date.entry(activity.date).or_default().push(activity.clone());
    }

    // BTreeMap iteration is ascending by date, which for ISO-formatted
    // dates is the same as lexicographic order on the wire strings.
    by_date
        .into_iter()
        .enumerate()
        .map(|(index, (date, activities))| {
            let check_in = itinerary
                .accommodations
                .iter()
                .find(|acc| acc.check_in_date == date)
                .cloned();

            let transfers = itinerary
                .transfers
                .iter()
                .filter(|transfer| transfer.date == date)
                .map(|transfer| ScheduledTransfer {
                    mode: transfer.transport_mode(),
                    transfer: transfer.clone(),
                })
                .collect();

            ScheduleDay {
                day_number: index as u32 + 1,
                date,
                check_in,
                transfers,
                activities,
            }
        })
        .collect()
}
