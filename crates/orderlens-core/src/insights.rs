//! Aggregations over the order dataset.
//!
//! Every function here is a pure read of `&Dataset`. Aggregations whose
//! input subset can be empty return `Option`; the caller decides how to
//! phrase "no data". Value ties (mode, best carrier) resolve to the
//! lexicographically smallest name so results are deterministic across runs.

use crate::dataset::{Dataset, SlaCompliance, TerminalStatus};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

/// Order volume for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

impl MonthBucket {
    /// Label in the export's `YYYY-MM` convention.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Count of all records.
pub fn total_orders(dataset: &Dataset) -> u64 {
    dataset.len() as u64
}

/// Count of records with terminal status COMPLETED.
pub fn completed_orders(dataset: &Dataset) -> u64 {
    dataset
        .records()
        .iter()
        .filter(|r| r.status == TerminalStatus::Completed)
        .count() as u64
}

/// Count of records with terminal status CANCELLED.
pub fn canceled_orders(dataset: &Dataset) -> u64 {
    dataset
        .records()
        .iter()
        .filter(|r| r.status == TerminalStatus::Cancelled)
        .count() as u64
}

/// Carrier with the most SLA-compliant (ON_TIME) records.
///
/// Returns the carrier name and its on-time count; None when no record is
/// on time or no on-time record names a carrier.
pub fn best_carrier(dataset: &Dataset) -> Option<(String, u64)> {
    mode_of(
        dataset
            .records()
            .iter()
            .filter(|r| r.sla == SlaCompliance::OnTime)
            .filter_map(|r| r.carrier.as_deref()),
    )
}

/// Mean delivery time in hours over records carrying both the order and
/// completion timestamps. Records missing either are excluded entirely.
pub fn average_delivery_hours(dataset: &Dataset) -> Option<f64> {
    let mut total_hours = 0.0;
    let mut delivered = 0u64;
    for record in dataset.records() {
        if let (Some(ordered), Some(completed)) = (record.ordered_at, record.completed_at) {
            total_hours += (completed - ordered).num_seconds() as f64 / 3600.0;
            delivered += 1;
        }
    }
    if delivered == 0 {
        None
    } else {
        Some(total_hours / delivered as f64)
    }
}

/// Mode of the non-missing cancellation reasons.
pub fn most_common_cancellation_reason(dataset: &Dataset) -> Option<(String, u64)> {
    mode_of(
        dataset
            .records()
            .iter()
            .filter_map(|r| r.cancellation_reason.as_deref()),
    )
}

/// Mode of the city values.
pub fn top_city(dataset: &Dataset) -> Option<(String, u64)> {
    mode_of(dataset.records().iter().filter_map(|r| r.city.as_deref()))
}

/// Mode of the state values.
pub fn top_state(dataset: &Dataset) -> Option<(String, u64)> {
    mode_of(dataset.records().iter().filter_map(|r| r.state.as_deref()))
}

/// Record counts grouped by (year, month) of the order timestamp, sorted
/// chronologically. Records without an order timestamp are skipped.
pub fn orders_per_month(dataset: &Dataset) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for record in dataset.records() {
        if let Some(ordered) = record.ordered_at {
            *buckets.entry((ordered.year(), ordered.month())).or_insert(0) += 1;
        }
    }
    buckets
        .into_iter()
        .map(|((year, month), count)| MonthBucket { year, month, count })
        .collect()
}

/// Most frequent value; ties resolve to the lexicographically smallest.
fn mode_of<'a, I>(values: I) -> Option<(String, u64)>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // BTreeMap iterates in key order, so keeping only strictly greater
    // counts leaves the smallest key of any tie in place.
    let mut best: Option<(&str, u64)> = None;
    for (value, count) in counts {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, count)| (value.to_string(), count))
}
