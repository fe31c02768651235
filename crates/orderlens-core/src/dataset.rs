//! Order dataset model and CSV loader.
//!
//! Parses an order-logistics export into typed records. Column header text
//! is load-bearing: each required column is resolved by exact name and the
//! load fails if one is absent. Timestamp cells are parsed leniently; a
//! value that matches no accepted format becomes a missing marker instead
//! of failing the load.

use crate::error::LensError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

pub const COL_ORDER_DATE: &str = "Order Date";
pub const COL_COMPLETED_AT: &str = "COMPLETED AT";
pub const COL_CANCELLED_AT: &str = "CANCELLED AT";
pub const COL_STATUS: &str = "Terminal STATUS";
pub const COL_SLA: &str = "SLA Compliance";
pub const COL_CARRIER: &str = "CARRIER NAME";
pub const COL_REASON: &str = "Cancellation REASON DESCRIPTION";
pub const COL_CITY: &str = "CITY";
pub const COL_STATE: &str = "STATE";

/// Datetime formats accepted for timestamp columns, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only formats; parsed values land at midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Final state of an order's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalStatus {
    Completed,
    Cancelled,
    Other(String),
}

impl TerminalStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "COMPLETED" => Self::Completed,
            "CANCELLED" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Whether an order's delivery met its service-level agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlaCompliance {
    OnTime,
    Other(String),
}

impl SlaCompliance {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "ON_TIME" => Self::OnTime,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One row of the order export.
///
/// Timestamp fields are a valid point in time or `None`, never a raw
/// unparsed string. Empty text cells are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub ordered_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub cancelled_at: Option<NaiveDateTime>,
    pub status: TerminalStatus,
    pub sla: SlaCompliance,
    pub carrier: Option<String>,
    pub cancellation_reason: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// The full dataset: an ordered, immutable record collection loaded once
/// and threaded by reference into every query.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// An unreadable file or a missing required column is fatal. Malformed
    /// timestamp cells are downgraded to missing and tallied at warn level.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LensError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LensError::DatasetNotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let columns = Columns::resolve(reader.headers()?)?;

        let mut records = Vec::new();
        let mut bad_timestamps = 0usize;
        for row in reader.records() {
            let row = row?;
            records.push(columns.parse_row(&row, &mut bad_timestamps));
        }

        if bad_timestamps > 0 {
            warn!(
                target: "orderlens",
                "{} timestamp value(s) could not be parsed and were treated as missing",
                bad_timestamps
            );
        }
        info!(
            target: "orderlens",
            "loaded {} order record(s) from {}",
            records.len(),
            path.display()
        );

        Ok(Self { records })
    }

    /// Build a dataset from already-typed records.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolved indices of the required columns.
struct Columns {
    ordered_at: usize,
    completed_at: usize,
    cancelled_at: usize,
    status: usize,
    sla: usize,
    carrier: usize,
    reason: usize,
    city: usize,
    state: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LensError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LensError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            ordered_at: find(COL_ORDER_DATE)?,
            completed_at: find(COL_COMPLETED_AT)?,
            cancelled_at: find(COL_CANCELLED_AT)?,
            status: find(COL_STATUS)?,
            sla: find(COL_SLA)?,
            carrier: find(COL_CARRIER)?,
            reason: find(COL_REASON)?,
            city: find(COL_CITY)?,
            state: find(COL_STATE)?,
        })
    }

    fn parse_row(&self, row: &StringRecord, bad_timestamps: &mut usize) -> OrderRecord {
        OrderRecord {
            ordered_at: timestamp_cell(row, self.ordered_at, bad_timestamps),
            completed_at: timestamp_cell(row, self.completed_at, bad_timestamps),
            cancelled_at: timestamp_cell(row, self.cancelled_at, bad_timestamps),
            status: TerminalStatus::parse(cell(row, self.status).unwrap_or("")),
            sla: SlaCompliance::parse(cell(row, self.sla).unwrap_or("")),
            carrier: cell(row, self.carrier).map(String::from),
            cancellation_reason: cell(row, self.reason).map(String::from),
            city: cell(row, self.city).map(String::from),
            state: cell(row, self.state).map(String::from),
        }
    }
}

/// Trimmed, non-empty cell text.
fn cell<'a>(row: &'a StringRecord, idx: usize) -> Option<&'a str> {
    row.get(idx).map(str::trim).filter(|v| !v.is_empty())
}

fn timestamp_cell(
    row: &StringRecord,
    idx: usize,
    bad_timestamps: &mut usize,
) -> Option<NaiveDateTime> {
    let raw = cell(row, idx)?;
    match parse_timestamp(raw) {
        Some(ts) => Some(ts),
        None => {
            *bad_timestamps += 1;
            None
        }
    }
}

/// Parse a timestamp cell, trying each accepted format.
///
/// Returns None for empty or unparsable values.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    // RFC 3339 exports carry an offset; keep the UTC instant.
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    None
}
