//! Aggregation tests over hand-built record collections.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use orderlens_core::dataset::{Dataset, OrderRecord, SlaCompliance, TerminalStatus};
use orderlens_core::insights;

fn ts(y: i32, m: u32, d: u32, h: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn blank() -> OrderRecord {
    OrderRecord {
        ordered_at: None,
        completed_at: None,
        cancelled_at: None,
        status: TerminalStatus::Other(String::new()),
        sla: SlaCompliance::Other(String::new()),
        carrier: None,
        cancellation_reason: None,
        city: None,
        state: None,
    }
}

fn delivered(ordered: chrono::NaiveDateTime, hours: i64, carrier: &str) -> OrderRecord {
    OrderRecord {
        ordered_at: Some(ordered),
        completed_at: Some(ordered + chrono::Duration::hours(hours)),
        status: TerminalStatus::Completed,
        sla: SlaCompliance::OnTime,
        carrier: Some(carrier.to_string()),
        ..blank()
    }
}

#[test]
fn test_average_over_mixed_durations() {
    let dataset = Dataset::from_records(vec![
        delivered(ts(2024, 1, 1, 8), 4, "FastShip"),
        delivered(ts(2024, 1, 2, 8), 6, "FastShip"),
    ]);
    assert_relative_eq!(insights::average_delivery_hours(&dataset).unwrap(), 5.0);
}

#[test]
fn test_average_ignores_partial_records() {
    let mut partial = blank();
    partial.ordered_at = Some(ts(2024, 1, 3, 8));

    let with_partial = Dataset::from_records(vec![
        delivered(ts(2024, 1, 1, 8), 4, "FastShip"),
        delivered(ts(2024, 1, 2, 8), 6, "FastShip"),
        partial,
    ]);
    let without_partial = Dataset::from_records(vec![
        delivered(ts(2024, 1, 1, 8), 4, "FastShip"),
        delivered(ts(2024, 1, 2, 8), 6, "FastShip"),
    ]);
    assert_relative_eq!(
        insights::average_delivery_hours(&with_partial).unwrap(),
        insights::average_delivery_hours(&without_partial).unwrap()
    );
}

#[test]
fn test_sub_hour_deliveries_keep_fractions() {
    let mut quick = blank();
    quick.ordered_at = Some(ts(2024, 1, 1, 8));
    quick.completed_at = Some(ts(2024, 1, 1, 8) + chrono::Duration::minutes(90));

    let dataset = Dataset::from_records(vec![quick]);
    assert_relative_eq!(insights::average_delivery_hours(&dataset).unwrap(), 1.5);
}

#[test]
fn test_best_carrier_majority() {
    let dataset = Dataset::from_records(vec![
        delivered(ts(2024, 1, 1, 8), 4, "FastShip"),
        delivered(ts(2024, 1, 2, 8), 4, "FastShip"),
        delivered(ts(2024, 1, 3, 8), 4, "SlowFreight"),
    ]);
    let (carrier, count) = insights::best_carrier(&dataset).unwrap();
    assert_eq!(carrier, "FastShip");
    assert_eq!(count, 2);
}

#[test]
fn test_mode_tie_breaks_lexicographically() {
    let mut a = blank();
    a.city = Some("Boston".to_string());
    let mut b = blank();
    b.city = Some("Atlanta".to_string());

    // One record each; the tie resolves to the smaller name.
    let dataset = Dataset::from_records(vec![a, b]);
    assert_eq!(insights::top_city(&dataset).unwrap().0, "Atlanta");
}

#[test]
fn test_modes_on_empty_subsets() {
    let dataset = Dataset::from_records(vec![blank()]);
    assert_eq!(insights::most_common_cancellation_reason(&dataset), None);
    assert_eq!(insights::top_city(&dataset), None);
    assert_eq!(insights::top_state(&dataset), None);
    assert_eq!(insights::best_carrier(&dataset), None);
}

#[test]
fn test_monthly_volume_counts() {
    let dataset = Dataset::from_records(vec![
        delivered(ts(2024, 1, 5, 8), 4, "FastShip"),
        delivered(ts(2024, 1, 20, 8), 4, "FastShip"),
        delivered(ts(2024, 3, 1, 8), 4, "FastShip"),
    ]);
    let months = insights::orders_per_month(&dataset);
    let labels: Vec<String> = months.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["2024-01", "2024-03"]);
    assert_eq!(months[0].count, 2);
    assert_eq!(months[1].count, 1);
}
