//! Free-text query resolution.
//!
//! The resolver lowercases the input and walks a fixed, ordered trigger
//! catalog; the first entry whose phrase is contained in the text wins.
//! Catalog order is load-bearing and covered by tests: a query containing
//! two trigger phrases fires the earlier-declared one.

use crate::dataset::Dataset;
use crate::insights::{self, MonthBucket};
use serde::Serialize;

/// Canned aggregations the resolver can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    TotalOrders,
    CompletedOrders,
    CanceledOrders,
    BestCarrier,
    AverageDeliveryTime,
    TopCancellationReason,
    TopCity,
    TopState,
    OrdersPerMonth,
}

/// A recognized phrase set and the aggregation it triggers.
pub struct Trigger {
    pub phrases: &'static [&'static str],
    pub kind: InsightKind,
}

/// The trigger catalog, in dispatch order.
pub const TRIGGERS: &[Trigger] = &[
    Trigger { phrases: &["total orders"], kind: InsightKind::TotalOrders },
    Trigger { phrases: &["completed orders"], kind: InsightKind::CompletedOrders },
    Trigger { phrases: &["canceled orders"], kind: InsightKind::CanceledOrders },
    Trigger {
        phrases: &["best carrier", "highest sla compliance"],
        kind: InsightKind::BestCarrier,
    },
    Trigger { phrases: &["average delivery time"], kind: InsightKind::AverageDeliveryTime },
    Trigger {
        phrases: &["most common cancellation reason"],
        kind: InsightKind::TopCancellationReason,
    },
    Trigger { phrases: &["top city for orders"], kind: InsightKind::TopCity },
    Trigger { phrases: &["top state for orders"], kind: InsightKind::TopState },
    Trigger { phrases: &["orders per month"], kind: InsightKind::OrdersPerMonth },
];

/// Guidance returned when nothing in the catalog matches.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't understand your query. Try asking about orders, cancellations, delivery times, etc.";

/// Uniform reply when an aggregation's input subset is empty.
pub const NO_DATA_MESSAGE: &str = "No data available for this query.";

/// Confirmation line printed once the monthly chart has rendered.
pub const CHART_CONFIRMATION: &str = "Orders per month plotted.";

/// A resolved reply: a text answer, or a monthly series for the caller to
/// render as a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryReply {
    Text { answer: String },
    MonthlyChart { months: Vec<MonthBucket> },
}

impl QueryReply {
    fn text(answer: impl Into<String>) -> Self {
        Self::Text { answer: answer.into() }
    }
}

/// Match text against the catalog without running any aggregation.
pub fn match_trigger(query: &str) -> Option<InsightKind> {
    let query = query.to_lowercase();
    TRIGGERS
        .iter()
        .find(|t| t.phrases.iter().any(|p| query.contains(p)))
        .map(|t| t.kind)
}

/// Answer a free-text query against the dataset.
pub fn answer_query(dataset: &Dataset, query: &str) -> QueryReply {
    match match_trigger(query) {
        Some(kind) => run_insight(dataset, kind),
        None => QueryReply::text(FALLBACK_MESSAGE),
    }
}

/// Run one aggregation and phrase its reply.
pub fn run_insight(dataset: &Dataset, kind: InsightKind) -> QueryReply {
    match kind {
        InsightKind::TotalOrders => QueryReply::text(format!(
            "Total number of orders: {}",
            insights::total_orders(dataset)
        )),
        InsightKind::CompletedOrders => QueryReply::text(format!(
            "Total completed orders: {}",
            insights::completed_orders(dataset)
        )),
        InsightKind::CanceledOrders => QueryReply::text(format!(
            "Total canceled orders: {}",
            insights::canceled_orders(dataset)
        )),
        InsightKind::BestCarrier => match insights::best_carrier(dataset) {
            Some((carrier, _)) => QueryReply::text(format!(
                "Carrier with the highest SLA compliance: {carrier}"
            )),
            None => QueryReply::text(NO_DATA_MESSAGE),
        },
        InsightKind::AverageDeliveryTime => match insights::average_delivery_hours(dataset) {
            Some(hours) => {
                QueryReply::text(format!("Average delivery time: {hours:.2} hours"))
            }
            None => QueryReply::text(NO_DATA_MESSAGE),
        },
        InsightKind::TopCancellationReason => {
            match insights::most_common_cancellation_reason(dataset) {
                Some((reason, _)) => QueryReply::text(format!(
                    "Most common cancellation reason: {reason}"
                )),
                None => QueryReply::text(NO_DATA_MESSAGE),
            }
        }
        InsightKind::TopCity => match insights::top_city(dataset) {
            Some((city, _)) => {
                QueryReply::text(format!("City with the most orders: {city}"))
            }
            None => QueryReply::text(NO_DATA_MESSAGE),
        },
        InsightKind::TopState => match insights::top_state(dataset) {
            Some((state, _)) => {
                QueryReply::text(format!("State with the most orders: {state}"))
            }
            None => QueryReply::text(NO_DATA_MESSAGE),
        },
        InsightKind::OrdersPerMonth => {
            let months = insights::orders_per_month(dataset);
            if months.is_empty() {
                QueryReply::text(NO_DATA_MESSAGE)
            } else {
                QueryReply::MonthlyChart { months }
            }
        }
    }
}
