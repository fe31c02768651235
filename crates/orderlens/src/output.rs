//! Reply rendering for one-shot and interactive queries.

use anyhow::Result;
use orderlens_core::chart::{self, CHART_TITLE};
use orderlens_core::dataset::{Dataset, SlaCompliance, TerminalStatus};
use orderlens_core::query::{answer_query, QueryReply, CHART_CONFIRMATION};
use orderlens_core::ui::{self, colors, Style, HR};
use serde::Serialize;

const SUMMARY_KEY_WIDTH: usize = 14;

/// Answer one query and print the reply (or its JSON with `raw`).
pub fn run_ask(dataset: &Dataset, query: &str, raw: bool, style: &Style) -> Result<()> {
    let reply = answer_query(dataset, query);
    if raw {
        println!("{}", serde_json::to_string(&reply)?);
        return Ok(());
    }
    print_reply(&reply, style);
    Ok(())
}

/// Print a resolved reply. The monthly series is the one path with output
/// beyond a single line: a chart block plus the confirmation string.
pub fn print_reply(reply: &QueryReply, style: &Style) {
    match reply {
        QueryReply::Text { answer } => println!("{answer}"),
        QueryReply::MonthlyChart { months } => {
            println!(
                "{}{}{}",
                style.paint(colors::BOLD),
                CHART_TITLE,
                style.paint(colors::RESET)
            );
            println!("{}", chart::render_month_chart(months));
            println!("{CHART_CONFIRMATION}");
        }
    }
}

/// Dataset overview for the `summary` subcommand.
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub records: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub on_time: u64,
    pub first_order: Option<String>,
    pub last_order: Option<String>,
}

impl DatasetSummary {
    pub fn build(dataset: &Dataset) -> Self {
        let mut completed = 0u64;
        let mut cancelled = 0u64;
        let mut on_time = 0u64;
        let mut first = None;
        let mut last = None;
        for record in dataset.records() {
            match record.status {
                TerminalStatus::Completed => completed += 1,
                TerminalStatus::Cancelled => cancelled += 1,
                TerminalStatus::Other(_) => {}
            }
            if record.sla == SlaCompliance::OnTime {
                on_time += 1;
            }
            if let Some(ordered) = record.ordered_at {
                first = Some(first.map_or(ordered, |f: chrono::NaiveDateTime| f.min(ordered)));
                last = Some(last.map_or(ordered, |l: chrono::NaiveDateTime| l.max(ordered)));
            }
        }
        let fmt = |dt: chrono::NaiveDateTime| dt.format("%Y-%m-%d %H:%M").to_string();
        Self {
            records: dataset.len() as u64,
            completed,
            cancelled,
            on_time,
            first_order: first.map(fmt),
            last_order: last.map(fmt),
        }
    }
}

/// Render the dataset overview (or its JSON with `raw`).
pub fn run_summary(dataset: &Dataset, raw: bool, style: &Style) -> Result<()> {
    let summary = DatasetSummary::build(dataset);
    if raw {
        println!("{}", serde_json::to_string(&summary)?);
        return Ok(());
    }

    println!();
    println!(
        "{}Dataset summary{}",
        style.paint(colors::HEADER),
        style.paint(colors::RESET)
    );
    println!("{}{}{}", style.paint(colors::DIM), HR, style.paint(colors::RESET));
    println!("{}", ui::kv("Records", &summary.records.to_string(), SUMMARY_KEY_WIDTH));
    println!("{}", ui::kv("Completed", &summary.completed.to_string(), SUMMARY_KEY_WIDTH));
    println!("{}", ui::kv("Cancelled", &summary.cancelled.to_string(), SUMMARY_KEY_WIDTH));
    println!("{}", ui::kv("On-time (SLA)", &summary.on_time.to_string(), SUMMARY_KEY_WIDTH));
    let span = match (&summary.first_order, &summary.last_order) {
        (Some(first), Some(last)) => format!("{first} {} {last}", ui::symbols::ARROW),
        _ => "unknown".to_string(),
    };
    println!("{}", ui::kv("Order span", &span, SUMMARY_KEY_WIDTH));
    println!("{}{}{}", style.paint(colors::DIM), HR, style.paint(colors::RESET));
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orderlens_core::dataset::OrderRecord;

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

    #[test]
    fn test_summary_tallies_and_span() {
        let mut completed = blank();
        completed.status = TerminalStatus::Completed;
        completed.sla = SlaCompliance::OnTime;
        completed.ordered_at = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0);

        let mut cancelled = blank();
        cancelled.status = TerminalStatus::Cancelled;
        cancelled.ordered_at = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0);

        let dataset = Dataset::from_records(vec![completed, cancelled]);
        let summary = DatasetSummary::build(&dataset);
        assert_eq!(summary.records, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.on_time, 1);
        assert_eq!(summary.first_order.as_deref(), Some("2024-01-05 10:00"));
        assert_eq!(summary.last_order.as_deref(), Some("2024-02-01 12:00"));
    }

    #[test]
    fn test_summary_empty_dataset() {
        let summary = DatasetSummary::build(&Dataset::from_records(vec![]));
        assert_eq!(summary.records, 0);
        assert_eq!(summary.first_order, None);
    }
}
