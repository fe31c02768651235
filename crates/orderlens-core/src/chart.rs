//! Terminal bar chart for monthly order volume.

use crate::insights::MonthBucket;
use crate::ui::symbols;

pub const CHART_TITLE: &str = "Orders Per Month";

/// Bar width in cells for the busiest month.
const BAR_WIDTH: usize = 40;

/// Render one row per month: `YYYY-MM` label, a bar scaled to the busiest
/// month, and the raw count.
pub fn render_month_chart(months: &[MonthBucket]) -> String {
    let peak = months.iter().map(|m| m.count).max().unwrap_or(0);
    let mut out = String::new();
    for bucket in months {
        let bar = scaled_bar(bucket.count, peak);
        out.push_str(&format!("{} {} {}\n", bucket.label(), bar, bucket.count));
    }
    out.trim_end().to_string()
}

fn scaled_bar(count: u64, peak: u64) -> String {
    let filled = if peak == 0 {
        0
    } else {
        let cells = (count as f64 / peak as f64 * BAR_WIDTH as f64).round() as usize;
        // A non-zero month always gets at least one cell.
        if count > 0 { cells.max(1) } else { 0 }
    };
    symbols::PROGRESS_FULL.repeat(filled) + &symbols::PROGRESS_EMPTY.repeat(BAR_WIDTH - filled)
}
