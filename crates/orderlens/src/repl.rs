//! Interactive prompt for free-text order queries.

use crate::output;
use anyhow::Result;
use orderlens_core::dataset::Dataset;
use orderlens_core::ui::{colors, Style, HR};
use std::io::{self, Write};

/// Run the prompt loop until `exit`, `quit`, or end of input.
pub fn run(dataset: &Dataset, style: &Style) -> Result<()> {
    print_header(dataset, style);

    loop {
        print!(
            "{}orderlens>{} ",
            style.paint(colors::HEADER),
            style.paint(colors::RESET)
        );
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // End of input closes the session like `exit`.
            println!();
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            "help" => print_help(),
            _ => output::run_ask(dataset, input, false, style)?,
        }
    }

    Ok(())
}

fn print_header(dataset: &Dataset, style: &Style) {
    println!();
    println!(
        "{}orderlens v{}{}",
        style.paint(colors::HEADER),
        env!("CARGO_PKG_VERSION"),
        style.paint(colors::RESET)
    );
    println!("{}{}{}", style.paint(colors::DIM), HR, style.paint(colors::RESET));
    println!(
        "Ask a question about your order data ({} record{} loaded).",
        dataset.len(),
        if dataset.len() == 1 { "" } else { "s" }
    );
    println!(
        "Examples: total orders | best carrier | average delivery time | orders per month"
    );
    println!("{}{}{}", style.paint(colors::DIM), HR, style.paint(colors::RESET));
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  exit, quit  - leave the prompt");
    println!("  help        - show this help");
    println!("  <anything>  - answered as an order-data question");
}
