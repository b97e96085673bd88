//! Schedule rendering for terminal and JSON output.

use lease_core::types::Money;
use lease_models::escalation::RentSchedule;

const HEADERS: [&str; 5] = ["Term", "Year", "Start", "End", "Monthly Rent"];

/// Render a schedule as a box-drawn table.
pub fn schedule_table(schedule: &RentSchedule, currency: &str) -> String {
    let body: Vec<[String; 5]> = schedule
        .iter()
        .map(|row| {
            [
                row.term.label().to_string(),
                row.year.to_string(),
                row.period_start.to_string(),
                row.period_end.to_string(),
                amount(row.monthly_rent, currency),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&border('┌', '┬', '┐', &widths));
    out.push_str(&line(&HEADERS.map(String::from), &widths));
    out.push_str(&border('├', '┼', '┤', &widths));
    for cells in &body {
        out.push_str(&line(cells, &widths));
    }
    out.push_str(&border('└', '┴', '┘', &widths));
    out
}

/// Format an amount with the configured currency symbol.
pub fn amount(money: Money, currency: &str) -> String {
    let sign = if money.is_negative() { "-" } else { "" };
    let cents = money.cents().unsigned_abs();
    format!("{}{}{}.{:02}", sign, currency, cents / 100, cents % 100)
}

fn border(left: char, mid: char, right: char, widths: &[usize; 5]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

fn line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            // Numeric columns are right-aligned.
            if i == 1 || i == 4 {
                format!(" {:>width$} ", cell, width = *width)
            } else {
                format!(" {:<width$} ", cell, width = *width)
            }
        })
        .collect();
    format!("│{}│\n", padded.join("│"))
}
