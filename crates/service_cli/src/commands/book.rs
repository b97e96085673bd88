//! Book command implementation
//!
//! Loads a saved lease book snapshot and prints each lease's rent schedule
//! with the payments received against it.

use lease_core::types::Money;
use lease_models::escalation::RentSchedule;
use lease_models::records::BookSnapshot;
use lease_models::repository::{LeaseBook, RecordId};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use super::{read_input, render};
use crate::config::OutputFormat;
use crate::Result;

/// One lease with its schedule and payment total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaseReport {
    /// Lease id
    pub lease_id: RecordId,
    /// Tenant display name
    pub tenant: String,
    /// Property name
    pub property: String,
    /// Unit label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Number of payments recorded
    pub payments: usize,
    /// Sum of all payments
    pub total_paid: Money,
    /// Rent schedule
    pub schedule: RentSchedule,
}

/// Run the book command
pub fn run(
    file: &Path,
    lease_id: Option<RecordId>,
    format: OutputFormat,
    currency: &str,
) -> Result<()> {
    info!("Loading lease book...");
    info!("  Snapshot: {}", file.display());

    let snapshot = BookSnapshot::from_json(&read_input(file)?)?;
    let book = LeaseBook::from_snapshot(snapshot)?;
    info!(
        properties = book.properties().len(),
        tenants = book.tenants().len(),
        leases = book.leases().len(),
        payments = book.payments().len(),
        "Lease book loaded"
    );

    let reports = build_reports(&book, lease_id)?;
    match format {
        OutputFormat::Table => print!("{}", render_reports(&reports, currency)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

/// Build reports for one lease, or for every lease in id order.
pub fn build_reports(book: &LeaseBook, lease_id: Option<RecordId>) -> Result<Vec<LeaseReport>> {
    let leases = match lease_id {
        Some(id) => vec![book.lease(id)?],
        None => book.leases().list(),
    };

    let mut reports = Vec::with_capacity(leases.len());
    for lease in leases {
        let payments = book.payments_for(lease.id)?;
        reports.push(LeaseReport {
            lease_id: lease.id,
            tenant: book.tenant_for(lease.id)?.name.display_name(),
            property: book.property_for(lease.id)?.name,
            unit: lease.unit,
            payments: payments.len(),
            total_paid: book.total_paid(lease.id)?,
            schedule: book.schedule_for(lease.id)?,
        });
    }
    Ok(reports)
}

/// Render reports as text: a heading, the schedule table, and a payment line per lease.
pub fn render_reports(reports: &[LeaseReport], currency: &str) -> String {
    let mut out = String::new();
    for report in reports {
        let place = match &report.unit {
            Some(unit) => format!("{}, unit {}", report.property, unit),
            None => report.property.clone(),
        };
        out.push_str(&format!(
            "Lease #{}: {} at {}\n",
            report.lease_id, report.tenant, place
        ));
        out.push_str(&render::schedule_table(&report.schedule, currency));
        out.push_str(&format!(
            "Paid to date: {} across {} payment(s)\n\n",
            render::amount(report.total_paid, currency),
            report.payments
        ));
    }
    if reports.is_empty() {
        out.push_str("No leases in book.\n");
    }
    out
}
