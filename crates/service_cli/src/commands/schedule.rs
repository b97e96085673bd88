//! Schedule command implementation
//!
//! Builds a rent schedule from command-line terms or from a saved lease file.

use lease_core::types::{Date, Money};
use lease_models::escalation::{
    build_schedule, EscalationRule, LeaseTerms, RentSchedule, ScheduleBuilder, ScheduleError,
};
use lease_models::records::LegacyLease;
use std::path::PathBuf;
use tracing::info;

use super::{read_input, render};
use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Where the lease terms come from.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOptions {
    /// Saved lease file; excludes every term flag
    pub lease: Option<PathBuf>,
    /// First day of the lease
    pub start: Option<String>,
    /// Last day of the base term
    pub end: Option<String>,
    /// Monthly rent in the first year
    pub rent: Option<String>,
    /// Base-term escalation rule
    pub increase: Option<String>,
    /// Option years after the base term
    pub option_years: i32,
    /// Option-year escalation rule
    pub option_increase: Option<String>,
}

/// Run the schedule command
pub fn run(options: &ScheduleOptions, format: OutputFormat, currency: &str) -> Result<()> {
    info!("Building rent schedule...");

    let terms = resolve_terms(options)?;
    let schedule = build_schedule(&terms)?;
    info!(
        rows = schedule.len(),
        start = %schedule.start_date(),
        end = %schedule.end_date(),
        "Schedule built"
    );

    println!("{}", render_schedule(&schedule, format, currency)?);
    Ok(())
}

/// Render a schedule in the requested format.
pub fn render_schedule(
    schedule: &RentSchedule,
    format: OutputFormat,
    currency: &str,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render::schedule_table(schedule, currency)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(schedule)?),
    }
}

/// Turn command-line options into validated lease terms.
pub fn resolve_terms(options: &ScheduleOptions) -> Result<LeaseTerms> {
    if let Some(path) = &options.lease {
        let flags_given = options.start.is_some()
            || options.end.is_some()
            || options.rent.is_some()
            || options.increase.is_some()
            || options.option_increase.is_some()
            || options.option_years != 0;
        if flags_given {
            return Err(CliError::invalid_argument(
                "--lease cannot be combined with term flags",
            ));
        }

        info!("  Lease file: {}", path.display());
        let lease = LegacyLease::from_json(&read_input(path)?)?;
        return Ok(lease.to_terms()?);
    }

    let mut builder = ScheduleBuilder::new().option_years(options.option_years);

    if let Some(start) = &options.start {
        builder = builder.start(Date::parse(start).map_err(ScheduleError::from)?);
    }
    if let Some(end) = &options.end {
        builder = builder.end(Date::parse(end).map_err(ScheduleError::from)?);
    }
    if let Some(rent) = &options.rent {
        let rent: Money = rent.parse().map_err(|e| {
            ScheduleError::invalid_input(format!("monthly rent '{}': {}", rent, e))
        })?;
        builder = builder.monthly_rent(rent);
    }
    if let Some(rule) = &options.increase {
        builder = builder.annual_increase(rule.parse::<EscalationRule>()?);
    }
    if let Some(rule) = &options.option_increase {
        builder = builder.option_increase(rule.parse::<EscalationRule>()?);
    }

    let terms = builder.terms()?;
    terms.validate()?;
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn flags() -> ScheduleOptions {
        ScheduleOptions {
            start: Some("2024-01-01".to_string()),
            end: Some("2026-12-31".to_string()),
            rent: Some("2000".to_string()),
            increase: Some("5%".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_terms_from_flags() {
        let terms = resolve_terms(&flags()).unwrap();
        assert_eq!(terms.monthly_rent, Money::from_cents(200_000));
        assert_eq!(terms.annual_increase, EscalationRule::Percent(5.0));

        let schedule = build_schedule(&terms).unwrap();
        let rents: Vec<i64> = schedule.iter().map(|r| r.monthly_rent.cents()).collect();
        assert_eq!(rents, vec![200_000, 210_000, 220_500]);
    }

    #[test]
    fn test_resolve_terms_option_flags() {
        let options = ScheduleOptions {
            option_years: 2,
            option_increase: Some("150".to_string()),
            ..flags()
        };
        let terms = resolve_terms(&options).unwrap();
        assert_eq!(terms.option_years, 2);
        assert_eq!(
            terms.option_increase,
            Some(EscalationRule::Flat(Money::from_cents(15_000)))
        );
    }

    #[test]
    fn test_resolve_terms_missing_start() {
        let options = ScheduleOptions {
            start: None,
            ..flags()
        };
        assert!(matches!(
            resolve_terms(&options),
            Err(CliError::Schedule(ScheduleError::MissingField { field: "start" }))
        ));
    }

    #[test]
    fn test_resolve_terms_bad_values() {
        let bad_date = ScheduleOptions {
            start: Some("2024-13-01".to_string()),
            ..flags()
        };
        assert!(matches!(
            resolve_terms(&bad_date),
            Err(CliError::Schedule(ScheduleError::InvalidInput(_)))
        ));

        let bad_rent = ScheduleOptions {
            rent: Some("lots".to_string()),
            ..flags()
        };
        assert!(matches!(
            resolve_terms(&bad_rent),
            Err(CliError::Schedule(ScheduleError::InvalidInput(_)))
        ));

        let bad_rule = ScheduleOptions {
            increase: Some("-2%".to_string()),
            ..flags()
        };
        assert!(matches!(
            resolve_terms(&bad_rule),
            Err(CliError::Schedule(ScheduleError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_resolve_terms_from_lease_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"startDate":"2024-01-01","endDate":"2026-12-31","monthlyRent":"2000",
                 "increases":[{"mode":"percent","value":5}]}"#,
        )
        .unwrap();

        let options = ScheduleOptions {
            lease: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(resolve_terms(&options).unwrap(), resolve_terms(&flags()).unwrap());
    }

    #[test]
    fn test_resolve_terms_lease_conflicts_with_flags() {
        let options = ScheduleOptions {
            lease: Some(PathBuf::from("lease.json")),
            ..flags()
        };
        assert!(matches!(
            resolve_terms(&options),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_resolve_terms_missing_lease_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = ScheduleOptions {
            lease: Some(dir.path().join("missing.json")),
            ..Default::default()
        };
        assert!(matches!(
            resolve_terms(&options),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_render_schedule_json() {
        let schedule = build_schedule(&resolve_terms(&flags()).unwrap()).unwrap();
        let json = render_schedule(&schedule, OutputFormat::Json, "$").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[2]["monthly_rent"], 220_500);
        assert_eq!(value[0]["period_start"], "2024-01-01");
        assert_eq!(value[0]["term"], "base");
    }
}
