//! Migration of loose, browser-era record shapes into canonical records.
//!
//! Saved data comes in several shapes: names as one `fullName` string or as
//! `firstName`/`lastName`, amounts in dollars or in cents, numbers stored as
//! form strings, and escalation rules either as separate
//! `annualIncrease`/`optionIncrease` fields or as an `increases` array
//! (annual first, option second). Every shape is accepted here and converted
//! once; the rest of the crate only sees canonical types.
//!
//! # Examples
//!
//! ```
//! use lease_models::records::LegacyLease;
//! use lease_models::escalation::EscalationRule;
//!
//! let lease = LegacyLease::from_json(r#"{
//!     "startDate": "2024-01-01",
//!     "endDate": "2026-12-31",
//!     "monthlyRent": "2000",
//!     "increases": [{"mode": "percent", "value": 5}]
//! }"#).unwrap();
//!
//! let terms = lease.to_terms().unwrap();
//! assert_eq!(terms.monthly_rent.cents(), 200_000);
//! assert_eq!(terms.annual_increase, EscalationRule::Percent(5.0));
//! ```

use lease_core::types::{Date, Money};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::entities::{LeaseRecord, Payment, Property, Tenant};
use super::error::RecordError;
use super::name::PersonName;
use crate::escalation::{EscalationRule, LeaseTerms, ScheduleError};
use crate::repository::RecordId;

/// Escalation rule as saved by the browser forms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRule {
    /// "flat"/"fixed"/"amount" or "percent"/"percentage"/"pct"/"%".
    #[serde(alias = "type")]
    pub mode: String,
    /// Dollars for flat rules, percent for percentage rules.
    pub value: Value,
}

impl LegacyRule {
    /// Converts into a canonical rule.
    pub fn to_rule(&self) -> Result<EscalationRule, ScheduleError> {
        let value = number_from(&self.value).ok_or_else(|| {
            ScheduleError::invalid_input(format!("escalation value {} is not a number", self.value))
        })?;

        let rule = match self.mode.trim().to_lowercase().as_str() {
            "flat" | "fixed" | "amount" | "$" => EscalationRule::Flat(
                Money::from_major(value).map_err(|e| ScheduleError::invalid_input(e.to_string()))?,
            ),
            "percent" | "percentage" | "pct" | "%" => EscalationRule::Percent(value),
            other => {
                return Err(ScheduleError::invalid_input(format!(
                    "unknown escalation mode '{}'",
                    other
                )))
            }
        };
        rule.validate()?;
        Ok(rule)
    }
}

/// A lease in any of the saved shapes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLease {
    /// Saved id, if any.
    #[serde(default)]
    pub id: Option<u64>,
    /// Leased property id.
    #[serde(default)]
    pub property_id: Option<u64>,
    /// Leasing tenant id.
    #[serde(default)]
    pub tenant_id: Option<u64>,
    /// Unit label.
    #[serde(default)]
    pub unit: Option<String>,
    /// ISO start date.
    #[serde(default)]
    pub start_date: Option<String>,
    /// ISO end date; blank means none.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Rent in dollars, as a number or a form string.
    #[serde(default)]
    pub monthly_rent: Option<Value>,
    /// Rent in cents; takes precedence over `monthly_rent`.
    #[serde(default)]
    pub monthly_rent_cents: Option<i64>,
    /// Base-term escalation rule.
    #[serde(default)]
    pub annual_increase: Option<LegacyRule>,
    /// Option-year count, as a number or a form string.
    #[serde(default)]
    pub option_years: Option<Value>,
    /// Option-year escalation rule.
    #[serde(default)]
    pub option_increase: Option<LegacyRule>,
    /// Rules as an array: annual first, option second.
    #[serde(default)]
    pub increases: Vec<LegacyRule>,
}

impl LegacyLease {
    /// Parses a single lease from JSON.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the rent-relevant fields into validated lease terms.
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidInput` when the start date is missing or cannot
    /// be parsed, when rent is missing, non-finite, or negative, or when a
    /// rule or option-year count is unusable.
    pub fn to_terms(&self) -> Result<LeaseTerms, ScheduleError> {
        let start_raw = non_blank(&self.start_date)
            .ok_or_else(|| ScheduleError::invalid_input("start date is required"))?;
        let start_date = Date::parse(start_raw)
            .map_err(|e| ScheduleError::invalid_input(format!("start date: {}", e)))?;

        let end_date = match non_blank(&self.end_date) {
            Some(raw) => Some(
                Date::parse(raw)
                    .map_err(|e| ScheduleError::invalid_input(format!("end date: {}", e)))?,
            ),
            None => None,
        };

        let monthly_rent = self.rent()?;

        let annual_increase = match self.annual_increase.as_ref().or(self.increases.first()) {
            Some(rule) => rule.to_rule()?,
            None => EscalationRule::none(),
        };
        let option_increase = match self.option_increase.as_ref().or(self.increases.get(1)) {
            Some(rule) => Some(rule.to_rule()?),
            None => None,
        };

        let option_years = match &self.option_years {
            None | Some(Value::Null) => 0,
            Some(value) => {
                let years = number_from(value).ok_or_else(|| {
                    ScheduleError::invalid_input(format!("option years {} is not a number", value))
                })?;
                years.trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32
            }
        };

        let terms = LeaseTerms {
            start_date,
            end_date,
            monthly_rent,
            annual_increase,
            option_years,
            option_increase,
        };
        terms.validate()?;
        Ok(terms)
    }

    fn rent(&self) -> Result<Money, ScheduleError> {
        if let Some(cents) = self.monthly_rent_cents {
            return Ok(Money::from_cents(cents));
        }
        let value = self
            .monthly_rent
            .as_ref()
            .filter(|v| !is_blank(v))
            .ok_or_else(|| ScheduleError::invalid_input("monthly rent is required"))?;
        let dollars = number_from(value).ok_or_else(|| {
            ScheduleError::invalid_input(format!("monthly rent {} is not a number", value))
        })?;
        Money::from_major(dollars)
            .map_err(|e| ScheduleError::invalid_input(format!("monthly rent: {}", e)))
    }

    /// Converts into a canonical lease record.
    pub fn into_record(self) -> Result<LeaseRecord, RecordError> {
        let terms = self.to_terms()?;
        let property_id = self
            .property_id
            .ok_or(RecordError::MissingField("propertyId"))?;
        let tenant_id = self.tenant_id.ok_or(RecordError::MissingField("tenantId"))?;

        Ok(LeaseRecord {
            id: record_id(self.id),
            property_id: RecordId::new(property_id),
            tenant_id: RecordId::new(tenant_id),
            unit: non_blank(&self.unit).map(str::to_string),
            terms,
        })
    }
}

/// A tenant in any of the saved shapes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTenant {
    /// Saved id, if any.
    #[serde(default)]
    pub id: Option<u64>,
    /// Single-string name.
    #[serde(default, alias = "name")]
    pub full_name: Option<String>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
}

impl LegacyTenant {
    /// Converts into a canonical tenant.
    ///
    /// Structured first/last names win over a single full-name string.
    pub fn into_tenant(self) -> Result<Tenant, RecordError> {
        let first = non_blank(&self.first_name);
        let last = non_blank(&self.last_name);

        let name = if first.is_some() || last.is_some() {
            PersonName::new(first.unwrap_or_default(), last.unwrap_or_default())
        } else {
            let full = non_blank(&self.full_name).ok_or(RecordError::MissingField("name"))?;
            PersonName::from_full_name(full)
        };

        Ok(Tenant {
            id: record_id(self.id),
            name,
            email: non_blank(&self.email).map(str::to_string),
            phone: non_blank(&self.phone).map(str::to_string),
        })
    }
}

/// A payment in any of the saved shapes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPayment {
    /// Saved id, if any.
    #[serde(default)]
    pub id: Option<u64>,
    /// Lease the payment applies to.
    #[serde(default)]
    pub lease_id: Option<u64>,
    /// ISO date received.
    #[serde(default, alias = "date")]
    pub paid_on: Option<String>,
    /// Amount in dollars, as a number or a form string.
    #[serde(default)]
    pub amount: Option<Value>,
    /// Amount in cents; takes precedence over `amount`.
    #[serde(default)]
    pub amount_cents: Option<i64>,
    /// Free-form note.
    #[serde(default, alias = "note")]
    pub memo: Option<String>,
}

impl LegacyPayment {
    /// Converts into a canonical payment.
    pub fn into_payment(self) -> Result<Payment, RecordError> {
        let lease_id = self.lease_id.ok_or(RecordError::MissingField("leaseId"))?;
        let paid_raw = non_blank(&self.paid_on).ok_or(RecordError::MissingField("paidOn"))?;
        let paid_on =
            Date::parse(paid_raw).map_err(|e| RecordError::invalid("paidOn", e.to_string()))?;

        let amount = match (self.amount_cents, self.amount.as_ref().filter(|v| !is_blank(v))) {
            (Some(cents), _) => Money::from_cents(cents),
            (None, Some(value)) => {
                let dollars = number_from(value)
                    .ok_or_else(|| RecordError::invalid("amount", format!("{} is not a number", value)))?;
                Money::from_major(dollars).map_err(|e| RecordError::invalid("amount", e.to_string()))?
            }
            (None, None) => return Err(RecordError::MissingField("amount")),
        };

        Ok(Payment {
            id: record_id(self.id),
            lease_id: RecordId::new(lease_id),
            paid_on,
            amount,
            memo: non_blank(&self.memo).map(str::to_string),
        })
    }
}

/// A property as saved by the browser forms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProperty {
    /// Saved id, if any.
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name.
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Number of units.
    #[serde(default)]
    pub units: Option<u32>,
}

impl LegacyProperty {
    /// Converts into a canonical property.
    pub fn into_property(self) -> Result<Property, RecordError> {
        let name = non_blank(&self.name).ok_or(RecordError::MissingField("name"))?;
        Ok(Property {
            id: record_id(self.id),
            name: name.to_string(),
            address: non_blank(&self.address).unwrap_or_default().to_string(),
            units: self.units.unwrap_or(1).max(1),
        })
    }
}

/// Every saved collection at once, as dumped from browser storage.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookSnapshot {
    /// Saved properties.
    #[serde(default)]
    pub properties: Vec<LegacyProperty>,
    /// Saved tenants.
    #[serde(default)]
    pub tenants: Vec<LegacyTenant>,
    /// Saved leases.
    #[serde(default)]
    pub leases: Vec<LegacyLease>,
    /// Saved payments.
    #[serde(default)]
    pub payments: Vec<LegacyPayment>,
}

impl BookSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let snapshot: BookSnapshot = serde_json::from_str(json)?;
        debug!(
            properties = snapshot.properties.len(),
            tenants = snapshot.tenants.len(),
            leases = snapshot.leases.len(),
            payments = snapshot.payments.len(),
            "parsed book snapshot"
        );
        Ok(snapshot)
    }
}

impl TryFrom<&LegacyLease> for LeaseTerms {
    type Error = ScheduleError;

    fn try_from(lease: &LegacyLease) -> Result<Self, Self::Error> {
        lease.to_terms()
    }
}

impl TryFrom<LegacyLease> for LeaseRecord {
    type Error = RecordError;

    fn try_from(lease: LegacyLease) -> Result<Self, Self::Error> {
        lease.into_record()
    }
}

impl TryFrom<LegacyTenant> for Tenant {
    type Error = RecordError;

    fn try_from(tenant: LegacyTenant) -> Result<Self, Self::Error> {
        tenant.into_tenant()
    }
}

impl TryFrom<LegacyPayment> for Payment {
    type Error = RecordError;

    fn try_from(payment: LegacyPayment) -> Result<Self, Self::Error> {
        payment.into_payment()
    }
}

impl TryFrom<LegacyProperty> for Property {
    type Error = RecordError;

    fn try_from(property: LegacyProperty) -> Result<Self, Self::Error> {
        property.into_property()
    }
}

fn record_id(raw: Option<u64>) -> RecordId {
    raw.map(RecordId::new).unwrap_or(RecordId::UNASSIGNED)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Reads a number stored either as JSON number or as a numeric string.
fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .trim_start_matches('$')
                .chars()
                .filter(|c| *c != ',')
                .collect();
            cleaned.parse().ok()
        }
        _ => None,
    }
}
