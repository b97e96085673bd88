//! Canonical record shapes for properties, tenants, leases, and payments.

use lease_core::types::{Date, Money};
use serde::{Deserialize, Serialize};

use super::name::PersonName;
use crate::escalation::LeaseTerms;
use crate::repository::{Record, RecordId};

/// A rental property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Repository id.
    #[serde(default)]
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Number of rentable units.
    #[serde(default = "default_units")]
    pub units: u32,
}

fn default_units() -> u32 {
    1
}

impl Property {
    /// Creates an unsaved single-unit property.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name: name.into(),
            address: address.into(),
            units: default_units(),
        }
    }
}

/// A tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Repository id.
    #[serde(default)]
    pub id: RecordId,
    /// Structured name.
    pub name: PersonName,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Tenant {
    /// Creates an unsaved tenant with no contact details.
    pub fn new(name: PersonName) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name,
            email: None,
            phone: None,
        }
    }
}

/// A lease tying a tenant to a property under some rent terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseRecord {
    /// Repository id.
    #[serde(default)]
    pub id: RecordId,
    /// Leased property.
    pub property_id: RecordId,
    /// Leasing tenant.
    pub tenant_id: RecordId,
    /// Unit label within the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Rent terms.
    pub terms: LeaseTerms,
}

impl LeaseRecord {
    /// Creates an unsaved lease.
    pub fn new(property_id: RecordId, tenant_id: RecordId, terms: LeaseTerms) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            property_id,
            tenant_id,
            unit: None,
            terms,
        }
    }
}

/// A rent payment received against a lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Repository id.
    #[serde(default)]
    pub id: RecordId,
    /// Lease the payment applies to.
    pub lease_id: RecordId,
    /// Date received.
    pub paid_on: Date,
    /// Amount received.
    pub amount: Money,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl Payment {
    /// Creates an unsaved payment.
    pub fn new(lease_id: RecordId, paid_on: Date, amount: Money) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            lease_id,
            paid_on,
            amount,
            memo: None,
        }
    }
}

macro_rules! impl_record {
    ($ty:ty, $collection:literal) => {
        impl Record for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> RecordId {
                self.id
            }

            fn set_id(&mut self, id: RecordId) {
                self.id = id;
            }
        }
    };
}

impl_record!(Property, "property");
impl_record!(Tenant, "tenant");
impl_record!(LeaseRecord, "lease");
impl_record!(Payment, "payment");
