//! The lease book: all four collections plus the lookups that join them.

use lease_core::types::{Money, MoneyError};
use thiserror::Error;
use tracing::debug;

use super::{InMemoryRepository, Record, RecordId, Repository, RepositoryError};
use crate::escalation::{build_schedule, RentSchedule, ScheduleError};
use crate::records::{BookSnapshot, LeaseRecord, Payment, Property, RecordError, Tenant};

/// Errors raised by [`LeaseBook`] operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookError {
    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A saved record could not be migrated.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Lease terms were rejected.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Money arithmetic overflowed.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A record refers to another record that does not exist.
    #[error("Referenced {collection} record {id} does not exist")]
    DanglingReference {
        /// Collection of the missing record.
        collection: &'static str,
        /// The missing id.
        id: RecordId,
    },

    /// A record cannot be removed while others refer to it.
    #[error("{collection} record {id} is referenced by {dependents} lease(s)")]
    InUse {
        /// Collection of the record being removed.
        collection: &'static str,
        /// Its id.
        id: RecordId,
        /// Number of leases referring to it.
        dependents: usize,
    },

    /// The payment cannot be recorded.
    #[error("Invalid payment: {0}")]
    InvalidPayment(String),
}

/// Properties, tenants, leases, and payments behind injected repositories.
///
/// References between collections are checked on insert, so every lease in
/// the book points at an existing property and tenant, and every payment at
/// an existing lease.
///
/// # Examples
///
/// ```
/// use lease_core::types::{Date, Money};
/// use lease_models::escalation::{EscalationRule, LeaseTerms};
/// use lease_models::records::{LeaseRecord, PersonName, Property, Tenant};
/// use lease_models::repository::LeaseBook;
///
/// let mut book = LeaseBook::in_memory();
/// let property = book.add_property(Property::new("Elm Court", "12 Elm St"));
/// let tenant = book.add_tenant(Tenant::new(PersonName::new("Jane", "Doe")));
///
/// let terms = LeaseTerms::new(Date::from_ymd(2024, 1, 1).unwrap(), Money::from_cents(200_000))
///     .with_end_date(Date::from_ymd(2026, 12, 31).unwrap())
///     .with_annual_increase(EscalationRule::Percent(5.0));
/// let lease = book.add_lease(LeaseRecord::new(property, tenant, terms)).unwrap();
///
/// let schedule = book.schedule_for(lease).unwrap();
/// assert_eq!(schedule.final_rent(), Money::from_cents(220_500));
/// ```
pub struct LeaseBook {
    properties: Box<dyn Repository<Property>>,
    tenants: Box<dyn Repository<Tenant>>,
    leases: Box<dyn Repository<LeaseRecord>>,
    payments: Box<dyn Repository<Payment>>,
}

impl LeaseBook {
    /// Creates a book over the given repositories.
    pub fn new(
        properties: Box<dyn Repository<Property>>,
        tenants: Box<dyn Repository<Tenant>>,
        leases: Box<dyn Repository<LeaseRecord>>,
        payments: Box<dyn Repository<Payment>>,
    ) -> Self {
        Self {
            properties,
            tenants,
            leases,
            payments,
        }
    }

    /// Creates an empty book backed by [`InMemoryRepository`].
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(InMemoryRepository::new()),
            Box::new(InMemoryRepository::new()),
            Box::new(InMemoryRepository::new()),
            Box::new(InMemoryRepository::new()),
        )
    }

    /// Migrates a saved snapshot into a fresh in-memory book.
    pub fn from_snapshot(snapshot: BookSnapshot) -> Result<Self, BookError> {
        let mut book = Self::in_memory();
        book.load_snapshot(snapshot)?;
        Ok(book)
    }

    /// Property repository.
    pub fn properties(&self) -> &dyn Repository<Property> {
        self.properties.as_ref()
    }

    /// Tenant repository.
    pub fn tenants(&self) -> &dyn Repository<Tenant> {
        self.tenants.as_ref()
    }

    /// Lease repository.
    pub fn leases(&self) -> &dyn Repository<LeaseRecord> {
        self.leases.as_ref()
    }

    /// Payment repository.
    pub fn payments(&self) -> &dyn Repository<Payment> {
        self.payments.as_ref()
    }

    /// Stores a property and returns its id.
    pub fn add_property(&mut self, property: Property) -> RecordId {
        self.properties.add(property)
    }

    /// Stores a tenant and returns its id.
    pub fn add_tenant(&mut self, tenant: Tenant) -> RecordId {
        self.tenants.add(tenant)
    }

    /// Stores a lease after checking its references and terms.
    ///
    /// # Errors
    ///
    /// - `DanglingReference` when the property or tenant does not exist
    /// - `Schedule` when the terms fail validation
    pub fn add_lease(&mut self, lease: LeaseRecord) -> Result<RecordId, BookError> {
        self.check_lease(&lease)?;
        let id = self.leases.add(lease);
        Ok(id)
    }

    /// Replaces a stored lease, re-checking references and terms.
    pub fn update_lease(&mut self, lease: LeaseRecord) -> Result<(), BookError> {
        self.check_lease(&lease)?;
        self.leases.update(lease)?;
        Ok(())
    }

    /// Stores a payment against an existing lease.
    ///
    /// # Errors
    ///
    /// - `DanglingReference` when the lease does not exist
    /// - `InvalidPayment` for a negative amount
    pub fn record_payment(&mut self, payment: Payment) -> Result<RecordId, BookError> {
        self.check_payment(&payment)?;
        let id = self.payments.add(payment);
        Ok(id)
    }

    /// Removes a lease together with its payments.
    pub fn remove_lease(&mut self, id: RecordId) -> Result<LeaseRecord, BookError> {
        let lease = self.leases.remove(id)?;
        let orphaned = self.payments.find(&|p: &Payment| p.lease_id == id);
        for payment in &orphaned {
            self.payments.remove(payment.id)?;
        }
        debug!(lease = %id, payments = orphaned.len(), "removed lease");
        Ok(lease)
    }

    /// Removes a property no lease refers to.
    pub fn remove_property(&mut self, id: RecordId) -> Result<Property, BookError> {
        let dependents = self.leases_for_property(id).len();
        if dependents > 0 {
            return Err(BookError::InUse {
                collection: Property::COLLECTION,
                id,
                dependents,
            });
        }
        Ok(self.properties.remove(id)?)
    }

    /// Removes a tenant no lease refers to.
    pub fn remove_tenant(&mut self, id: RecordId) -> Result<Tenant, BookError> {
        let dependents = self.leases_for_tenant(id).len();
        if dependents > 0 {
            return Err(BookError::InUse {
                collection: Tenant::COLLECTION,
                id,
                dependents,
            });
        }
        Ok(self.tenants.remove(id)?)
    }

    /// Returns the lease with `id`.
    pub fn lease(&self, id: RecordId) -> Result<LeaseRecord, BookError> {
        Ok(self.leases.get(id)?)
    }

    /// Builds the rent schedule of a stored lease.
    pub fn schedule_for(&self, lease_id: RecordId) -> Result<RentSchedule, BookError> {
        let lease = self.leases.get(lease_id)?;
        Ok(build_schedule(&lease.terms)?)
    }

    /// Returns the tenant of a stored lease.
    pub fn tenant_for(&self, lease_id: RecordId) -> Result<Tenant, BookError> {
        let lease = self.leases.get(lease_id)?;
        Ok(self.tenants.get(lease.tenant_id)?)
    }

    /// Returns the property of a stored lease.
    pub fn property_for(&self, lease_id: RecordId) -> Result<Property, BookError> {
        let lease = self.leases.get(lease_id)?;
        Ok(self.properties.get(lease.property_id)?)
    }

    /// Leases on a property, in id order.
    pub fn leases_for_property(&self, property_id: RecordId) -> Vec<LeaseRecord> {
        self.leases
            .find(&|l: &LeaseRecord| l.property_id == property_id)
    }

    /// Leases held by a tenant, in id order.
    pub fn leases_for_tenant(&self, tenant_id: RecordId) -> Vec<LeaseRecord> {
        self.leases.find(&|l: &LeaseRecord| l.tenant_id == tenant_id)
    }

    /// Payments against a lease, oldest first.
    pub fn payments_for(&self, lease_id: RecordId) -> Result<Vec<Payment>, BookError> {
        if !self.leases.contains(lease_id) {
            return Err(RepositoryError::NotFound {
                collection: LeaseRecord::COLLECTION,
                id: lease_id,
            }
            .into());
        }
        let mut payments = self.payments.find(&|p: &Payment| p.lease_id == lease_id);
        payments.sort_by_key(|p| (p.paid_on, p.id));
        Ok(payments)
    }

    /// Sum of all payments against a lease.
    pub fn total_paid(&self, lease_id: RecordId) -> Result<Money, BookError> {
        let payments = self.payments_for(lease_id)?;
        Ok(Money::checked_sum(payments.iter().map(|p| p.amount))?)
    }

    /// Migrates every record in `snapshot` into this book.
    ///
    /// Collections load in dependency order (properties, tenants, leases,
    /// payments). Records carrying a saved id keep it so references inside
    /// the snapshot stay valid; records without one get a fresh id after all
    /// saved ids of their collection are in place.
    ///
    /// Every record is migrated before any is stored, so a record that fails
    /// migration leaves the book untouched. Reference and id errors surface
    /// while storing: records stored before the failing one stay in the
    /// book. Use [`LeaseBook::from_snapshot`] to load all-or-nothing.
    pub fn load_snapshot(&mut self, snapshot: BookSnapshot) -> Result<(), BookError> {
        let BookSnapshot {
            properties,
            tenants,
            leases,
            payments,
        } = snapshot;

        let properties = migrate::<_, Property>(properties)?;
        let tenants = migrate::<_, Tenant>(tenants)?;
        let leases = migrate::<_, LeaseRecord>(leases)?;
        let payments = migrate::<_, Payment>(payments)?;

        for property in place_saved_first(properties) {
            store(self.properties.as_mut(), property)?;
        }
        for tenant in place_saved_first(tenants) {
            store(self.tenants.as_mut(), tenant)?;
        }
        for lease in place_saved_first(leases) {
            self.check_lease(&lease)?;
            store(self.leases.as_mut(), lease)?;
        }
        for payment in place_saved_first(payments) {
            self.check_payment(&payment)?;
            store(self.payments.as_mut(), payment)?;
        }

        debug!(
            properties = self.properties.len(),
            tenants = self.tenants.len(),
            leases = self.leases.len(),
            payments = self.payments.len(),
            "loaded book snapshot"
        );
        Ok(())
    }

    fn check_lease(&self, lease: &LeaseRecord) -> Result<(), BookError> {
        if !self.properties.contains(lease.property_id) {
            return Err(BookError::DanglingReference {
                collection: Property::COLLECTION,
                id: lease.property_id,
            });
        }
        if !self.tenants.contains(lease.tenant_id) {
            return Err(BookError::DanglingReference {
                collection: Tenant::COLLECTION,
                id: lease.tenant_id,
            });
        }
        lease.terms.validate()?;
        Ok(())
    }

    fn check_payment(&self, payment: &Payment) -> Result<(), BookError> {
        if !self.leases.contains(payment.lease_id) {
            return Err(BookError::DanglingReference {
                collection: LeaseRecord::COLLECTION,
                id: payment.lease_id,
            });
        }
        if payment.amount.is_negative() {
            return Err(BookError::InvalidPayment(format!(
                "amount {} is negative",
                payment.amount
            )));
        }
        Ok(())
    }
}

fn migrate<L, T>(saved: Vec<L>) -> Result<Vec<T>, RecordError>
where
    T: TryFrom<L, Error = RecordError>,
{
    saved.into_iter().map(T::try_from).collect()
}

/// Orders records so those with saved ids are restored before fresh ones are added.
fn place_saved_first<T: Record>(mut records: Vec<T>) -> Vec<T> {
    records.sort_by_key(|r| !r.id().is_assigned());
    records
}

fn store<T: Record>(repo: &mut dyn Repository<T>, record: T) -> Result<RecordId, RepositoryError> {
    if record.id().is_assigned() {
        let id = record.id();
        repo.restore(record)?;
        Ok(id)
    } else {
        Ok(repo.add(record))
    }
}
