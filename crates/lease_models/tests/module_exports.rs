//! Integration tests for module exports.

#[test]
fn test_escalation_exports() {
    use lease_models::escalation::{
        build_schedule, EscalationRule, LeaseTerms, RentSchedule, ScheduleBuilder, ScheduleError,
        ScheduleRow, Term,
    };
    use lease_core::types::{Date, Money};

    let terms = LeaseTerms::new(Date::from_ymd(2024, 1, 1).unwrap(), Money::from_cents(1_000));
    let schedule: RentSchedule = build_schedule(&terms).unwrap();
    let row: &ScheduleRow = &schedule.rows()[0];
    assert_eq!(row.term, Term::Base);
    assert!(EscalationRule::default().is_none());

    let err: ScheduleError = ScheduleBuilder::new().build().unwrap_err();
    assert!(matches!(err, ScheduleError::MissingField { .. }));
}

#[test]
fn test_records_exports() {
    use lease_models::records::legacy::LegacyLease;
    use lease_models::records::{
        BookSnapshot, LeaseRecord, Payment, PersonName, Property, RecordError, Tenant,
    };

    let _: fn(&str) -> Result<BookSnapshot, RecordError> = BookSnapshot::from_json;
    let _: fn(&str) -> Result<LegacyLease, RecordError> = LegacyLease::from_json;
    let tenant = Tenant::new(PersonName::from_full_name("Mary Ann Smith"));
    assert_eq!(tenant.name.sort_key(), "Smith, Mary Ann");
    assert_eq!(Property::new("A", "B").units, 1);
    let _ = std::mem::size_of::<LeaseRecord>() + std::mem::size_of::<Payment>();
}

#[test]
fn test_repository_exports() {
    use lease_models::records::Property;
    use lease_models::repository::{
        BookError, InMemoryRepository, LeaseBook, Record, RecordId, Repository, RepositoryError,
    };

    let mut repo = InMemoryRepository::<Property>::new();
    let id: RecordId = repo.add(Property::new("Loft", ""));
    assert_eq!(Property::COLLECTION, "property");

    let missing: Result<Property, RepositoryError> = repo.get(RecordId::new(id.get() + 1));
    assert!(missing.is_err());

    let book = LeaseBook::in_memory();
    let err: BookError = book.schedule_for(id).unwrap_err();
    assert!(matches!(err, BookError::Repository(RepositoryError::NotFound { .. })));
}
