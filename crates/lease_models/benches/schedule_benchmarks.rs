//! Criterion benchmarks for the rent schedule builder and lease book lookups.
//!
//! Measures schedule construction across lease lengths and rule kinds, and
//! per-lease lookups in a populated in-memory book.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lease_core::types::{Date, Money};
use lease_models::escalation::{build_schedule, EscalationRule, LeaseTerms};
use lease_models::records::{LeaseRecord, Payment, PersonName, Property, Tenant};
use lease_models::repository::{LeaseBook, RecordId};

/// Terms with `base_years` base years and as many option years.
fn terms(base_years: u32, rule: EscalationRule) -> LeaseTerms {
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let end = start.add_years(base_years).unwrap().previous_day().unwrap();
    LeaseTerms::new(start, Money::from_cents(250_000))
        .with_end_date(end)
        .with_annual_increase(rule)
        .with_option_years(base_years as i32, rule)
}

/// Benchmark schedule construction for flat and percentage rules.
fn bench_build_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_schedule");

    for years in [1, 5, 25] {
        let flat = terms(years, EscalationRule::Flat(Money::from_cents(5_000)));
        group.bench_with_input(BenchmarkId::new("flat", years), &flat, |b, terms| {
            b.iter(|| build_schedule(black_box(terms)).unwrap());
        });

        let percent = terms(years, EscalationRule::Percent(3.5));
        group.bench_with_input(BenchmarkId::new("percent", years), &percent, |b, terms| {
            b.iter(|| build_schedule(black_box(terms)).unwrap());
        });
    }

    group.finish();
}

/// Build a book with `n` leases, each with twelve payments.
fn populated_book(n: usize) -> (LeaseBook, Vec<RecordId>) {
    let mut book = LeaseBook::in_memory();
    let property = book.add_property(Property::new("Bench Tower", "1 Bench St"));
    let mut leases = Vec::with_capacity(n);

    for i in 0..n {
        let tenant = book.add_tenant(Tenant::new(PersonName::new("Tenant", i.to_string())));
        let lease = book
            .add_lease(LeaseRecord::new(
                property,
                tenant,
                terms(3, EscalationRule::Percent(4.0)),
            ))
            .unwrap();
        for month in 1..=12 {
            let paid_on = Date::from_ymd(2024, month, 1).unwrap();
            book.record_payment(Payment::new(lease, paid_on, Money::from_cents(250_000)))
                .unwrap();
        }
        leases.push(lease);
    }

    (book, leases)
}

/// Benchmark per-lease lookups in a populated book.
fn bench_book_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_lookups");

    for size in [10, 100] {
        let (book, leases) = populated_book(size);
        let last = leases[leases.len() - 1];

        group.bench_with_input(BenchmarkId::new("schedule_for", size), &last, |b, id| {
            b.iter(|| book.schedule_for(black_box(*id)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("total_paid", size), &last, |b, id| {
            b.iter(|| book.total_paid(black_box(*id)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_schedule, bench_book_lookups);
criterion_main!(benches);
