//! # lease_models (L2: Lease Logic)
//!
//! Rent escalation schedules, lease records, and their storage.
//!
//! This crate provides:
//! - Escalation rules, lease terms, and the rent schedule builder
//! - Canonical property, tenant, lease, and payment records
//! - Migration from loose saved record shapes
//! - A repository interface with an in-memory implementation
//! - The `LeaseBook` facade joining the four collections
//!
//! ## Design Principles
//!
//! - **Pure schedule builder**: no I/O, no shared state
//! - **Integer-cent money** rounded after every escalation step
//! - **Storage behind a trait** so the book never depends on a backend

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod escalation;
pub mod records;
pub mod repository;
