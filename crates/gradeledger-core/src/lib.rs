//! gradeledger-core — record store, authorization, and deterministic
//! scoring for student academic records.
//!
//! This crate defines the keyed student table, the allow-list
//! authorization registry, the pure integer scoring engine, the read-only
//! query layer, and the audit event channel that the rest of the system
//! builds on.
//!
//! All mutations go through [`store::RecordStore`] methods taking
//! `&mut self`, which serializes them in-process; share a store across
//! threads by wrapping it in a `Mutex`. Reads borrow immutably and return
//! owned snapshots.

pub mod audit;
pub mod auth;
pub mod error;
pub mod metrics;
pub mod model;
pub mod query;
pub mod store;
