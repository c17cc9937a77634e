//! Domain model for daily fitness diary records.
//!
//! # Responsibility
//! - Define the canonical record shape persisted and displayed by the app.
//! - Own raw-input parsing and validation for the three daily gauges.
//!
//! # Invariants
//! - `id` doubles as the creation timestamp and the creation-order sort key.
//! - Gauge values are non-negative by construction (`u32`).

pub mod record;
