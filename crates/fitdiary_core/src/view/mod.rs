//! Presentation derivations over the record collection.
//!
//! # Responsibility
//! - Produce sorted list views and the chart series from collection
//!   snapshots.
//!
//! # Invariants
//! - Derivations are pure: the input collection is never mutated, and
//!   re-running on the same snapshot yields the same output.

pub mod projection;
