//! Record lifecycle orchestration.
//!
//! # Responsibility
//! - Own the in-memory collection and the create/edit mode for one user
//!   session.
//! - Persist the full collection through the store after every successful
//!   mutation.
//!
//! # Invariants
//! - Validation failures never mutate the collection or trigger a save.
//! - Mode transitions are exhaustive over `Mode::{Creating, Editing}`.

pub mod diary;
