//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `fitdiary_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("fitdiary_core ping={}", fitdiary_core::ping());
    println!("fitdiary_core version={}", fitdiary_core::core_version());
}
