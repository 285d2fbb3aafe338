//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `campusdir_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("campusdir_core ping={}", campusdir_core::ping());
    println!("campusdir_core version={}", campusdir_core::core_version());
}
