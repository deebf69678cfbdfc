//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string, e.g. `skyhop 0.1.0 (2026-10-16 abc1234)`.
pub fn version_line() -> String {
    format!(
        "skyhop {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
