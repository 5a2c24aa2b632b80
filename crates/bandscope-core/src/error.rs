//! Error types for band table construction and configuration loading.
//!
//! Lookups never fail: an unknown channel is an absent result, not an
//! error. These types only cover building a resolver from caller data.

use thiserror::Error;

use crate::table::Rat;

// ── Table Errors ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{0} band table has no entries")]
    EmptyTable(Rat),
    #[error("{rat} band {band}: dl_min {dl_min} exceeds dl_max {dl_max}")]
    InvertedRange {
        rat: Rat,
        band: u16,
        dl_min: u32,
        dl_max: u32,
    },
    #[error("{rat} band {band} is listed more than once")]
    DuplicateBand { rat: Rat, band: u16 },
    #[error("NR band table is missing band 257 (millimeter-wave anchor)")]
    MissingMmWaveAnchor,
    #[error("expected an {expected} band table, got {got}")]
    WrongRat { expected: Rat, got: Rat },
}

// ── Config Errors ───────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Toml(String),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("refarm threshold must be a positive finite MHz value, got {0}")]
    InvalidThreshold(f64),
    #[error(transparent)]
    Table(#[from] TableError),
}
