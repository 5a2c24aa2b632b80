//! Cellular band identification from raw channel numbers.
//!
//! This crate contains:
//! - **Band tables** — 3GPP downlink channel ranges for LTE (EARFCN) and NR (NR-ARFCN)
//! - **Resolver** — band lookup, mmWave test, refarmed-LTE detection
//! - **Raster** — NR-ARFCN to MHz per TS 38.104 §5.4.2.1
//! - **Legacy** — string-sentinel functions for older callers
//! - **Config** — TOML overrides for tables and the refarm threshold

pub mod config;
pub mod error;
pub mod legacy;
pub mod raster;
pub mod resolver;
pub mod table;

pub use error::{ConfigError, TableError};
pub use resolver::{Band, BandResolver, LteCellReport, NrCellReport, NrSpectrum};
pub use table::{BandRange, BandTable, Rat};
