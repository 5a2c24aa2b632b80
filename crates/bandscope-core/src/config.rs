//! TOML configuration for building a [`BandResolver`].
//!
//! ```toml
//! version = 1
//! refarm_threshold_mhz = 3600.0
//!
//! # Optional. Replaces the built-in NR table; order is lookup priority.
//! [[nr_bands]]
//! band = 78
//! dl_min = 620000
//! dl_max = 653333
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::resolver::{BandResolver, REFARM_THRESHOLD_MHZ};
use crate::table::{BandRange, BandTable, Rat};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfigInput {
    pub version: u32,
    pub refarm_threshold_mhz: Option<f64>,
    pub lte_bands: Option<Vec<BandRange>>,
    pub nr_bands: Option<Vec<BandRange>>,
}

impl ResolverConfigInput {
    pub fn resolve(self) -> Result<BandResolver, ConfigError> {
        let version = if self.version == 0 {
            CONFIG_VERSION
        } else {
            self.version
        };
        if version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(version));
        }

        let threshold = self.refarm_threshold_mhz.unwrap_or(REFARM_THRESHOLD_MHZ);
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        let lte = match self.lte_bands {
            Some(ranges) => BandTable::new(Rat::Lte, ranges)?,
            None => BandTable::lte(),
        };
        let nr = match self.nr_bands {
            Some(ranges) => BandTable::new(Rat::Nr, ranges)?,
            None => BandTable::nr(),
        };

        tracing::debug!(
            lte_entries = lte.len(),
            nr_entries = nr.len(),
            refarm_threshold_mhz = threshold,
            "resolver config loaded"
        );
        Ok(BandResolver::new(lte, nr, threshold)?)
    }
}

impl BandResolver {
    /// Build a resolver from TOML. Blank input yields the built-in resolver.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(BandResolver::builtin());
        }
        let parsed: ResolverConfigInput =
            toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()))?;
        parsed.resolve()
    }
}
