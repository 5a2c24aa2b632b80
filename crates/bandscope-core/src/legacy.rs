//! String-sentinel surface for callers that predate [`BandResolver`].
//!
//! Channel numbers arrive as the platform's signed 32-bit integer. Absence
//! is signalled in-band exactly as the older consumers expect:
//!
//! | Function                       | No-match value |
//! |--------------------------------|----------------|
//! | [`resolve_lte_band`]           | `"null"`       |
//! | [`resolve_nr_band`]            | `"nnull"`      |
//! | [`resolve_nr_band_all`]        | `[]`           |
//! | [`channel_to_frequency_mhz`]   | `-1.0`         |
//! | [`is_repurposed_lte_frequency`]| `true`         |
//!
//! New code should use [`BandResolver`] and its `Option` results.

use crate::resolver::BandResolver;

static BUILTIN: BandResolver = BandResolver::builtin();

const NO_BAND: &str = "null";

/// Frequency reported for a channel outside the NR raster.
pub const NO_FREQUENCY_MHZ: f64 = -1.0;

fn channel(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok()
}

/// Legacy surface over any resolver, e.g. one loaded from config.
#[derive(Debug, Clone, Copy)]
pub struct LegacyView<'a> {
    resolver: &'a BandResolver,
}

impl BandResolver {
    pub fn legacy(&self) -> LegacyView<'_> {
        LegacyView { resolver: self }
    }
}

impl LegacyView<'_> {
    pub fn resolve_lte_band(&self, earfcn: i32) -> String {
        match channel(earfcn).and_then(|c| self.resolver.lte_band(c)) {
            Some(band) => band.number.to_string(),
            None => NO_BAND.to_string(),
        }
    }

    pub fn resolve_nr_band(&self, nrarfcn: i32) -> String {
        match channel(nrarfcn).and_then(|c| self.resolver.nr_band(c)) {
            Some(band) => format!("n{}", band.number),
            None => format!("n{NO_BAND}"),
        }
    }

    pub fn resolve_nr_band_all(&self, nrarfcn: i32) -> Vec<String> {
        channel(nrarfcn)
            .map(|c| {
                self.resolver
                    .nr_bands(c)
                    .into_iter()
                    .map(|band| format!("n{}", band.number))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_millimeter_wave(&self, nrarfcn: i32) -> bool {
        channel(nrarfcn).is_some_and(|c| self.resolver.is_mm_wave(c))
    }

    pub fn channel_to_frequency_mhz(&self, nrarfcn: i32) -> f64 {
        channel(nrarfcn)
            .and_then(|c| self.resolver.frequency_mhz(c))
            .unwrap_or(NO_FREQUENCY_MHZ)
    }

    pub fn is_repurposed_lte_frequency(&self, nrarfcn: i32) -> bool {
        self.channel_to_frequency_mhz(nrarfcn) < self.resolver.refarm_threshold_mhz()
    }
}

/// LTE band number as decimal text, e.g. `"3"`, or `"null"`.
pub fn resolve_lte_band(earfcn: i32) -> String {
    BUILTIN.legacy().resolve_lte_band(earfcn)
}

/// NR band as `"n78"`, or `"nnull"` when nothing matches.
pub fn resolve_nr_band(nrarfcn: i32) -> String {
    BUILTIN.legacy().resolve_nr_band(nrarfcn)
}

/// Every matching NR band as `"nXX"`, in table order.
pub fn resolve_nr_band_all(nrarfcn: i32) -> Vec<String> {
    BUILTIN.legacy().resolve_nr_band_all(nrarfcn)
}

pub fn is_millimeter_wave(nrarfcn: i32) -> bool {
    BUILTIN.legacy().is_millimeter_wave(nrarfcn)
}

/// Frequency in MHz to two decimals, or [`NO_FREQUENCY_MHZ`].
pub fn channel_to_frequency_mhz(nrarfcn: i32) -> f64 {
    BUILTIN.legacy().channel_to_frequency_mhz(nrarfcn)
}

/// Frequency below 3600 MHz. An invalid channel reports `true` because its
/// sentinel frequency is negative.
pub fn is_repurposed_lte_frequency(nrarfcn: i32) -> bool {
    BUILTIN.legacy().is_repurposed_lte_frequency(nrarfcn)
}
