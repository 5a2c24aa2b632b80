//! # Band Resolver
//!
//! Pure lookups from channel numbers to bands and derived facts.
//!
//! ```
//! use bandscope_core::resolver::{BandResolver, NrSpectrum};
//!
//! let resolver = BandResolver::builtin();
//! assert_eq!(resolver.lte_band(1850).unwrap().to_string(), "B3");
//! assert_eq!(resolver.nr_band(643334).unwrap().to_string(), "n78");
//! assert_eq!(resolver.classify(157690), Some(NrSpectrum::Refarmed));
//! ```
//!
//! A resolver holds no mutable state. One instance can be shared across
//! threads and every call with the same input returns the same output.

use std::fmt;

use serde::Serialize;

use crate::error::TableError;
use crate::raster;
use crate::table::{BandRange, BandTable, NR_MM_WAVE_FLOOR, Rat};

/// NR carriers below this frequency sit in spectrum first licensed for LTE.
pub const REFARM_THRESHOLD_MHZ: f64 = 3600.0;

// ─── Band ───────────────────────────────────────────────────────────────────

/// A resolved band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Band {
    pub rat: Rat,
    /// 3GPP band number.
    pub number: u16,
}

impl Band {
    fn from_range(rat: Rat, range: &BandRange) -> Self {
        Band {
            rat,
            number: range.band,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.rat {
            Rat::Lte => "B",
            Rat::Nr => "n",
        };
        write!(f, "{}{}", prefix, self.number)
    }
}

// ─── Spectrum Class ─────────────────────────────────────────────────────────

/// Where an NR carrier sits in the spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NrSpectrum {
    /// Below the refarm threshold: NR on a former LTE frequency.
    Refarmed,
    /// New sub-6 GHz NR spectrum.
    Sub6,
    /// FR2: at or above the n257 floor, or on the 60 kHz raster.
    MmWave,
}

impl fmt::Display for NrSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NrSpectrum::Refarmed => write!(f, "refarmed"),
            NrSpectrum::Sub6 => write!(f, "sub-6"),
            NrSpectrum::MmWave => write!(f, "mmWave"),
        }
    }
}

// ─── Reports ────────────────────────────────────────────────────────────────

/// Everything the resolver knows about an LTE carrier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LteCellReport {
    pub earfcn: u32,
    pub band: Option<Band>,
}

/// Everything the resolver knows about an NR carrier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NrCellReport {
    pub nrarfcn: u32,
    /// Preferred band.
    pub band: Option<Band>,
    /// Every band whose range holds the channel, in table order.
    pub bands: Vec<Band>,
    pub frequency_mhz: Option<f64>,
    pub spectrum: Option<NrSpectrum>,
}

// ─── Resolver ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct BandResolver {
    lte: BandTable,
    nr: BandTable,
    mm_wave_floor: u32,
    refarm_threshold_mhz: f64,
}

impl Default for BandResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BandResolver {
    /// Resolver over the built-in 3GPP tables.
    pub const fn builtin() -> Self {
        BandResolver {
            lte: BandTable::lte(),
            nr: BandTable::nr(),
            mm_wave_floor: NR_MM_WAVE_FLOOR,
            refarm_threshold_mhz: REFARM_THRESHOLD_MHZ,
        }
    }

    /// Resolver over custom tables.
    ///
    /// Fails if `lte` is not an LTE table, `nr` is not an NR table, or `nr`
    /// lacks band 257.
    pub fn new(
        lte: BandTable,
        nr: BandTable,
        refarm_threshold_mhz: f64,
    ) -> Result<Self, TableError> {
        if lte.rat() != Rat::Lte {
            return Err(TableError::WrongRat {
                expected: Rat::Lte,
                got: lte.rat(),
            });
        }
        if nr.rat() != Rat::Nr {
            return Err(TableError::WrongRat {
                expected: Rat::Nr,
                got: nr.rat(),
            });
        }
        let mm_wave_floor = nr.mm_wave_floor().ok_or(TableError::MissingMmWaveAnchor)?;
        Ok(BandResolver {
            lte,
            nr,
            mm_wave_floor,
            refarm_threshold_mhz,
        })
    }

    pub fn lte_table(&self) -> &BandTable {
        &self.lte
    }

    pub fn nr_table(&self) -> &BandTable {
        &self.nr
    }

    pub fn refarm_threshold_mhz(&self) -> f64 {
        self.refarm_threshold_mhz
    }

    /// LTE band for an EARFCN. First match in table order.
    pub fn lte_band(&self, earfcn: u32) -> Option<Band> {
        self.lte
            .first_match(earfcn)
            .map(|r| Band::from_range(Rat::Lte, r))
    }

    /// Preferred NR band for an NR-ARFCN. First match in table order, so
    /// overlaps resolve n28 over n20 and n78 over n77.
    pub fn nr_band(&self, nrarfcn: u32) -> Option<Band> {
        self.nr
            .first_match(nrarfcn)
            .map(|r| Band::from_range(Rat::Nr, r))
    }

    /// Every NR band holding the NR-ARFCN, in table order.
    pub fn nr_bands(&self, nrarfcn: u32) -> Vec<Band> {
        self.nr
            .all_matches(nrarfcn)
            .map(|r| Band::from_range(Rat::Nr, r))
            .collect()
    }

    /// Threshold test against the n257 floor, not a range lookup.
    pub fn is_mm_wave(&self, nrarfcn: u32) -> bool {
        nrarfcn >= self.mm_wave_floor
    }

    /// Reference frequency in MHz, two decimals. `None` past the raster.
    pub fn frequency_mhz(&self, nrarfcn: u32) -> Option<f64> {
        raster::nr_arfcn_to_mhz(nrarfcn)
    }

    /// Whether the carrier sits below the refarm threshold. `None` when the
    /// channel has no frequency.
    pub fn is_refarmed_lte(&self, nrarfcn: u32) -> Option<bool> {
        self.frequency_mhz(nrarfcn)
            .map(|mhz| mhz < self.refarm_threshold_mhz)
    }

    /// Spectrum class of an NR carrier.
    pub fn classify(&self, nrarfcn: u32) -> Option<NrSpectrum> {
        let mhz = self.frequency_mhz(nrarfcn)?;
        let class = if self.is_mm_wave(nrarfcn) || nrarfcn >= raster::FR2_FIRST_NR_ARFCN {
            NrSpectrum::MmWave
        } else if mhz < self.refarm_threshold_mhz {
            NrSpectrum::Refarmed
        } else {
            NrSpectrum::Sub6
        };
        tracing::trace!(nrarfcn, mhz, %class, "classified NR carrier");
        Some(class)
    }

    pub fn describe_lte(&self, earfcn: u32) -> LteCellReport {
        LteCellReport {
            earfcn,
            band: self.lte_band(earfcn),
        }
    }

    pub fn describe_nr(&self, nrarfcn: u32) -> NrCellReport {
        NrCellReport {
            nrarfcn,
            band: self.nr_band(nrarfcn),
            bands: self.nr_bands(nrarfcn),
            frequency_mhz: self.frequency_mhz(nrarfcn),
            spectrum: self.classify(nrarfcn),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn nr(number: u16) -> Band {
        Band {
            rat: Rat::Nr,
            number,
        }
    }

    #[test]
    fn band_display() {
        assert_eq!(nr(78).to_string(), "n78");
        let b3 = Band {
            rat: Rat::Lte,
            number: 3,
        };
        assert_eq!(b3.to_string(), "B3");
    }

    #[test]
    fn lte_lookup() {
        let r = BandResolver::builtin();
        assert_eq!(r.lte_band(1850).map(|b| b.number), Some(3));
        assert_eq!(r.lte_band(100).map(|b| b.number), Some(1));
        assert_eq!(r.lte_band(40340).map(|b| b.number), Some(41));
        assert_eq!(r.lte_band(300_000), None);
    }

    #[test]
    fn nr_overlap_prefers_declared_order() {
        let r = BandResolver::builtin();
        for ch in [155_600, 157_690, 159_630] {
            assert_eq!(r.nr_band(ch), Some(nr(28)), "channel {ch}");
        }
        // above n28, inside n20 only
        assert_eq!(r.nr_band(162_000), Some(nr(20)));
        assert_eq!(r.nr_band(643_334), Some(nr(78)));
        assert_eq!(r.nr_band(670_000), Some(nr(77)));
    }

    #[test]
    fn nr_bands_lists_every_match() {
        let r = BandResolver::builtin();
        assert_eq!(r.nr_bands(159_630), vec![nr(28), nr(20)]);
        assert_eq!(r.nr_bands(643_334), vec![nr(78), nr(77)]);
        assert_eq!(r.nr_bands(703_392), vec![nr(79)]);
        assert!(r.nr_bands(0).is_empty());
    }

    #[test]
    fn mm_wave_threshold() {
        let r = BandResolver::builtin();
        assert!(r.is_mm_wave(2_070_015));
        assert!(r.is_mm_wave(2_054_167));
        assert!(!r.is_mm_wave(2_054_166));
        assert!(!r.is_mm_wave(643_334));
    }

    #[test]
    fn mm_wave_is_a_threshold_not_a_lookup() {
        // n258 starts below n257 but only the n257 floor counts
        let r = BandResolver::builtin();
        assert_eq!(r.nr_band(2_030_000), Some(nr(258)));
        assert!(!r.is_mm_wave(2_030_000));
    }

    #[test]
    fn classify_counts_n258_below_n257_as_mm_wave() {
        let r = BandResolver::builtin();
        assert_eq!(r.classify(2_030_000), Some(NrSpectrum::MmWave));
    }

    #[test]
    fn refarm_check() {
        let r = BandResolver::builtin();
        assert_eq!(r.is_refarmed_lte(157_690), Some(true));
        assert_eq!(r.is_refarmed_lte(643_334), Some(false));
        assert_eq!(r.is_refarmed_lte(635_424), Some(true));
        assert_eq!(r.is_refarmed_lte(4_000_000), None);
    }

    #[test]
    fn classify_spectrum() {
        let r = BandResolver::builtin();
        assert_eq!(r.classify(157_690), Some(NrSpectrum::Refarmed));
        assert_eq!(r.classify(635_424), Some(NrSpectrum::Refarmed));
        assert_eq!(r.classify(643_334), Some(NrSpectrum::Sub6));
        assert_eq!(r.classify(2_070_015), Some(NrSpectrum::MmWave));
        assert_eq!(r.classify(4_000_000), None);
    }

    #[test]
    fn custom_threshold_moves_refarm_boundary() {
        let r = BandResolver::new(BandTable::lte(), BandTable::nr(), 3500.0).unwrap();
        assert_eq!(r.is_refarmed_lte(635_424), Some(false));
        assert_eq!(r.classify(635_424), Some(NrSpectrum::Sub6));
    }

    #[test]
    fn new_rejects_swapped_tables() {
        let err = BandResolver::new(BandTable::nr(), BandTable::nr(), REFARM_THRESHOLD_MHZ)
            .unwrap_err();
        assert_eq!(
            err,
            TableError::WrongRat {
                expected: Rat::Lte,
                got: Rat::Nr,
            }
        );

        let err = BandResolver::new(BandTable::lte(), BandTable::lte(), REFARM_THRESHOLD_MHZ)
            .unwrap_err();
        assert_eq!(
            err,
            TableError::WrongRat {
                expected: Rat::Nr,
                got: Rat::Lte,
            }
        );
    }

    #[test]
    fn new_accepts_validated_tables() {
        let nr = BandTable::new(
            Rat::Nr,
            vec![
                BandRange::new(78, 620000, 653333),
                BandRange::new(257, 2054167, 2104166),
            ],
        )
        .unwrap();
        let r = BandResolver::new(BandTable::lte(), nr, REFARM_THRESHOLD_MHZ).unwrap();
        assert!(r.is_mm_wave(2_054_167));
        assert!(!r.is_mm_wave(2_054_166));
    }

    #[test]
    fn describe_nr_bundles_everything() {
        let report = BandResolver::builtin().describe_nr(159_630);
        assert_eq!(report.band, Some(nr(28)));
        assert_eq!(report.bands, vec![nr(28), nr(20)]);
        assert_eq!(report.frequency_mhz, Some(798.15));
        assert_eq!(report.spectrum, Some(NrSpectrum::Refarmed));
    }

    #[test]
    fn describe_lte_unknown_channel() {
        let report = BandResolver::builtin().describe_lte(20_000);
        assert_eq!(report.earfcn, 20_000);
        assert!(report.band.is_none());
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(BandResolver::default(), BandResolver::builtin());
        assert_eq!(
            BandResolver::default().refarm_threshold_mhz(),
            REFARM_THRESHOLD_MHZ
        );
    }
}
