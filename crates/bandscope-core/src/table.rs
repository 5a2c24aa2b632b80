//! # Band Tables
//!
//! Downlink channel ranges per 3GPP band, one table per radio generation.
//!
//! | Table      | Channel number | Source           |
//! |------------|----------------|------------------|
//! | `LTE_BANDS`| EARFCN         | 3GPP TS 36.104   |
//! | `NR_BANDS` | NR-ARFCN       | 3GPP TS 38.101-1 |
//!
//! Ranges may overlap. Lookups scan in declaration order and the first hit
//! wins, so the order of `NR_BANDS` carries meaning:
//!
//! - n28 sits before n20. Their ranges overlap and 700 MHz refarmed NR is
//!   deployed as n28.
//! - n78 sits before n77. n78 is a strict subset of n77, and a device that
//!   supports n77 also supports n78 but not the other way round.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Lowest millimeter-wave band in `NR_BANDS`.
pub const MM_WAVE_ANCHOR_BAND: u16 = 257;

// ─── Radio Access Technology ────────────────────────────────────────────────

/// Radio generation a table or band belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rat {
    /// 4G E-UTRA, addressed by EARFCN.
    Lte,
    /// 5G New Radio, addressed by NR-ARFCN.
    Nr,
}

impl fmt::Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rat::Lte => write!(f, "LTE"),
            Rat::Nr => write!(f, "NR"),
        }
    }
}

// ─── Band Range ─────────────────────────────────────────────────────────────

/// Inclusive downlink channel span of one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandRange {
    /// 3GPP band number (e.g. 3, 28, 78).
    pub band: u16,
    /// Lowest downlink channel number.
    pub dl_min: u32,
    /// Highest downlink channel number.
    pub dl_max: u32,
}

impl BandRange {
    pub const fn new(band: u16, dl_min: u32, dl_max: u32) -> Self {
        BandRange {
            band,
            dl_min,
            dl_max,
        }
    }

    pub const fn contains(&self, channel: u32) -> bool {
        self.dl_min <= channel && channel <= self.dl_max
    }
}

// ─── Built-in Tables ────────────────────────────────────────────────────────

/// LTE downlink EARFCN ranges (3GPP TS 36.104).
pub const LTE_BANDS: &[BandRange] = &[
    BandRange::new(1, 0, 599),
    BandRange::new(2, 600, 1199),
    BandRange::new(3, 1200, 1949),
    BandRange::new(4, 1950, 2399),
    BandRange::new(5, 2400, 2649),
    BandRange::new(6, 2650, 2749),
    BandRange::new(7, 2750, 3449),
    BandRange::new(8, 3450, 3799),
    BandRange::new(9, 3800, 4149),
    BandRange::new(10, 4150, 4749),
    BandRange::new(11, 4750, 4949),
    BandRange::new(12, 5010, 5179),
    BandRange::new(13, 5180, 5279),
    // Single channel. Historically listed as 5280..5279, an empty range that
    // matched nothing; TS 36.104 gives 5280–5379.
    BandRange::new(14, 5280, 5280),
    BandRange::new(17, 5730, 5849),
    BandRange::new(18, 5850, 5999),
    BandRange::new(19, 6000, 6149),
    BandRange::new(20, 6150, 6449),
    BandRange::new(21, 6450, 6599),
    BandRange::new(22, 6600, 7399),
    BandRange::new(23, 7500, 7699),
    BandRange::new(24, 7700, 8039),
    BandRange::new(25, 8040, 8689),
    BandRange::new(26, 8690, 9039),
    BandRange::new(27, 9040, 9209),
    BandRange::new(28, 9210, 9659),
    BandRange::new(29, 9660, 9769),
    BandRange::new(30, 9770, 9869),
    BandRange::new(31, 9870, 9919),
    BandRange::new(32, 9920, 10359),
    BandRange::new(33, 36000, 36199),
    BandRange::new(34, 36200, 36349),
    BandRange::new(35, 36350, 36949),
    BandRange::new(36, 36950, 37549),
    BandRange::new(37, 37550, 37749),
    BandRange::new(38, 37750, 38249),
    BandRange::new(39, 38250, 38649),
    BandRange::new(40, 38650, 39649),
    BandRange::new(41, 39650, 41589),
    BandRange::new(42, 41590, 43589),
    BandRange::new(43, 43590, 45589),
    BandRange::new(44, 45590, 46589),
    BandRange::new(45, 46590, 46789),
    BandRange::new(65, 65536, 66435),
    BandRange::new(66, 66436, 67335),
    BandRange::new(67, 67336, 67535),
    BandRange::new(68, 67536, 67835),
    BandRange::new(69, 67836, 68335),
    BandRange::new(70, 68336, 68585),
    BandRange::new(71, 68586, 68935),
    BandRange::new(252, 255144, 256143),
    BandRange::new(255, 261519, 262143),
];

/// NR downlink NR-ARFCN ranges (3GPP TS 38.101-1, 38.101-2 for mmWave).
pub const NR_BANDS: &[BandRange] = &[
    BandRange::new(1, 422000, 434000),
    BandRange::new(2, 386000, 398000),
    BandRange::new(3, 361000, 376000),
    BandRange::new(5, 173800, 178800),
    BandRange::new(7, 524000, 538000),
    BandRange::new(8, 185000, 192000),
    // n28 before n20: 700 MHz refarmed NR is n28.
    BandRange::new(28, 151600, 160600),
    BandRange::new(20, 158200, 164200),
    BandRange::new(38, 514000, 524000),
    BandRange::new(41, 499200, 537999),
    BandRange::new(50, 286400, 303400),
    BandRange::new(51, 285400, 286400),
    BandRange::new(66, 422000, 440000),
    BandRange::new(70, 399000, 404000),
    BandRange::new(71, 123400, 130400),
    BandRange::new(74, 295000, 303600),
    BandRange::new(75, 286400, 303400),
    BandRange::new(76, 285400, 286400),
    // n78 before n77: n78 lies inside n77.
    BandRange::new(78, 620000, 653333),
    BandRange::new(77, 620000, 680000),
    BandRange::new(79, 693334, 733333),
    // ─── mmWave (FR2) ──────────────────────────────────────────────
    BandRange::new(257, 2054167, 2104166),
    BandRange::new(258, 2016667, 2070833),
    BandRange::new(260, 2229167, 2279166),
];

/// First NR-ARFCN counted as millimeter-wave: `dl_min` of n257.
///
/// Evaluated at compile time; removing n257 from `NR_BANDS` breaks the build.
pub const NR_MM_WAVE_FLOOR: u32 = band_floor(NR_BANDS, MM_WAVE_ANCHOR_BAND);

const fn band_floor(ranges: &[BandRange], band: u16) -> u32 {
    let mut i = 0;
    while i < ranges.len() {
        if ranges[i].band == band {
            return ranges[i].dl_min;
        }
        i += 1;
    }
    panic!("millimeter-wave anchor band missing from NR table");
}

// ─── Band Table ─────────────────────────────────────────────────────────────

/// Ordered band ranges for one radio generation.
///
/// Built-in tables borrow the `const` slices; tables loaded from config own
/// their entries. Either way the table is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    rat: Rat,
    ranges: Cow<'static, [BandRange]>,
}

impl BandTable {
    pub const fn lte() -> Self {
        BandTable {
            rat: Rat::Lte,
            ranges: Cow::Borrowed(LTE_BANDS),
        }
    }

    pub const fn nr() -> Self {
        BandTable {
            rat: Rat::Nr,
            ranges: Cow::Borrowed(NR_BANDS),
        }
    }

    /// Build a table from caller-supplied ranges, keeping their order.
    ///
    /// NR tables must include band 257 so the millimeter-wave threshold is
    /// defined.
    pub fn new(rat: Rat, ranges: Vec<BandRange>) -> Result<Self, TableError> {
        if ranges.is_empty() {
            return Err(TableError::EmptyTable(rat));
        }

        let mut seen = HashSet::with_capacity(ranges.len());
        for r in &ranges {
            if r.dl_min > r.dl_max {
                return Err(TableError::InvertedRange {
                    rat,
                    band: r.band,
                    dl_min: r.dl_min,
                    dl_max: r.dl_max,
                });
            }
            if !seen.insert(r.band) {
                return Err(TableError::DuplicateBand { rat, band: r.band });
            }
        }

        if rat == Rat::Nr && !seen.contains(&MM_WAVE_ANCHOR_BAND) {
            return Err(TableError::MissingMmWaveAnchor);
        }

        tracing::debug!(%rat, entries = ranges.len(), "band table validated");
        Ok(BandTable {
            rat,
            ranges: Cow::Owned(ranges),
        })
    }

    pub fn rat(&self) -> Rat {
        self.rat
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BandRange> {
        self.ranges.iter()
    }

    /// Entry for a band number, if listed.
    pub fn get(&self, band: u16) -> Option<&BandRange> {
        self.ranges.iter().find(|r| r.band == band)
    }

    /// First entry, in declaration order, whose range holds `channel`.
    pub fn first_match(&self, channel: u32) -> Option<&BandRange> {
        self.ranges.iter().find(|r| r.contains(channel))
    }

    /// Every entry whose range holds `channel`, in declaration order.
    pub fn all_matches(&self, channel: u32) -> impl Iterator<Item = &BandRange> {
        self.ranges.iter().filter(move |r| r.contains(channel))
    }

    /// `dl_min` of band 257, the start of millimeter-wave NR-ARFCNs.
    pub fn mm_wave_floor(&self) -> Option<u32> {
        match self.rat {
            Rat::Nr => self.get(MM_WAVE_ANCHOR_BAND).map(|r| r.dl_min),
            Rat::Lte => None,
        }
    }
}

impl<'a> IntoIterator for &'a BandTable {
    type Item = &'a BandRange;
    type IntoIter = std::slice::Iter<'a, BandRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
