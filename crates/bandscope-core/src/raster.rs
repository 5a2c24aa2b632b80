//! # NR Global Frequency Raster
//!
//! Converts an NR-ARFCN to its RF reference frequency (3GPP TS 38.104
//! §5.4.2.1):
//!
//! $$F_{REF} = F_{REF-Offs} + \Delta F_{Global} \cdot (N_{REF} - N_{REF-Offs})$$
//!
//! | NR-ARFCN range      | ΔF_Global | F_REF-Offs     | N_REF-Offs |
//! |---------------------|-----------|----------------|------------|
//! | 0 – 599999          | 5 kHz     | 0 MHz          | 0          |
//! | 600000 – 2016666    | 15 kHz    | 3000 MHz       | 600000     |
//! | 2016667 – 3279165   | 60 kHz    | 24250.08 MHz   | 2016667    |
//!
//! Every raster quantity is a whole number of kHz, so the arithmetic runs on
//! integers and only the final two-decimal MHz value is a float.

/// One contiguous NR-ARFCN range sharing a raster step and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSegment {
    /// First NR-ARFCN of the segment.
    pub first: u32,
    /// Last NR-ARFCN of the segment (inclusive).
    pub last: u32,
    /// ΔF_Global in kHz.
    pub step_khz: u64,
    /// F_REF-Offs in kHz.
    pub f_ref_offs_khz: u64,
    /// N_REF-Offs.
    pub n_ref_offs: u32,
}

impl RasterSegment {
    pub const fn contains(&self, nrarfcn: u32) -> bool {
        self.first <= nrarfcn && nrarfcn <= self.last
    }

    pub fn step_mhz(&self) -> f64 {
        self.step_khz as f64 / 1000.0
    }

    pub fn f_ref_offs_mhz(&self) -> f64 {
        self.f_ref_offs_khz as f64 / 1000.0
    }

    /// Exact reference frequency in kHz. `nrarfcn` must lie in the segment.
    fn frequency_khz(&self, nrarfcn: u32) -> u64 {
        self.f_ref_offs_khz + self.step_khz * u64::from(nrarfcn - self.n_ref_offs)
    }
}

/// The three global raster segments, in ascending NR-ARFCN order.
pub const GLOBAL_RASTER: [RasterSegment; 3] = [
    // below 3 GHz
    RasterSegment {
        first: 0,
        last: 599_999,
        step_khz: 5,
        f_ref_offs_khz: 0,
        n_ref_offs: 0,
    },
    // 3 GHz to 24.25 GHz
    RasterSegment {
        first: 600_000,
        last: 2_016_666,
        step_khz: 15,
        f_ref_offs_khz: 3_000_000,
        n_ref_offs: 600_000,
    },
    // 24.25 GHz and up
    RasterSegment {
        first: 2_016_667,
        last: 3_279_165,
        step_khz: 60,
        f_ref_offs_khz: 24_250_080,
        n_ref_offs: 2_016_667,
    },
];

/// First NR-ARFCN of the 24.25 GHz+ (FR2) raster.
pub const FR2_FIRST_NR_ARFCN: u32 = GLOBAL_RASTER[2].first;

/// Highest valid NR-ARFCN.
pub const NR_ARFCN_MAX: u32 = GLOBAL_RASTER[2].last;

/// Raster segment holding `nrarfcn`, if it is a valid NR-ARFCN.
pub fn segment_for(nrarfcn: u32) -> Option<&'static RasterSegment> {
    GLOBAL_RASTER.iter().find(|s| s.contains(nrarfcn))
}

/// Reference frequency of `nrarfcn` in MHz, rounded half-up to two decimals.
///
/// Returns `None` above [`NR_ARFCN_MAX`].
pub fn nr_arfcn_to_mhz(nrarfcn: u32) -> Option<f64> {
    let khz = segment_for(nrarfcn)?.frequency_khz(nrarfcn);
    // 10 kHz units, i.e. hundredths of a MHz
    let centi_mhz = (khz + 5) / 10;
    Some(centi_mhz as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_contiguous() {
        assert_eq!(GLOBAL_RASTER[0].first, 0);
        for pair in GLOBAL_RASTER.windows(2) {
            assert_eq!(pair[0].last + 1, pair[1].first);
        }
    }

    #[test]
    fn segment_selection() {
        assert_eq!(segment_for(0).unwrap().step_khz, 5);
        assert_eq!(segment_for(599_999).unwrap().step_khz, 5);
        assert_eq!(segment_for(600_000).unwrap().step_khz, 15);
        assert_eq!(segment_for(2_016_666).unwrap().step_khz, 15);
        assert_eq!(segment_for(2_016_667).unwrap().step_khz, 60);
        assert_eq!(segment_for(3_279_165).unwrap().step_khz, 60);
        assert!(segment_for(3_279_166).is_none());
    }

    #[test]
    fn step_and_offset_in_mhz() {
        assert_eq!(GLOBAL_RASTER[1].step_mhz(), 0.015);
        assert_eq!(GLOBAL_RASTER[2].f_ref_offs_mhz(), 24250.08);
    }

    #[test]
    fn frequency_per_segment() {
        assert_eq!(nr_arfcn_to_mhz(159_600), Some(798.0));
        assert_eq!(nr_arfcn_to_mhz(635_424), Some(3531.36));
        assert_eq!(nr_arfcn_to_mhz(643_334), Some(3650.01));
        assert_eq!(nr_arfcn_to_mhz(2_070_015), Some(27450.96));
    }

    #[test]
    fn segment_edges() {
        assert_eq!(nr_arfcn_to_mhz(0), Some(0.0));
        assert_eq!(nr_arfcn_to_mhz(599_999), Some(3000.0));
        assert_eq!(nr_arfcn_to_mhz(600_000), Some(3000.0));
        assert_eq!(nr_arfcn_to_mhz(2_016_666), Some(24249.99));
        assert_eq!(nr_arfcn_to_mhz(2_016_667), Some(24250.08));
        assert_eq!(nr_arfcn_to_mhz(3_279_165), Some(99999.96));
        assert_eq!(nr_arfcn_to_mhz(NR_ARFCN_MAX + 1), None);
    }

    #[test]
    fn rounds_half_up() {
        // 1 * 5 kHz = 0.005 MHz -> 0.01
        assert_eq!(nr_arfcn_to_mhz(1), Some(0.01));
        // 600001 -> 3000.015 MHz -> 3000.02
        assert_eq!(nr_arfcn_to_mhz(600_001), Some(3000.02));
        // 3 * 5 kHz = 0.015 MHz -> 0.02
        assert_eq!(nr_arfcn_to_mhz(3), Some(0.02));
    }
}
