//! SI magnitude bands (KHz, MHz, GHz).

use crate::allocation::{Allocation, Allocations};
use crate::hz::{Hz, GHZ, KHZ, MHZ, THZ};
use crate::range::Range;

/// The Kilohertz band, from 1KHz up to 1MHz.
pub const KHZ_BAND: Allocation =
    Allocation::new("KHz", Range::new(KHZ, Hz::new(MHZ.as_hz() - 1.0)));

/// The Megahertz band, from 1MHz up to 1GHz.
pub const MHZ_BAND: Allocation =
    Allocation::new("MHz", Range::new(MHZ, Hz::new(GHZ.as_hz() - 1.0)));

/// The Gigahertz band, from 1GHz up to 1THz.
pub const GHZ_BAND: Allocation =
    Allocation::new("GHz", Range::new(GHZ, Hz::new(THZ.as_hz() - 1.0)));

static SI_TABLE: [Allocation; 3] = [KHZ_BAND, MHZ_BAND, GHZ_BAND];

/// The Hz-based allocations (KHz, MHz, GHz).
pub static SI_BANDS: Allocations = Allocations::from_static(&SI_TABLE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_si_band_edges() {
        assert_eq!(Hz::new(999.0).si_band_name(), "");
        assert_eq!(KHZ.si_band_name(), "KHz");
        assert_eq!(Hz::new(999_999.0).si_band_name(), "KHz");
        assert_eq!(MHZ.si_band_name(), "MHz");
        assert_eq!(Hz::new(999_999_999.0).si_band_name(), "MHz");
        assert_eq!(GHZ.si_band_name(), "GHz");
        assert_eq!(Hz::new(999_999_999_999.0).si_band_name(), "GHz");
        assert_eq!(THZ.si_band_name(), "");
    }

    #[test]
    fn test_si_bands_partition() {
        for freq in [KHZ, MHZ * 1.5, MHZ * 144.39, GHZ * 2.4, GHZ * 999.0] {
            assert_eq!(SI_BANDS.containing_frequency(freq).len(), 1, "{freq}");
        }
        let names: Vec<&str> = SI_BANDS.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["KHz", "MHz", "GHz"]);
    }
}
