//! ITU radio bands, ELF through EHF.
//!
//! Each band starts on a decade boundary (3Hz, 30Hz, ... 30GHz) and ends
//! 1Hz below the next one, so the table is contiguous and non-overlapping
//! from 3Hz up to 300GHz - 1Hz.

use crate::allocation::{Allocation, Allocations};
use crate::hz::Hz;
use crate::range::Range;

const ITU_ELF: Hz = Hz::new(3.0);
const ITU_SLF: Hz = Hz::new(3e1);
const ITU_ULF: Hz = Hz::new(3e2);
const ITU_VLF: Hz = Hz::new(3e3);
const ITU_LF: Hz = Hz::new(3e4);
const ITU_MF: Hz = Hz::new(3e5);
const ITU_HF: Hz = Hz::new(3e6);
const ITU_VHF: Hz = Hz::new(3e7);
const ITU_UHF: Hz = Hz::new(3e8);
const ITU_SHF: Hz = Hz::new(3e9);
const ITU_EHF: Hz = Hz::new(3e10);
const ITU_THF: Hz = Hz::new(3e11);

/// Extremely Low Frequency, 3Hz to 30Hz.
pub const ELF_BAND: Allocation =
    Allocation::new("ELF", Range::new(ITU_ELF, Hz::new(ITU_SLF.as_hz() - 1.0)));

/// Super Low Frequency, 30Hz to 300Hz.
pub const SLF_BAND: Allocation =
    Allocation::new("SLF", Range::new(ITU_SLF, Hz::new(ITU_ULF.as_hz() - 1.0)));

/// Ultra Low Frequency, 300Hz to 3kHz.
pub const ULF_BAND: Allocation =
    Allocation::new("ULF", Range::new(ITU_ULF, Hz::new(ITU_VLF.as_hz() - 1.0)));

/// Very Low Frequency, 3kHz to 30kHz.
/// Submarine communication, time signals.
pub const VLF_BAND: Allocation =
    Allocation::new("VLF", Range::new(ITU_VLF, Hz::new(ITU_LF.as_hz() - 1.0)));

/// Low Frequency, 30kHz to 300kHz.
/// NDB beacons, longwave broadcast.
pub const LF_BAND: Allocation =
    Allocation::new("LF", Range::new(ITU_LF, Hz::new(ITU_MF.as_hz() - 1.0)));

/// Medium Frequency, 300kHz to 3MHz.
/// AM broadcast, maritime.
pub const MF_BAND: Allocation =
    Allocation::new("MF", Range::new(ITU_MF, Hz::new(ITU_HF.as_hz() - 1.0)));

/// High Frequency, 3MHz to 30MHz.
/// Shortwave, amateur, aviation.
pub const HF_BAND: Allocation =
    Allocation::new("HF", Range::new(ITU_HF, Hz::new(ITU_VHF.as_hz() - 1.0)));

/// Very High Frequency, 30MHz to 300MHz.
/// FM broadcast, aviation, amateur 2m.
pub const VHF_BAND: Allocation =
    Allocation::new("VHF", Range::new(ITU_VHF, Hz::new(ITU_UHF.as_hz() - 1.0)));

/// Ultra High Frequency, 300MHz to 3GHz.
/// Terrestrial TV, cellular, WiFi, GPS.
pub const UHF_BAND: Allocation =
    Allocation::new("UHF", Range::new(ITU_UHF, Hz::new(ITU_SHF.as_hz() - 1.0)));

/// Super High Frequency, 3GHz to 30GHz.
/// Satellite broadcast, radar, microwave links.
pub const SHF_BAND: Allocation =
    Allocation::new("SHF", Range::new(ITU_SHF, Hz::new(ITU_EHF.as_hz() - 1.0)));

/// Extremely High Frequency, 30GHz to 300GHz.
pub const EHF_BAND: Allocation =
    Allocation::new("EHF", Range::new(ITU_EHF, Hz::new(ITU_THF.as_hz() - 1.0)));

static ITU_TABLE: [Allocation; 11] = [
    ELF_BAND, SLF_BAND, ULF_BAND, VLF_BAND, LF_BAND, MF_BAND, HF_BAND, VHF_BAND, UHF_BAND,
    SHF_BAND, EHF_BAND,
];

/// All the ITU allocated RF bands, lowest first.
///
/// Likely most useful to amateur radio applications, where the ITU names
/// are used frequently.
pub static ITU_BANDS: Allocations = Allocations::from_static(&ITU_TABLE);
