//! Frequency value type.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::error::ParseError;
use crate::itu::ITU_BANDS;
use crate::parse::parse_hz;
use crate::si::SI_BANDS;
use crate::unit::Unit;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// A signed frequency, in cycles per second.
///
/// Formatting picks the largest unit that keeps the mantissa above 1
/// (`144.39MHz`, `1.44039GHz`, `-10Hz`) and parsing accepts the same form.
/// In serde formats the value is a single string token.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hz(f64);

/// One kilohertz, or 1,000 Hz.
pub const KHZ: Hz = Hz(1e3);

/// One megahertz, or 1,000,000 Hz.
pub const MHZ: Hz = Hz(1e6);

/// One gigahertz, or 1,000,000,000 Hz.
pub const GHZ: Hz = Hz(1e9);

/// One terahertz, or 1,000,000,000,000 Hz.
pub const THZ: Hz = Hz(1e12);

impl Hz {
    /// Zero Hz.
    pub const ZERO: Self = Self(0.0);

    /// Create from a raw number of Hz.
    #[inline]
    pub const fn new(hz: f64) -> Self {
        Self(hz)
    }

    /// Get value in Hz.
    #[inline]
    pub const fn as_hz(self) -> f64 {
        self.0
    }

    /// Get value in kHz.
    #[inline]
    pub fn as_khz(self) -> f64 {
        self.0 / KHZ.0
    }

    /// Get value in MHz.
    #[inline]
    pub fn as_mhz(self) -> f64 {
        self.0 / MHZ.0
    }

    /// Get value in GHz.
    #[inline]
    pub fn as_ghz(self) -> f64 {
        self.0 / GHZ.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Wavelength in meters.
    ///
    /// # Example
    /// ```
    /// use rfband::must_parse_hz;
    ///
    /// let wavelength = must_parse_hz("144.39MHz").wavelength();
    /// assert!((wavelength - 2.076268841332502).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn wavelength(self) -> f64 {
        SPEED_OF_LIGHT / self.0
    }

    /// Frequency of a wave with the given wavelength in meters.
    #[inline]
    pub fn from_wavelength(meters: f64) -> Self {
        Self(SPEED_OF_LIGHT / meters)
    }

    /// SI band (KHz, MHz, GHz) this frequency falls in.
    pub fn si_band(self) -> Option<&'static Allocation> {
        SI_BANDS.first_containing(self)
    }

    /// Name of the SI band this frequency falls in, or `""` if none.
    pub fn si_band_name(self) -> &'static str {
        self.si_band().map(|band| band.name()).unwrap_or("")
    }

    /// ITU band (ELF through EHF) this frequency falls in.
    pub fn itu_band(self) -> Option<&'static Allocation> {
        ITU_BANDS.first_containing(self)
    }

    /// Name of the ITU band this frequency falls in, or `""` if none.
    pub fn itu_band_name(self) -> &'static str {
        self.itu_band().map(|band| band.name()).unwrap_or("")
    }
}

/// Parse a frequency, panicking on error.
///
/// Meant for hardcoded literals where a bad value is a programming error.
/// Use [`parse_hz`] for anything that comes from a user.
pub fn must_parse_hz(freq: &str) -> Hz {
    match parse_hz(freq) {
        Ok(hz) => hz,
        Err(e) => panic!("{}", e),
    }
}

impl fmt::Display for Hz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let mut frequency = self.0.abs();
        let mut steps = 0;

        // Stops at THz even if the mantissa is still above 1000
        while frequency > KHZ.0 && steps < Unit::ALL.len() - 1 {
            frequency /= KHZ.0;
            steps += 1;
        }

        f.pad(&format!("{}{}{}", sign, frequency, Unit::ALL[steps].suffix()))
    }
}

impl FromStr for Hz {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hz(s)
    }
}

impl TryFrom<&str> for Hz {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hz(value)
    }
}

impl TryFrom<String> for Hz {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hz(&value)
    }
}

impl From<Hz> for String {
    fn from(value: Hz) -> Self {
        value.to_string()
    }
}

impl From<Hz> for f64 {
    fn from(value: Hz) -> Self {
        value.0
    }
}

impl Add for Hz {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Hz {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Hz {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f64> for Hz {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Hz> for f64 {
    type Output = Hz;

    #[inline]
    fn mul(self, rhs: Hz) -> Self::Output {
        Hz(self * rhs.0)
    }
}

impl Div<f64> for Hz {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl std::iter::Sum for Hz {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_picks_unit() {
        assert_eq!(must_parse_hz("144.39MHz").to_string(), "144.39MHz");
        assert_eq!(must_parse_hz("1440.39MHz").to_string(), "1.44039GHz");
        assert_eq!(must_parse_hz("10KHz").to_string(), "10kHz");
        assert_eq!(Hz::new(10.0).to_string(), "10Hz");
        assert_eq!(Hz::new(2.5e12).to_string(), "2.5THz");
    }

    #[test]
    fn test_display_negative() {
        let freq = must_parse_hz("1440.39MHz");
        assert_eq!((-freq).to_string(), "-1.44039GHz");
        assert_eq!(Hz::new(-10.0).to_string(), "-10Hz");
    }

    #[test]
    fn test_display_boundaries() {
        // Exactly 1000 of a unit is not promoted
        assert_eq!(Hz::new(1000.0).to_string(), "1000Hz");
        assert_eq!(Hz::new(1001.0).to_string(), "1.001kHz");
        assert_eq!(Hz::new(1e9).to_string(), "1000MHz");
        assert_eq!(THZ.to_string(), "1000GHz");
        assert_eq!(Hz::ZERO.to_string(), "0Hz");
        assert_eq!(Hz::new(-0.0).to_string(), "0Hz");
        // Nothing above THz
        assert_eq!(Hz::new(5e15).to_string(), "5000THz");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>8}", Hz::new(10.0)), "    10Hz");
        assert_eq!(format!("{:<8}|", KHZ), "1000Hz  |");
    }

    #[test]
    fn test_round_trip() {
        for freq in ["144.39MHz", "1.44039GHz", "-10Hz", "10kHz", "7.074MHz", "2.4GHz", "1.5THz"] {
            let hz = must_parse_hz(freq);
            assert_eq!(hz.to_string(), freq);
            assert_eq!(must_parse_hz(&hz.to_string()), hz);
        }
    }

    #[test]
    fn test_from_str() {
        let freq: Hz = "144.39MHz".parse().unwrap();
        assert_eq!(freq, Hz::new(144_390_000.0));
        assert!("bogus".parse::<Hz>().is_err());
        assert_eq!(Hz::try_from("10kHz"), Ok(Hz::new(10_000.0)));
    }

    #[test]
    #[should_panic(expected = "unknown unit")]
    fn test_must_parse_panics() {
        must_parse_hz("10XHz");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(KHZ + KHZ, Hz::new(2000.0));
        assert_eq!(MHZ - KHZ, Hz::new(999_000.0));
        assert_eq!(-KHZ * 3.0, Hz::new(-3000.0));
        assert_eq!(3.0 * KHZ, Hz::new(3000.0));
        assert_eq!(MHZ / 4.0, Hz::new(250_000.0));
        assert_eq!([KHZ, KHZ, MHZ].into_iter().sum::<Hz>(), Hz::new(1_002_000.0));
    }

    #[test]
    fn test_ordering() {
        assert!(KHZ < MHZ);
        assert!(-MHZ < KHZ);
        assert!(GHZ > MHZ * 999.0);
    }

    #[test]
    fn test_unit_accessors() {
        let freq = must_parse_hz("144.39MHz");
        assert!((freq.as_mhz() - 144.39).abs() < 1e-9);
        assert!((freq.as_khz() - 144_390.0).abs() < 1e-6);
        assert!((freq.as_ghz() - 0.14439).abs() < 1e-12);
        assert_eq!(f64::from(freq), 144_390_000.0);
    }

    #[test]
    fn test_wavelength() {
        let freq = must_parse_hz("144.39MHz");
        assert!((freq.wavelength() - 2.076268841332502).abs() < 1e-12);

        let back = Hz::from_wavelength(freq.wavelength());
        assert!((back.as_hz() - freq.as_hz()).abs() < 1e-3);
    }

    #[test]
    fn test_band_names() {
        let freq = must_parse_hz("144.39MHz");
        assert_eq!(freq.si_band_name(), "MHz");
        assert_eq!(freq.itu_band_name(), "VHF");

        assert_eq!(Hz::new(1.0).si_band_name(), "");
        assert_eq!(Hz::new(1.0).itu_band_name(), "");
        assert_eq!(Hz::new(-144e6).itu_band_name(), "");
        assert!(THZ.itu_band().is_none());
    }

    #[test]
    fn test_serde_json() {
        let json = serde_json::to_string(&must_parse_hz("144.39MHz")).unwrap();
        assert_eq!(json, "\"144.39MHz\"");

        let freq: Hz = serde_json::from_str("\"-1.44039GHz\"").unwrap();
        assert_eq!(freq, Hz::new(-1_440_390_000.0));

        // Raw numbers are not frequencies
        assert!(serde_json::from_str::<Hz>("144390000").is_err());

        let err = serde_json::from_str::<Hz>("\"10XHz\"").unwrap_err();
        assert!(err.to_string().contains("unknown unit"));
    }

    #[test]
    fn test_serde_toml() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Station {
            name: String,
            frequency: Hz,
        }

        let station: Station = toml::from_str("name = \"APRS\"\nfrequency = \"144.39MHz\"\n").unwrap();
        assert_eq!(station.frequency, Hz::new(144_390_000.0));

        let out = toml::to_string(&station).unwrap();
        assert!(out.contains("frequency = \"144.39MHz\""));
    }
}
