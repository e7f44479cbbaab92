//! SI frequency units.

use serde::{Deserialize, Serialize};

/// Frequency unit, from Hz up to THz in steps of 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    Hz,
    KHz,
    MHz,
    GHz,
    THz,
}

impl Unit {
    /// All units, ordered by scale.
    pub const ALL: [Unit; 5] = [Unit::Hz, Unit::KHz, Unit::MHz, Unit::GHz, Unit::THz];

    /// Number of Hz in one of this unit.
    pub const fn scale(self) -> f64 {
        match self {
            Unit::Hz => 1.0,
            Unit::KHz => 1e3,
            Unit::MHz => 1e6,
            Unit::GHz => 1e9,
            Unit::THz => 1e12,
        }
    }

    /// Suffix used when formatting a frequency.
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Hz => "Hz",
            Unit::KHz => "kHz",
            Unit::MHz => "MHz",
            Unit::GHz => "GHz",
            Unit::THz => "THz",
        }
    }

    /// Look up a unit by its suffix, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use rfband::Unit;
    ///
    /// assert_eq!(Unit::from_suffix("khz"), Some(Unit::KHz));
    /// assert_eq!(Unit::from_suffix("Khz"), Some(Unit::KHz));
    /// assert_eq!(Unit::from_suffix("kHz"), Some(Unit::KHz));
    /// assert_eq!(Unit::from_suffix("Hertz"), None);
    /// ```
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_steps_by_thousand() {
        for pair in Unit::ALL.windows(2) {
            assert_eq!(pair[1].scale() / pair[0].scale(), 1e3);
        }
    }

    #[test]
    fn test_from_suffix_case_variants() {
        for (suffix, unit) in [
            ("Hz", Unit::Hz),
            ("hz", Unit::Hz),
            ("HZ", Unit::Hz),
            ("KHz", Unit::KHz),
            ("kHz", Unit::KHz),
            ("khz", Unit::KHz),
            ("MHz", Unit::MHz),
            ("mhz", Unit::MHz),
            ("GHz", Unit::GHz),
            ("ghz", Unit::GHz),
            ("THz", Unit::THz),
            ("thz", Unit::THz),
        ] {
            assert_eq!(Unit::from_suffix(suffix), Some(unit), "suffix {suffix}");
        }
    }

    #[test]
    fn test_from_suffix_rejects_unknown() {
        assert_eq!(Unit::from_suffix(""), None);
        assert_eq!(Unit::from_suffix("PHz"), None);
        assert_eq!(Unit::from_suffix("MHzz"), None);
    }
}
