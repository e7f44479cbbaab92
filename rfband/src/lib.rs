//! Frequency values, frequency ranges and named band allocations.
//!
//! This crate defines the value model shared by the `rfband` tools: a signed
//! frequency in Hz that parses from and formats to strings such as
//! `"144.39MHz"`, closed frequency ranges with exact arithmetic, and tables
//! of named allocations (SI magnitude bands and ITU bands) that a frequency
//! can be classified against.
//!
//! # Example
//!
//! ```rust
//! use rfband::{Hz, Range, KHZ, ITU_BANDS};
//!
//! let freq: Hz = "144.39MHz".parse().unwrap();
//! assert_eq!(freq, Hz::new(144_390_000.0));
//! assert_eq!(freq.to_string(), "144.39MHz");
//!
//! // Classify against the built-in tables
//! assert_eq!(freq.itu_band_name(), "VHF");
//! assert_eq!(freq.si_band_name(), "MHz");
//! assert_eq!(ITU_BANDS.containing_frequency(freq).len(), 1);
//!
//! // +/- 3 kHz channel around the frequency
//! let channel = Range::new(-KHZ * 3.0, KHZ * 3.0) + freq;
//! assert_eq!(channel, Range::new(Hz::new(144_387_000.0), Hz::new(144_393_000.0)));
//! ```
//!
//! # Serialization
//!
//! [`Hz`] is carried as a single string token in any serde format, so a
//! frequency field reads `"144.39MHz"` rather than a raw number.
//!
//! ```rust
//! use rfband::Hz;
//!
//! let json = serde_json::to_string(&Hz::new(10_000.0)).unwrap();
//! assert_eq!(json, "\"10kHz\"");
//! let back: Hz = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, Hz::new(10_000.0));
//! ```

pub mod allocation;
pub mod error;
pub mod hz;
pub mod itu;
pub mod parse;
pub mod range;
pub mod si;
pub mod unit;

pub use allocation::{Allocation, Allocations};
pub use error::ParseError;
pub use hz::{must_parse_hz, Hz, GHZ, KHZ, MHZ, SPEED_OF_LIGHT, THZ};
pub use itu::{
    EHF_BAND, ELF_BAND, HF_BAND, ITU_BANDS, LF_BAND, MF_BAND, SHF_BAND, SLF_BAND, UHF_BAND,
    ULF_BAND, VHF_BAND, VLF_BAND,
};
pub use parse::parse_hz;
pub use range::Range;
pub use si::{GHZ_BAND, KHZ_BAND, MHZ_BAND, SI_BANDS};
pub use unit::Unit;
