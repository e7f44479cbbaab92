//! Named frequency allocations and allocation tables.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hz::Hz;
use crate::range::Range;

/// A range of frequency with a name, and perhaps a purpose. Some examples
/// would be the 'KU' radar band, the 'VHF' range or 'WiFi Channel 11'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Name describing the band.
    pub name: Cow<'static, str>,
    /// Range of frequency that this allocation covers.
    pub range: Range,
}

impl Allocation {
    /// Create an allocation with a static name (usable in `const` items).
    pub const fn new(name: &'static str, range: Range) -> Self {
        Self {
            name: Cow::Borrowed(name),
            range,
        }
    }

    /// Create an allocation with an owned name.
    pub fn named(name: impl Into<String>, range: Range) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            range,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name={}, range={}", self.name, self.range)
    }
}

/// An ordered table of allocations that can be queried by frequency.
///
/// Order is kept as given. Tables are not required to be sorted or
/// non-overlapping, so a frequency may match several entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocations(Cow<'static, [Allocation]>);

impl Allocations {
    /// Wrap a static slice (usable in `const` and `static` items).
    pub const fn from_static(allocations: &'static [Allocation]) -> Self {
        Self(Cow::Borrowed(allocations))
    }

    pub fn new(allocations: Vec<Allocation>) -> Self {
        Self(Cow::Owned(allocations))
    }

    pub fn as_slice(&self) -> &[Allocation] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get every allocation that contains `freq`, in table order.
    ///
    /// # Example
    /// ```
    /// use rfband::{must_parse_hz, ITU_BANDS};
    ///
    /// let matches = ITU_BANDS.containing_frequency(must_parse_hz("144.39MHz"));
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches.first().map(|a| a.name()), Some("VHF"));
    /// ```
    pub fn containing_frequency(&self, freq: Hz) -> Allocations {
        self.iter()
            .filter(|allocation| allocation.range.contains_frequency(freq))
            .cloned()
            .collect()
    }

    /// Get the first allocation in the table.
    pub fn first(&self) -> Option<&Allocation> {
        self.0.first()
    }

    /// Get the first allocation that contains `freq`.
    pub fn first_containing(&self, freq: Hz) -> Option<&Allocation> {
        self.iter()
            .find(|allocation| allocation.range.contains_frequency(freq))
    }

    /// Get allocations whose range overlaps `range`, in table order.
    pub fn overlapping(&self, range: &Range) -> Allocations {
        self.iter()
            .filter(|allocation| allocation.range.overlaps(range))
            .cloned()
            .collect()
    }

    /// Look up an allocation by name (exact match).
    pub fn get(&self, name: &str) -> Option<&Allocation> {
        self.iter().find(|allocation| allocation.name == name)
    }
}

impl From<Vec<Allocation>> for Allocations {
    fn from(allocations: Vec<Allocation>) -> Self {
        Self::new(allocations)
    }
}

impl FromIterator<Allocation> for Allocations {
    fn from_iter<I: IntoIterator<Item = Allocation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Allocations {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Index<usize> for Allocations {
    type Output = Allocation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
