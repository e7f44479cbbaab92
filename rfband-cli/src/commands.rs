//! Subcommand implementations. Each one builds a serializable report which
//! `output` renders in the selected format.

use log::{debug, info};
use rfband::{Allocation, Allocations, Hz, Range, ITU_BANDS, SI_BANDS};
use serde::Serialize;

use crate::context::TableChoice;

/// One parsed frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FrequencyReport {
    pub frequency: Hz,
    pub hz: f64,
    pub si_band: Option<&'static str>,
    pub itu_band: Option<&'static str>,
    pub wavelength_m: f64,
}

/// One allocation, tagged with the table it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BandRow {
    pub table: &'static str,
    pub name: String,
    pub low: Hz,
    pub high: Hz,
    pub width: Hz,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LookupReport {
    pub frequency: Hz,
    pub matches: Vec<BandRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Comparison {
    pub other: Range,
    pub contains: bool,
    pub contained_by: bool,
    pub overlaps: bool,
    pub intersection: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RangeReport {
    pub range: Range,
    pub shift: Option<Hz>,
    pub center: Hz,
    pub width: Hz,
    pub itu_bands: Vec<String>,
    pub against: Option<Comparison>,
}

fn non_empty(name: &'static str) -> Option<&'static str> {
    (!name.is_empty()).then_some(name)
}

pub(crate) fn parse_report(frequency: Hz) -> FrequencyReport {
    debug!("Parsed {} ({} Hz)", frequency, frequency.as_hz());
    FrequencyReport {
        frequency,
        hz: frequency.as_hz(),
        si_band: non_empty(frequency.si_band_name()),
        itu_band: non_empty(frequency.itu_band_name()),
        wavelength_m: frequency.wavelength(),
    }
}

/// Tables selected by `choice`, in display order.
fn tables(choice: TableChoice, plan: &Allocations) -> Vec<(&'static str, &Allocations)> {
    match choice {
        TableChoice::Si => vec![("si", &SI_BANDS)],
        TableChoice::Itu => vec![("itu", &ITU_BANDS)],
        TableChoice::Plan => vec![("plan", plan)],
        TableChoice::All => vec![("si", &SI_BANDS), ("itu", &ITU_BANDS), ("plan", plan)],
    }
}

fn rows<'a>(
    table: &'static str,
    allocations: impl IntoIterator<Item = &'a Allocation>,
) -> Vec<BandRow> {
    allocations
        .into_iter()
        .map(|a| BandRow {
            table,
            name: a.name().to_string(),
            low: a.range.low,
            high: a.range.high,
            width: a.range.width(),
        })
        .collect()
}

/// Every allocation in every table that contains `frequency`.
pub(crate) fn lookup(frequency: Hz, plan: &Allocations) -> LookupReport {
    let matches: Vec<BandRow> = tables(TableChoice::All, plan)
        .into_iter()
        .flat_map(|(table, allocations)| {
            rows(table, &allocations.containing_frequency(frequency))
        })
        .collect();

    info!("{} matched {} allocations", frequency, matches.len());
    LookupReport { frequency, matches }
}

pub(crate) fn list_bands(choice: TableChoice, plan: &Allocations) -> Vec<BandRow> {
    if matches!(choice, TableChoice::Plan | TableChoice::All) && plan.is_empty() {
        debug!("No band plan configured");
    }
    tables(choice, plan)
        .into_iter()
        .flat_map(|(table, allocations)| rows(table, allocations))
        .collect()
}

/// Describe `low..high`, shifted by `shift` if given, and compare it with
/// `against`.
pub(crate) fn range_report(
    low: Hz,
    high: Hz,
    shift: Option<Hz>,
    against: Option<Range>,
) -> RangeReport {
    let mut range = Range::new(low, high);
    if let Some(shift) = shift {
        range = range + shift;
        debug!("Shifted {}->{} by {} to {}", low, high, shift, range);
    }

    let itu_bands = ITU_BANDS
        .overlapping(&range)
        .iter()
        .map(|a| a.name().to_string())
        .collect();

    let against = against.map(|other| Comparison {
        other,
        contains: range.contains_range(&other),
        contained_by: other.contains_range(&range),
        overlaps: range.overlaps(&other),
        intersection: range.intersection(&other),
    });

    RangeReport {
        range,
        shift,
        center: range.center(),
        width: range.width(),
        itu_bands,
        against,
    }
}
