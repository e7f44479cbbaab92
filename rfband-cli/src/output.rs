//! Report rendering for the table, JSON and CSV output formats.

use colored::Colorize;
use serde::Serialize;

use crate::commands::{BandRow, FrequencyReport, LookupReport, RangeReport};
use crate::context::OutputFormat;

/// A report that can be laid out as rows and columns.
pub(crate) trait Tabular {
    fn headers(&self) -> &'static [&'static str];
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render `report` in `format`. Only JSON serialization can fail.
pub(crate) fn render<T>(format: OutputFormat, report: &T) -> Result<String, serde_json::Error>
where
    T: Tabular + Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => Ok(render_table(report.headers(), &report.rows())),
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Csv => Ok(render_csv(report.headers(), &report.rows())),
    }
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    let cell = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell(value.as_str()).chars().count());
        }
    }

    let line = |values: Vec<String>| {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    let header = line(headers.iter().map(|h| h.to_uppercase()).collect());
    let rule = "-".repeat(header.len());
    out.push(header.bold().to_string());
    out.push(rule);
    for row in rows {
        out.push(line(row.iter().map(|value| cell(value.as_str())).collect()));
    }
    out.join("\n")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = vec![headers.join(",")];
    for row in rows {
        out.push(row.iter().map(|v| csv_field(v)).collect::<Vec<_>>().join(","));
    }
    out.join("\n")
}

impl Tabular for [FrequencyReport] {
    fn headers(&self) -> &'static [&'static str] {
        &["frequency", "hz", "si_band", "itu_band", "wavelength_m"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|r| {
                vec![
                    r.frequency.to_string(),
                    r.hz.to_string(),
                    r.si_band.unwrap_or_default().to_string(),
                    r.itu_band.unwrap_or_default().to_string(),
                    r.wavelength_m.to_string(),
                ]
            })
            .collect()
    }
}

impl Tabular for [BandRow] {
    fn headers(&self) -> &'static [&'static str] {
        &["table", "name", "low", "high", "width"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|r| {
                vec![
                    r.table.to_string(),
                    r.name.clone(),
                    r.low.to_string(),
                    r.high.to_string(),
                    r.width.to_string(),
                ]
            })
            .collect()
    }
}

impl Tabular for LookupReport {
    fn headers(&self) -> &'static [&'static str] {
        &["frequency", "table", "name", "low", "high"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.matches
            .iter()
            .map(|r| {
                vec![
                    self.frequency.to_string(),
                    r.table.to_string(),
                    r.name.clone(),
                    r.low.to_string(),
                    r.high.to_string(),
                ]
            })
            .collect()
    }
}

impl Tabular for RangeReport {
    fn headers(&self) -> &'static [&'static str] {
        &["field", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![
            vec!["range".to_string(), self.range.to_string()],
            vec![
                "shift".to_string(),
                self.shift.map(|s| s.to_string()).unwrap_or_default(),
            ],
            vec!["center".to_string(), self.center.to_string()],
            vec!["width".to_string(), self.width.to_string()],
            vec!["itu_bands".to_string(), self.itu_bands.join(" ")],
        ];

        if let Some(cmp) = &self.against {
            rows.extend([
                vec!["against".to_string(), cmp.other.to_string()],
                vec!["contains".to_string(), cmp.contains.to_string()],
                vec!["contained_by".to_string(), cmp.contained_by.to_string()],
                vec!["overlaps".to_string(), cmp.overlaps.to_string()],
                vec!["intersection".to_string(), cmp.intersection.to_string()],
            ]);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list_bands, lookup, parse_report, range_report};
    use crate::context::TableChoice;
    use rfband::{must_parse_hz, Allocations, Range};

    #[test]
    fn test_table_frequencies() {
        colored::control::set_override(false);

        let reports = vec![
            parse_report(must_parse_hz("144.39MHz")),
            parse_report(must_parse_hz("1Hz")),
        ];
        let out = render(OutputFormat::Table, reports.as_slice()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("FREQUENCY"), "{out}");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("144.39MHz"));
        assert!(lines[2].contains("VHF"));
        // Missing bands render as a dash
        assert!(lines[3].starts_with("1Hz"));
        assert!(lines[3].contains(" - "));
    }

    #[test]
    fn test_table_empty() {
        let report = lookup(must_parse_hz("-5Hz"), &Allocations::default());
        assert_eq!(
            render(OutputFormat::Table, &report).unwrap(),
            "No results found."
        );
    }

    #[test]
    fn test_csv_bands() {
        let rows = list_bands(TableChoice::Si, &Allocations::default());
        let out = render(OutputFormat::Csv, rows.as_slice()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "table,name,low,high,width");
        assert_eq!(lines[1], "si,KHz,1000Hz,999.999kHz,998.999kHz");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(csv_field("cr\rlf"), "\"cr\rlf\"");
    }

    #[test]
    fn test_json_lookup() {
        let report = lookup(must_parse_hz("7.074MHz"), &Allocations::default());
        let out = render(OutputFormat::Json, &report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["frequency"], "7.074MHz");
        assert_eq!(value["matches"][0]["table"], "si");
        assert_eq!(value["matches"][0]["name"], "MHz");
        assert_eq!(value["matches"][1]["name"], "HF");
        assert_eq!(value["matches"][1]["low"], "3MHz");
    }

    #[test]
    fn test_range_rows() {
        let report = range_report(
            must_parse_hz("144MHz"),
            must_parse_hz("148MHz"),
            None,
            Some(Range::new(must_parse_hz("146MHz"), must_parse_hz("150MHz"))),
        );
        let out = render(OutputFormat::Csv, &report).unwrap();

        assert!(out.contains("range,144MHz->148MHz"), "{out}");
        assert!(out.contains("shift,\n"), "{out}");
        assert!(out.contains("center,146MHz"), "{out}");
        assert!(out.contains("overlaps,true"), "{out}");
        assert!(out.contains("intersection,146MHz->148MHz"), "{out}");
    }
}
