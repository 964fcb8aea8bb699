//! CSV input provider: reads the Finnish greenhouse crop statistics
//! export and the yearly temperature series, and shapes them into
//! [`Series`] values. Aggregate rows are dropped, the `".."` missing
//! sentinel becomes `None`, and the amount unit conflation runs here,
//! once, so extent computation already sees the final values.

use crate::models::{AuxPoint, Record, YearRange};
use crate::series::{Series, conflate_amount};
use ahash::AHashMap;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Aggregate rows in the source export that would double-count crops.
const AGGREGATE_ROWS: [&str; 4] = [
    "TOTAL VEGETABLES",
    "TOTAL POTTED VEGETABLES",
    "TOTAL BERRIES",
    "Special Tomatoes",
];

/// The source's missing-value sentinel.
const MISSING: &str = "..";

#[derive(Debug, Deserialize)]
struct CropRow {
    #[serde(rename = "laji")]
    species: String,
    #[serde(rename = "vuosi")]
    year: i32,
    #[serde(rename = "Sato (1 000 kg)")]
    mass: String,
    #[serde(rename = "Sato (1 000 kpl)")]
    pieces: String,
    #[serde(rename = "Yrityksiä (kpl)")]
    companies: String,
    #[serde(rename = "Kasvihuoneala (1 000 m²)")]
    area: String,
}

#[derive(Debug, Deserialize)]
struct TempRow {
    #[serde(rename = "Category")]
    year: i32,
    #[serde(rename = "Helsinki Kaisaniemi")]
    value: f64,
}

fn parse_cell(raw: &str) -> Option<f64> {
    let v = raw.trim();
    if v.is_empty() || v == MISSING {
        return None;
    }
    v.parse().ok()
}

/// Read the temperature CSV, keeping only years inside the configured
/// range so both surfaces share one x domain.
pub fn load_auxiliary<P: AsRef<Path>>(path: P, years: YearRange) -> Result<Vec<AuxPoint>> {
    let path = path.as_ref();
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for row in rdr.deserialize::<TempRow>() {
        let row = row.with_context(|| format!("parsing {}", path.display()))?;
        if years.contains(row.year) {
            out.push(AuxPoint {
                year: row.year,
                value: row.value,
            });
        }
    }
    log::info!("loaded {} auxiliary points from {}", out.len(), path.display());
    Ok(out)
}

/// Read the crop CSV and group it into one series per species, keeping
/// the file's species order. Input is trusted to be deduplicated per
/// (species, year) with integer years.
pub fn load_series<P: AsRef<Path>>(path: P, auxiliary: Arc<Vec<AuxPoint>>) -> Result<Vec<Series>> {
    let path = path.as_ref();
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("reading {}", path.display()))?;

    let mut grouped: Vec<(String, Vec<Record>)> = Vec::new();
    let mut index: AHashMap<String, usize> = AHashMap::new();
    for row in rdr.deserialize::<CropRow>() {
        let row = row.with_context(|| format!("parsing {}", path.display()))?;
        if AGGREGATE_ROWS.contains(&row.species.as_str()) {
            continue;
        }
        let record = Record {
            year: row.year,
            amount: conflate_amount(parse_cell(&row.mass), parse_cell(&row.pieces)),
            companies: parse_cell(&row.companies),
            area: parse_cell(&row.area),
        };
        let slot = *index.entry(row.species.clone()).or_insert_with(|| {
            grouped.push((row.species.clone(), Vec::new()));
            grouped.len() - 1
        });
        grouped[slot].1.push(record);
    }
    log::info!("loaded {} series from {}", grouped.len(), path.display());

    Ok(grouped
        .into_iter()
        .map(|(name, records)| Series::new(name, records, Arc::clone(&auxiliary)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_parsing_treats_sentinel_as_missing() {
        assert_eq!(parse_cell("12.5"), Some(12.5));
        assert_eq!(parse_cell(" 7 "), Some(7.0));
        assert_eq!(parse_cell(".."), None);
        assert_eq!(parse_cell(""), None);
    }
}
