use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use gotax_core::{
    AgeCategory, Slab, SlabSchedule, SlabTable, SlabTableError, TaxRegime, UnknownSelector,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a slab schedule.
#[derive(Debug, Error)]
pub enum SlabLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {source}")]
    UnknownSelector {
        row: usize,
        #[source]
        source: UnknownSelector,
    },

    #[error("no slabs defined for the {0} table")]
    MissingTable(String),

    #[error("invalid {table} table: {source}")]
    InvalidTable {
        table: String,
        #[source]
        source: SlabTableError,
    },
}

impl From<csv::Error> for SlabLoadError {
    fn from(err: csv::Error) -> Self {
        SlabLoadError::CsvParse(err.to_string())
    }
}

/// A single row of a slab CSV file.
///
/// - `regime`: `old` or `new`
/// - `age_category`: `below-60`, `60-80` or `above-80`; ignored for the new
///   regime and may be left empty there
/// - `upper_bound`: inclusive upper bound of the slab (empty for unbounded)
/// - `rate`: marginal rate as a decimal (e.g. 0.05 for 5%)
/// - `base_tax`: tax accumulated by all lower slabs, i.e. the tax on this
///   slab's lower bound
///
/// Rows for one table must appear in ascending order of `upper_bound`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlabRecord {
    pub regime: String,
    #[serde(default)]
    pub age_category: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for slab schedules kept in CSV files.
///
/// A file must define the new regime table and all three old regime tables;
/// each table is validated the same way as the compiled-in schedule.
pub struct SlabScheduleLoader;

impl SlabScheduleLoader {
    /// Parse slab records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SlabRecord>, SlabLoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: SlabRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group parsed records into the four slab tables.
    ///
    /// Row numbers in errors count data rows from 1, excluding the header.
    pub fn build(records: &[SlabRecord]) -> Result<SlabSchedule, SlabLoadError> {
        let mut new_regime = Vec::new();
        let mut old_below_60 = Vec::new();
        let mut old_60_to_80 = Vec::new();
        let mut old_above_80 = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            let regime: TaxRegime = record
                .regime
                .parse()
                .map_err(|source| SlabLoadError::UnknownSelector { row, source })?;

            let bucket = match regime {
                TaxRegime::New => &mut new_regime,
                TaxRegime::Old => {
                    let age: AgeCategory = record
                        .age_category
                        .parse()
                        .map_err(|source| SlabLoadError::UnknownSelector { row, source })?;
                    match age {
                        AgeCategory::Below60 => &mut old_below_60,
                        AgeCategory::From60To80 => &mut old_60_to_80,
                        AgeCategory::Above80 => &mut old_above_80,
                    }
                }
            };

            bucket.push(Slab {
                upper_bound: record.upper_bound,
                rate: record.rate,
                base_tax: record.base_tax,
            });
        }

        Ok(SlabSchedule {
            new_regime: table("new", new_regime)?,
            old_below_60: table(&old_table_name(AgeCategory::Below60), old_below_60)?,
            old_60_to_80: table(&old_table_name(AgeCategory::From60To80), old_60_to_80)?,
            old_above_80: table(&old_table_name(AgeCategory::Above80), old_above_80)?,
        })
    }

    /// Read, parse and build a schedule from a file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<SlabSchedule, SlabLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SlabLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records = Self::parse(file)?;
        debug!(path = %path.display(), records = records.len(), "parsed slab records");

        Self::build(&records)
    }
}

fn old_table_name(age: AgeCategory) -> String {
    format!("{}/{}", TaxRegime::Old, age)
}

fn table(
    name: &str,
    slabs: Vec<Slab>,
) -> Result<SlabTable, SlabLoadError> {
    if slabs.is_empty() {
        return Err(SlabLoadError::MissingTable(name.to_string()));
    }
    SlabTable::new(slabs).map_err(|source| SlabLoadError::InvalidTable {
        table: name.to_string(),
        source,
    })
}
