use crate::errors::LoadError;
use crate::models::{RentalRecord, RentalTable};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "dateday",
    "registered",
    "casual",
    "total",
    "season",
    "hour",
    "workingday",
    "weather",
];

#[derive(Debug, Deserialize)]
struct RawRecord {
    dateday: String,
    hour: u8,
    season: String,
    weather: String,
    workingday: String,
    casual: u64,
    registered: u64,
    total: u64,
}

pub async fn load_table(path: &Path) -> Result<RentalTable, LoadError> {
    let bytes = fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_table(&bytes)?;
    let bounds = table.bounds();
    info!(
        "loaded {} records from {} spanning {} to {}",
        table.len(),
        path.display(),
        bounds.start,
        bounds.end
    );
    Ok(table)
}

/// Parses CSV bytes into a date-sorted table. Extra columns are ignored.
pub fn parse_table(bytes: &[u8]) -> Result<RentalTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = index + 1;
        records.push(to_record(row, result?)?);
    }

    RentalTable::from_records(records).ok_or(LoadError::Empty)
}

fn to_record(row: usize, raw: RawRecord) -> Result<RentalRecord, LoadError> {
    let date = parse_date(&raw.dateday).ok_or_else(|| LoadError::InvalidDate {
        row,
        value: raw.dateday.clone(),
    })?;

    if raw.hour > 23 {
        return Err(LoadError::InvalidHour {
            row,
            value: raw.hour,
        });
    }

    if raw.casual.checked_add(raw.registered) != Some(raw.total) {
        return Err(LoadError::InconsistentTotal {
            row,
            casual: raw.casual,
            registered: raw.registered,
            total: raw.total,
        });
    }

    Ok(RentalRecord {
        date,
        hour: raw.hour,
        season: raw.season,
        weather: raw.weather,
        workingday: raw.workingday,
        casual: raw.casual,
        registered: raw.registered,
        total: raw.total,
    })
}

/// Accepts `2011-01-01` and `2011-01-01 00:00:00`; any time part is dropped.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|datetime| datetime.date())
        })
}
