use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the rental dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub season: String,
    pub weather: String,
    pub workingday: String,
    pub casual: u64,
    pub registered: u64,
    pub total: u64,
}

/// Inclusive calendar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Rows sorted by date ascending, ties kept in file order. Never empty.
#[derive(Debug, Clone)]
pub struct RentalTable {
    records: Vec<RentalRecord>,
    bounds: DateRange,
}

impl RentalTable {
    /// Returns `None` for an empty row set; there are no bounds to offer then.
    pub fn from_records(mut records: Vec<RentalRecord>) -> Option<Self> {
        records.sort_by_key(|record| record.date);
        let bounds = DateRange {
            start: records.first()?.date,
            end: records.last()?.date,
        };
        Some(Self { records, bounds })
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotals<K> {
    pub key: K,
    pub casual: u64,
    pub registered: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub casual: u64,
    pub registered: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSlice {
    pub label: String,
    pub count: u64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub range: DateRange,
    pub bounds: DateRange,
    pub record_count: usize,
    pub totals: Totals,
    pub daily: Vec<GroupTotals<NaiveDate>>,
    pub user_split: Vec<SplitSlice>,
    pub by_season: Vec<GroupTotals<String>>,
    pub by_hour: Vec<GroupTotals<u8>>,
    pub by_workingday: Vec<GroupTotals<String>>,
    pub by_weather: Vec<GroupTotals<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourPoint {
    pub hour: u8,
    pub mean_total: f64,
    pub samples: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSeries {
    pub category: String,
    pub points: Vec<HourPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profiles {
    pub by_season: Vec<ProfileSeries>,
    pub by_weather: Vec<ProfileSeries>,
    pub by_workingday: Vec<ProfileSeries>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RangeResponse {
    pub min: NaiveDate,
    pub max: NaiveDate,
    pub records: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}
