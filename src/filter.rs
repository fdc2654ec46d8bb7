use crate::models::{DateRange, RentalRecord, RentalTable};
use chrono::NaiveDate;

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps(&self, other: DateRange) -> bool {
        !self.is_reversed() && self.start <= other.end && other.start <= self.end
    }

    /// Trims an overlapping range down to `bounds`. Ranges that are reversed or
    /// lie wholly outside are returned untouched and filter to nothing.
    pub fn clamp_to(self, bounds: DateRange) -> Self {
        if !self.overlaps(bounds) {
            return self;
        }
        Self {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }
}

/// Rows whose date lies in `range`, both ends inclusive.
///
/// The table is sorted by date, so the matching rows form one contiguous run
/// and are located by binary search.
pub fn filter_range(table: &RentalTable, range: DateRange) -> &[RentalRecord] {
    if range.is_reversed() {
        return &[];
    }
    let records = table.records();
    let lo = records.partition_point(|record| record.date < range.start);
    let hi = records.partition_point(|record| record.date <= range.end);
    &records[lo..hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn record(d: u32, hour: u8) -> RentalRecord {
        RentalRecord {
            date: day(d),
            hour,
            season: "Spring".into(),
            weather: "Clear".into(),
            workingday: "Workday".into(),
            casual: 1,
            registered: 2,
            total: 3,
        }
    }

    fn table() -> RentalTable {
        RentalTable::from_records(vec![
            record(1, 0),
            record(1, 1),
            record(3, 0),
            record(4, 0),
            record(4, 1),
            record(7, 0),
        ])
        .unwrap()
    }

    #[test]
    fn matches_predicate_exactly() {
        let table = table();
        for start in 1..=8 {
            for end in start..=8 {
                let range = DateRange::new(day(start), day(end));
                let got = filter_range(&table, range);
                let expected: Vec<&RentalRecord> = table
                    .records()
                    .iter()
                    .filter(|r| range.contains(r.date))
                    .collect();
                assert_eq!(got.iter().collect::<Vec<_>>(), expected, "range {range:?}");
            }
        }
    }

    #[test]
    fn full_bounds_return_everything() {
        let table = table();
        assert_eq!(filter_range(&table, table.bounds()).len(), table.len());
    }

    #[test]
    fn single_day_without_rows_is_empty() {
        let table = table();
        assert!(filter_range(&table, DateRange::new(day(2), day(2))).is_empty());
        assert_eq!(filter_range(&table, DateRange::new(day(4), day(4))).len(), 2);
    }

    #[test]
    fn outside_table_is_empty() {
        let table = table();
        let later = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        assert!(filter_range(&table, DateRange::new(later, later)).is_empty());
    }

    #[test]
    fn reversed_range_is_empty() {
        let table = table();
        assert!(filter_range(&table, DateRange::new(day(7), day(1))).is_empty());
    }

    #[test]
    fn clamp_keeps_ends_inside_bounds() {
        let bounds = DateRange::new(day(3), day(20));
        let clamped = DateRange::new(day(1), day(28)).clamp_to(bounds);
        assert_eq!(clamped, bounds);

        let tail = DateRange::new(day(10), day(31)).clamp_to(bounds);
        assert_eq!(tail, DateRange::new(day(10), day(20)));

        let reversed = DateRange::new(day(25), day(2));
        assert_eq!(reversed.clamp_to(bounds), reversed);

        let outside = DateRange::new(day(21), day(30));
        assert_eq!(outside.clamp_to(bounds), outside);
    }
}
