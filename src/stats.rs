use crate::filter::filter_range;
use crate::models::{
    Dashboard, DateRange, GroupTotals, HourPoint, ProfileSeries, Profiles, RentalRecord,
    RentalTable, SplitSlice, Totals,
};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    KeyAscending,
    /// Largest summed total first; equal totals keep first-occurrence order.
    TotalDescending,
}

/// Groups `records` by `key`, summing casual, registered and total per group.
pub fn aggregate_by<K, F>(records: &[RentalRecord], key: F, policy: SortPolicy) -> Vec<GroupTotals<K>>
where
    K: Eq + Hash + Ord + Clone,
    F: Fn(&RentalRecord) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<GroupTotals<K>> = Vec::new();

    for record in records {
        let group_key = key(record);
        let slot = *slots.entry(group_key.clone()).or_insert_with(|| {
            groups.push(GroupTotals {
                key: group_key,
                casual: 0,
                registered: 0,
                total: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.casual = group.casual.saturating_add(record.casual);
        group.registered = group.registered.saturating_add(record.registered);
        group.total = group.total.saturating_add(record.total);
    }

    match policy {
        SortPolicy::KeyAscending => groups.sort_by(|a, b| a.key.cmp(&b.key)),
        SortPolicy::TotalDescending => groups.sort_by(|a, b| b.total.cmp(&a.total)),
    }
    groups
}

pub fn daily_totals(records: &[RentalRecord]) -> Vec<GroupTotals<NaiveDate>> {
    aggregate_by(records, |r| r.date, SortPolicy::KeyAscending)
}

pub fn season_totals(records: &[RentalRecord]) -> Vec<GroupTotals<String>> {
    aggregate_by(records, |r| r.season.clone(), SortPolicy::TotalDescending)
}

pub fn hour_totals(records: &[RentalRecord]) -> Vec<GroupTotals<u8>> {
    aggregate_by(records, |r| r.hour, SortPolicy::TotalDescending)
}

pub fn workingday_totals(records: &[RentalRecord]) -> Vec<GroupTotals<String>> {
    aggregate_by(records, |r| r.workingday.clone(), SortPolicy::TotalDescending)
}

pub fn weather_totals(records: &[RentalRecord]) -> Vec<GroupTotals<String>> {
    aggregate_by(records, |r| r.weather.clone(), SortPolicy::TotalDescending)
}

pub fn summary_totals(records: &[RentalRecord]) -> Totals {
    records.iter().fold(Totals::default(), |acc, r| Totals {
        casual: acc.casual.saturating_add(r.casual),
        registered: acc.registered.saturating_add(r.registered),
        total: acc.total.saturating_add(r.total),
    })
}

/// Casual then registered, each with its percentage of all rentals.
pub fn user_split(records: &[RentalRecord]) -> Vec<SplitSlice> {
    if records.is_empty() {
        return Vec::new();
    }
    let totals = summary_totals(records);
    let share = |count: u64| {
        if totals.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / totals.total as f64
        }
    };
    vec![
        SplitSlice {
            label: "casual".to_string(),
            count: totals.casual,
            share: share(totals.casual),
        },
        SplitSlice {
            label: "registered".to_string(),
            count: totals.registered,
            share: share(totals.registered),
        },
    ]
}

pub fn build_dashboard(table: &RentalTable, range: DateRange) -> Dashboard {
    let subset = filter_range(table, range);
    Dashboard {
        range,
        bounds: table.bounds(),
        record_count: subset.len(),
        totals: summary_totals(subset),
        daily: daily_totals(subset),
        user_split: user_split(subset),
        by_season: season_totals(subset),
        by_hour: hour_totals(subset),
        by_workingday: workingday_totals(subset),
        by_weather: weather_totals(subset),
    }
}

/// Mean `total` per hour for each category, categories in first-occurrence order.
pub fn hourly_profile<F>(records: &[RentalRecord], category: F) -> Vec<ProfileSeries>
where
    F: Fn(&RentalRecord) -> &str,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<(&str, BTreeMap<u8, (u64, u64)>)> = Vec::new();

    for record in records {
        let name = category(record);
        let slot = *slots.entry(name).or_insert_with(|| {
            series.push((name, BTreeMap::new()));
            series.len() - 1
        });
        let (sum, count) = series[slot].1.entry(record.hour).or_insert((0, 0));
        *sum = sum.saturating_add(record.total);
        *count += 1;
    }

    series
        .into_iter()
        .map(|(name, hours)| ProfileSeries {
            category: name.to_string(),
            points: hours
                .into_iter()
                .map(|(hour, (sum, count))| HourPoint {
                    hour,
                    mean_total: sum as f64 / count as f64,
                    samples: count,
                })
                .collect(),
        })
        .collect()
}

/// Hourly profiles over the whole table, independent of any date filter.
pub fn build_profiles(table: &RentalTable) -> Profiles {
    let records = table.records();
    Profiles {
        by_season: hourly_profile(records, |r| r.season.as_str()),
        by_weather: hourly_profile(records, |r| r.weather.as_str()),
        by_workingday: hourly_profile(records, |r| r.workingday.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(
        day: NaiveDate,
        hour: u8,
        season: &str,
        weather: &str,
        workingday: &str,
        casual: u64,
        registered: u64,
    ) -> RentalRecord {
        RentalRecord {
            date: day,
            hour,
            season: season.into(),
            weather: weather.into(),
            workingday: workingday.into(),
            casual,
            registered,
            total: casual + registered,
        }
    }

    fn two_row_table() -> RentalTable {
        RentalTable::from_records(vec![
            record(date(2011, 1, 2), 0, "fall", "Clear", "Workday", 5, 25),
            record(date(2011, 1, 1), 0, "spring", "Clear", "Offday", 10, 40),
        ])
        .unwrap()
    }

    fn sample_table() -> RentalTable {
        RentalTable::from_records(vec![
            record(date(2011, 1, 1), 8, "Spring", "Clear", "Offday", 4, 20),
            record(date(2011, 1, 1), 17, "Spring", "Mist", "Offday", 9, 31),
            record(date(2011, 1, 3), 8, "Spring", "Clear", "Workday", 2, 60),
            record(date(2011, 1, 3), 17, "Spring", "Light Rain", "Workday", 1, 90),
            record(date(2011, 6, 1), 8, "Summer", "Clear", "Workday", 15, 110),
            record(date(2011, 6, 1), 3, "Summer", "Clear", "Workday", 0, 4),
            record(date(2011, 6, 2), 17, "Summer", "Mist", "Workday", 40, 200),
        ])
        .unwrap()
    }

    #[test]
    fn season_scenario_orders_by_total() {
        let table = two_row_table();
        let groups = season_totals(filter_range(&table, table.bounds()));
        assert_eq!(
            groups,
            vec![
                GroupTotals { key: "spring".to_string(), casual: 10, registered: 40, total: 50 },
                GroupTotals { key: "fall".to_string(), casual: 5, registered: 25, total: 30 },
            ]
        );
    }

    #[test]
    fn daily_scenario_is_chronological() {
        let table = two_row_table();
        let days = daily_totals(filter_range(&table, table.bounds()));
        assert_eq!(
            days,
            vec![
                GroupTotals { key: date(2011, 1, 1), casual: 10, registered: 40, total: 50 },
                GroupTotals { key: date(2011, 1, 2), casual: 5, registered: 25, total: 30 },
            ]
        );
    }

    #[test]
    fn groups_preserve_row_invariant_and_grand_total() {
        let table = sample_table();
        let subset = table.records();
        let grand = summary_totals(subset);
        assert_eq!(grand.casual + grand.registered, grand.total);

        fn check<K>(groups: &[GroupTotals<K>], grand: u64) {
            for group in groups {
                assert_eq!(group.casual + group.registered, group.total);
            }
            assert_eq!(groups.iter().map(|g| g.total).sum::<u64>(), grand);
        }

        check(&daily_totals(subset), grand.total);
        check(&season_totals(subset), grand.total);
        check(&hour_totals(subset), grand.total);
        check(&workingday_totals(subset), grand.total);
        check(&weather_totals(subset), grand.total);
    }

    #[test]
    fn descending_views_sort_by_total() {
        let table = sample_table();
        let hours = hour_totals(table.records());
        let keys: Vec<u8> = hours.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![17, 8, 3]);
        assert_eq!(hours[0].total, 40 + 91 + 240);

        let weather = weather_totals(table.records());
        assert!(weather.windows(2).all(|pair| pair[0].total >= pair[1].total));
    }

    #[test]
    fn equal_totals_keep_first_occurrence() {
        let d = date(2011, 1, 1);
        let records = vec![
            record(d, 0, "Winter", "Clear", "Offday", 1, 9),
            record(d, 1, "Autumn", "Clear", "Offday", 2, 8),
            record(d, 2, "Summer", "Clear", "Offday", 0, 20),
        ];
        let keys: Vec<String> = season_totals(&records).into_iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["Summer", "Winter", "Autumn"]);
    }

    #[test]
    fn empty_subset_yields_empty_views() {
        let table = sample_table();
        let nothing = DateRange::new(date(2012, 1, 1), date(2012, 2, 1));
        let dashboard = build_dashboard(&table, nothing);
        assert_eq!(dashboard.record_count, 0);
        assert_eq!(dashboard.totals, Totals::default());
        assert!(dashboard.daily.is_empty());
        assert!(dashboard.user_split.is_empty());
        assert!(dashboard.by_season.is_empty());
        assert!(dashboard.by_hour.is_empty());
        assert!(dashboard.by_workingday.is_empty());
        assert!(dashboard.by_weather.is_empty());
    }

    #[test]
    fn user_split_is_casual_then_registered() {
        let table = two_row_table();
        let split = user_split(table.records());
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].label, "casual");
        assert_eq!(split[0].count, 15);
        assert_eq!(split[1].label, "registered");
        assert_eq!(split[1].count, 65);
        assert!((split[0].share - 18.75).abs() < 1e-9);
        assert!((split[0].share + split[1].share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn user_split_with_zero_rentals_has_zero_shares() {
        let records = vec![record(date(2011, 1, 1), 4, "Spring", "Clear", "Offday", 0, 0)];
        let split = user_split(&records);
        assert_eq!(split.len(), 2);
        assert!(split.iter().all(|slice| slice.count == 0 && slice.share == 0.0));
    }

    #[test]
    fn dashboard_is_repeatable() {
        let table = sample_table();
        let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 3));
        let first = build_dashboard(&table, range);
        let second = build_dashboard(&table, range);
        assert_eq!(first, second);
        assert_eq!(first.record_count, 4);
        assert_eq!(first.totals.total, 24 + 40 + 62 + 91);
        assert_eq!(first.bounds, table.bounds());
    }

    #[test]
    fn hourly_profile_averages_per_category() {
        let table = sample_table();
        let profiles = build_profiles(&table);

        let categories: Vec<&str> = profiles
            .by_workingday
            .iter()
            .map(|series| series.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Offday", "Workday"]);

        let workday = &profiles.by_workingday[1];
        let hours: Vec<u8> = workday.points.iter().map(|p| p.hour).collect();
        assert_eq!(hours, vec![3, 8, 17]);
        let eight = &workday.points[1];
        assert_eq!(eight.samples, 2);
        assert!((eight.mean_total - (62.0 + 125.0) / 2.0).abs() < 1e-9);

        assert_eq!(profiles.by_season.len(), 2);
        assert_eq!(profiles.by_weather.len(), 3);
    }
}
