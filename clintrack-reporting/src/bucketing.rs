//! Time bucketing for trend charts.
//!
//! A [`BucketSeries`] covers an inclusive date range with contiguous buckets
//! of one [`Granularity`]. Every bucket is present even when nothing falls in
//! it, so a chart never silently skips a period.

use chrono::{Datelike, Days, Months, NaiveDate};
use clintrack_api::ChartSeries;
use clintrack_db::DateRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    /// ISO weeks, starting on Monday
    Week,
    Month,
}

impl Granularity {
    /// Start of the bucket containing `date`.
    ///
    /// Saturates at [`NaiveDate::MIN`] for the partial first week.
    pub fn truncate(&self, date: NaiveDate) -> NaiveDate {
        let offset = match self {
            Granularity::Day => 0,
            Granularity::Week => date.weekday().num_days_from_monday(),
            Granularity::Month => date.day0(),
        };
        date.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Start of the bucket following the one starting at `bucket_start`
    fn next(&self, bucket_start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Day => bucket_start.succ_opt(),
            Granularity::Week => bucket_start.checked_add_days(Days::new(7)),
            Granularity::Month => bucket_start.checked_add_months(Months::new(1)),
        }
    }

    pub fn label(&self, bucket_start: NaiveDate) -> String {
        match self {
            Granularity::Day | Granularity::Week => {
                bucket_start.format("%Y-%m-%d").to_string()
            }
            Granularity::Month => bucket_start.format("%b %Y").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub start: NaiveDate,
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSeries {
    granularity: Granularity,
    range: DateRange,
    buckets: Vec<Bucket>,
}

impl BucketSeries {
    /// All buckets spanning `range`, each with a zero count.
    ///
    /// The first bucket is the one containing `range.start` and the last is
    /// the one containing `range.end`. A range ending before it starts has
    /// no buckets.
    pub fn empty(range: DateRange, granularity: Granularity) -> Self {
        let mut buckets = Vec::new();
        if range.start <= range.end {
            let last = granularity.truncate(range.end);
            let mut current = Some(granularity.truncate(range.start));
            while let Some(start) = current.filter(|start| *start <= last) {
                buckets.push(Bucket {
                    start,
                    label: granularity.label(start),
                    count: 0,
                });
                current = granularity.next(start);
            }
        }

        Self {
            granularity,
            range,
            buckets,
        }
    }

    /// Bucket the given dates. Dates outside `range` are ignored.
    pub fn from_dates(
        range: DateRange,
        granularity: Granularity,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        let mut series = Self::empty(range, granularity);
        for date in dates {
            series.record(date);
        }
        series
    }

    /// Count one item. Returns `false` when `date` lies outside the range.
    pub fn record(&mut self, date: NaiveDate) -> bool {
        if !self.range.contains(date) {
            return false;
        }
        let key = self.granularity.truncate(date);
        match self.buckets.binary_search_by_key(&key, |bucket| bucket.start) {
            Ok(index) => {
                self.buckets[index].count += 1;
                true
            }
            Err(_) => false,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total(&self) -> i64 {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(|bucket| bucket.label.clone()).collect()
    }

    pub fn counts(&self) -> Vec<i64> {
        self.buckets.iter().map(|bucket| bucket.count).collect()
    }
}

impl From<BucketSeries> for ChartSeries {
    fn from(series: BucketSeries) -> Self {
        let (labels, data): (Vec<String>, Vec<i64>) = series
            .buckets
            .into_iter()
            .map(|bucket| (bucket.label, bucket.count))
            .unzip();
        ChartSeries::new(labels, data)
    }
}

/// The `days` calendar days ending on `as_of`, one daily bucket each
pub fn last_n_days(as_of: NaiveDate, days: u32) -> DateRange {
    let span = u64::from(days.saturating_sub(1));
    let start = as_of.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
    DateRange::new(start, as_of)
}

/// The `weeks` ISO weeks ending with the week of `as_of`, starting on a Monday
pub fn last_n_weeks(as_of: NaiveDate, weeks: u32) -> DateRange {
    let span = u64::from(weeks.saturating_sub(1)) * 7;
    let start = Granularity::Week
        .truncate(as_of)
        .checked_sub_days(Days::new(span))
        .unwrap_or(NaiveDate::MIN);
    DateRange::new(start, as_of)
}

/// The `months` calendar months ending with the month of `as_of`
pub fn last_n_months(as_of: NaiveDate, months: u32) -> DateRange {
    let start = Granularity::Month
        .truncate(as_of)
        .checked_sub_months(Months::new(months.saturating_sub(1)))
        .unwrap_or(NaiveDate::MIN);
    DateRange::new(start, as_of)
}

/// The calendar month containing `as_of`, up to and including `as_of`
pub fn month_to_date(as_of: NaiveDate) -> DateRange {
    DateRange::new(Granularity::Month.truncate(as_of), as_of)
}

/// The full calendar month before the one containing `as_of`
pub fn previous_month(as_of: NaiveDate) -> DateRange {
    let current_start = Granularity::Month.truncate(as_of);
    let start = current_start
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN);
    let end = current_start.pred_opt().unwrap_or(NaiveDate::MIN);
    DateRange::new(start, end)
}
