use super::entities::{RawSample, SeriesPoint};
use super::value_objects::Metric;
use chrono::NaiveDate;

/// Format of the `date` column
pub const SAMPLE_DATE_FORMAT: &str = "%d/%m/%Y";

const MS_PER_DAY: f64 = 86_400_000.0;

pub fn parse_sample_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), SAMPLE_DATE_FORMAT).ok()
}

/// UTC midnight of `date` as epoch milliseconds
pub fn epoch_millis(date: NaiveDate) -> f64 {
    let unix_epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    date.signed_duration_since(unix_epoch).num_days() as f64 * MS_PER_DAY
}

/// Inverse of [`epoch_millis`], truncated to whole days
pub fn date_from_millis(time_ms: f64) -> Option<NaiveDate> {
    let unix_epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    let days = (time_ms / MS_PER_DAY).floor();
    if !days.is_finite() {
        return None;
    }
    unix_epoch.checked_add_signed(chrono::Duration::try_days(days as i64)?)
}

/// Points of one series for the selected metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedSeries {
    /// Ascending by date
    pub points: Vec<SeriesPoint>,
    /// Rows dropped for an unparseable date or a non-finite value
    pub skipped: usize,
}

/// Parses `date` and the `metric` field of every sample. Rows that fail
/// either parse are skipped; the rest are ordered by date (stable, so
/// duplicate dates keep file order).
pub fn derive_points(samples: &[RawSample], metric: Metric) -> DerivedSeries {
    let mut skipped = 0;
    let mut points: Vec<SeriesPoint> = samples
        .iter()
        .enumerate()
        .filter_map(|(index, sample)| {
            let point = parse_sample_date(&sample.date).and_then(|date| {
                let value = sample.metric_value(metric);
                value.is_finite().then(|| SeriesPoint {
                    index,
                    date,
                    time_ms: epoch_millis(date),
                    value,
                })
            });
            if point.is_none() {
                skipped += 1;
            }
            point
        })
        .collect();
    points.sort_by(|a, b| a.date.cmp(&b.date));
    DerivedSeries { points, skipped }
}
