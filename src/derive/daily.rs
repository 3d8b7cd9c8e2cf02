//! Groups forecast samples into calendar days.

use crate::types::daily_summary::DailySummary;
use crate::types::sample::Sample;
use chrono::{Local, NaiveDate, TimeZone};
use log::debug;
use std::collections::HashMap;

/// Buckets samples by calendar date in `tz` and folds each bucket into a [`DailySummary`].
///
/// The day of a sample is its timestamp's date as seen in `tz`, so the same
/// forecast can produce different buckets in different time zones. Summaries
/// are returned in the order their day was first encountered in `samples`;
/// the input is not sorted.
///
/// Each summary keeps the condition and timestamp of the *first* sample of its
/// day. Later samples only widen the min/max temperature range.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use forecast_digest::{bucket_by_day, Condition, Sample};
///
/// let sample = |hour: u32, temperature: f64| Sample {
///     observed_at: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
///     temperature,
///     condition: Condition {
///         code: 800,
///         main: "Clear".into(),
///         description: "clear sky".into(),
///         icon: "01d".into(),
///     },
///     cloud_cover_percent: None,
///     feels_like: None,
///     humidity: None,
///     wind_speed: None,
/// };
///
/// let days = bucket_by_day(&[sample(9, 14.0), sample(12, 19.5), sample(15, 17.0)], &Utc);
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[0].min_temperature, 14.0);
/// assert_eq!(days[0].max_temperature, 19.5);
/// ```
pub fn bucket_by_day<Tz: TimeZone>(samples: &[Sample], tz: &Tz) -> Vec<DailySummary> {
    let mut summaries: Vec<DailySummary> = Vec::new();
    let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.observed_at.with_timezone(tz).date_naive();
        match index_by_date.get(&date) {
            Some(&idx) => summaries[idx].absorb(sample),
            None => {
                index_by_date.insert(date, summaries.len());
                summaries.push(DailySummary::open(date, sample));
            }
        }
    }

    debug!(
        "Bucketed {} samples into {} days",
        samples.len(),
        summaries.len()
    );
    summaries
}

/// [`bucket_by_day`] in the time zone of the machine running the code.
pub fn bucket_by_local_day(samples: &[Sample]) -> Vec<DailySummary> {
    bucket_by_day(samples, &Local)
}
