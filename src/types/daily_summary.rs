use crate::types::sample::{Condition, Sample};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Min/max temperature and representative condition for one calendar day.
///
/// Built by [`crate::bucket_by_day`]. The condition and `representative_at`
/// come from the first sample seen for the day and are never replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub representative_at: DateTime<Utc>,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub condition: Condition,
}

impl DailySummary {
    pub(crate) fn open(date: NaiveDate, sample: &Sample) -> Self {
        Self {
            date,
            representative_at: sample.observed_at,
            min_temperature: sample.temperature,
            max_temperature: sample.temperature,
            condition: sample.condition.clone(),
        }
    }

    /// Folds another sample of the same day into the temperature range.
    pub(crate) fn absorb(&mut self, sample: &Sample) {
        self.min_temperature = self.min_temperature.min(sample.temperature);
        self.max_temperature = self.max_temperature.max(sample.temperature);
    }
}
