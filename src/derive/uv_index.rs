//! Heuristic UV index estimate.
//!
//! The provider's current-conditions endpoint carries no UV data, so the index
//! is approximated from the hour of day and the cloud cover. This is a linear
//! heuristic and not a radiation model.

use crate::utils::round_half_up;
use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

/// Highest value [`estimate_uv_index`] can return.
pub const MAX_UV_INDEX: u8 = 11;

const DAYLIGHT_START_HOUR: u32 = 6;
const DAYLIGHT_END_HOUR: u32 = 18;
const PEAK_HOUR: f64 = 12.0;
const PEAK_VALUE: f64 = 10.0;

/// Estimates the UV index at `at`, seen from time zone `tz`.
///
/// Outside the daylight hours 06:00-18:59 (by local hour, both ends inclusive)
/// the estimate is 0. Inside, the clear-sky value peaks at 10 at noon and drops
/// by one per hour away from noon, down to 4 at hours 6 and 18. That value is
/// scaled by the fraction of open sky, rounded half-up and clamped to
/// `0..=MAX_UV_INDEX`. Cloud cover above 100 % counts as 100 %.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use forecast_digest::estimate_uv_index;
///
/// let noon = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
/// assert_eq!(estimate_uv_index(noon, 0, &Utc), 10);
/// assert_eq!(estimate_uv_index(noon, 50, &Utc), 5);
/// ```
pub fn estimate_uv_index<Tz: TimeZone>(at: DateTime<Utc>, cloud_cover_percent: u8, tz: &Tz) -> u8 {
    let hour = at.with_timezone(tz).hour();
    if !(DAYLIGHT_START_HOUR..=DAYLIGHT_END_HOUR).contains(&hour) {
        return 0;
    }

    let clear_sky = PEAK_VALUE - (PEAK_HOUR - hour as f64).abs();
    let clouds = f64::from(cloud_cover_percent.min(100));
    let attenuated = clear_sky * (1.0 - clouds / 100.0);

    round_half_up(attenuated).clamp(0, i64::from(MAX_UV_INDEX)) as u8
}

/// [`estimate_uv_index`] in the time zone of the machine running the code.
pub fn estimate_local_uv_index(at: DateTime<Utc>, cloud_cover_percent: u8) -> u8 {
    estimate_uv_index(at, cloud_cover_percent, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::utc;
    use chrono::FixedOffset;

    fn at_hour(hour: u32) -> DateTime<Utc> {
        utc(2024, 6, 21, hour)
    }

    #[test]
    fn test_reference_values() {
        assert_eq!(estimate_uv_index(at_hour(12), 0, &Utc), 10);
        assert_eq!(estimate_uv_index(at_hour(12), 50, &Utc), 5);
        assert_eq!(estimate_uv_index(at_hour(6), 0, &Utc), 4);
        assert_eq!(estimate_uv_index(at_hour(18), 0, &Utc), 4);
        assert_eq!(estimate_uv_index(at_hour(19), 0, &Utc), 0);
        assert_eq!(estimate_uv_index(at_hour(5), 0, &Utc), 0);
    }

    #[test]
    fn test_half_values_round_up() {
        // 9 * 0.5 = 4.5
        assert_eq!(estimate_uv_index(at_hour(11), 50, &Utc), 5);
        // 7 * 0.5 = 3.5
        assert_eq!(estimate_uv_index(at_hour(9), 50, &Utc), 4);
    }

    #[test]
    fn test_overcast_is_zero() {
        assert_eq!(estimate_uv_index(at_hour(12), 100, &Utc), 0);
        assert_eq!(estimate_uv_index(at_hour(12), 250, &Utc), 0);
    }

    #[test]
    fn test_hour_is_taken_in_the_given_zone() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        // 10:00 UTC is noon in CEST.
        assert_eq!(estimate_uv_index(at_hour(10), 0, &cest), 10);
        // 17:00 UTC is 19:00 in CEST, after daylight.
        assert_eq!(estimate_uv_index(at_hour(17), 0, &cest), 0);
    }

    #[test]
    fn test_bounded_and_non_increasing_in_cloud_cover() {
        for hour in 0..24 {
            let mut previous = u8::MAX;
            for clouds in 0..=100u8 {
                let index = estimate_uv_index(at_hour(hour), clouds, &Utc);
                assert!(index <= MAX_UV_INDEX);
                assert!(
                    index <= previous,
                    "hour {} clouds {}: {} > {}",
                    hour,
                    clouds,
                    index,
                    previous
                );
                if !(6..=18).contains(&hour) {
                    assert_eq!(index, 0);
                }
                previous = index;
            }
        }
    }
}
