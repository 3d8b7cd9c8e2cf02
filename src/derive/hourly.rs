use crate::types::sample::Sample;

/// Number of forecast steps shown as hourly cards.
pub const DEFAULT_HOURLY_WINDOW: usize = 6;

/// Returns the leading `window_size` samples, or all of them if there are fewer.
pub fn window_hourly(samples: &[Sample], window_size: usize) -> &[Sample] {
    &samples[..samples.len().min(window_size)]
}
