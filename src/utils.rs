/// Rounds to the nearest integer, with halves rounded towards positive infinity.
///
/// This matches JavaScript's `Math.round`, so `-2.5` becomes `-2` rather than
/// the `-3` that [`f64::round`] would give. Every rounded value shown to users
/// (temperatures, wind speed, UV index) goes through here.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(17.8), 18);
    }
}
