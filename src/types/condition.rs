//! Maps OpenWeatherMap's numeric weather condition codes to display labels
//! and coarse condition groups.

/// Label returned by [`label_for`] for codes missing from the catalog.
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Condition codes and their labels, sorted by code.
static CONDITION_LABELS: &[(u16, &str)] = &[
    // Thunderstorm
    (200, "Thunderstorm with Light Rain"),
    (201, "Thunderstorm with Rain"),
    (202, "Thunderstorm with Heavy Rain"),
    (210, "Light Thunderstorm"),
    (211, "Thunderstorm"),
    (212, "Heavy Thunderstorm"),
    (221, "Ragged Thunderstorm"),
    (230, "Thunderstorm with Light Drizzle"),
    (231, "Thunderstorm with Drizzle"),
    (232, "Thunderstorm with Heavy Drizzle"),
    // Drizzle
    (300, "Light Drizzle"),
    (301, "Drizzle"),
    (302, "Heavy Drizzle"),
    (310, "Light Rain"),
    (311, "Drizzle Rain"),
    (312, "Heavy Drizzle Rain"),
    (313, "Shower Rain and Drizzle"),
    (314, "Heavy Shower Rain and Drizzle"),
    (321, "Shower Drizzle"),
    // Rain
    (500, "Light Rain"),
    (501, "Moderate Rain"),
    (502, "Heavy Rain"),
    (503, "Very Heavy Rain"),
    (504, "Extreme Rain"),
    (511, "Freezing Rain"),
    (520, "Light Shower Rain"),
    (521, "Shower Rain"),
    (522, "Heavy Shower Rain"),
    (531, "Ragged Shower Rain"),
    // Snow
    (600, "Light Snow"),
    (601, "Snow"),
    (602, "Heavy Snow"),
    (611, "Sleet"),
    (612, "Light Shower Sleet"),
    (613, "Shower Sleet"),
    (615, "Light Rain and Snow"),
    (616, "Rain and Snow"),
    (620, "Light Shower Snow"),
    (621, "Shower Snow"),
    (622, "Heavy Shower Snow"),
    // Atmosphere
    (701, "Mist"),
    (711, "Smoke"),
    (721, "Haze"),
    (731, "Sand/Dust Whirls"),
    (741, "Fog"),
    (751, "Sand"),
    (761, "Dust"),
    (762, "Volcanic Ash"),
    (771, "Squalls"),
    (781, "Tornado"),
    // Clear and clouds
    (800, "Clear Sky"),
    (801, "Few Clouds"),
    (802, "Scattered Clouds"),
    (803, "Broken Clouds"),
    (804, "Overcast Clouds"),
];

/// Returns the human-readable label for a weather condition code.
///
/// Codes not in the catalog yield [`UNKNOWN_CONDITION`].
///
/// # Examples
///
/// ```rust
/// use forecast_digest::label_for;
///
/// assert_eq!(label_for(800), "Clear Sky");
/// assert_eq!(label_for(502), "Heavy Rain");
/// assert_eq!(label_for(999), "Unknown");
/// ```
pub fn label_for(code: u16) -> &'static str {
    CONDITION_LABELS
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|idx| CONDITION_LABELS[idx].1)
        .unwrap_or(UNKNOWN_CONDITION)
}

/// Coarse category of a weather condition code.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConditionGroup {
    /// Codes 200-232.
    Thunderstorm,
    /// Codes 300-321.
    Drizzle,
    /// Codes 500-531.
    Rain,
    /// Codes 600-622.
    Snow,
    /// Codes 701-781: mist, smoke, haze, dust, fog and the like.
    Atmosphere,
    /// Code 800.
    Clear,
    /// Codes 801-804.
    Clouds,
}

impl ConditionGroup {
    /// Classifies a condition code by its range.
    ///
    /// Returns `None` for codes outside every known range. Codes inside a range
    /// but missing from the label catalog (e.g. 205) still classify.
    ///
    /// ```rust
    /// use forecast_digest::ConditionGroup;
    ///
    /// assert_eq!(ConditionGroup::from_code(211), Some(ConditionGroup::Thunderstorm));
    /// assert_eq!(ConditionGroup::from_code(800), Some(ConditionGroup::Clear));
    /// assert_eq!(ConditionGroup::from_code(999), None);
    /// ```
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            200..=232 => Some(ConditionGroup::Thunderstorm),
            300..=321 => Some(ConditionGroup::Drizzle),
            500..=531 => Some(ConditionGroup::Rain),
            600..=622 => Some(ConditionGroup::Snow),
            701..=781 => Some(ConditionGroup::Atmosphere),
            800 => Some(ConditionGroup::Clear),
            801..=804 => Some(ConditionGroup::Clouds),
            _ => None,
        }
    }

    /// Display name of the group, matching the provider's `main` field.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionGroup::Thunderstorm => "Thunderstorm",
            ConditionGroup::Drizzle => "Drizzle",
            ConditionGroup::Rain => "Rain",
            ConditionGroup::Snow => "Snow",
            ConditionGroup::Atmosphere => "Atmosphere",
            ConditionGroup::Clear => "Clear",
            ConditionGroup::Clouds => "Clouds",
        }
    }
}
