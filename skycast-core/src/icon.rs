//! Maps provider icon codes to identifiers in the hosted icon set.

/// Base URL of the icon set. Referenced only, never fetched by this crate.
const ICON_BASE_URL: &str = "https://basmilius.github.io/weather-icons/production/fill/all/";

/// Provider code prefix → (day icon, night icon).
const ICON_TABLE: &[(&str, &str, &str)] = &[
    ("01", "clear-day", "clear-night"),
    ("02", "partly-cloudy-day", "partly-cloudy-night"),
    ("03", "cloudy", "cloudy"),
    ("04", "overcast", "overcast"),
    ("09", "rain", "rain"),
    ("10", "partly-cloudy-day-rain", "partly-cloudy-night-rain"),
    ("11", "thunderstorms", "thunderstorms"),
    ("13", "snow", "snow"),
    ("50", "mist", "mist"),
];

/// Map a provider icon code such as `"10n"` to an icon identifier.
///
/// The first two characters select the condition, the trailing letter the
/// day/night variant. Unrecognized prefixes fall back to day/night clear.
pub fn icon_name(code: &str) -> &'static str {
    let is_day = code.contains('d');
    let prefix = code.get(..2).unwrap_or("");

    ICON_TABLE
        .iter()
        .find(|(p, _, _)| *p == prefix)
        .map_or_else(
            || if is_day { "clear-day" } else { "clear-night" },
            |(_, day, night)| if is_day { *day } else { *night },
        )
}

/// Full SVG URL for a provider icon code.
pub fn icon_url(code: &str) -> String {
    format!("{ICON_BASE_URL}{}.svg", icon_name(code))
}
