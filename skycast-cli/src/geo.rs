use skycast_core::{Settings, WeatherError};

/// Fixed message when no location capability is available.
const LOCATION_UNAVAILABLE: &str = "위치 정보를 가져올 수 없습니다. 위치 권한을 허용해주세요.";

/// Resolve the current position.
///
/// A terminal has no geolocation service, so the stored home location in the
/// settings file stands in for one. Absent coordinates mean the capability is
/// unavailable and no request may be made.
pub fn current_position(settings: &Settings) -> Result<(f64, f64), WeatherError> {
    settings
        .home
        .map(|home| (home.lat, home.lon))
        .ok_or_else(|| WeatherError::Capability(LOCATION_UNAVAILABLE.to_string()))
}
