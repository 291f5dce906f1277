//! Outfit advice derived from the temperature.

use crate::model::Units;

/// Ordered threshold table: the first threshold the temperature reaches wins.
const OUTFIT_TABLE: &[(f64, &str)] = &[
    (28.0, "무더운 날씨! 민소매, 반바지, 원피스를 추천해요."),
    (23.0, "반팔, 얇은 셔츠, 반바지나 면바지가 좋겠어요."),
    (20.0, "얇은 가디건이나 긴팔티, 청바지를 입으세요."),
    (17.0, "얇은 니트, 맨투맨, 가디건으로 체온을 지키세요."),
    (12.0, "자켓, 가디건, 야상에 청바지가 딱이에요."),
    (9.0, "쌀쌀해요. 트렌치코트나 점퍼를 걸치세요."),
    (5.0, "추워요! 코트, 가죽자켓에 히트텍을 입으면 좋겠네요."),
];

const OUTFIT_FALLBACK: &str = "이불 속에 쏘옥... ";

/// Convert a displayed temperature to Celsius for the table lookup.
pub fn to_celsius(temp: f64, units: Units) -> f64 {
    match units {
        Units::Metric => temp,
        Units::Imperial => (temp - 32.0) * 5.0 / 9.0,
    }
}

/// Outfit advice for a Celsius temperature.
pub fn recommendation(temp_celsius: f64) -> &'static str {
    OUTFIT_TABLE
        .iter()
        .find(|(threshold, _)| temp_celsius >= *threshold)
        .map_or(OUTFIT_FALLBACK, |(_, advice)| *advice)
}

/// Advice for a temperature as displayed under the active unit preference.
pub fn recommendation_for(temp: f64, units: Units) -> &'static str {
    recommendation(to_celsius(temp, units))
}
