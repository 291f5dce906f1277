//! Terminal output for the dashboard: current conditions, the forecast
//! strip, and error lines.

use chrono::{DateTime, Datelike, Local, Utc};

use skycast_core::model::{CurrentWeather, ForecastEntry};
use skycast_core::{Units, icon, outfit};

/// Korean short weekday names, Monday first.
const WEEKDAYS_KR: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

fn weekday_kr(date: &impl Datelike) -> &'static str {
    WEEKDAYS_KR[date.weekday().num_days_from_monday() as usize]
}

/// "8월 8일 (금)" — header date above the current conditions.
fn header_date(date: &impl Datelike) -> String {
    format!("{}월 {}일 ({})", date.month(), date.day(), weekday_kr(date))
}

/// "8/10(월)" — compact date on a forecast card.
fn card_date(date: &impl Datelike) -> String {
    format!("{}/{}({})", date.month(), date.day(), weekday_kr(date))
}

fn local_from_unix(dt: i64) -> DateTime<Local> {
    DateTime::<Utc>::from_timestamp(dt, 0)
        .unwrap_or_else(Utc::now)
        .with_timezone(&Local)
}

fn wind_unit(units: Units) -> &'static str {
    match units {
        Units::Metric => "m/s",
        Units::Imperial => "mph",
    }
}

pub fn loading() {
    println!("불러오는 중...");
}

/// Replace the results view with a single error line.
pub fn error(message: &str) {
    println!();
    println!("{message}");
}

pub fn current_conditions(current: &CurrentWeather, display_name: &str, units: Units) {
    let condition = current.weather.first();
    let description = condition.map_or("알 수 없음", |c| c.description.as_str());
    let icon_code = condition.map_or("01d", |c| c.icon.as_str());

    println!();
    println!("{}  {}", header_date(&Local::now()), display_name);
    println!("  {}°  {}", current.main.temp.round(), description);
    println!(
        "  습도 {}%  바람 {} {}",
        current.main.humidity,
        current.wind.speed,
        wind_unit(units)
    );
    println!("  {}", icon::icon_url(icon_code));
    println!("  {}", outfit::recommendation_for(current.main.temp, units));
}

/// One compact card per daily forecast entry, in input order.
pub fn forecast_strip(entries: &[&ForecastEntry]) {
    if entries.is_empty() {
        return;
    }

    println!();
    println!("[5일 예보]");
    for entry in entries {
        let condition = entry.weather.first();
        let icon_code = condition.map_or("01d", |c| c.icon.as_str());

        println!(
            "  {}  {:<26}  {}°",
            card_date(&local_from_unix(entry.dt)),
            icon::icon_name(icon_code),
            entry.main.temp.round()
        );
    }
}
