//! The interactive dashboard loop: the terminal counterpart of the web UI's
//! search box, location button, unit toggle, and recent-search list.

use std::fmt;

use inquire::{CustomType, InquireError, Select, Text};

use skycast_core::model::{Location, Units, WeatherQuery};
use skycast_core::recent::pretty_city_name;
use skycast_core::{HomeLocation, RecentSearches, Settings, WeatherBundle, WeatherError};

use crate::client::ProxyClient;
use crate::{geo, render};

const MENU_PROMPT: &str = "무엇을 할까요?";
const EMPTY_CITY: &str = "도시 이름을 입력하세요.";
const CITY_NOT_FOUND: &str = "도시를 찾을 수 없습니다.";
const COORD_FAILURE: &str = "날씨 정보를 가져오는 데 실패했습니다.";

/// Session state threaded through every action. Unit preference is
/// deliberately not persisted; the recent list is.
#[derive(Debug, Default)]
struct Session {
    units: Units,
    last_city: Option<String>,
    recent: RecentSearches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SearchCity,
    UseLocation,
    ToggleUnits,
    RecentSearches,
    SetHomeLocation,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::SearchCity => "도시 검색",
            Action::UseLocation => "현재 위치 날씨",
            Action::ToggleUnits => "°C/°F 전환",
            Action::RecentSearches => "최근 검색어",
            Action::SetHomeLocation => "위치 설정",
            Action::Quit => "종료",
        };
        f.write_str(label)
    }
}

/// Map a prompt result so Esc becomes a no-op instead of an error.
fn prompt_or_cancel<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub struct App {
    client: ProxyClient,
    settings: Settings,
    session: Session,
}

impl App {
    pub fn new(client: ProxyClient, settings: Settings) -> Self {
        // A corrupt or missing store just means an empty list.
        let recent = RecentSearches::load().unwrap_or_default();

        Self {
            client,
            settings,
            session: Session { recent, ..Session::default() },
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            println!();
            let selected = prompt_or_cancel(Select::new(MENU_PROMPT, self.menu()).prompt())?;
            let Some(action) = selected else { break };

            match action {
                Action::SearchCity => self.prompt_city().await?,
                Action::UseLocation => self.use_location().await,
                Action::ToggleUnits => self.toggle_units().await,
                Action::RecentSearches => self.pick_recent().await?,
                Action::SetHomeLocation => self.set_home_location()?,
                Action::Quit => break,
            }
        }

        Ok(())
    }

    /// The recent-searches entry only appears when the list has entries.
    fn menu(&self) -> Vec<Action> {
        let mut actions = vec![Action::SearchCity, Action::UseLocation, Action::ToggleUnits];
        if !self.session.recent.is_empty() {
            actions.push(Action::RecentSearches);
        }
        actions.push(Action::SetHomeLocation);
        actions.push(Action::Quit);
        actions
    }

    async fn prompt_city(&mut self) -> anyhow::Result<()> {
        let Some(input) = prompt_or_cancel(Text::new("도시 이름:").prompt())? else {
            return Ok(());
        };

        let city = input.trim().to_string();
        if city.is_empty() {
            render::error(EMPTY_CITY);
            return Ok(());
        }

        self.search_city(city).await;
        Ok(())
    }

    async fn use_location(&mut self) {
        match geo::current_position(&self.settings) {
            Ok((lat, lon)) => self.search_by_coordinates(lat, lon).await,
            Err(e) => render::error(&e.to_string()),
        }
    }

    /// Flip the unit preference and re-issue the previous search under the
    /// new units. A re-fetch, not a local conversion.
    async fn toggle_units(&mut self) {
        self.session.units = self.session.units.toggled();

        if let Some(city) = self.session.last_city.clone() {
            self.search_city(city).await;
        }
    }

    async fn pick_recent(&mut self) -> anyhow::Result<()> {
        let options = self.session.recent.cities().to_vec();
        let Some(city) = prompt_or_cancel(Select::new("최근 검색어", options).prompt())? else {
            return Ok(());
        };

        self.search_city(city).await;
        Ok(())
    }

    fn set_home_location(&mut self) -> anyhow::Result<()> {
        let lat = prompt_or_cancel(
            CustomType::<f64>::new("위도(lat):")
                .with_error_message("숫자를 입력하세요")
                .prompt(),
        )?;
        let Some(lat) = lat else { return Ok(()) };

        let lon = prompt_or_cancel(
            CustomType::<f64>::new("경도(lon):")
                .with_error_message("숫자를 입력하세요")
                .prompt(),
        )?;
        let Some(lon) = lon else { return Ok(()) };

        self.settings.home = Some(HomeLocation { lat, lon });
        self.settings.save()?;
        println!("위치를 저장했습니다.");
        Ok(())
    }

    async fn search_city(&mut self, city: String) {
        render::loading();

        let query = WeatherQuery {
            location: Location::City(city.clone()),
            units: self.session.units,
        };

        match self.client.fetch(&query).await {
            Ok(bundle) => {
                if let Err(e) = self.show_bundle(&bundle, Some(pretty_city_name(&city))) {
                    render::error(&named_search_message(&e));
                }
            }
            Err(e) => render::error(&named_search_message(&e)),
        }
    }

    async fn search_by_coordinates(&mut self, lat: f64, lon: f64) {
        render::loading();

        let query = WeatherQuery {
            location: Location::Coordinates { lat, lon },
            units: self.session.units,
        };

        // The coordinate path surfaces one fixed message for any failure.
        match self.client.fetch(&query).await {
            Ok(bundle) => {
                if self.show_bundle(&bundle, None).is_err() {
                    render::error(COORD_FAILURE);
                }
            }
            Err(_) => render::error(COORD_FAILURE),
        }
    }

    /// Render a successful bundle and update session state. Coordinate
    /// searches take their display name from the provider payload.
    fn show_bundle(
        &mut self,
        bundle: &WeatherBundle,
        typed_name: Option<String>,
    ) -> Result<(), WeatherError> {
        let current = bundle.current_weather()?;
        let forecast = bundle.forecast()?;

        let display_name = typed_name.unwrap_or_else(|| current.name.clone());

        render::current_conditions(&current, &display_name, self.session.units);
        render::forecast_strip(&forecast.daily_entries());

        self.session.last_city = Some(display_name.clone());
        self.remember(&display_name);

        Ok(())
    }

    fn remember(&mut self, city: &str) {
        self.session.recent.record(city);
        if let Err(e) = self.session.recent.save() {
            // Losing persistence should not end the session.
            eprintln!("최근 검색어 저장 실패: {e:#}");
        }
    }
}

fn named_search_message(err: &WeatherError) -> String {
    match err {
        WeatherError::Upstream(message) => message.clone(),
        _ => CITY_NOT_FOUND.to_string(),
    }
}
