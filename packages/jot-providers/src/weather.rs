use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
	pub location_name: String,
	pub country_code: String,
	pub temperature_c: f64,
	pub description: String,
	pub humidity_pct: u32,
	pub visibility_m: u32,
	pub wind_speed_mps: f64,
	pub icon_id: String,
}

#[derive(Debug, Deserialize)]
struct WeatherPayload {
	name: String,
	sys: SysPayload,
	main: MainPayload,
	weather: Vec<ConditionPayload>,
	#[serde(default)]
	visibility: u32,
	wind: WindPayload,
}

#[derive(Debug, Deserialize)]
struct SysPayload {
	country: String,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
	temp: f64,
	humidity: u32,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
	description: String,
	icon: String,
}

#[derive(Debug, Deserialize)]
struct WindPayload {
	speed: f64,
}

/// Looks up current metric-unit weather for `city`. Bad credentials and
/// unknown cities map to their own error variants so callers can tell the
/// difference.
pub async fn current_weather(
	cfg: &jot_config::WeatherProviderConfig,
	api_key: &str,
	city: &str,
) -> Result<WeatherReport> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client
		.get(&url)
		.query(&[("q", city), ("appid", api_key), ("units", "metric")])
		.send()
		.await?;
	let status = res.status();

	if status == StatusCode::UNAUTHORIZED {
		return Err(Error::Unauthorized);
	}
	if status == StatusCode::NOT_FOUND {
		return Err(Error::CityNotFound { city: city.to_string() });
	}
	if !status.is_success() {
		return Err(Error::Status { status: status.as_u16() });
	}

	let payload: WeatherPayload = res.json().await?;

	report_from_payload(payload)
}

fn report_from_payload(payload: WeatherPayload) -> Result<WeatherReport> {
	let Some(condition) = payload.weather.into_iter().next() else {
		return Err(Error::InvalidResponse {
			message: "Weather response is missing a condition entry.".to_string(),
		});
	};

	Ok(WeatherReport {
		location_name: payload.name,
		country_code: payload.sys.country,
		temperature_c: payload.main.temp,
		description: condition.description,
		humidity_pct: payload.main.humidity,
		visibility_m: payload.visibility,
		wind_speed_mps: payload.wind.speed,
		icon_id: condition.icon,
	})
}
