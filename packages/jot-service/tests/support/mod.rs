#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::Notify;

use jot_config::{
	Config, Providers as ProviderSettings, Sqlite, Storage, SuggestionProviderConfig,
	WeatherProviderConfig,
};
use jot_providers::weather::WeatherReport;
use jot_service::{
	BoxFuture, JotService, OpenReport, Providers, SuggestionProvider, WeatherProvider,
};
use jot_storage::db::Db;
use jot_testkit::TestDatabase;

pub fn config(path: &str) -> Config {
	Config {
		storage: Storage { sqlite: Sqlite { path: path.to_string(), pool_max_conns: 1 } },
		providers: ProviderSettings {
			suggestion: SuggestionProviderConfig {
				api_base: "http://localhost".to_string(),
				path: "/v1/chat/completions".to_string(),
				model: "m".to_string(),
				instructions: "You are a helpful writing assistant.".to_string(),
				max_tokens: 200,
				temperature: 0.7,
				timeout_ms: 1_000,
				default_headers: serde_json::Map::new(),
			},
			weather: WeatherProviderConfig {
				api_base: "http://localhost".to_string(),
				path: "/data/2.5/weather".to_string(),
				timeout_ms: 1_000,
			},
		},
	}
}

pub enum SuggestionBehavior {
	Reply(&'static str),
	Fail,
	/// Signals `started` when the call begins, then blocks until `gate` is
	/// notified before replying. Lets tests race a delete against an in-flight
	/// suggestion deterministically.
	GatedReply { started: Arc<Notify>, gate: Arc<Notify>, reply: &'static str },
}

pub struct StubSuggestion {
	pub behavior: SuggestionBehavior,
}
impl SuggestionProvider for StubSuggestion {
	fn suggest<'a>(
		&'a self,
		_cfg: &'a SuggestionProviderConfig,
		_api_key: &'a str,
		_text: &'a str,
	) -> BoxFuture<'a, jot_providers::Result<String>> {
		Box::pin(async move {
			match &self.behavior {
				SuggestionBehavior::Reply(reply) => Ok((*reply).to_string()),
				SuggestionBehavior::Fail => Err(jot_providers::Error::Status { status: 500 }),
				SuggestionBehavior::GatedReply { started, gate, reply } => {
					started.notify_one();
					gate.notified().await;

					Ok((*reply).to_string())
				},
			}
		})
	}
}

pub enum WeatherBehavior {
	Report(WeatherReport),
	Unauthorized,
	CityNotFound,
}

pub struct StubWeather {
	pub behavior: WeatherBehavior,
}
impl WeatherProvider for StubWeather {
	fn current_weather<'a>(
		&'a self,
		_cfg: &'a WeatherProviderConfig,
		_api_key: &'a str,
		city: &'a str,
	) -> BoxFuture<'a, jot_providers::Result<WeatherReport>> {
		Box::pin(async move {
			match &self.behavior {
				WeatherBehavior::Report(report) => Ok(report.clone()),
				WeatherBehavior::Unauthorized => Err(jot_providers::Error::Unauthorized),
				WeatherBehavior::CityNotFound =>
					Err(jot_providers::Error::CityNotFound { city: city.to_string() }),
			}
		})
	}
}

pub fn lisbon_report() -> WeatherReport {
	WeatherReport {
		location_name: "Lisbon".to_string(),
		country_code: "PT".to_string(),
		temperature_c: 21.4,
		description: "few clouds".to_string(),
		humidity_pct: 58,
		visibility_m: 10_000,
		wind_speed_mps: 3.6,
		icon_id: "02d".to_string(),
	}
}

pub fn providers(suggestion: SuggestionBehavior, weather: WeatherBehavior) -> Providers {
	Providers::new(
		Arc::new(StubSuggestion { behavior: suggestion }),
		Arc::new(StubWeather { behavior: weather }),
	)
}

pub async fn open_service(test_db: &TestDatabase, providers: Providers) -> (JotService, OpenReport) {
	let cfg = config(test_db.path());
	let db = Db::connect(&cfg.storage.sqlite).await.expect("Failed to open SQLite.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	JotService::with_providers(cfg, db, providers).await.expect("Failed to open the service.")
}
