pub mod credentials;
pub mod notes;
pub mod repository;
pub mod tasks;
pub mod weather;

mod error;

pub use error::{Error, Result};

pub use credentials::CredentialKind;
pub use notes::{SaveNoteRequest, SaveNoteResponse, SuggestionOutcome};
pub use repository::Repository;
pub use tasks::ListTasksResponse;

use std::{future::Future, pin::Pin, sync::Arc};

use jot_config::{Config, SuggestionProviderConfig, WeatherProviderConfig};
use jot_providers::weather::WeatherReport;
use jot_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const TASKS_KEY: &str = "jot.tasks";
pub const NOTES_KEY: &str = "jot.notes";
pub const SUGGESTION_CREDENTIAL_KEY: &str = "jot.credentials.suggestion";
pub const WEATHER_CREDENTIAL_KEY: &str = "jot.credentials.weather";

pub trait SuggestionProvider
where
	Self: Send + Sync,
{
	fn suggest<'a>(
		&'a self,
		cfg: &'a SuggestionProviderConfig,
		api_key: &'a str,
		text: &'a str,
	) -> BoxFuture<'a, jot_providers::Result<String>>;
}

pub trait WeatherProvider
where
	Self: Send + Sync,
{
	fn current_weather<'a>(
		&'a self,
		cfg: &'a WeatherProviderConfig,
		api_key: &'a str,
		city: &'a str,
	) -> BoxFuture<'a, jot_providers::Result<WeatherReport>>;
}

#[derive(Clone)]
pub struct Providers {
	pub suggestion: Arc<dyn SuggestionProvider>,
	pub weather: Arc<dyn WeatherProvider>,
}

/// Whether either stored collection had to be reset after failing to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenReport {
	pub tasks_recovered: bool,
	pub notes_recovered: bool,
}

pub struct JotService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
	pub(crate) tasks: Repository,
	pub(crate) notes: Repository,
}

struct DefaultProviders;

impl SuggestionProvider for DefaultProviders {
	fn suggest<'a>(
		&'a self,
		cfg: &'a SuggestionProviderConfig,
		api_key: &'a str,
		text: &'a str,
	) -> BoxFuture<'a, jot_providers::Result<String>> {
		Box::pin(jot_providers::suggestion::suggest(cfg, api_key, text))
	}
}

impl WeatherProvider for DefaultProviders {
	fn current_weather<'a>(
		&'a self,
		cfg: &'a WeatherProviderConfig,
		api_key: &'a str,
		city: &'a str,
	) -> BoxFuture<'a, jot_providers::Result<WeatherReport>> {
		Box::pin(jot_providers::weather::current_weather(cfg, api_key, city))
	}
}

impl Providers {
	pub fn new(suggestion: Arc<dyn SuggestionProvider>, weather: Arc<dyn WeatherProvider>) -> Self {
		Self { suggestion, weather }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { suggestion: provider.clone(), weather: provider }
	}
}

impl JotService {
	/// Opens the store at the configured path, creating it on first use, and
	/// loads both collections.
	pub async fn open(cfg: Config) -> Result<(Self, OpenReport)> {
		let db = Db::connect(&cfg.storage.sqlite).await?;

		db.ensure_schema().await?;

		Self::with_providers(cfg, db, Providers::default()).await
	}

	/// Like [`JotService::open`] but with caller-supplied providers and an
	/// already-bootstrapped database.
	pub async fn with_providers(
		cfg: Config,
		db: Db,
		providers: Providers,
	) -> Result<(Self, OpenReport)> {
		let tasks = Repository::load(&db, TASKS_KEY).await?;
		let notes = Repository::load(&db, NOTES_KEY).await?;
		let report = OpenReport {
			tasks_recovered: tasks.recovered(),
			notes_recovered: notes.recovered(),
		};

		Ok((Self { cfg, db, providers, tasks, notes }, report))
	}
}
