use jot_providers::weather::WeatherReport;

use crate::{CredentialKind, Error, JotService, Result};

impl JotService {
	/// Looks up current weather for `city` using the stored weather key.
	/// Collaborator failures pass through with their unauthorized / not-found
	/// distinction intact.
	pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReport> {
		let city = city.trim();

		if city.is_empty() {
			return Err(Error::InvalidRequest {
				message: "City name must be non-empty.".to_string(),
			});
		}

		let Some(api_key) = self.credential(CredentialKind::Weather).await? else {
			return Err(Error::MissingCredential { provider: "weather" });
		};
		let report = self
			.providers
			.weather
			.current_weather(&self.cfg.providers.weather, &api_key, city)
			.await?;

		tracing::info!(location = %report.location_name, "Fetched current weather.");

		Ok(report)
	}
}
