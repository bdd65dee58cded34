mod support;

use jot_service::{CredentialKind, Error};
use jot_testkit::TestDatabase;
use support::{SuggestionBehavior, WeatherBehavior, lisbon_report, open_service, providers};

fn suggestion_stub() -> SuggestionBehavior {
	SuggestionBehavior::Reply("unused")
}

#[tokio::test]
async fn blank_cities_are_rejected() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let (jot, _) =
		open_service(&test_db, providers(suggestion_stub(), WeatherBehavior::Report(lisbon_report())))
			.await;
	let err = jot.fetch_weather("   ").await.expect_err("Expected a validation error.");

	assert!(matches!(err, Error::InvalidRequest { .. }), "Unexpected error: {err}");
}

#[tokio::test]
async fn a_stored_key_is_required() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let (jot, _) =
		open_service(&test_db, providers(suggestion_stub(), WeatherBehavior::Report(lisbon_report())))
			.await;
	let err = jot.fetch_weather("Lisbon").await.expect_err("Expected a credential error.");

	assert!(matches!(err, Error::MissingCredential { provider: "weather" }));
}

#[tokio::test]
async fn a_successful_lookup_returns_the_report() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let (jot, _) =
		open_service(&test_db, providers(suggestion_stub(), WeatherBehavior::Report(lisbon_report())))
			.await;

	jot.store_credential(CredentialKind::Weather, "wk-test").await.expect("Failed to store key.");

	let report = jot.fetch_weather("Lisbon").await.expect("Failed to fetch weather.");

	assert_eq!(report, lisbon_report());
}

#[tokio::test]
async fn unauthorized_and_unknown_city_stay_distinguishable() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let (jot, _) =
		open_service(&test_db, providers(suggestion_stub(), WeatherBehavior::Unauthorized)).await;

	jot.store_credential(CredentialKind::Weather, "wk-bad").await.expect("Failed to store key.");

	let err = jot.fetch_weather("Lisbon").await.expect_err("Expected an unauthorized error.");

	assert!(matches!(err, Error::Collaborator(jot_providers::Error::Unauthorized)));

	jot.db.pool.close().await;

	let (jot, _) =
		open_service(&test_db, providers(suggestion_stub(), WeatherBehavior::CityNotFound)).await;
	let err = jot.fetch_weather("Atlantis").await.expect_err("Expected a not-found error.");

	match err {
		Error::Collaborator(jot_providers::Error::CityNotFound { city }) =>
			assert_eq!(city, "Atlantis"),
		err => panic!("Unexpected error: {err}"),
	}
}
