use jot_config::Sqlite;
use jot_storage::{db::Db, kv};
use jot_testkit::TestDatabase;

fn sqlite_cfg(test_db: &TestDatabase) -> Sqlite {
	Sqlite { path: test_db.path().to_string(), pool_max_conns: 1 }
}

#[tokio::test]
async fn kv_round_trips_and_overwrites() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let db = Db::connect(&sqlite_cfg(&test_db)).await.expect("Failed to open SQLite.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	assert_eq!(kv::get(&db, "jot.tasks").await.expect("Failed to read key."), None);

	kv::set(&db, "jot.tasks", "[]").await.expect("Failed to write key.");

	assert_eq!(
		kv::get(&db, "jot.tasks").await.expect("Failed to read key."),
		Some("[]".to_string())
	);

	kv::set(&db, "jot.tasks", "[1]").await.expect("Failed to overwrite key.");

	assert_eq!(
		kv::get(&db, "jot.tasks").await.expect("Failed to read key."),
		Some("[1]".to_string())
	);
}

#[tokio::test]
async fn values_survive_a_reconnect() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let cfg = sqlite_cfg(&test_db);
	let db = Db::connect(&cfg).await.expect("Failed to open SQLite.");

	db.ensure_schema().await.expect("Failed to ensure schema.");
	kv::set(&db, "jot.credentials.weather", "wk-123").await.expect("Failed to write key.");
	db.pool.close().await;

	let reopened = Db::connect(&cfg).await.expect("Failed to reopen SQLite.");

	assert_eq!(
		kv::get(&reopened, "jot.credentials.weather").await.expect("Failed to read key."),
		Some("wk-123".to_string())
	);
}

#[tokio::test]
async fn remove_is_a_no_op_for_absent_keys() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let db = Db::connect(&sqlite_cfg(&test_db)).await.expect("Failed to open SQLite.");

	db.ensure_schema().await.expect("Failed to ensure schema.");
	kv::remove(&db, "missing").await.expect("Remove of an absent key must succeed.");
	kv::set(&db, "k", "v").await.expect("Failed to write key.");
	kv::remove(&db, "k").await.expect("Failed to remove key.");

	assert_eq!(kv::get(&db, "k").await.expect("Failed to read key."), None);
}

#[tokio::test]
async fn blank_keys_are_rejected() {
	let test_db = TestDatabase::new().expect("Failed to create test database.");
	let db = Db::connect(&sqlite_cfg(&test_db)).await.expect("Failed to open SQLite.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let err = kv::set(&db, "  ", "v").await.expect_err("Expected a blank key to be rejected.");

	assert!(err.to_string().contains("Key must be non-empty."));
}
