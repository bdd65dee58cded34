use time::OffsetDateTime;

use crate::{Error, Result, db::Db};

/// Fetches the opaque value stored under `key`, if any.
pub async fn get(db: &Db, key: &str) -> Result<Option<String>> {
	let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = ?1")
		.bind(key)
		.fetch_optional(&db.pool)
		.await?;

	Ok(value)
}

/// Writes `value` under `key`, replacing any previous value.
pub async fn set(db: &Db, key: &str, value: &str) -> Result<()> {
	if key.trim().is_empty() {
		return Err(Error::InvalidArgument("Key must be non-empty.".to_string()));
	}

	sqlx::query(
		"\
INSERT INTO kv_entries (key, value, updated_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
	)
	.bind(key)
	.bind(value)
	.bind(OffsetDateTime::now_utc())
	.execute(&db.pool)
	.await?;

	Ok(())
}

/// Deletes the entry under `key`. Absent keys are a no-op.
pub async fn remove(db: &Db, key: &str) -> Result<()> {
	sqlx::query("DELETE FROM kv_entries WHERE key = ?1").bind(key).execute(&db.pool).await?;

	Ok(())
}
