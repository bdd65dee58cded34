use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use jot_domain::{Annotation, Item, Payload};
use jot_storage::{db::Db, kv};

use crate::{Error, Result};

/// Sole owner of one collection. Access is serialized through the lock, so a
/// mutation runs to completion, including its write-through persist, before
/// the next one starts. Every mutation rewrites the full collection value.
pub struct Repository {
	collection_key: &'static str,
	recovered: bool,
	items: Mutex<Vec<Item>>,
}
impl Repository {
	/// Loads the collection stored under `collection_key`. An absent value is
	/// an empty collection; a malformed one is reset to empty and flagged via
	/// [`Repository::recovered`] instead of failing the open.
	pub async fn load(db: &Db, collection_key: &'static str) -> Result<Self> {
		let raw = kv::get(db, collection_key).await?;
		let (items, recovered) = match raw {
			None => (Vec::new(), false),
			Some(raw) => match serde_json::from_str::<Vec<Item>>(&raw) {
				Ok(items) => (items, false),
				Err(err) => {
					tracing::warn!(
						collection = collection_key,
						error = %err,
						"Stored collection is malformed; resetting it to empty."
					);

					(Vec::new(), true)
				},
			},
		};

		Ok(Self { collection_key, recovered, items: Mutex::new(items) })
	}

	pub fn recovered(&self) -> bool {
		self.recovered
	}

	pub async fn create(
		&self,
		db: &Db,
		payload: Payload,
		completed: Option<bool>,
		annotation: Option<Annotation>,
	) -> Result<Item> {
		if payload.is_blank() {
			return Err(Error::InvalidRequest {
				message: "Payload text must be non-empty.".to_string(),
			});
		}

		let item = Item {
			item_id: Uuid::new_v4(),
			created_at: OffsetDateTime::now_utc(),
			payload,
			completed,
			annotation,
		};
		let mut items = self.items.lock().await;

		items.insert(0, item.clone());

		if let Err(err) = self.persist(db, &items).await {
			items.remove(0);

			return Err(err);
		}

		Ok(item)
	}

	/// Applies `mutate` to the item with `id` and persists. `item_id` and
	/// `created_at` survive the mutator untouched. An absent id reports
	/// `NotFound` and performs no write.
	pub async fn update<F>(&self, db: &Db, id: Uuid, mutate: F) -> Result<Item>
	where
		F: FnOnce(&mut Item),
	{
		let mut items = self.items.lock().await;
		let Some(position) = items.iter().position(|item| item.item_id == id) else {
			return Err(Error::NotFound { message: format!("Item {id} does not exist.") });
		};
		let mut updated = items[position].clone();
		let created_at = updated.created_at;

		mutate(&mut updated);

		updated.item_id = id;
		updated.created_at = created_at;

		let previous = std::mem::replace(&mut items[position], updated.clone());

		if let Err(err) = self.persist(db, &items).await {
			items[position] = previous;

			return Err(err);
		}

		Ok(updated)
	}

	/// Removes the item with `id` if present and persists. Absent ids are a
	/// no-op, not an error; returns whether anything was removed.
	pub async fn delete(&self, db: &Db, id: Uuid) -> Result<bool> {
		let mut items = self.items.lock().await;
		let Some(position) = items.iter().position(|item| item.item_id == id) else {
			return Ok(false);
		};
		let removed = items.remove(position);

		if let Err(err) = self.persist(db, &items).await {
			items.insert(position, removed);

			return Err(err);
		}

		Ok(true)
	}

	pub async fn find(&self, id: Uuid) -> Option<Item> {
		self.items.lock().await.iter().find(|item| item.item_id == id).cloned()
	}

	/// Snapshot of the collection, newest-first.
	pub async fn list(&self) -> Vec<Item> {
		self.items.lock().await.clone()
	}

	async fn persist(&self, db: &Db, items: &[Item]) -> Result<()> {
		let encoded = serde_json::to_string(items)?;

		kv::set(db, self.collection_key, &encoded).await?;

		Ok(())
	}
}
