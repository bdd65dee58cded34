use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jot_domain::{
	Item, Payload,
	filter::{self, FilterCounts, FilterTag},
};

use crate::{Error, JotService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListTasksResponse {
	pub items: Vec<Item>,
	/// Tallies over the whole collection, not just the filtered view.
	pub counts: FilterCounts,
}

impl JotService {
	pub async fn add_task(&self, label: &str) -> Result<Item> {
		let label = label.trim();

		if label.is_empty() {
			return Err(Error::InvalidRequest {
				message: "Task label must be non-empty.".to_string(),
			});
		}

		let item = self
			.tasks
			.create(&self.db, Payload::Task { label: label.to_string() }, Some(false), None)
			.await?;

		tracing::info!(item_id = %item.item_id, "Added a task.");

		Ok(item)
	}

	/// Flips the completion flag. Unknown ids report `NotFound`.
	pub async fn toggle_task(&self, item_id: Uuid) -> Result<Item> {
		self.tasks
			.update(&self.db, item_id, |item| {
				item.completed = Some(!item.is_completed());
			})
			.await
	}

	pub async fn delete_task(&self, item_id: Uuid) -> Result<()> {
		if !self.tasks.delete(&self.db, item_id).await? {
			tracing::info!(%item_id, "Delete targeted an absent task; nothing to do.");
		}

		Ok(())
	}

	pub async fn list_tasks(&self, tag: FilterTag) -> Result<ListTasksResponse> {
		let items = self.tasks.list().await;
		let counts = filter::counts(&items);
		let items = filter::filter(&items, tag).into_iter().cloned().collect();

		Ok(ListTasksResponse { items, counts })
	}
}
