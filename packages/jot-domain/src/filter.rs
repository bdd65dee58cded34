use serde::{Deserialize, Serialize};

use crate::model::Item;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterTag {
	All,
	Pending,
	Completed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
	pub all: usize,
	pub pending: usize,
	pub completed: usize,
}

/// Order-preserving subsequence of `items` matching `tag`. `Pending` and
/// `Completed` partition any input: an item without a completion flag counts
/// as pending.
pub fn filter(items: &[Item], tag: FilterTag) -> Vec<&Item> {
	items.iter().filter(|item| matches_tag(item, tag)).collect()
}

pub fn counts(items: &[Item]) -> FilterCounts {
	let completed = items.iter().filter(|item| item.is_completed()).count();

	FilterCounts { all: items.len(), pending: items.len() - completed, completed }
}

fn matches_tag(item: &Item, tag: FilterTag) -> bool {
	match tag {
		FilterTag::All => true,
		FilterTag::Pending => !item.is_completed(),
		FilterTag::Completed => item.is_completed(),
	}
}
