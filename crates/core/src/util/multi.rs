// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::CommitVersion;

/// Versions of one catalog object. `None` marks the version at which the
/// object was deleted.
#[derive(Debug)]
pub struct MultiVersionContainer<T> {
	versions: RwLock<BTreeMap<CommitVersion, Option<T>>>,
}

impl<T> Default for MultiVersionContainer<T> {
	fn default() -> Self {
		Self {
			versions: RwLock::new(BTreeMap::new()),
		}
	}
}

impl<T: Clone> MultiVersionContainer<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, version: CommitVersion, value: T) {
		self.versions.write().insert(version, Some(value));
	}

	pub fn remove(&self, version: CommitVersion) {
		self.versions.write().insert(version, None);
	}

	/// The value visible at `version`: the newest entry at or below it.
	pub fn get(&self, version: CommitVersion) -> Option<T> {
		self.versions.read().range(..=version).next_back().and_then(|(_, value)| value.clone())
	}

	pub fn get_latest(&self) -> Option<T> {
		self.versions.read().iter().next_back().and_then(|(_, value)| value.clone())
	}
}
