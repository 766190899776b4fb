// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{BTreeMap, btree_map::IntoIter as BTreeMapIntoIter};

use dictum_core::{
	key::{CatalogKey, CatalogKeyRange},
	row::CatalogRow,
};

/// A write buffered by a transaction and not yet visible to others.
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
	Set(CatalogRow),
	Remove,
}

impl Pending {
	pub fn row(&self) -> Option<&CatalogRow> {
		match self {
			Pending::Set(row) => Some(row),
			Pending::Remove => None,
		}
	}
}

/// Writes of one scope (a statement or a whole transaction). A later write to
/// the same key replaces the earlier one.
#[derive(Debug, Default, Clone)]
pub struct PendingWrites {
	writes: BTreeMap<CatalogKey, Pending>,
}

impl PendingWrites {
	pub fn new() -> Self {
		Self::default()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.writes.is_empty()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.writes.len()
	}

	#[inline]
	pub fn get(&self, key: &CatalogKey) -> Option<&Pending> {
		self.writes.get(key)
	}

	pub fn insert(&mut self, key: CatalogKey, pending: Pending) {
		self.writes.insert(key, pending);
	}

	pub fn range<'a>(&'a self, range: &CatalogKeyRange) -> impl Iterator<Item = (&'a CatalogKey, &'a Pending)> {
		self.writes.range(range.clone())
	}

	/// Moves every write of `other` into `self`, overwriting on conflict.
	pub fn merge(&mut self, other: PendingWrites) {
		self.writes.extend(other.writes);
	}

	pub fn clear(&mut self) {
		self.writes.clear();
	}
}

impl IntoIterator for PendingWrites {
	type Item = (CatalogKey, Pending);
	type IntoIter = BTreeMapIntoIter<CatalogKey, Pending>;

	fn into_iter(self) -> Self::IntoIter {
		self.writes.into_iter()
	}
}
