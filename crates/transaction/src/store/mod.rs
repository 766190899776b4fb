// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, HashMap},
	sync::Arc,
};

use dictum_core::{
	CommitVersion,
	key::{CatalogKey, CatalogKeyRange},
	row::CatalogRow,
};
use parking_lot::{Mutex, RwLock};
use tracing::{instrument, trace};

pub use fault::{Failpoint, Faults, StorageFault};

use crate::pending::{Pending, PendingWrites};

mod fault;

/// First value handed out by every sequence. Lower ids are reserved for
/// system objects.
pub const SEQUENCE_START: u64 = 1025;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sequence {
	Namespace,
	Routine,
}

#[derive(Debug, Default)]
struct Committed {
	rows: BTreeMap<CatalogKey, CatalogRow>,
	version: CommitVersion,
}

#[derive(Debug, Default)]
struct Inner {
	committed: RwLock<Committed>,
	sequences: Mutex<HashMap<Sequence, u64>>,
	faults: Faults,
}

/// In-memory catalog storage. Holds the committed rows and the commit version;
/// cloning shares the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Arc<Inner>);

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn version(&self) -> CommitVersion {
		self.0.committed.read().version
	}

	pub fn get(&self, key: &CatalogKey) -> Option<CatalogRow> {
		self.0.committed.read().rows.get(key).cloned()
	}

	pub fn contains(&self, key: &CatalogKey) -> bool {
		self.0.committed.read().rows.contains_key(key)
	}

	pub fn range(&self, range: &CatalogKeyRange) -> Vec<(CatalogKey, CatalogRow)> {
		self.0.committed
			.read()
			.rows
			.range(range.clone())
			.map(|(key, row)| (key.clone(), row.clone()))
			.collect()
	}

	/// Applies `writes` atomically and returns the version they became
	/// visible at. `publish` runs with readers still excluded, so anything it
	/// refreshes is current by the time the version can be observed. It must
	/// not call back into the store.
	#[instrument(name = "store::apply", level = "trace", skip_all, fields(writes = writes.len()))]
	pub fn apply(&self, writes: PendingWrites, publish: impl FnOnce(CommitVersion)) -> CommitVersion {
		let mut committed = self.0.committed.write();
		for (key, pending) in writes {
			match pending {
				Pending::Set(row) => {
					committed.rows.insert(key, row);
				}
				Pending::Remove => {
					committed.rows.remove(&key);
				}
			}
		}
		committed.version = committed.version.next();
		trace!(version = %committed.version, "applied batch");
		publish(committed.version);
		committed.version
	}

	/// Sequences are not transactional: a value handed out to a transaction
	/// that later rolls back is never reused.
	pub fn next_sequence(&self, sequence: Sequence) -> u64 {
		let mut sequences = self.0.sequences.lock();
		let next = sequences.entry(sequence).or_insert(SEQUENCE_START);
		let value = *next;
		*next += 1;
		value
	}

	pub fn faults(&self) -> &Faults {
		&self.0.faults
	}
}

#[cfg(test)]
pub mod tests {
	use dictum_core::{
		interface::catalog::{id::NamespaceId, namespace::NamespaceDef},
		key::NamespaceKey,
	};

	use super::*;

	fn namespace(id: u64, name: &str) -> CatalogRow {
		CatalogRow::Namespace(NamespaceDef {
			id: NamespaceId(id),
			name: name.to_string(),
		})
	}

	#[test]
	fn test_apply_bumps_version() {
		let store = MemoryStore::new();
		assert_eq!(store.version(), CommitVersion(0));

		let mut writes = PendingWrites::new();
		writes.insert(NamespaceKey::encoded("db1"), Pending::Set(namespace(1025, "db1")));
		let version = store.apply(writes, |_| {});

		assert_eq!(version, CommitVersion(1));
		assert_eq!(store.version(), CommitVersion(1));
		assert_eq!(store.get(&NamespaceKey::encoded("DB1")), Some(namespace(1025, "db1")));
	}

	#[test]
	fn test_apply_remove() {
		let store = MemoryStore::new();
		let mut writes = PendingWrites::new();
		writes.insert(NamespaceKey::encoded("db1"), Pending::Set(namespace(1025, "db1")));
		store.apply(writes, |_| {});

		let mut writes = PendingWrites::new();
		writes.insert(NamespaceKey::encoded("db1"), Pending::Remove);
		store.apply(writes, |_| {});

		assert!(!store.contains(&NamespaceKey::encoded("db1")));
		assert_eq!(store.version(), CommitVersion(2));
	}

	#[test]
	fn test_sequences_are_independent() {
		let store = MemoryStore::new();

		assert_eq!(store.next_sequence(Sequence::Namespace), 1025);
		assert_eq!(store.next_sequence(Sequence::Namespace), 1026);
		assert_eq!(store.next_sequence(Sequence::Routine), 1025);
	}

	#[test]
	fn test_clone_shares_storage() {
		let store = MemoryStore::new();
		let other = store.clone();

		let mut writes = PendingWrites::new();
		writes.insert(NamespaceKey::encoded("db1"), Pending::Set(namespace(1025, "db1")));
		other.apply(writes, |_| {});

		assert!(store.contains(&NamespaceKey::encoded("db1")));
	}

	#[test]
	fn test_publish_runs_before_readers_see_version() {
		let store = MemoryStore::new();
		let mut published = None;

		let mut writes = PendingWrites::new();
		writes.insert(NamespaceKey::encoded("db1"), Pending::Set(namespace(1025, "db1")));
		let version = store.apply(writes, |version| {
			published = Some((version, store.0.committed.try_read().is_none()));
		});

		assert_eq!(published, Some((CommitVersion(1), true)));
		assert_eq!(store.version(), version);
	}
}
