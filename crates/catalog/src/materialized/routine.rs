// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	CommitVersion,
	interface::catalog::{
		id::{NamespaceId, RoutineId},
		routine::RoutineDef,
	},
	key::RoutineKey,
};

use crate::materialized::{MaterializedCatalog, MultiVersionRoutineDef};

impl MaterializedCatalog {
	/// Find a routine by ID at a specific version
	pub fn find_routine_at(&self, routine: RoutineId, version: CommitVersion) -> Option<RoutineDef> {
		self.routines.get(&routine).and_then(|entry| entry.value().get(version))
	}

	/// Find a routine by `(namespace, kind, name)` at a specific version
	pub fn find_routine_by_key_at(&self, key: &RoutineKey, version: CommitVersion) -> Option<RoutineDef> {
		self.routines_by_key.get(key).and_then(|entry| self.find_routine_at(*entry.value(), version))
	}

	/// Live routines of a namespace at the latest version, in key order.
	pub fn list_routines(&self, namespace: NamespaceId) -> Vec<RoutineDef> {
		self.routines_by_key
			.iter()
			.filter(|entry| entry.key().namespace == namespace)
			.filter_map(|entry| self.routines.get(entry.value()).and_then(|multi| multi.value().get_latest()))
			.collect()
	}

	pub fn set_routine(&self, id: RoutineId, version: CommitVersion, routine: Option<RoutineDef>) {
		if let Some(entry) = self.routines.get(&id) {
			if let Some(pre) = entry.value().get_latest() {
				let key = pre.key();
				// another object may have taken the key since
				if self.routines_by_key.get(&key).is_some_and(|e| *e.value() == id) {
					self.routines_by_key.remove(&key);
				}
			}
		}

		let multi = self.routines.get_or_insert_with(id, MultiVersionRoutineDef::new);
		if let Some(new) = routine {
			self.routines_by_key.insert(new.key(), id);
			multi.value().insert(version, new);
		} else {
			multi.value().remove(version);
		}
	}
}
