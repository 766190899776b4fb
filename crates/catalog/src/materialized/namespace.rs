// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	CommitVersion,
	interface::catalog::{id::NamespaceId, namespace::NamespaceDef},
	key::NamespaceKey,
};

use crate::materialized::{MaterializedCatalog, MultiVersionNamespaceDef};

impl MaterializedCatalog {
	/// Find a namespace by ID at a specific version
	pub fn find_namespace_at(&self, namespace: NamespaceId, version: CommitVersion) -> Option<NamespaceDef> {
		self.namespaces.get(&namespace).and_then(|entry| entry.value().get(version))
	}

	/// Find a namespace by name at a specific version
	pub fn find_namespace_by_name_at(&self, name: &str, version: CommitVersion) -> Option<NamespaceDef> {
		self.namespaces_by_name
			.get(&NamespaceKey::new(name))
			.and_then(|entry| self.find_namespace_at(*entry.value(), version))
	}

	pub fn set_namespace(&self, id: NamespaceId, version: CommitVersion, namespace: Option<NamespaceDef>) {
		if let Some(entry) = self.namespaces.get(&id) {
			if let Some(pre) = entry.value().get_latest() {
				self.namespaces_by_name.remove(&NamespaceKey::new(&pre.name));
			}
		}

		let multi = self.namespaces.get_or_insert_with(id, MultiVersionNamespaceDef::new);
		if let Some(new) = namespace {
			self.namespaces_by_name.insert(NamespaceKey::new(&new.name), id);
			multi.value().insert(version, new);
		} else {
			multi.value().remove(version);
		}
	}
}
