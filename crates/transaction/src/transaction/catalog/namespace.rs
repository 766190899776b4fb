// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::{
	change::CatalogTrackNamespaceChangeOperations, id::NamespaceId, namespace::NamespaceDef,
};

use crate::{
	change::{
		Change,
		OperationType::{Create, Delete},
		TransactionalNamespaceChanges,
	},
	transaction::admin::AdminTransaction,
};

impl CatalogTrackNamespaceChangeOperations for AdminTransaction {
	fn track_namespace_def_created(&mut self, namespace: NamespaceDef) -> dictum_type::Result<()> {
		let change = Change {
			pre: None,
			post: Some(namespace),
			op: Create,
		};
		self.changes.add_namespace_def_change(change);
		Ok(())
	}

	fn track_namespace_def_deleted(&mut self, namespace: NamespaceDef) -> dictum_type::Result<()> {
		let change = Change {
			pre: Some(namespace),
			post: None,
			op: Delete,
		};
		self.changes.add_namespace_def_change(change);
		Ok(())
	}
}

impl TransactionalNamespaceChanges for AdminTransaction {
	fn find_namespace(&self, id: NamespaceId) -> Option<&NamespaceDef> {
		self.changes.find_namespace(id)
	}

	fn find_namespace_by_name(&self, name: &str) -> Option<&NamespaceDef> {
		self.changes.find_namespace_by_name(name)
	}

	fn is_namespace_deleted(&self, id: NamespaceId) -> bool {
		self.changes.is_namespace_deleted(id)
	}

	fn is_namespace_deleted_by_name(&self, name: &str) -> bool {
		self.changes.is_namespace_deleted_by_name(name)
	}
}
