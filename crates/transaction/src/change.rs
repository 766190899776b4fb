// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{
		id::NamespaceId,
		namespace::NamespaceDef,
		routine::RoutineDef,
	},
	key::{NamespaceKey, RoutineKey},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperationType {
	Create,
	Update,
	Delete,
}

/// One tracked change to a catalog object. `pre` is `None` for creations,
/// `post` is `None` for deletions.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<T> {
	pub pre: Option<T>,
	pub post: Option<T>,
	pub op: OperationType,
}

/// Catalog changes made by one transaction, in the order they were made.
#[derive(Debug, Default, Clone)]
pub struct TransactionalChanges {
	pub namespace_def: Vec<Change<NamespaceDef>>,
	pub routine_def: Vec<Change<RoutineDef>>,
	/// Lengths of the vectors at the last statement boundary.
	mark: (usize, usize),
}

impl TransactionalChanges {
	pub fn add_namespace_def_change(&mut self, change: Change<NamespaceDef>) {
		self.namespace_def.push(change);
	}

	pub fn add_routine_def_change(&mut self, change: Change<RoutineDef>) {
		self.routine_def.push(change);
	}

	pub fn is_empty(&self) -> bool {
		self.namespace_def.is_empty() && self.routine_def.is_empty()
	}

	/// Makes the changes of the current statement part of the transaction.
	pub fn mark_statement(&mut self) {
		self.mark = (self.namespace_def.len(), self.routine_def.len());
	}

	/// Discards the changes made since the last statement boundary.
	pub fn truncate_statement(&mut self) {
		self.namespace_def.truncate(self.mark.0);
		self.routine_def.truncate(self.mark.1);
	}

	pub fn clear(&mut self) {
		self.namespace_def.clear();
		self.routine_def.clear();
		self.mark = (0, 0);
	}

	fn latest_routine_change(&self, key: &RoutineKey) -> Option<&Change<RoutineDef>> {
		self.routine_def.iter().rev().find(|change| {
			change.post.as_ref().or(change.pre.as_ref()).is_some_and(|routine| &routine.key() == key)
		})
	}
}

pub trait TransactionalNamespaceChanges {
	fn find_namespace(&self, id: NamespaceId) -> Option<&NamespaceDef>;

	fn find_namespace_by_name(&self, name: &str) -> Option<&NamespaceDef>;

	fn is_namespace_deleted(&self, id: NamespaceId) -> bool;

	fn is_namespace_deleted_by_name(&self, name: &str) -> bool;
}

pub trait TransactionalRoutineChanges {
	/// The routine as last created or updated by this transaction.
	fn find_routine(&self, key: &RoutineKey) -> Option<&RoutineDef>;

	/// Whether the last change this transaction made to `key` removed it.
	fn is_routine_deleted(&self, key: &RoutineKey) -> bool;
}

impl TransactionalNamespaceChanges for TransactionalChanges {
	fn find_namespace(&self, id: NamespaceId) -> Option<&NamespaceDef> {
		for change in self.namespace_def.iter().rev() {
			if let Some(namespace) = &change.post {
				if namespace.id == id {
					return Some(namespace);
				}
			} else if let Some(namespace) = &change.pre {
				if namespace.id == id && change.op == OperationType::Delete {
					return None;
				}
			}
		}
		None
	}

	fn find_namespace_by_name(&self, name: &str) -> Option<&NamespaceDef> {
		let key = NamespaceKey::new(name);
		for change in self.namespace_def.iter().rev() {
			if let Some(namespace) = &change.post {
				if NamespaceKey::new(&namespace.name) == key {
					return Some(namespace);
				}
			} else if let Some(namespace) = &change.pre {
				if NamespaceKey::new(&namespace.name) == key {
					return None;
				}
			}
		}
		None
	}

	fn is_namespace_deleted(&self, id: NamespaceId) -> bool {
		self.namespace_def
			.iter()
			.rev()
			.find(|change| change.post.as_ref().or(change.pre.as_ref()).is_some_and(|n| n.id == id))
			.is_some_and(|change| change.op == OperationType::Delete)
	}

	fn is_namespace_deleted_by_name(&self, name: &str) -> bool {
		let key = NamespaceKey::new(name);
		self.namespace_def
			.iter()
			.rev()
			.find(|change| {
				change.post.as_ref().or(change.pre.as_ref()).is_some_and(|n| NamespaceKey::new(&n.name) == key)
			})
			.is_some_and(|change| change.op == OperationType::Delete)
	}
}

impl TransactionalRoutineChanges for TransactionalChanges {
	fn find_routine(&self, key: &RoutineKey) -> Option<&RoutineDef> {
		self.latest_routine_change(key).and_then(|change| change.post.as_ref())
	}

	fn is_routine_deleted(&self, key: &RoutineKey) -> bool {
		self.latest_routine_change(key).is_some_and(|change| change.op == OperationType::Delete)
	}
}
