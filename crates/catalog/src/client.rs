// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{
		id::NamespaceId,
		namespace::NamespaceDef,
		routine::{CharacteristicsDelta, RoutineDef},
	},
	key::RoutineKey,
};
use dictum_transaction::transaction::AdminTransaction;

use crate::{Catalog, store::routine::RoutineToCreate};

/// Cache-backed accessor bound to one transaction.
///
/// Every mutator records the change in the transaction before returning, so
/// a later lookup through any client on the same transaction observes it.
/// The materialized catalog only learns about the change when the
/// transaction commits.
pub struct DictionaryClient<'a> {
	catalog: &'a Catalog,
	txn: &'a mut AdminTransaction,
}

impl<'a> DictionaryClient<'a> {
	pub fn new(catalog: &'a Catalog, txn: &'a mut AdminTransaction) -> Self {
		Self {
			catalog,
			txn,
		}
	}

	pub fn catalog(&self) -> &Catalog {
		self.catalog
	}

	pub fn transaction(&mut self) -> &mut AdminTransaction {
		self.txn
	}

	pub fn lookup(&mut self, key: &RoutineKey) -> crate::Result<Option<RoutineDef>> {
		self.catalog.find_routine(self.txn, key)
	}

	pub fn store(&mut self, to_create: RoutineToCreate) -> crate::Result<RoutineDef> {
		self.catalog.create_routine(self.txn, to_create)
	}

	pub fn update(&mut self, routine: &RoutineDef, delta: &CharacteristicsDelta) -> crate::Result<RoutineDef> {
		self.catalog.update_routine(self.txn, routine, delta)
	}

	pub fn delete(&mut self, routine: &RoutineDef) -> crate::Result<()> {
		self.catalog.drop_routine(self.txn, routine)
	}

	pub fn list(&mut self, namespace: NamespaceId) -> crate::Result<Vec<RoutineDef>> {
		self.catalog.list_routines(self.txn, namespace)
	}

	pub fn find_namespace_by_name(&mut self, name: &str) -> crate::Result<Option<NamespaceDef>> {
		self.catalog.find_namespace_by_name(self.txn, name)
	}
}
