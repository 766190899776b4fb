// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{id::NamespaceId, routine::RoutineDef},
	key::RoutineKey,
};
use dictum_transaction::transaction::AdminTransaction;

use crate::CatalogStore;

impl CatalogStore {
	/// Routines of one namespace in key order: procedures first, then
	/// functions, each by case-folded name.
	pub(crate) fn list_routines(txn: &mut AdminTransaction, namespace: NamespaceId) -> crate::Result<Vec<RoutineDef>> {
		Ok(txn.range(&RoutineKey::namespace_scan(namespace))?
			.into_iter()
			.filter_map(|(_, row)| row.into_routine())
			.collect())
	}

	pub(crate) fn list_all_routines(txn: &mut AdminTransaction) -> crate::Result<Vec<RoutineDef>> {
		let mut result = Vec::new();
		for namespace in Self::list_namespaces(txn)? {
			result.extend(Self::list_routines(txn, namespace.id)?);
		}
		Ok(result)
	}
}
