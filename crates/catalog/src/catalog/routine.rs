// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{
		change::CatalogTrackRoutineChangeOperations,
		id::NamespaceId,
		routine::{CharacteristicsDelta, RoutineDef},
	},
	key::RoutineKey,
};
use dictum_transaction::{change::TransactionalRoutineChanges, transaction::AdminTransaction};
use tracing::{instrument, warn};

use crate::{CatalogStore, catalog::Catalog, store::routine::RoutineToCreate};

impl Catalog {
	#[instrument(name = "catalog::routine::find", level = "trace", skip(self, txn))]
	pub fn find_routine(&self, txn: &mut AdminTransaction, key: &RoutineKey) -> crate::Result<Option<RoutineDef>> {
		txn.ensure_active()?;

		// 1. Own uncommitted changes
		if let Some(routine) = TransactionalRoutineChanges::find_routine(txn, key) {
			return Ok(Some(routine.clone()));
		}

		// 2. Deleted by this transaction
		if TransactionalRoutineChanges::is_routine_deleted(txn, key) {
			return Ok(None);
		}

		// 3. Committed state at the current version
		if let Some(routine) = self.materialized.find_routine_by_key_at(key, txn.version()) {
			return Ok(Some(routine));
		}

		// 4. Not yet materialized, read storage
		if let Some(routine) = CatalogStore::find_routine(txn, key)? {
			warn!(%key, "routine found in storage but not in materialized catalog");
			return Ok(Some(routine));
		}

		Ok(None)
	}

	/// Routines of `namespace` visible to `txn`, procedures first, then by
	/// case-folded name.
	#[instrument(name = "catalog::routine::list", level = "trace", skip(self, txn))]
	pub fn list_routines(&self, txn: &mut AdminTransaction, namespace: NamespaceId) -> crate::Result<Vec<RoutineDef>> {
		CatalogStore::list_routines(txn, namespace)
	}

	#[instrument(name = "catalog::routine::create", level = "debug", skip(self, txn, to_create), fields(name = %to_create.name, kind = %to_create.kind))]
	pub fn create_routine(&self, txn: &mut AdminTransaction, to_create: RoutineToCreate) -> crate::Result<RoutineDef> {
		let routine = CatalogStore::create_routine(txn, to_create)?;
		txn.track_routine_def_created(routine.clone())?;
		Ok(routine)
	}

	#[instrument(name = "catalog::routine::update", level = "debug", skip(self, txn, routine), fields(id = %routine.id))]
	pub fn update_routine(
		&self,
		txn: &mut AdminTransaction,
		routine: &RoutineDef,
		delta: &CharacteristicsDelta,
	) -> crate::Result<RoutineDef> {
		let (pre, post) = CatalogStore::update_routine(txn, routine, delta)?;
		txn.track_routine_def_updated(pre, post.clone())?;
		Ok(post)
	}

	#[instrument(name = "catalog::routine::drop", level = "debug", skip(self, txn, routine), fields(id = %routine.id))]
	pub fn drop_routine(&self, txn: &mut AdminTransaction, routine: &RoutineDef) -> crate::Result<()> {
		let removed = CatalogStore::drop_routine(txn, routine)?;
		txn.track_routine_def_deleted(removed)?;
		Ok(())
	}
}
