// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::routine::RoutineDef,
	key::{CatalogKey, RoutineKey},
};
use dictum_transaction::transaction::AdminTransaction;
use dictum_type::return_internal_error;

use crate::CatalogStore;

impl CatalogStore {
	pub(crate) fn find_routine(txn: &mut AdminTransaction, key: &RoutineKey) -> crate::Result<Option<RoutineDef>> {
		let Some(row) = txn.get(&CatalogKey::Routine(key.clone()))? else {
			return Ok(None);
		};
		match row.into_routine() {
			Some(routine) => Ok(Some(routine)),
			None => return_internal_error!("row at {} is not a routine", key),
		}
	}
}
