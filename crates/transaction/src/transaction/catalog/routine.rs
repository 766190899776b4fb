// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{change::CatalogTrackRoutineChangeOperations, routine::RoutineDef},
	key::RoutineKey,
};

use crate::{
	change::{
		Change,
		OperationType::{Create, Delete, Update},
		TransactionalRoutineChanges,
	},
	transaction::admin::AdminTransaction,
};

impl CatalogTrackRoutineChangeOperations for AdminTransaction {
	fn track_routine_def_created(&mut self, routine: RoutineDef) -> dictum_type::Result<()> {
		let change = Change {
			pre: None,
			post: Some(routine),
			op: Create,
		};
		self.changes.add_routine_def_change(change);
		Ok(())
	}

	fn track_routine_def_updated(&mut self, pre: RoutineDef, post: RoutineDef) -> dictum_type::Result<()> {
		let change = Change {
			pre: Some(pre),
			post: Some(post),
			op: Update,
		};
		self.changes.add_routine_def_change(change);
		Ok(())
	}

	fn track_routine_def_deleted(&mut self, routine: RoutineDef) -> dictum_type::Result<()> {
		let change = Change {
			pre: Some(routine),
			post: None,
			op: Delete,
		};
		self.changes.add_routine_def_change(change);
		Ok(())
	}
}

impl TransactionalRoutineChanges for AdminTransaction {
	fn find_routine(&self, key: &RoutineKey) -> Option<&RoutineDef> {
		self.changes.find_routine(key)
	}

	fn is_routine_deleted(&self, key: &RoutineKey) -> bool {
		self.changes.is_routine_deleted(key)
	}
}
