// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::routine::{CharacteristicsDelta, RoutineDef},
	util::clock::now_millis,
};
use dictum_transaction::transaction::AdminTransaction;

use crate::CatalogStore;

impl CatalogStore {
	/// Applies `delta` to the stored routine, re-read under the row lock.
	/// Returns the row before and after the update.
	pub(crate) fn update_routine(
		txn: &mut AdminTransaction,
		routine: &RoutineDef,
		delta: &CharacteristicsDelta,
	) -> crate::Result<(RoutineDef, RoutineDef)> {
		let key = routine.key();
		txn.lock(&key.clone().into())?;

		let pre = match Self::find_routine(txn, &key)? {
			Some(current) if current.id == routine.id => current,
			_ => return Err(Self::routine_not_found(txn, routine)?.into()),
		};

		let mut post = pre.clone();
		delta.apply_to(&mut post.characteristics);
		post.last_altered = now_millis().max(pre.last_altered);

		txn.set(&key.into(), post.clone().into())?;
		Ok((pre, post))
	}
}

#[cfg(test)]
pub mod tests {
	use dictum_core::interface::catalog::routine::{CharacteristicsDelta, RoutineKind, SqlSecurity};

	use crate::{
		CatalogStore,
		test_utils::{create_namespace_in, create_test_admin_transaction, routine_to_create},
	};

	#[test]
	fn test_update_applies_delta_to_stored_row() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");
		let routine =
			CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure))
				.unwrap();

		let mut stale = routine.clone();
		stale.characteristics.comment = "stale".to_string();

		let delta = CharacteristicsDelta::new().with_security(SqlSecurity::Invoker);
		let (pre, post) = CatalogStore::update_routine(&mut txn, &stale, &delta).unwrap();

		assert_eq!(pre, routine);
		assert_eq!(post.characteristics.security, SqlSecurity::Invoker);
		assert_eq!(post.characteristics.comment, routine.characteristics.comment);
		assert!(post.last_altered >= routine.last_altered);
		assert_eq!(CatalogStore::find_routine(&mut txn, &routine.key()).unwrap(), Some(post));
	}

	#[test]
	fn test_update_replaced_routine_is_not_found() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");
		let original =
			CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure))
				.unwrap();
		CatalogStore::drop_routine(&mut txn, &original).unwrap();
		CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure)).unwrap();

		let err = CatalogStore::update_routine(&mut txn, &original, &CharacteristicsDelta::new().with_comment("x"))
			.unwrap_err();

		assert_eq!(err.code, "CA_040");
	}
}
