// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::routine::RoutineDef;
use dictum_transaction::transaction::AdminTransaction;

use crate::CatalogStore;

impl CatalogStore {
	/// Removes the routine if the key still holds the same object. Returns
	/// the removed row.
	pub(crate) fn drop_routine(txn: &mut AdminTransaction, routine: &RoutineDef) -> crate::Result<RoutineDef> {
		let key = routine.key();
		txn.lock(&key.clone().into())?;

		let current = match Self::find_routine(txn, &key)? {
			Some(current) if current.id == routine.id => current,
			_ => return Err(Self::routine_not_found(txn, routine)?.into()),
		};

		txn.remove(&key.into())?;
		Ok(current)
	}
}

#[cfg(test)]
pub mod tests {
	use dictum_core::interface::catalog::routine::RoutineKind;

	use crate::{
		CatalogStore,
		test_utils::{create_namespace_in, create_test_admin_transaction, routine_to_create},
	};

	#[test]
	fn test_drop_routine() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");
		let p1 = CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure))
			.unwrap();
		let p2 = CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p2", RoutineKind::Procedure))
			.unwrap();

		let removed = CatalogStore::drop_routine(&mut txn, &p1).unwrap();

		assert_eq!(removed, p1);
		assert_eq!(CatalogStore::find_routine(&mut txn, &p1.key()).unwrap(), None);
		assert_eq!(CatalogStore::find_routine(&mut txn, &p2.key()).unwrap(), Some(p2));
	}

	#[test]
	fn test_drop_missing_routine() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");
		let p1 = CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure))
			.unwrap();
		CatalogStore::drop_routine(&mut txn, &p1).unwrap();

		let err = CatalogStore::drop_routine(&mut txn, &p1).unwrap_err();

		assert_eq!(err.code, "CA_040");
		assert!(err.message.contains("db1.p1"));
	}
}
