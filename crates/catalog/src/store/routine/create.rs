// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{
		id::RoutineId,
		namespace::NamespaceDef,
		routine::{Definer, RoutineBody, RoutineCharacteristics, RoutineDef, RoutineKind, RoutineParameter},
	},
	key::RoutineKey,
	util::clock::now_millis,
};
use dictum_transaction::{store::Sequence, transaction::AdminTransaction};
use dictum_type::{fragment::Fragment, return_error};

use crate::{CatalogStore, error::CatalogError};

#[derive(Debug, Clone)]
pub struct RoutineToCreate {
	pub fragment: Option<Fragment>,
	pub namespace: NamespaceDef,
	pub name: String,
	pub kind: RoutineKind,
	pub definer: Definer,
	pub characteristics: RoutineCharacteristics,
	pub parameters: Vec<RoutineParameter>,
	pub returns: Option<String>,
	pub body: RoutineBody,
	pub sql_mode: u64,
}

impl CatalogStore {
	/// Persists a new routine. The namespace is locked and re-read first,
	/// then the row lock on the key is taken before the existence check, so
	/// of two concurrent creations the second one waits and then observes
	/// the first.
	pub(crate) fn create_routine(txn: &mut AdminTransaction, to_create: RoutineToCreate) -> crate::Result<RoutineDef> {
		Self::lock_namespace(txn, &to_create.namespace)?;

		let key = RoutineKey::encoded(to_create.namespace.id, to_create.kind, &to_create.name);
		txn.lock(&key)?;

		if txn.contains(&key)? {
			return_error!(CatalogError::AlreadyExists {
				kind: to_create.kind.into(),
				namespace: to_create.namespace.name,
				name: to_create.name,
				fragment: to_create.fragment.unwrap_or(Fragment::None),
			});
		}

		let now = now_millis();
		let routine = RoutineDef {
			id: RoutineId(txn.next_sequence(Sequence::Routine)?),
			namespace: to_create.namespace.id,
			name: to_create.name,
			kind: to_create.kind,
			definer: to_create.definer,
			characteristics: to_create.characteristics,
			parameters: to_create.parameters,
			returns: to_create.returns,
			body: to_create.body,
			sql_mode: to_create.sql_mode,
			created: now,
			last_altered: now,
		};
		txn.set(&key, routine.clone().into())?;

		Ok(routine)
	}
}

#[cfg(test)]
pub mod tests {
	use dictum_core::interface::catalog::{id::RoutineId, routine::RoutineKind};

	use crate::{
		CatalogStore,
		test_utils::{create_namespace_in, create_test_admin_transaction, routine_to_create},
	};

	#[test]
	fn test_create_routine() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");

		let routine =
			CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure))
				.unwrap();

		assert_eq!(routine.id, RoutineId(1025));
		assert_eq!(routine.namespace, namespace.id);
		assert_eq!(routine.name, "p1");
		assert_eq!(routine.created, routine.last_altered);
	}

	#[test]
	fn test_create_routine_twice() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");

		CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure)).unwrap();
		let err = CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "P1", RoutineKind::Procedure))
			.unwrap_err();

		assert_eq!(err.code, "CA_041");
	}

	#[test]
	fn test_procedure_and_function_share_name() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");

		let procedure =
			CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "x", RoutineKind::Procedure))
				.unwrap();
		let function =
			CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "x", RoutineKind::Function))
				.unwrap();

		assert_ne!(procedure.id, function.id);
	}

	#[test]
	fn test_create_in_dropped_namespace() {
		let mut txn = create_test_admin_transaction();
		let namespace = create_namespace_in(&mut txn, "db1");
		CatalogStore::drop_namespace(&mut txn, &namespace).unwrap();

		let err = CatalogStore::create_routine(&mut txn, routine_to_create(&namespace, "p1", RoutineKind::Procedure))
			.unwrap_err();

		assert_eq!(err.code, "CA_002");
		assert!(CatalogStore::list_routines(&mut txn, namespace.id).unwrap().is_empty());
	}
}
