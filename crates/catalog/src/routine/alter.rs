// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::routine::{CharacteristicsDelta, RoutineDef};
use tracing::instrument;

use crate::{
	DictionaryClient,
	routine::{validate::validate_delta, with_internal_commit},
};

/// Applies `delta` to the current version of `routine` and commits. The
/// caller's copy is only used to locate the object; fields outside the delta
/// are taken from storage.
#[instrument(name = "catalog::routine::alter_routine", level = "debug", skip(client, routine), fields(id = %routine.id, name = %routine.name))]
pub fn alter_routine(
	client: &mut DictionaryClient<'_>,
	routine: &RoutineDef,
	delta: &CharacteristicsDelta,
) -> crate::Result<RoutineDef> {
	validate_delta(client.catalog().config(), routine.kind, &routine.name, delta)?;

	with_internal_commit(client, |client| client.update(routine, delta))
}

#[cfg(test)]
pub mod tests {
	use dictum_core::interface::catalog::routine::{
		CharacteristicsDelta, Definer, RoutineKind, RoutineName, SqlDataAccess, SqlSecurity,
	};
	use dictum_transaction::store::{Failpoint, StorageFault};

	use super::*;
	use crate::{
		CatalogConfig,
		routine::{create_routine, find_routine},
		test_utils::{compiled_procedure, create_namespace, create_test_catalog, create_test_catalog_with},
	};

	#[test]
	fn test_alter_applies_exactly_the_delta() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		let created =
			create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();

		let delta = CharacteristicsDelta::new()
			.with_data_access(SqlDataAccess::ModifiesSqlData)
			.with_security(SqlSecurity::Invoker);
		let altered = alter_routine(&mut client, &created, &delta).unwrap();

		assert_eq!(altered.characteristics.data_access, SqlDataAccess::ModifiesSqlData);
		assert_eq!(altered.characteristics.security, SqlSecurity::Invoker);
		assert_eq!(altered.characteristics.comment, created.characteristics.comment);
		assert_eq!(altered.characteristics.deterministic, created.characteristics.deterministic);
		assert_eq!(altered.id, created.id);
		assert_eq!(altered.definer, created.definer);
		assert_eq!(altered.body, created.body);
		assert_eq!(altered.created, created.created);

		let found = find_routine(&mut client, &RoutineName::new("db1", "p1"), RoutineKind::Procedure)
			.unwrap()
			.unwrap();
		assert_eq!(found, altered);
	}

	#[test]
	fn test_alter_with_stale_copy_uses_stored_row() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		let created =
			create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();

		alter_routine(&mut client, &created, &CharacteristicsDelta::new().with_comment("v2")).unwrap();
		let altered = alter_routine(&mut client, &created, &CharacteristicsDelta::new().with_deterministic(true))
			.unwrap();

		assert_eq!(altered.characteristics.comment, "v2");
		assert!(altered.characteristics.deterministic);
	}

	#[test]
	fn test_alter_missing_routine() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		let created =
			create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();
		crate::routine::remove_routine(&mut client, &created, crate::routine::CommitMode::InternalCommit).unwrap();

		let err = alter_routine(&mut client, &created, &CharacteristicsDelta::new().with_comment("v2")).unwrap_err();

		assert_eq!(err.code, "CA_040");
		assert!(!client.transaction().is_dirty());
	}

	#[test]
	fn test_alter_comment_too_long() {
		let (manager, catalog) = create_test_catalog_with(CatalogConfig::default().with_max_comment_length(3));
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		let created =
			create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();

		let err = alter_routine(&mut client, &created, &CharacteristicsDelta::new().with_comment("long"))
			.unwrap_err();

		assert_eq!(err.code, "CA_044");
	}

	#[test]
	fn test_failed_alter_is_atomic() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		let created =
			create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();

		manager.store().faults().arm(Failpoint::Set, StorageFault::Io("disk".to_string()));
		let delta = CharacteristicsDelta::new().with_comment("v2").with_security(SqlSecurity::Invoker);
		let err = alter_routine(&mut client, &created, &delta).unwrap_err();
		assert_eq!(err.code, "STORE_001");

		let found = find_routine(&mut client, &RoutineName::new("db1", "p1"), RoutineKind::Procedure)
			.unwrap()
			.unwrap();
		assert_eq!(found, created);
	}
}
