// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_catalog::{
	DictionaryClient,
	routine::{
		CommitMode, RoutineFailure, alter_routine, create_routine, find_routine, list_routines,
		remove_namespace_routines, remove_routine,
	},
	test_utils::{compiled_function, compiled_procedure, create_namespace, create_test_catalog},
};
use dictum_core::{
	interface::catalog::routine::{CharacteristicsDelta, Definer, RoutineKind, RoutineName, SqlSecurity},
	key::CatalogKeyRange,
};
use dictum_transaction::{
	store::{Failpoint, StorageFault},
	transaction::TransactionState,
};

fn p1_name() -> RoutineName {
	RoutineName::new("db1", "p1")
}

#[test]
fn test_create_alter_remove_lifecycle() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);

	let created =
		create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();
	let found = find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap().unwrap();
	assert_eq!(found, created);
	assert_eq!(found.definer, Definer::new("u1", "%"));

	let altered = alter_routine(&mut client, &found, &CharacteristicsDelta::new().with_comment("v2")).unwrap();
	assert_eq!(altered.id, created.id);
	assert_eq!(altered.characteristics.comment, "v2");
	assert_eq!(altered.body, created.body);
	assert_eq!(find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap(), Some(altered.clone()));

	remove_routine(&mut client, &altered, CommitMode::InternalCommit).unwrap();
	assert_eq!(find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap(), None);
	assert!(!client.transaction().is_dirty());
}

#[test]
fn test_procedure_and_function_share_a_name() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);
	let definer = Definer::new("u1", "%");

	let procedure = create_routine(&mut client, &db1, &compiled_procedure("db1", "r"), &definer).unwrap();
	let function = create_routine(&mut client, &db1, &compiled_function("db1", "r", "INT"), &definer).unwrap();
	assert_ne!(procedure.id, function.id);

	let name = RoutineName::new("db1", "r");
	assert_eq!(find_routine(&mut client, &name, RoutineKind::Procedure).unwrap(), Some(procedure));
	assert_eq!(find_routine(&mut client, &name, RoutineKind::Function).unwrap(), Some(function));
}

#[test]
fn test_duplicate_create_leaves_original() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);
	let original =
		create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();

	let err = create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u2", "%"))
		.unwrap_err();

	assert_eq!(err.code, "CA_041");
	assert_eq!(RoutineFailure::classify(&err), RoutineFailure::AlreadyExists);
	assert_eq!(find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap(), Some(original));
}

#[test]
fn test_create_commit_failure_is_atomic() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);

	manager.store().faults().arm(Failpoint::Commit, StorageFault::Io("disk full".to_string()));
	let err = create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%"))
		.unwrap_err();

	assert_eq!(err.code, "STORE_001");
	assert_eq!(RoutineFailure::classify(&err), RoutineFailure::Storage);
	assert_eq!(client.transaction().state(), TransactionState::Active);
	assert!(!client.transaction().is_dirty());
	assert_eq!(find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap(), None);
	assert!(catalog.materialized().list_routines(db1.id).is_empty());
}

#[test]
fn test_alter_failure_keeps_previous_characteristics() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);
	let created =
		create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap();

	manager.store().faults().arm(Failpoint::Set, StorageFault::Deadlock);
	let delta = CharacteristicsDelta::new().with_comment("v2").with_security(SqlSecurity::Invoker);
	let err = alter_routine(&mut client, &created, &delta).unwrap_err();

	assert_eq!(err.code, "TXN_005");
	assert_eq!(client.transaction().state(), TransactionState::Active);
	assert_eq!(find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap(), Some(created));
}

#[test]
fn test_deferred_remove_rollback_restores_state() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);
	let definer = Definer::new("u1", "%");
	let p1 = create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &definer).unwrap();
	let f1 = create_routine(&mut client, &db1, &compiled_function("db1", "f1", "INT"), &definer).unwrap();
	let before = list_routines(&mut client, &db1).unwrap();

	remove_routine(&mut client, &p1, CommitMode::DeferredCommit).unwrap();
	remove_routine(&mut client, &f1, CommitMode::DeferredCommit).unwrap();
	assert!(list_routines(&mut client, &db1).unwrap().is_empty());

	client.transaction().rollback_statement();
	client.transaction().rollback();

	assert_eq!(list_routines(&mut client, &db1).unwrap(), before);
}

#[test]
fn test_partial_namespace_purge_is_rolled_back() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);
	let definer = Definer::new("u1", "%");
	create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &definer).unwrap();
	create_routine(&mut client, &db1, &compiled_procedure("db1", "p2"), &definer).unwrap();
	let before = list_routines(&mut client, &db1).unwrap();

	manager.store().faults().arm_after(Failpoint::Remove, 1, StorageFault::Io("short write".to_string()));
	let err = remove_namespace_routines(&mut client, &db1, CommitMode::InternalCommit).unwrap_err();

	assert_eq!(err.code, "STORE_001");
	assert_eq!(list_routines(&mut client, &db1).unwrap(), before);
}

#[test]
fn test_clients_on_one_transaction_share_changes() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");

	let p1 = {
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		let p1 = create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%"))
			.unwrap();
		remove_routine(&mut client, &p1, CommitMode::DeferredCommit).unwrap();
		p1
	};

	let mut second = DictionaryClient::new(&catalog, &mut txn);
	assert_eq!(second.lookup(&p1.key()).unwrap(), None);
	assert_eq!(find_routine(&mut second, &p1_name(), RoutineKind::Procedure).unwrap(), None);
}

#[test]
fn test_committed_routine_visible_to_other_session() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let created = {
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap()
	};

	let mut other = manager.begin_admin();
	let mut client = DictionaryClient::new(&catalog, &mut other);
	assert_eq!(find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap(), Some(created.clone()));

	remove_routine(&mut client, &created, CommitMode::DeferredCommit).unwrap();
	let mut first = DictionaryClient::new(&catalog, &mut txn);
	assert_eq!(find_routine(&mut first, &p1_name(), RoutineKind::Procedure).unwrap(), Some(created));
}

#[test]
fn test_removed_name_can_be_reused() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");
	let mut client = DictionaryClient::new(&catalog, &mut txn);
	let definer = Definer::new("u1", "%");

	let first = create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &definer).unwrap();
	remove_routine(&mut client, &first, CommitMode::InternalCommit).unwrap();
	let second = create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &definer).unwrap();

	assert!(second.id > first.id);
	assert_eq!(find_routine(&mut client, &p1_name(), RoutineKind::Procedure).unwrap(), Some(second));
}

#[test]
fn test_create_after_other_session_dropped_namespace() {
	let (manager, catalog) = create_test_catalog();
	let mut txn = manager.begin_admin();
	let db1 = create_namespace(&catalog, &mut txn, "db1");

	let mut other = manager.begin_admin();
	catalog.drop_namespace(&mut other, &db1).unwrap();
	other.commit_statement().unwrap();
	other.commit().unwrap();

	let mut client = DictionaryClient::new(&catalog, &mut txn);
	let err =
		create_routine(&mut client, &db1, &compiled_procedure("db1", "p1"), &Definer::new("u1", "%")).unwrap_err();

	assert_eq!(err.code, "CA_002");
	assert_eq!(RoutineFailure::classify(&err), RoutineFailure::NotFound);
	assert_eq!(client.transaction().state(), TransactionState::Active);
	assert!(manager.store().range(&CatalogKeyRange::all()).is_empty());
}
