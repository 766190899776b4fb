// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::{
	namespace::NamespaceDef,
	routine::{
		CompiledRoutine, Definer, ParameterMode, RoutineBody, RoutineCharacteristics, RoutineKind, RoutineName,
		RoutineParameter,
	},
};
use dictum_transaction::{TransactionManager, transaction::AdminTransaction};

use crate::{
	Catalog, CatalogConfig, CatalogStore,
	store::{namespace::NamespaceToCreate, routine::RoutineToCreate},
};

pub fn create_test_admin_transaction() -> AdminTransaction {
	TransactionManager::testing().begin_admin()
}

pub fn create_test_catalog() -> (TransactionManager, Catalog) {
	create_test_catalog_with(CatalogConfig::default())
}

pub fn create_test_catalog_with(config: CatalogConfig) -> (TransactionManager, Catalog) {
	let manager = TransactionManager::testing();
	let catalog = Catalog::open(&manager, config).unwrap();
	(manager, catalog)
}

/// Creates and commits a namespace.
pub fn create_namespace(catalog: &Catalog, txn: &mut AdminTransaction, name: &str) -> NamespaceDef {
	let namespace = catalog
		.create_namespace(
			txn,
			NamespaceToCreate {
				namespace_fragment: None,
				name: name.to_string(),
			},
		)
		.unwrap();
	txn.commit_statement().unwrap();
	txn.commit().unwrap();
	namespace
}

/// Writes a namespace row into the open statement, bypassing the
/// materialized catalog.
pub fn create_namespace_in(txn: &mut AdminTransaction, name: &str) -> NamespaceDef {
	CatalogStore::create_namespace(
		txn,
		NamespaceToCreate {
			namespace_fragment: None,
			name: name.to_string(),
		},
	)
	.unwrap()
}

pub fn routine_to_create(namespace: &NamespaceDef, name: &str, kind: RoutineKind) -> RoutineToCreate {
	RoutineToCreate {
		fragment: None,
		namespace: namespace.clone(),
		name: name.to_string(),
		kind,
		definer: Definer::new("u1", Definer::ANY_HOST),
		characteristics: RoutineCharacteristics::default(),
		parameters: vec![],
		returns: match kind {
			RoutineKind::Procedure => None,
			RoutineKind::Function => Some("INT".to_string()),
		},
		body: RoutineBody::new("BEGIN END"),
		sql_mode: 0,
	}
}

pub fn compiled_procedure(namespace: &str, name: &str) -> CompiledRoutine {
	CompiledRoutine {
		name: RoutineName::new(namespace, name),
		kind: RoutineKind::Procedure,
		characteristics: RoutineCharacteristics::default(),
		parameters: vec![RoutineParameter {
			name: "a".to_string(),
			mode: ParameterMode::In,
			data_type: "INT".to_string(),
		}],
		returns: None,
		body: RoutineBody::new("BEGIN SELECT a; END"),
		sql_mode: 0,
	}
}

pub fn compiled_function(namespace: &str, name: &str, returns: &str) -> CompiledRoutine {
	CompiledRoutine {
		name: RoutineName::new(namespace, name),
		kind: RoutineKind::Function,
		characteristics: RoutineCharacteristics::default(),
		parameters: vec![RoutineParameter {
			name: "x".to_string(),
			mode: ParameterMode::In,
			data_type: returns.to_string(),
		}],
		returns: Some(returns.to_string()),
		body: RoutineBody::new("RETURN x"),
		sql_mode: 0,
	}
}
