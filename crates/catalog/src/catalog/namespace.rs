// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::{
	change::{CatalogTrackNamespaceChangeOperations, CatalogTrackRoutineChangeOperations},
	id::NamespaceId,
	namespace::NamespaceDef,
};
use dictum_transaction::{change::TransactionalNamespaceChanges, transaction::AdminTransaction};
use dictum_type::fragment::Fragment;
use tracing::{instrument, warn};

use crate::{
	CatalogStore,
	catalog::Catalog,
	error::{CatalogError, CatalogObjectKind},
	store::namespace::NamespaceToCreate,
};

impl Catalog {
	#[instrument(name = "catalog::namespace::find", level = "trace", skip(self, txn))]
	pub fn find_namespace(&self, txn: &mut AdminTransaction, id: NamespaceId) -> crate::Result<Option<NamespaceDef>> {
		txn.ensure_active()?;

		// 1. Own uncommitted changes
		if let Some(namespace) = TransactionalNamespaceChanges::find_namespace(txn, id) {
			return Ok(Some(namespace.clone()));
		}

		// 2. Deleted by this transaction
		if TransactionalNamespaceChanges::is_namespace_deleted(txn, id) {
			return Ok(None);
		}

		// 3. Committed state at the current version
		if let Some(namespace) = self.materialized.find_namespace_at(id, txn.version()) {
			return Ok(Some(namespace));
		}

		// 4. Not yet materialized, read storage
		if let Some(namespace) = CatalogStore::find_namespace(txn, id)? {
			warn!(namespace = %id, "namespace found in storage but not in materialized catalog");
			return Ok(Some(namespace));
		}

		Ok(None)
	}

	#[instrument(name = "catalog::namespace::find_by_name", level = "trace", skip(self, txn))]
	pub fn find_namespace_by_name(
		&self,
		txn: &mut AdminTransaction,
		name: &str,
	) -> crate::Result<Option<NamespaceDef>> {
		txn.ensure_active()?;

		if let Some(namespace) = TransactionalNamespaceChanges::find_namespace_by_name(txn, name) {
			return Ok(Some(namespace.clone()));
		}

		if TransactionalNamespaceChanges::is_namespace_deleted_by_name(txn, name) {
			return Ok(None);
		}

		if let Some(namespace) = self.materialized.find_namespace_by_name_at(name, txn.version()) {
			return Ok(Some(namespace));
		}

		if let Some(namespace) = CatalogStore::find_namespace_by_name(txn, name)? {
			warn!(namespace = name, "namespace found in storage but not in materialized catalog");
			return Ok(Some(namespace));
		}

		Ok(None)
	}

	pub fn get_namespace_by_name(&self, txn: &mut AdminTransaction, name: &str) -> crate::Result<NamespaceDef> {
		self.find_namespace_by_name(txn, name)?.ok_or_else(|| {
			CatalogError::NotFound {
				kind: CatalogObjectKind::Namespace,
				namespace: name.to_string(),
				name: name.to_string(),
				fragment: Fragment::None,
			}
			.into()
		})
	}

	/// Creates the namespace inside the current statement. The caller
	/// commits.
	#[instrument(name = "catalog::namespace::create", level = "debug", skip(self, txn))]
	pub fn create_namespace(
		&self,
		txn: &mut AdminTransaction,
		to_create: NamespaceToCreate,
	) -> crate::Result<NamespaceDef> {
		let namespace = CatalogStore::create_namespace(txn, to_create)?;
		txn.track_namespace_def_created(namespace.clone())?;
		Ok(namespace)
	}

	/// Drops the namespace and every routine in it inside the current
	/// statement. The caller commits.
	#[instrument(name = "catalog::namespace::drop", level = "debug", skip(self, txn))]
	pub fn drop_namespace(&self, txn: &mut AdminTransaction, namespace: &NamespaceDef) -> crate::Result<()> {
		let routines = CatalogStore::drop_namespace(txn, namespace)?;
		for routine in routines {
			txn.track_routine_def_deleted(routine)?;
		}
		txn.track_namespace_def_deleted(namespace.clone())?;
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use dictum_core::{
		interface::catalog::{id::NamespaceId, routine::RoutineKind},
		key::CatalogKeyRange,
	};

	use crate::{
		store::namespace::NamespaceToCreate,
		test_utils::{create_namespace, create_test_catalog, routine_to_create},
	};

	fn to_create(name: &str) -> NamespaceToCreate {
		NamespaceToCreate {
			namespace_fragment: None,
			name: name.to_string(),
		}
	}

	#[test]
	fn test_created_namespace_visible_before_and_after_commit() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();

		let db1 = catalog.create_namespace(&mut txn, to_create("db1")).unwrap();
		assert_eq!(catalog.find_namespace_by_name(&mut txn, "DB1").unwrap(), Some(db1.clone()));

		txn.commit_statement().unwrap();
		txn.commit().unwrap();

		let mut other = manager.begin_admin();
		assert_eq!(catalog.find_namespace(&mut other, db1.id).unwrap(), Some(db1.clone()));
		assert_eq!(catalog.materialized().find_namespace_by_name_at("db1", other.version()), Some(db1));
	}

	#[test]
	fn test_rolled_back_namespace_never_reaches_cache() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();

		catalog.create_namespace(&mut txn, to_create("db1")).unwrap();
		txn.rollback_statement();
		txn.rollback();

		assert_eq!(catalog.find_namespace_by_name(&mut txn, "db1").unwrap(), None);
		assert_eq!(catalog.find_namespace(&mut txn, NamespaceId(1025)).unwrap(), None);
	}

	#[test]
	fn test_get_namespace_by_name_not_found() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();

		let err = catalog.get_namespace_by_name(&mut txn, "missing").unwrap_err();
		assert_eq!(err.code, "CA_002");
	}

	#[test]
	fn test_drop_namespace() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");

		catalog.drop_namespace(&mut txn, &db1).unwrap();
		assert_eq!(catalog.find_namespace_by_name(&mut txn, "db1").unwrap(), None);

		txn.commit_statement().unwrap();
		txn.commit().unwrap();
		assert_eq!(catalog.find_namespace(&mut txn, db1.id).unwrap(), None);
	}

	#[test]
	fn test_drop_namespace_leaves_no_routine_rows() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");
		let p1 = catalog.create_routine(&mut txn, routine_to_create(&db1, "p1", RoutineKind::Procedure)).unwrap();
		txn.commit_statement().unwrap();
		txn.commit().unwrap();

		catalog.drop_namespace(&mut txn, &db1).unwrap();
		assert_eq!(catalog.find_routine(&mut txn, &p1.key()).unwrap(), None);
		txn.commit_statement().unwrap();
		txn.commit().unwrap();

		assert!(manager.store().range(&CatalogKeyRange::all()).is_empty());
		assert_eq!(catalog.find_routine(&mut txn, &p1.key()).unwrap(), None);
		assert!(catalog.materialized().list_routines(db1.id).is_empty());
	}
}
