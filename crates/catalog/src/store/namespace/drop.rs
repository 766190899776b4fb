// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{namespace::NamespaceDef, routine::RoutineDef},
	key::NamespaceKey,
};
use dictum_transaction::transaction::AdminTransaction;
use dictum_type::{fragment::Fragment, return_error};

use crate::{
	CatalogStore,
	error::{CatalogError, CatalogObjectKind},
};

impl CatalogStore {
	/// Takes the row lock on `namespace` and checks that it still names the
	/// same object. Held until the transaction ends, so the namespace cannot
	/// be dropped underneath a routine being created in it.
	pub(crate) fn lock_namespace(txn: &mut AdminTransaction, namespace: &NamespaceDef) -> crate::Result<()> {
		txn.lock(&NamespaceKey::encoded(&namespace.name))?;

		match Self::find_namespace_by_name(txn, &namespace.name)? {
			Some(current) if current.id == namespace.id => Ok(()),
			_ => return_error!(CatalogError::NotFound {
				kind: CatalogObjectKind::Namespace,
				namespace: namespace.name.clone(),
				name: namespace.name.clone(),
				fragment: Fragment::None,
			}),
		}
	}

	/// Removes the namespace row together with every routine in it. Returns
	/// the removed routines.
	pub(crate) fn drop_namespace(
		txn: &mut AdminTransaction,
		namespace: &NamespaceDef,
	) -> crate::Result<Vec<RoutineDef>> {
		Self::lock_namespace(txn, namespace)?;

		// Cascade to the routines first
		let mut removed = Vec::new();
		for routine in Self::list_routines(txn, namespace.id)? {
			removed.push(Self::drop_routine(txn, &routine)?);
		}

		txn.remove(&NamespaceKey::encoded(&namespace.name))?;
		Ok(removed)
	}
}
