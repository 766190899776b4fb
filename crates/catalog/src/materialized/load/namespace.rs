// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_transaction::transaction::AdminTransaction;

use crate::{CatalogStore, MaterializedCatalog};

/// Load all namespaces from storage
pub(crate) fn load_namespaces(txn: &mut AdminTransaction, catalog: &MaterializedCatalog) -> crate::Result<()> {
	let version = txn.version();
	for namespace in CatalogStore::list_namespaces(txn)? {
		catalog.set_namespace(namespace.id, version, Some(namespace));
	}
	Ok(())
}
