// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{interface::catalog::namespace::NamespaceDef, key::NamespaceKey};
use dictum_transaction::transaction::AdminTransaction;

use crate::CatalogStore;

impl CatalogStore {
	pub(crate) fn list_namespaces(txn: &mut AdminTransaction) -> crate::Result<Vec<NamespaceDef>> {
		Ok(txn.range(&NamespaceKey::full_scan())?.into_iter().filter_map(|(_, row)| row.into_namespace()).collect())
	}
}
