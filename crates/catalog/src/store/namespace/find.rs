// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{id::NamespaceId, namespace::NamespaceDef},
	key::NamespaceKey,
};
use dictum_transaction::transaction::AdminTransaction;

use crate::CatalogStore;

impl CatalogStore {
	pub(crate) fn find_namespace_by_name(
		txn: &mut AdminTransaction,
		name: impl AsRef<str>,
	) -> crate::Result<Option<NamespaceDef>> {
		Ok(txn.get(&NamespaceKey::encoded(name.as_ref()))?.and_then(|row| row.into_namespace()))
	}

	pub(crate) fn find_namespace(txn: &mut AdminTransaction, id: NamespaceId) -> crate::Result<Option<NamespaceDef>> {
		Ok(Self::list_namespaces(txn)?.into_iter().find(|namespace| namespace.id == id))
	}
}
