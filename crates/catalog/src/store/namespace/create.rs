// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{id::NamespaceId, namespace::NamespaceDef},
	key::NamespaceKey,
};
use dictum_transaction::{store::Sequence, transaction::AdminTransaction};
use dictum_type::{fragment::Fragment, return_error};

use crate::{
	CatalogStore,
	error::{CatalogError, CatalogObjectKind},
};

#[derive(Debug, Clone)]
pub struct NamespaceToCreate {
	pub namespace_fragment: Option<Fragment>,
	pub name: String,
}

impl CatalogStore {
	pub(crate) fn create_namespace(
		txn: &mut AdminTransaction,
		to_create: NamespaceToCreate,
	) -> crate::Result<NamespaceDef> {
		let key = NamespaceKey::encoded(&to_create.name);
		txn.lock(&key)?;

		if let Some(namespace) = Self::find_namespace_by_name(txn, &to_create.name)? {
			return_error!(CatalogError::AlreadyExists {
				kind: CatalogObjectKind::Namespace,
				namespace: namespace.name.clone(),
				name: namespace.name,
				fragment: to_create.namespace_fragment.unwrap_or(Fragment::None),
			});
		}

		let namespace = NamespaceDef {
			id: NamespaceId(txn.next_sequence(Sequence::Namespace)?),
			name: to_create.name,
		};
		txn.set(&key, namespace.clone().into())?;

		Ok(namespace)
	}
}
