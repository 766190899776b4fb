// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::{id::NamespaceId, routine::RoutineDef};
use dictum_transaction::transaction::AdminTransaction;
use dictum_type::fragment::Fragment;

use crate::{CatalogStore, error::CatalogError};

pub(crate) mod create;
pub(crate) mod drop;
pub(crate) mod find;
pub(crate) mod list;
pub(crate) mod update;

pub use create::RoutineToCreate;

impl CatalogStore {
	/// Display name of a namespace for diagnostics; falls back to the id when
	/// the namespace is gone.
	pub(crate) fn namespace_name(txn: &mut AdminTransaction, id: NamespaceId) -> crate::Result<String> {
		Ok(Self::find_namespace(txn, id)?.map(|namespace| namespace.name).unwrap_or_else(|| id.to_string()))
	}

	pub(crate) fn routine_not_found(txn: &mut AdminTransaction, routine: &RoutineDef) -> crate::Result<CatalogError> {
		Ok(CatalogError::NotFound {
			kind: routine.kind.into(),
			namespace: Self::namespace_name(txn, routine.namespace)?,
			name: routine.name.clone(),
			fragment: Fragment::None,
		})
	}
}
